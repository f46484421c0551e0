pub mod capacity;
pub mod geo;
pub mod scoring;
