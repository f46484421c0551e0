pub mod airport;
pub mod candidate;
