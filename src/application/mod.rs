pub mod enrich;
pub mod report;
pub mod scan;
