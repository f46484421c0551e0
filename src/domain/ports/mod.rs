pub mod data_source;
