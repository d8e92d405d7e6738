pub mod generate;
pub mod ingest;
pub mod list;
