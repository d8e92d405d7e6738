pub mod catalog;
pub mod config;
pub mod error;
pub mod fsutil;
pub mod ingest;
pub mod kit;
pub mod patch;

pub use catalog::{Catalog, CatalogEntry, CatalogRecord, CatalogStore};
pub use config::Layout;
pub use error::{KitforgeError, Result};
pub use ingest::{ingest, IngestOptions};
pub use kit::{generate, GenerateOptions, GeneratedKit};

/// Current catalog contents for `layout`, recovering from a bad manifest.
pub fn list(layout: &Layout) -> Catalog {
    CatalogStore::new(&layout.manifest_path).load()
}
