use std::path::PathBuf;

use console::style;
use kitforge::{IngestOptions, Layout};
use miette::Result;

pub fn run(
    layout: &Layout,
    zip: PathBuf,
    slug: Option<String>,
    variant: Option<String>,
) -> Result<()> {
    let options = IngestOptions {
        archive: zip,
        slug,
        variant,
    };

    let entry = kitforge::ingest(layout, options)?;

    println!(
        "{} Ingestion complete ({} page{})",
        style("✓").green().bold(),
        entry.pages.len(),
        if entry.pages.len() == 1 { "" } else { "s" }
    );
    Ok(())
}
