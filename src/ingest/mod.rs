pub mod archive;
pub mod detect;

use std::path::{Path, PathBuf};

use console::style;

use crate::catalog::{CatalogEntry, CatalogStore};
use crate::config::Layout;
use crate::error::{KitforgeError, Result};
use crate::fsutil::{copy_dir_all, list_files_matching, remove_dir_all, reset_dir, validate_name};

pub use archive::extract_zip;
pub use detect::{classify, resolve_variants, VariantLayout, VariantSource, DEFAULT_VARIANT};

/// Glob for page detection in the first stored variant.
const PAGE_PATTERN: &str = "*.html";

/// Options for the `ingest` operation.
pub struct IngestOptions {
    /// Path to the template archive.
    pub archive: PathBuf,
    /// Catalog key. Derived from the archive file name when `None`.
    pub slug: Option<String>,
    /// Store the whole archive as this single variant, skipping detection.
    pub variant: Option<String>,
}

/// Extract an archive, store each detected variant under the catalog's
/// storage root and record the template in the manifest.
///
/// Nothing touches the manifest until every variant has been stored, so a
/// failure part-way leaves the catalog as it was.
pub fn ingest(layout: &Layout, options: IngestOptions) -> Result<CatalogEntry> {
    println!("{}", style("→ Ingesting template...").blue());

    let archive = options.archive.as_path();
    if !archive.is_file() {
        return Err(KitforgeError::ArchiveNotFound {
            path: archive.to_path_buf(),
        });
    }

    let slug = match options.slug {
        Some(slug) => slug,
        None => {
            let slug = derive_slug(archive);
            println!("  {}", style(format!("Auto-detected slug: {slug}")).dim());
            slug
        }
    };
    validate_name("slug", &slug)?;
    if let Some(variant) = &options.variant {
        validate_name("variant", variant)?;
    }

    let scratch = layout.scratch_dir(&slug);
    reset_dir(&scratch)?;

    println!("  {}", style("Extracting...").dim());
    extract_zip(archive, &scratch)?;

    let sources = resolve_variants(&scratch, options.variant.as_deref())?;
    let names: Vec<String> = sources.iter().map(|s| s.name.clone()).collect();
    if options.variant.is_none() {
        let detail = if sources.len() == 1 && sources[0].dir == scratch {
            "Using default variant".to_string()
        } else {
            format!("Detected variants: {}", names.join(", "))
        };
        println!("  {}", style(detail).dim());
    }
    for name in &names {
        validate_name("variant", name)?;
    }

    for source in &sources {
        let dest = layout.variant_dir(&slug, &source.name);
        store_variant(&source.dir, &dest)?;
        println!(
            "  {}",
            style(format!(
                "Copied {} → {}",
                source.name,
                dest.strip_prefix(&layout.root).unwrap_or(&dest).display()
            ))
            .dim()
        );
    }

    let pages = detect_pages(&layout.variant_dir(&slug, &names[0]))?;

    let entry = CatalogEntry::new(&slug, names, pages);
    let store = CatalogStore::new(&layout.manifest_path);
    store.upsert(entry.clone())?;
    println!("  {}", style("Updated manifest.json").dim());

    println!(
        "  {} Ingested {} with {} variant(s)",
        style("✓").green(),
        style(&entry.slug).cyan(),
        entry.variants.len()
    );

    Ok(entry)
}

/// Lowercase the archive's base name (minus a trailing `.zip`) and replace
/// every character outside `[a-z0-9-]` with `-`.
pub fn derive_slug(archive: &Path) -> String {
    let file_name = archive
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.strip_suffix(".zip").unwrap_or(&file_name);

    stem.to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' => c,
            _ => '-',
        })
        .collect()
}

/// Replace whatever is stored at `dest` with a copy of `src`.
fn store_variant(src: &Path, dest: &Path) -> Result<()> {
    remove_dir_all(dest)?;
    copy_dir_all(src, dest)?;
    Ok(())
}

/// HTML pages directly under a stored variant, sorted.
pub fn detect_pages(variant_dir: &Path) -> Result<Vec<String>> {
    list_files_matching(variant_dir, PAGE_PATTERN)
}
