//! Variant layout classification for extracted bundles.
//!
//! Kept free of I/O: callers pass the top-level directory names and a
//! predicate telling whether a given directory holds an `index.html`.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fsutil::list_dir;

/// Name used when a bundle has no variant subdirectories.
pub const DEFAULT_VARIANT: &str = "default";

/// File whose presence marks a top-level directory as a variant.
pub const VARIANT_MARKER: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantLayout {
    /// Each named top-level directory is its own variant.
    MultiVariant(Vec<String>),
    /// The whole extracted tree is one variant named `default`.
    SingleDefault,
}

/// Classify a bundle from its top-level directory names (in listing order).
pub fn classify<F>(dir_names: &[String], has_index: F) -> VariantLayout
where
    F: Fn(&str) -> bool,
{
    let candidates: Vec<String> = dir_names
        .iter()
        .filter(|name| has_index(name))
        .cloned()
        .collect();

    if candidates.is_empty() {
        VariantLayout::SingleDefault
    } else {
        VariantLayout::MultiVariant(candidates)
    }
}

/// A variant name paired with the directory its files come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSource {
    pub name: String,
    pub dir: PathBuf,
}

/// Resolve the variants of an extracted tree rooted at `root`.
///
/// With an override the whole tree becomes that single variant and no
/// detection is attempted.
pub fn resolve_variants(
    root: &Path,
    variant_override: Option<&str>,
) -> Result<Vec<VariantSource>> {
    if let Some(name) = variant_override {
        return Ok(vec![VariantSource {
            name: name.to_string(),
            dir: root.to_path_buf(),
        }]);
    }

    let dir_names: Vec<String> = list_dir(root)?
        .into_iter()
        .filter(|p| p.is_dir())
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();

    let layout = classify(&dir_names, |name| {
        root.join(name).join(VARIANT_MARKER).is_file()
    });

    Ok(match layout {
        VariantLayout::MultiVariant(names) => names
            .into_iter()
            .map(|name| VariantSource {
                dir: root.join(&name),
                name,
            })
            .collect(),
        VariantLayout::SingleDefault => vec![VariantSource {
            name: DEFAULT_VARIANT.to_string(),
            dir: root.to_path_buf(),
        }],
    })
}
