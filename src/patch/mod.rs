//! Compatibility fixes for legacy jQuery-era templates copied into a kit.
//!
//! Both fixes are idempotent: a plugin file that exists (real or stubbed) is
//! never rewritten, and a page that already carries [`SHIM_MARKER`] is left
//! byte-for-byte alone.

pub mod plugins;
pub mod shim;

use std::path::Path;

use console::style;

use crate::error::{KitforgeError, Result};
use crate::fsutil::{list_files_matching, write_file};

pub use plugins::{plugin_stub, stub_target, PLUGIN_DIR};
pub use shim::{inject_shim, ShimOutcome, SHIM_MARKER};

/// What a patch run changed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PatchReport {
    /// Plugin ids that received a stub.
    pub stubbed: Vec<String>,
    /// HTML files (names relative to the asset dir) that received the shim.
    pub shimmed: Vec<String>,
    /// HTML files skipped because they are not text.
    pub skipped: Vec<String>,
}

impl PatchReport {
    pub fn is_empty(&self) -> bool {
        self.stubbed.is_empty() && self.shimmed.is_empty()
    }
}

/// Stub missing plugins and add the `$` shim to top-level HTML pages under
/// `asset_dir`.
pub fn patch(asset_dir: &Path, plugin_ids: &[String]) -> Result<PatchReport> {
    let stubbed = stub_plugins(asset_dir, plugin_ids)?;
    let (shimmed, skipped) = ensure_dollar_shim(asset_dir)?;
    Ok(PatchReport {
        stubbed,
        shimmed,
        skipped,
    })
}

/// Write a no-op stub for each plugin with neither `jquery.<id>.min.js` nor
/// `jquery.<id>.js` under `assets/js`. Templates without `assets/js` are left
/// as they are.
pub fn stub_plugins(asset_dir: &Path, plugin_ids: &[String]) -> Result<Vec<String>> {
    let js_dir = asset_dir.join(PLUGIN_DIR);
    if !js_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut stubbed = Vec::new();
    for id in plugin_ids {
        if let Some(target) = stub_target(&js_dir, id) {
            write_file(&target, plugin_stub(id))?;
            println!(
                "    {}",
                style(format!("Stubbed jquery.{id}.min.js")).dim()
            );
            stubbed.push(id.clone());
        }
    }
    Ok(stubbed)
}

/// Returns `(shimmed, skipped)` page names.
pub fn ensure_dollar_shim(asset_dir: &Path) -> Result<(Vec<String>, Vec<String>)> {
    let mut shimmed = Vec::new();
    let mut skipped = Vec::new();

    for name in list_files_matching(asset_dir, "*.html")? {
        let path = asset_dir.join(&name);
        let Some(html) = read_text(&path)? else {
            eprintln!(
                "{} {}",
                style("warning:").yellow().bold(),
                style(format!("skipping {name}: not a text file")).yellow()
            );
            skipped.push(name);
            continue;
        };

        if let ShimOutcome::Injected(patched) = inject_shim(&html) {
            write_file(&path, patched)?;
            println!("    {}", style(format!("Added $ shim to {name}")).dim());
            shimmed.push(name);
        }
    }

    Ok((shimmed, skipped))
}

/// Read `path` as UTF-8 text, or `None` if it looks binary or is not UTF-8.
fn read_text(path: &Path) -> Result<Option<String>> {
    let bytes = std::fs::read(path).map_err(|e| KitforgeError::Io {
        context: format!("reading {}", path.display()),
        source: e,
    })?;

    if !content_inspector::inspect(&bytes).is_text() {
        return Ok(None);
    }
    Ok(String::from_utf8(bytes).ok())
}
