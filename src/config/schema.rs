use serde::{Deserialize, Serialize};

/// Contents of `kitforge.toml` (or the user-level `config.toml`).
///
/// Directory values are resolved against the layout root when relative.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,

    #[serde(default = "default_scratch_dir")]
    pub scratch_dir: String,

    #[serde(default = "default_kits_dir")]
    pub kits_dir: String,

    /// Manifest file name inside the storage directory.
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,

    #[serde(default)]
    pub patch: PatchSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            scratch_dir: default_scratch_dir(),
            kits_dir: default_kits_dir(),
            manifest_file: default_manifest_file(),
            patch: PatchSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PatchSettings {
    /// jQuery plugin ids that get a no-op stub when the template lacks them.
    #[serde(default = "default_plugins")]
    pub plugins: Vec<String>,
}

impl Default for PatchSettings {
    fn default() -> Self {
        Self {
            plugins: default_plugins(),
        }
    }
}

fn default_storage_dir() -> String {
    "previewer/public/template".to_string()
}

fn default_scratch_dir() -> String {
    ".tmp".to_string()
}

fn default_kits_dir() -> String {
    "kits".to_string()
}

fn default_manifest_file() -> String {
    "manifest.json".to_string()
}

fn default_plugins() -> Vec<String> {
    ["scrolly", "scrollex", "dropotron"]
        .into_iter()
        .map(String::from)
        .collect()
}
