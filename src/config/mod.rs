pub mod schema;

use std::path::{Path, PathBuf};

use crate::error::{KitforgeError, Result};

pub use schema::{PatchSettings, Settings};

const PROJECT_CONFIG_FILE: &str = "kitforge.toml";
const ROOT_ENV_VAR: &str = "KITFORGE_ROOT";

/// Every on-disk location the tool reads or writes, resolved from one root.
#[derive(Debug, Clone)]
pub struct Layout {
    pub root: PathBuf,
    /// Catalog asset storage: `<storage_root>/<slug>/<variant>/**`.
    pub storage_root: PathBuf,
    pub manifest_path: PathBuf,
    /// Per-slug extraction scratch space.
    pub scratch_root: PathBuf,
    pub kits_root: PathBuf,
    pub plugins: Vec<String>,
}

impl Layout {
    pub fn from_settings(root: &Path, settings: &Settings) -> Self {
        let storage_root = root.join(&settings.storage_dir);
        Self {
            root: root.to_path_buf(),
            manifest_path: storage_root.join(&settings.manifest_file),
            storage_root,
            scratch_root: root.join(&settings.scratch_dir),
            kits_root: root.join(&settings.kits_dir),
            plugins: settings.patch.plugins.clone(),
        }
    }

    /// Layout with default settings under `root`.
    pub fn new(root: &Path) -> Self {
        Self::from_settings(root, &Settings::default())
    }

    /// Resolve the root (explicit, then `KITFORGE_ROOT`, then the current
    /// directory) and load settings for it.
    pub fn discover(explicit_root: Option<&Path>) -> Result<Self> {
        let root = resolve_root(explicit_root)?;
        let settings = load_settings(&root)?;
        Ok(Self::from_settings(&root, &settings))
    }

    pub fn variant_dir(&self, slug: &str, variant: &str) -> PathBuf {
        self.storage_root.join(slug).join(variant)
    }

    pub fn scratch_dir(&self, slug: &str) -> PathBuf {
        self.scratch_root.join(slug)
    }

    pub fn kit_dir(&self, name: &str) -> PathBuf {
        self.kits_root.join(name)
    }
}

fn resolve_root(explicit_root: Option<&Path>) -> Result<PathBuf> {
    if let Some(root) = explicit_root {
        return Ok(root.to_path_buf());
    }
    if let Ok(dir) = std::env::var(ROOT_ENV_VAR) {
        return Ok(PathBuf::from(dir));
    }
    std::env::current_dir().map_err(|e| KitforgeError::Io {
        context: "getting current directory".into(),
        source: e,
    })
}

/// Get the path to the user config file.
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("kitforge").join("config.toml"))
}

/// Load settings from `<root>/kitforge.toml`, falling back to the user config
/// file, then to defaults.
///
/// Returns `Err` if a config file exists but cannot be read or parsed.
pub fn load_settings(root: &Path) -> Result<Settings> {
    let project = root.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return read_settings(&project);
    }

    match user_config_path() {
        Some(path) if path.is_file() => read_settings(&path),
        _ => Ok(Settings::default()),
    }
}

fn read_settings(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path).map_err(|e| KitforgeError::Io {
        context: format!("reading config {}", path.display()),
        source: e,
    })?;

    toml::from_str(&content).map_err(|e| KitforgeError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}
