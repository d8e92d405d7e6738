use std::io::Write;
use std::path::{Path, PathBuf};

use console::style;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{KitforgeError, Result};

/// One ingested template as the preview tool sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub slug: String,
    pub label: String,
    pub variants: Vec<String>,
    pub pages: Vec<String>,
    /// Fields this tool does not manage, written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogEntry {
    pub fn new(slug: &str, variants: Vec<String>, pages: Vec<String>) -> Self {
        Self {
            slug: slug.to_string(),
            label: capitalize(slug),
            variants,
            pages,
            extra: Map::new(),
        }
    }
}

/// One element of the manifest's `templates` array.
///
/// Elements that do not have the entry shape (hand edits, other tools) are
/// kept verbatim so rewriting the manifest never drops them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogRecord {
    Entry(CatalogEntry),
    Unrecognized(Value),
}

impl CatalogRecord {
    pub fn slug(&self) -> Option<&str> {
        match self {
            CatalogRecord::Entry(entry) => Some(&entry.slug),
            CatalogRecord::Unrecognized(value) => value.get("slug").and_then(Value::as_str),
        }
    }

    pub fn as_entry(&self) -> Option<&CatalogEntry> {
        match self {
            CatalogRecord::Entry(entry) => Some(entry),
            CatalogRecord::Unrecognized(_) => None,
        }
    }
}

/// The persisted manifest: `{ "templates": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub templates: Vec<CatalogRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Catalog {
    /// Strict read: a missing or blank file is an empty catalog, anything
    /// else must parse.
    pub fn read(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(KitforgeError::Io {
                    context: format!("reading manifest {}", path.display()),
                    source: e,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(&content).map_err(|e| KitforgeError::InvalidManifest {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Well-formed entries, in manifest order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.templates.iter().filter_map(CatalogRecord::as_entry)
    }

    pub fn get(&self, slug: &str) -> Option<&CatalogEntry> {
        self.entries().find(|t| t.slug == slug)
    }

    /// Drop any record with the same slug and append `entry` at the end.
    pub fn upsert(&mut self, entry: CatalogEntry) {
        self.templates.retain(|t| t.slug() != Some(entry.slug.as_str()));
        self.templates.push(CatalogRecord::Entry(entry));
    }
}

/// Load/upsert access to the manifest file. Holds no cached state: every
/// call goes back to disk.
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Current catalog. An unreadable or unparseable manifest yields an empty
    /// catalog so ingestion can always proceed.
    pub fn load(&self) -> Catalog {
        match Catalog::read(&self.path) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!(
                    "{} {}; starting from an empty catalog",
                    style("warning:").yellow().bold(),
                    style(&e).yellow()
                );
                Catalog::default()
            }
        }
    }

    /// Replace the entry for `entry.slug` and persist the whole catalog.
    pub fn upsert(&self, entry: CatalogEntry) -> Result<Catalog> {
        let mut catalog = self.load();
        catalog.upsert(entry);
        self.persist(&catalog)?;
        Ok(catalog)
    }

    /// Write the full document to a sibling temp file, then rename it over
    /// the manifest so readers never observe a partial write.
    pub fn persist(&self, catalog: &Catalog) -> Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir).map_err(|e| KitforgeError::Io {
            context: format!("creating directory {}", dir.display()),
            source: e,
        })?;

        let json =
            serde_json::to_string_pretty(catalog).map_err(|e| KitforgeError::ManifestWrite {
                path: self.path.clone(),
                source: e,
            })?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| KitforgeError::Io {
            context: format!("creating temporary manifest in {}", dir.display()),
            source: e,
        })?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| KitforgeError::Io {
                context: format!("writing temporary manifest {}", tmp.path().display()),
                source: e,
            })?;
        if let Some(permissions) = self.manifest_permissions() {
            tmp.as_file()
                .set_permissions(permissions)
                .map_err(|e| KitforgeError::Io {
                    context: format!("setting permissions on {}", tmp.path().display()),
                    source: e,
                })?;
        }
        tmp.persist(&self.path).map_err(|e| KitforgeError::Io {
            context: format!("replacing manifest {}", self.path.display()),
            source: e.error,
        })?;

        Ok(())
    }

    /// Mode the rewritten manifest should carry: the current file's, or
    /// world-readable for a new one. Temp files start out owner-only.
    fn manifest_permissions(&self) -> Option<std::fs::Permissions> {
        match std::fs::metadata(&self.path) {
            Ok(meta) => Some(meta.permissions()),
            Err(_) => default_manifest_permissions(),
        }
    }
}

#[cfg(unix)]
fn default_manifest_permissions() -> Option<std::fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_manifest_permissions() -> Option<std::fs::Permissions> {
    None
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
