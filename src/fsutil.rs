use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use walkdir::WalkDir;

use crate::error::{KitforgeError, Result};

/// Reject names that are empty or would step outside their parent directory.
pub fn validate_name(kind: &'static str, name: &str) -> Result<()> {
    let bad = name.trim().is_empty()
        || name.contains(['/', '\\'])
        || name == "."
        || name == "..";
    if bad {
        return Err(KitforgeError::InvalidName {
            kind,
            name: name.to_string(),
        });
    }
    Ok(())
}

pub fn create_dir_all(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| KitforgeError::Io {
        context: format!("creating directory {}", path.display()),
        source: e,
    })
}

/// Remove a directory tree. A missing directory is not an error.
pub fn remove_dir_all(path: &Path) -> Result<()> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(KitforgeError::Io {
            context: format!("removing directory {}", path.display()),
            source: e,
        }),
    }
}

/// Remove then recreate `path`, leaving an empty directory.
pub fn reset_dir(path: &Path) -> Result<()> {
    remove_dir_all(path)?;
    create_dir_all(path)
}

pub fn write_file(path: &Path, content: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(path, content).map_err(|e| KitforgeError::Io {
        context: format!("writing {}", path.display()),
        source: e,
    })
}

/// Recursively copy `src` into `dst`, skipping symlinks. Existing files in
/// `dst` with the same relative path are overwritten.
///
/// Returns the number of files copied.
pub fn copy_dir_all(src: &Path, dst: &Path) -> Result<usize> {
    create_dir_all(dst)?;

    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry.map_err(|e| KitforgeError::Io {
            context: format!("walking {}", src.display()),
            source: e.into(),
        })?;

        let file_type = entry.file_type();
        if file_type.is_symlink() {
            continue;
        }

        let rel = entry
            .path()
            .strip_prefix(src)
            .expect("entry must be under src");
        let target = dst.join(rel);

        if file_type.is_dir() {
            create_dir_all(&target)?;
        } else {
            std::fs::copy(entry.path(), &target).map_err(|e| KitforgeError::Io {
                context: format!(
                    "copying {} to {}",
                    entry.path().display(),
                    target.display()
                ),
                source: e,
            })?;
            copied += 1;
        }
    }

    Ok(copied)
}

pub fn glob_matcher(pattern: &str) -> Result<GlobMatcher> {
    Glob::new(pattern)
        .map(|g| g.compile_matcher())
        .map_err(|e| KitforgeError::GlobPattern {
            pattern: pattern.to_string(),
            source: e,
        })
}

/// Names of regular files directly under `dir` whose name matches `pattern`,
/// sorted lexicographically.
pub fn list_files_matching(dir: &Path, pattern: &str) -> Result<Vec<String>> {
    let matcher = glob_matcher(pattern)?;
    let mut names: Vec<String> = list_dir(dir)?
        .into_iter()
        .filter(|p| p.is_file())
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .filter(|name| matcher.is_match(name))
        .collect();
    names.sort();
    Ok(names)
}

/// Paths of the direct children of `dir`, sorted by file name.
pub fn list_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(dir).map_err(|e| KitforgeError::Io {
        context: format!("reading directory {}", dir.display()),
        source: e,
    })?;

    let mut paths = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| KitforgeError::Io {
            context: format!("reading entry in {}", dir.display()),
            source: e,
        })?;
        paths.push(entry.path());
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}
