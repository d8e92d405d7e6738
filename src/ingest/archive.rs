use std::fs::File;
use std::path::Path;

use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{KitforgeError, Result};

/// Extract the zip at `archive` into `dest`, which must already exist.
///
/// Entries whose names would land outside `dest` are rejected by the zip
/// reader.
pub fn extract_zip(archive: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive).map_err(|e| KitforgeError::Io {
        context: format!("opening archive {}", archive.display()),
        source: e,
    })?;

    let mut zip = ZipArchive::new(file).map_err(|e| corrupt(archive, e))?;
    zip.extract(dest).map_err(|e| match e {
        ZipError::Io(source) => KitforgeError::Io {
            context: format!("extracting {} into {}", archive.display(), dest.display()),
            source,
        },
        other => corrupt(archive, other),
    })
}

fn corrupt(archive: &Path, source: ZipError) -> KitforgeError {
    KitforgeError::CorruptArchive {
        path: archive.to_path_buf(),
        source,
    }
}
