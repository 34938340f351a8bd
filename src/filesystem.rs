//! Disk adapters for the ownership file
//!
//! The merge core works on strings; these helpers are the only place the
//! library reads or writes the ownership file. Writes go to a temporary file
//! in the destination directory which is then renamed over the target, so a
//! failure mid-write never leaves a truncated file behind.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Read a text file, returning `None` when it does not exist.
pub fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::Filesystem {
            message: format!("Failed to read '{}': {}", path.display(), e),
        }),
    }
}

/// Replace `path` with `content` atomically, creating parent directories.
///
/// Existing permissions on the target are carried over to the new file.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| Error::Filesystem {
        message: format!("Failed to create directory '{}': {}", parent.display(), e),
    })?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| Error::Filesystem {
        message: format!(
            "Failed to create temporary file in '{}': {}",
            parent.display(),
            e
        ),
    })?;
    temp.write_all(content.as_bytes())
        .and_then(|_| temp.as_file().sync_all())
        .map_err(|e| Error::Filesystem {
            message: format!("Failed to write '{}': {}", temp.path().display(), e),
        })?;

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp.path(), metadata.permissions()).map_err(|e| {
            Error::Filesystem {
                message: format!("Failed to copy permissions of '{}': {}", path.display(), e),
            }
        })?;
    }

    temp.persist(path).map_err(|e| Error::Filesystem {
        message: format!("Failed to replace '{}': {}", path.display(), e.error),
    })?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
