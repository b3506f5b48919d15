use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ops::remove::remove_path;

/// Errors returned when emptying a directory.
#[derive(Debug, Error)]
pub enum EmptyDirError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Make `path` an existing, empty directory.
///
/// A missing path is created (with parents). An existing directory has
/// every entry deleted, recursively for subdirectories, while the
/// directory itself is kept. An existing non-directory is an error.
pub fn empty_dir(path: impl AsRef<Path>) -> Result<(), EmptyDirError> {
    let p = path.as_ref();

    if !p.exists() {
        fs::create_dir_all(p)?;
        return Ok(());
    }
    if !p.is_dir() {
        return Err(EmptyDirError::NotADirectory(p.to_path_buf()));
    }

    tracing::debug!(path = %p.display(), "emptying directory");
    for entry in fs::read_dir(p)? {
        let entry = entry?;
        remove_path(entry.path()).map_err(|e| EmptyDirError::Io(e.0))?;
    }
    Ok(())
}
