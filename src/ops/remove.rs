use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Error returned from removal operations.
///
/// Wraps the underlying `std::io::Error`. A missing path is treated as
/// success, so callers never need an existence check before removing.
#[derive(Debug, Error)]
#[error("filesystem remove error: {0}")]
pub struct RemoveError(#[from] pub io::Error);

/// Remove the file or directory at `path`.
///
/// Directories are removed recursively. A path that does not exist is a
/// no-op and returns `Ok(())`.
pub fn remove_path(path: impl AsRef<Path>) -> Result<(), RemoveError> {
    let p = path.as_ref();

    if !p.exists() {
        return Ok(());
    }

    tracing::debug!(path = %p.display(), "removing");
    if p.is_dir() {
        fs::remove_dir_all(p)?;
    } else {
        fs::remove_file(p)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn removes_file_and_tree() {
        let td = tempdir().unwrap();
        let dir = td.path().join("a/b");
        fs::create_dir_all(&dir).unwrap();
        let f = dir.join("f.txt");
        fs::write(&f, b"x").unwrap();

        remove_path(&f).expect("remove file");
        assert!(!f.exists());

        remove_path(td.path().join("a")).expect("remove tree");
        assert!(!td.path().join("a").exists());
    }

    #[test]
    fn missing_path_is_ok() {
        let td = tempdir().unwrap();
        assert!(remove_path(td.path().join("ghost")).is_ok());
    }
}
