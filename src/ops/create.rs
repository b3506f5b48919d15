use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ops::output::{atomic_write, ensure_parent_exists};

/// Errors returned when materializing files, directories, or links.
#[derive(Debug, Error)]
pub enum CreateError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Something incompatible already occupies the path.
    #[error("already exists with a different kind: {0}")]
    Occupied(PathBuf),

    /// A link already exists but points somewhere else.
    #[error("link at {link} already points to {target}")]
    LinkMismatch { link: PathBuf, target: PathBuf },
}

/// Create `path` as a directory, including missing parents. Existing
/// directories are fine; an existing non-directory is `Occupied`.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<(), CreateError> {
    let p = path.as_ref();
    if p.exists() && !p.is_dir() {
        return Err(CreateError::Occupied(p.to_path_buf()));
    }
    fs::create_dir_all(p)?;
    Ok(())
}

/// Guarantee a regular file exists at `path`.
///
/// Missing parents are created and an empty file is written atomically. An
/// existing regular file is left untouched; an existing directory (or other
/// non-file) is `Occupied`.
pub fn ensure_file(path: impl AsRef<Path>) -> Result<(), CreateError> {
    let p = path.as_ref();
    if p.exists() {
        if p.is_file() {
            return Ok(());
        }
        return Err(CreateError::Occupied(p.to_path_buf()));
    }
    atomic_write(p, &[])?;
    Ok(())
}

/// Guarantee a hard link at `link` pointing to `target`, creating missing
/// parent directories of `link`.
///
/// An existing path at `link` is accepted only when it already is a hard
/// link to `target` (same device and inode on Unix); anything else is
/// reported rather than replaced.
pub fn ensure_link(target: impl AsRef<Path>, link: impl AsRef<Path>) -> Result<(), CreateError> {
    let target = target.as_ref();
    let link = link.as_ref();

    if link.exists() {
        if same_file(target, link)? {
            return Ok(());
        }
        return Err(CreateError::Occupied(link.to_path_buf()));
    }

    ensure_parent_exists(link)?;
    fs::hard_link(target, link)?;
    Ok(())
}

/// Guarantee a symbolic link at `link` pointing to `target`, creating
/// missing parent directories of `link`.
///
/// A symlink that already points at `target` succeeds; a symlink pointing
/// elsewhere is `LinkMismatch`; any other occupant is `Occupied`.
pub fn ensure_symlink(target: impl AsRef<Path>, link: impl AsRef<Path>) -> Result<(), CreateError> {
    let target = target.as_ref();
    let link = link.as_ref();

    if let Ok(meta) = fs::symlink_metadata(link) {
        if !meta.file_type().is_symlink() {
            return Err(CreateError::Occupied(link.to_path_buf()));
        }
        let existing = fs::read_link(link)?;
        if existing == target {
            return Ok(());
        }
        return Err(CreateError::LinkMismatch {
            link: link.to_path_buf(),
            target: existing,
        });
    }

    ensure_parent_exists(link)?;
    create_symlink(target, link)?;
    Ok(())
}

// Hard links are detected by device+inode on Unix; elsewhere fall back to
// comparing canonical paths.
fn same_file(a: &Path, b: &Path) -> io::Result<bool> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        let (ma, mb) = (fs::metadata(a)?, fs::metadata(b)?);
        Ok(ma.dev() == mb.dev() && ma.ino() == mb.ino())
    }
    #[cfg(not(unix))]
    {
        Ok(fs::canonicalize(a)? == fs::canonicalize(b)?)
    }
}

/// Create a symbolic link at `link` that points to `target`.
///
/// On Unix this delegates to `std::os::unix::fs::symlink`. On Windows the
/// link kind follows what `target` currently is (directory links need
/// `symlink_dir`); a missing target defaults to a file symlink.
pub(crate) fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(target, link)
    }

    #[cfg(windows)]
    {
        use std::os::windows::fs::{symlink_dir, symlink_file};
        let is_dir = target.metadata().map(|m| m.is_dir()).unwrap_or(false);
        if is_dir {
            symlink_dir(target, link)
        } else {
            symlink_file(target, link)
        }
    }
}
