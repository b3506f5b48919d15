use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use fs_extra::dir;
use fs_extra::file;
use thiserror::Error;

/// Errors returned by the copy helpers.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("copy failed: {0}")]
    FsExtra(#[from] fs_extra::error::Error),

    #[error("path has no file name: {0}")]
    MissingFileName(PathBuf),
}

// 64 KiB buffer for both file and directory copies.
const BUFFER_SIZE: usize = 64 * 1024;

/// Copy `src` to `dest`.
///
/// A regular file is copied with `fs_extra::file::copy`; when `dest` is an
/// existing directory the file lands inside it under its own name. A
/// directory is mirrored into `dest` with `fs_extra::dir::copy` (contents
/// of `src` become contents of `dest`, which is created first). Existing
/// destination files are overwritten.
///
/// A symlink source is resolved first, so copying a symlink to a directory
/// copies the target directory's contents.
pub fn copy_path(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<(), CopyError> {
    let mut src = src.as_ref().to_path_buf();
    let dest = dest.as_ref();

    if let Ok(meta) = fs::symlink_metadata(&src) {
        if meta.file_type().is_symlink() {
            src = fs::canonicalize(&src)?;
        }
    }

    tracing::debug!(src = %src.display(), dest = %dest.display(), "copying");

    if src.is_dir() {
        fs::create_dir_all(dest)?;
        let mut options = dir::CopyOptions::new();
        options.overwrite = true;
        options.content_only = true;
        options.buffer_size = BUFFER_SIZE;
        dir::copy(&src, dest, &options)?;
    } else {
        let target = if dest.is_dir() {
            let name = src
                .file_name()
                .ok_or_else(|| CopyError::MissingFileName(src.clone()))?;
            dest.join(name)
        } else {
            dest.to_path_buf()
        };
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut options = file::CopyOptions::new();
        options.overwrite = true;
        options.buffer_size = BUFFER_SIZE;
        file::copy(&src, &target, &options)?;
    }

    Ok(())
}
