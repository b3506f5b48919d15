use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ops::copy::{copy_path, CopyError};
use crate::ops::remove::{remove_path, RemoveError};

/// Errors returned by move/rename helpers.
#[derive(Debug, Error)]
pub enum MvError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("path has no file name")]
    MissingFileName,

    #[error(transparent)]
    Copy(#[from] CopyError),

    #[error(transparent)]
    Remove(#[from] RemoveError),
}

/// Rename `path` within its parent directory.
pub fn rename_path(path: impl AsRef<Path>, new_name: &str) -> Result<PathBuf, MvError> {
    let p = path.as_ref();
    let parent = p.parent().ok_or(MvError::MissingFileName)?;
    let dest = parent.join(new_name);
    fs::rename(p, &dest)?;
    Ok(dest)
}

/// Move `src` to `dest`.
///
/// When `dest` is an existing directory the source moves into it under its
/// own name. A plain `fs::rename` is attempted first; when that fails
/// (typically a cross-device move) the fallback is a recursive copy
/// followed by removal of the source.
pub fn move_path(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<(), MvError> {
    let s = src.as_ref();
    let d = dest.as_ref();

    let final_dest: PathBuf = if d.is_dir() {
        d.join(s.file_name().ok_or(MvError::MissingFileName)?)
    } else {
        d.to_path_buf()
    };

    match fs::rename(s, &final_dest) {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            tracing::debug!(
                src = %s.display(),
                dest = %final_dest.display(),
                error = %rename_err,
                "rename failed, falling back to copy+remove"
            );
            copy_path(s, &final_dest)?;
            remove_path(s)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn rename_keeps_parent() {
        let td = tempdir().unwrap();
        let f = td.path().join("before.txt");
        fs::write(&f, b"x").unwrap();

        let dest = rename_path(&f, "after.txt").unwrap();
        assert_eq!(dest, td.path().join("after.txt"));
        assert!(!f.exists());
        assert!(dest.exists());
    }

    #[test]
    fn move_into_existing_directory() {
        let td = tempdir().unwrap();
        let f = td.path().join("item.txt");
        fs::write(&f, b"x").unwrap();
        let dir = td.path().join("inbox");
        fs::create_dir(&dir).unwrap();

        move_path(&f, &dir).unwrap();
        assert!(!f.exists());
        assert!(dir.join("item.txt").exists());
    }

    #[test]
    fn move_directory_tree() {
        let td = tempdir().unwrap();
        let src = td.path().join("tree");
        fs::create_dir_all(src.join("sub")).unwrap();
        fs::write(src.join("sub/f.txt"), b"deep").unwrap();

        let dest = td.path().join("moved");
        move_path(&src, &dest).unwrap();
        assert!(!src.exists());
        assert_eq!(fs::read(dest.join("sub/f.txt")).unwrap(), b"deep");
    }
}
