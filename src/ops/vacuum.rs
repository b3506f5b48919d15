use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ops::remove::remove_path;

/// Options for [`vacuum`].
#[derive(Debug, Clone, Default)]
pub struct VacuumOptions {
    /// Boundary directory. Ancestors are pruned only below `base`, and
    /// `base` itself is never removed. Without a base, pruning continues
    /// until a non-empty ancestor or a filesystem root.
    pub base: Option<PathBuf>,
    /// Delete the leaf directory and everything in it before pruning,
    /// instead of requiring the leaf to be empty.
    pub purge: bool,
}

/// Errors returned by [`vacuum`].
#[derive(Debug, Error)]
pub enum VacuumError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{leaf} is not inside base {base}")]
    OutsideBase { leaf: PathBuf, base: PathBuf },
}

/// Remove `leaf` and then its chain of empty ancestors.
///
/// With `purge` the leaf directory is removed recursively; otherwise it is
/// removed only when already empty. Pruning then walks upward, removing
/// each ancestor that became empty, and stops at the first non-empty
/// directory, at `opts.base`, or at a filesystem root. Returns the number
/// of directories removed.
///
/// `leaf` must lie under `base` when a base is given; the comparison is
/// lexical, so pass both in the same form (both absolute or both relative
/// to the same point).
pub fn vacuum(leaf: impl AsRef<Path>, opts: &VacuumOptions) -> Result<usize, VacuumError> {
    let leaf = leaf.as_ref();

    if let Some(base) = &opts.base {
        if !leaf.starts_with(base) || leaf == base.as_path() {
            return Err(VacuumError::OutsideBase {
                leaf: leaf.to_path_buf(),
                base: base.clone(),
            });
        }
    }

    let mut removed = 0usize;

    if leaf.exists() {
        if opts.purge {
            tracing::debug!(path = %leaf.display(), "purging leaf");
            remove_path(leaf).map_err(|e| VacuumError::Io(e.0))?;
            removed += 1;
        } else if dir_is_empty(leaf)? {
            tracing::debug!(path = %leaf.display(), "removing empty leaf");
            fs::remove_dir(leaf)?;
            removed += 1;
        } else {
            // Leaf still has contents; nothing above it can be empty.
            return Ok(0);
        }
    }

    let mut current = leaf;
    while let Some(parent) = current.parent() {
        if parent.as_os_str().is_empty() {
            break;
        }
        if let Some(base) = &opts.base {
            if parent == base.as_path() {
                break;
            }
        }
        if !parent.is_dir() || !dir_is_empty(parent)? {
            break;
        }
        tracing::debug!(path = %parent.display(), "removing empty ancestor");
        fs::remove_dir(parent)?;
        removed += 1;
        current = parent;
    }

    Ok(removed)
}

fn dir_is_empty(p: &Path) -> io::Result<bool> {
    Ok(fs::read_dir(p)?.next().is_none())
}
