use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Options controlling [`dive`].
#[derive(Debug, Clone)]
pub struct DiveOptions {
    /// Descend into subdirectories. When `false`, only direct children of
    /// the root are visited.
    pub recursive: bool,
    /// Report non-directory entries.
    pub files: bool,
    /// Report directories.
    pub directories: bool,
    /// Include dot-entries. When `false`, hidden files are skipped and
    /// hidden directories are not descended into.
    pub all: bool,
}

impl Default for DiveOptions {
    fn default() -> Self {
        DiveOptions {
            recursive: true,
            files: true,
            directories: false,
            all: false,
        }
    }
}

/// Error returned by [`dive`], wrapping the traversal error of `walkdir`.
#[derive(Debug, Error)]
#[error("directory traversal error: {0}")]
pub struct WalkError(#[from] pub walkdir::Error);

/// Walk the tree under `root` and collect the paths selected by `opts`.
///
/// The root itself is never reported. Symbolic links are not followed.
pub fn dive(root: impl AsRef<Path>, opts: &DiveOptions) -> Result<Vec<PathBuf>, WalkError> {
    let max_depth = if opts.recursive { usize::MAX } else { 1 };
    let walker = WalkDir::new(root.as_ref())
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false);

    let mut out = Vec::new();
    for entry in walker.into_iter().filter_entry(|e| opts.all || !is_hidden(e)) {
        let entry = entry?;
        let wanted = if entry.file_type().is_dir() {
            opts.directories
        } else {
            opts.files
        };
        if wanted {
            out.push(entry.into_path());
        }
    }
    Ok(out)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
