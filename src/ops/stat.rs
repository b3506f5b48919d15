use std::path::Path;

/// Classification of what a path currently points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Nothing exists at the path.
    Missing,
    /// A regular file.
    File,
    /// A directory.
    Directory,
    /// Something else: socket, FIFO, device node, dangling symlink.
    Other,
}

impl PathKind {
    /// Classify `path` with a single chain of metadata probes.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        let p = path.as_ref();
        if !p.exists() {
            PathKind::Missing
        } else if p.is_dir() {
            PathKind::Directory
        } else if p.is_file() {
            PathKind::File
        } else {
            PathKind::Other
        }
    }
}

/// `true` when anything exists at `path`.
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    PathKind::of(path) != PathKind::Missing
}

/// `true` when `path` is a directory.
pub fn is_dir<P: AsRef<Path>>(path: P) -> bool {
    PathKind::of(path) == PathKind::Directory
}

/// `true` when `path` is a regular file.
pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    PathKind::of(path) == PathKind::File
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_path() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("nothing-here");
        assert_eq!(PathKind::of(&p), PathKind::Missing);
        assert!(!exists(&p));
        assert!(!is_dir(&p));
        assert!(!is_file(&p));
    }

    #[test]
    fn file_and_directory() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("f.txt");
        fs::write(&file, b"data").unwrap();
        assert_eq!(PathKind::of(&file), PathKind::File);
        assert!(is_file(&file) && !is_dir(&file));

        let dir = tmp.path().join("d");
        fs::create_dir(&dir).unwrap();
        assert_eq!(PathKind::of(&dir), PathKind::Directory);
        assert!(is_dir(&dir) && exists(&dir));
    }
}
