use std::fmt;
use std::path::{Path, PathBuf};

use crate::glob;

/// Errors produced while validating or resolving a user-supplied path.
#[derive(Debug, PartialEq, Eq)]
pub enum PathError {
    /// The string contains glob syntax and therefore names a set of paths,
    /// not a single one.
    GlobPattern(String),
    /// The string contains a character that is never valid in a portable
    /// file name.
    InvalidCharacter { path: String, ch: char },
    /// The path was expected to name an existing directory.
    NotADirectory(PathBuf),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::GlobPattern(s) => write!(f, "glob pattern is not a path: {s}"),
            PathError::InvalidCharacter { path, ch } => {
                write!(f, "invalid character {ch:?} in path: {path}")
            }
            PathError::NotADirectory(p) => write!(f, "not a directory: {}", p.display()),
        }
    }
}

impl std::error::Error for PathError {}

// Characters refused by `validate`. `?` and `*` are already caught by the
// glob check; the rest are reserved on at least one supported platform.
const REJECTED: &[char] = &['<', '>', '"', '|'];

/// Validate a candidate path string for `File::strict`.
///
/// The empty string is accepted: it wraps "no path yet" and fails later at
/// the first filesystem call instead. Validation is purely lexical and
/// never touches the filesystem.
pub fn validate(s: &str) -> Result<(), PathError> {
    if glob::is_glob(s) {
        return Err(PathError::GlobPattern(s.to_string()));
    }
    for ch in s.chars() {
        if ch.is_ascii_control() || REJECTED.contains(&ch) {
            return Err(PathError::InvalidCharacter {
                path: s.to_string(),
                ch,
            });
        }
    }
    Ok(())
}

/// Join `child` onto `dir`, requiring `dir` to be an existing directory.
///
/// Checks link metadata, so a symlink to a directory does not qualify; this
/// keeps resolution from silently crossing a link boundary.
pub fn resolve_child(dir: &Path, child: &str) -> Result<PathBuf, PathError> {
    let is_dir = std::fs::symlink_metadata(dir)
        .map(|m| m.is_dir())
        .unwrap_or(false);
    if !is_dir {
        return Err(PathError::NotADirectory(dir.to_path_buf()));
    }
    Ok(dir.join(child))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn accepts_ordinary_and_empty_paths() {
        assert!(validate("src/main.rs").is_ok());
        assert!(validate("/absolute/path with spaces").is_ok());
        assert!(validate("").is_ok());
    }

    #[test]
    fn rejects_globs() {
        let err = validate("src/*.rs").unwrap_err();
        assert_eq!(err, PathError::GlobPattern("src/*.rs".into()));
        assert!(validate("!(a|b)").is_err());
    }

    #[test]
    fn rejects_reserved_and_control_characters() {
        assert!(matches!(
            validate("a<b"),
            Err(PathError::InvalidCharacter { ch: '<', .. })
        ));
        assert!(validate("pipe|pipe").is_err());
        assert!(validate("quote\"quote").is_err());
        assert!(validate("nul\u{0}byte").is_err());
    }

    #[test]
    fn escaped_glob_characters_pass() {
        assert!(validate(r"literal\*file").is_ok());
    }

    #[test]
    fn resolve_child_requires_directory() {
        let td = tempdir().unwrap();
        let got = resolve_child(td.path(), "kid.txt").unwrap();
        assert_eq!(got, td.path().join("kid.txt"));

        let file = td.path().join("plain.txt");
        std::fs::write(&file, b"x").unwrap();
        let err = resolve_child(&file, "kid").unwrap_err();
        assert_eq!(err, PathError::NotADirectory(file));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_child_does_not_follow_symlinks() {
        let td = tempdir().unwrap();
        let real = td.path().join("real");
        std::fs::create_dir(&real).unwrap();
        let link = td.path().join("link");
        std::os::unix::fs::symlink(&real, &link).unwrap();
        assert!(resolve_child(&link, "kid").is_err());
    }
}
