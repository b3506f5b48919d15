use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::ops::copy::{copy_path, CopyError};
use crate::ops::create::{self, CreateError};
use crate::ops::empty::{empty_dir, EmptyDirError};
use crate::ops::json::{self, JsonError};
use crate::ops::lines::{self, LineReader};
use crate::ops::mv::{move_path, rename_path, MvError};
use crate::ops::output::output_file;
use crate::ops::path::{self, PathError};
use crate::ops::remove::{remove_path, RemoveError};
use crate::ops::stat::PathKind;
use crate::ops::vacuum::{vacuum, VacuumError, VacuumOptions};
use crate::ops::walk::{dive, DiveOptions, WalkError};
use crate::ops::xml::{read_xml, XmlElement, XmlError};

/// A path wrapped as an object.
///
/// `File` holds one `PathBuf` and nothing else. Every method forwards to
/// `std::fs` or to one of the [`ops`](crate::ops) helpers with the wrapped
/// path prepended, and hands back the callee's result. Construction never
/// touches the filesystem; [`File::strict`] additionally refuses strings
/// that are glob patterns or contain reserved characters.
///
/// ```no_run
/// use filekit::File;
///
/// # fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let logs = File::strict("/var/log/myapp")?;
/// logs.mkdirs()?;
/// let today = logs.resolve("2026-08-06.log")?;
/// today.output_file(b"started\n")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct File {
    path: PathBuf,
}

impl File {
    /// Wrap `path` without validation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        File { path: path.into() }
    }

    /// Wrap `path` after lexical validation.
    ///
    /// Glob-like strings and strings containing reserved characters are
    /// refused; the empty string is accepted. See [`ops::path::validate`]
    /// for the exact rules.
    ///
    /// [`ops::path::validate`]: crate::ops::path::validate
    pub fn strict(path: impl AsRef<str>) -> Result<Self, PathError> {
        let s = path.as_ref();
        path::validate(s)?;
        Ok(File::new(s))
    }

    /// The wrapped path, verbatim.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Final component of the wrapped path, if any.
    pub fn file_name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }

    /// Canonical absolute form of the wrapped path.
    pub fn absolute_path(&self) -> io::Result<PathBuf> {
        fs::canonicalize(&self.path)
    }

    /// Literal equality of the wrapped paths.
    pub fn equals(&self, other: &File) -> bool {
        self.path == other.path
    }

    /// Equality after canonicalizing both paths, so `a/../b` and `b`
    /// compare equal when both exist.
    pub fn deep_equals(&self, other: &File) -> io::Result<bool> {
        Ok(self.absolute_path()? == other.absolute_path()?)
    }

    // ---- inspection -------------------------------------------------------

    /// `true` when anything exists at the path.
    pub fn exists(&self) -> bool {
        crate::ops::stat::exists(&self.path)
    }

    /// Existence check that surfaces I/O errors instead of folding them
    /// into `false`.
    pub fn try_exists(&self) -> io::Result<bool> {
        self.path.try_exists()
    }

    /// `true` when the path is a regular file.
    pub fn is_file(&self) -> bool {
        crate::ops::stat::is_file(&self.path)
    }

    /// `true` when the path is a directory.
    pub fn is_dir(&self) -> bool {
        crate::ops::stat::is_dir(&self.path)
    }

    /// Classify what the path currently points at.
    pub fn kind(&self) -> PathKind {
        PathKind::of(&self.path)
    }

    /// Metadata of the path, following symlinks.
    pub fn metadata(&self) -> io::Result<fs::Metadata> {
        fs::metadata(&self.path)
    }

    /// Metadata of the path itself, not following symlinks.
    pub fn symlink_metadata(&self) -> io::Result<fs::Metadata> {
        fs::symlink_metadata(&self.path)
    }

    /// Target of the symlink at the path.
    pub fn read_link(&self) -> io::Result<PathBuf> {
        fs::read_link(&self.path)
    }

    // ---- navigation -------------------------------------------------------

    /// Child of this directory.
    ///
    /// The wrapped path must be an existing directory (checked on link
    /// metadata, so a symlink to a directory does not qualify).
    pub fn resolve(&self, child: &str) -> Result<File, PathError> {
        path::resolve_child(&self.path, child).map(File::new)
    }

    /// One `File` per entry of this directory.
    pub fn children(&self) -> io::Result<Vec<File>> {
        let mut out = Vec::new();
        for entry in fs::read_dir(&self.path)? {
            out.push(File::new(entry?.path()));
        }
        Ok(out)
    }

    /// Visit the name of each entry of this directory.
    pub fn for_each_child(&self, mut f: impl FnMut(&OsStr)) -> io::Result<()> {
        for entry in fs::read_dir(&self.path)? {
            f(&entry?.file_name());
        }
        Ok(())
    }

    /// Recursive traversal below this directory, selected by `opts`.
    pub fn dive(&self, opts: &DiveOptions) -> Result<Vec<File>, WalkError> {
        Ok(dive(&self.path, opts)?.into_iter().map(File::new).collect())
    }

    // ---- content I/O ------------------------------------------------------

    /// Entire content as bytes.
    pub fn read(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.path)
    }

    /// Entire content as UTF-8 text.
    pub fn read_to_string(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }

    /// Replace the content with `data`.
    pub fn write(&self, data: impl AsRef<[u8]>) -> io::Result<()> {
        fs::write(&self.path, data)
    }

    /// Open for reading, returning the raw `std::fs::File` handle.
    pub fn open(&self) -> io::Result<fs::File> {
        fs::File::open(&self.path)
    }

    /// Open for writing (create or truncate), returning the raw handle.
    pub fn create(&self) -> io::Result<fs::File> {
        fs::File::create(&self.path)
    }

    /// Whole file split into lines, honoring CRLF. See
    /// [`ops::lines::read_lines`](crate::ops::lines::read_lines).
    pub fn read_lines(&self) -> io::Result<Vec<String>> {
        lines::read_lines(&self.path)
    }

    /// Streaming line iterator over the file.
    pub fn lines(&self) -> io::Result<LineReader> {
        LineReader::open(&self.path)
    }

    /// Deserialize the file's JSON content into `T`.
    pub fn read_json<T: DeserializeOwned>(&self) -> Result<T, JsonError> {
        json::read_json(&self.path)
    }

    /// Write `value` as pretty-printed JSON.
    pub fn write_json<T: Serialize>(&self, value: &T) -> Result<(), JsonError> {
        json::write_json(&self.path, value)
    }

    /// Write `value` as JSON, creating missing parent directories.
    pub fn output_json<T: Serialize>(&self, value: &T) -> Result<(), JsonError> {
        json::output_json(&self.path, value)
    }

    /// Parse the file as an XML document and return its root element.
    pub fn read_xml(&self) -> Result<XmlElement, XmlError> {
        read_xml(&self.path)
    }

    /// Write `data`, creating missing parent directories.
    pub fn output_file(&self, data: impl AsRef<[u8]>) -> io::Result<()> {
        output_file(&self.path, data.as_ref())
    }

    // ---- tree operations --------------------------------------------------

    /// Copy this file or directory tree to `dest`.
    pub fn copy_to(&self, dest: impl AsRef<Path>) -> Result<(), CopyError> {
        copy_path(&self.path, dest)
    }

    /// Move this file or directory tree to `dest`, copying across devices
    /// when a rename is not possible.
    pub fn move_to(&self, dest: impl AsRef<Path>) -> Result<(), MvError> {
        move_path(&self.path, dest)
    }

    /// Rename within the parent directory, returning the renamed `File`.
    pub fn rename(&self, new_name: &str) -> Result<File, MvError> {
        rename_path(&self.path, new_name).map(File::new)
    }

    /// Remove the file or directory tree; a missing path is a no-op.
    pub fn remove(&self) -> Result<(), RemoveError> {
        remove_path(&self.path)
    }

    /// Make this an existing, empty directory.
    pub fn empty_dir(&self) -> Result<(), EmptyDirError> {
        empty_dir(&self.path)
    }

    /// Create this directory and any missing parents.
    pub fn mkdirs(&self) -> Result<(), CreateError> {
        create::ensure_dir(&self.path)
    }

    /// Alias for [`File::mkdirs`].
    pub fn ensure_dir(&self) -> Result<(), CreateError> {
        create::ensure_dir(&self.path)
    }

    /// Guarantee a regular file exists here, creating parents and an empty
    /// file when missing.
    pub fn ensure_file(&self) -> Result<(), CreateError> {
        create::ensure_file(&self.path)
    }

    /// Guarantee a hard link at `link` pointing to this path.
    pub fn ensure_link(&self, link: impl AsRef<Path>) -> Result<(), CreateError> {
        create::ensure_link(&self.path, link)
    }

    /// Guarantee a symlink at `link` pointing to this path.
    pub fn ensure_symlink(&self, link: impl AsRef<Path>) -> Result<(), CreateError> {
        create::ensure_symlink(&self.path, link)
    }

    /// Remove this directory when empty, then prune empty ancestors. See
    /// [`ops::vacuum::vacuum`](crate::ops::vacuum::vacuum).
    pub fn vacuum(&self, opts: &VacuumOptions) -> Result<usize, VacuumError> {
        vacuum(&self.path, opts)
    }

    // ---- metadata mutation ------------------------------------------------

    /// Apply `perm` to the path.
    pub fn set_permissions(&self, perm: fs::Permissions) -> io::Result<()> {
        fs::set_permissions(&self.path, perm)
    }

    /// Apply a Unix mode to the path.
    #[cfg(unix)]
    pub fn chmod(&self, mode: u32) -> io::Result<()> {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&self.path, fs::Permissions::from_mode(mode))
    }

    /// Change owner and group of the path.
    #[cfg(unix)]
    pub fn chown(&self, uid: u32, gid: u32) -> io::Result<()> {
        use nix::unistd::{chown, Gid, Uid};
        chown(&self.path, Some(Uid::from_raw(uid)), Some(Gid::from_raw(gid)))
            .map_err(|e| io::Error::from_raw_os_error(e as i32))
    }

    /// Set access and modification times.
    pub fn set_times(&self, accessed: SystemTime, modified: SystemTime) -> io::Result<()> {
        filetime::set_file_times(
            &self.path,
            filetime::FileTime::from_system_time(accessed),
            filetime::FileTime::from_system_time(modified),
        )
    }

    /// Truncate (or extend with zeros) the file to `len` bytes.
    pub fn truncate(&self, len: u64) -> io::Result<()> {
        let f = fs::OpenOptions::new().write(true).open(&self.path)?;
        f.set_len(len)
    }
}

impl AsRef<Path> for File {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl From<PathBuf> for File {
    fn from(path: PathBuf) -> Self {
        File::new(path)
    }
}

impl From<&Path> for File {
    fn from(path: &Path) -> Self {
        File::new(path)
    }
}

impl std::fmt::Display for File {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.path.display().fmt(f)
    }
}
