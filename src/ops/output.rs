use std::fs;
use std::io;
use std::path::Path;

/// Create the parent directory chain for `p` when it has one.
pub fn ensure_parent_exists(p: &Path) -> io::Result<()> {
    if let Some(parent) = p.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Write `data` to `target` by writing a temporary file in the same
/// directory and renaming it into place, so other processes never observe a
/// partially written file. The temp file is removed on any failure.
pub fn atomic_write(target: &Path, data: &[u8]) -> io::Result<()> {
    let Some(dir) = target.parent() else {
        // No parent to stage a temp file in; write directly.
        return fs::write(target, data);
    };
    fs::create_dir_all(dir)?;

    let mut tmp = dir.join(".tmp_write");
    // pid + monotonic counter keeps concurrent writers from colliding on
    // the staging name.
    use std::sync::atomic::{AtomicU64, Ordering};
    static NEXT_WRITE_ID: AtomicU64 = AtomicU64::new(0);
    let seq = NEXT_WRITE_ID.fetch_add(1, Ordering::Relaxed);
    tmp.set_file_name(format!(".tmp_write.{:x}.{:x}", std::process::id(), seq));

    match fs::write(&tmp, data) {
        Ok(()) => match fs::rename(&tmp, target) {
            Ok(()) => Ok(()),
            Err(e) => {
                let _ = fs::remove_file(&tmp);
                Err(e)
            }
        },
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            Err(e)
        }
    }
}

/// Write `data` to `path`, creating any missing parent directories first.
pub fn output_file(path: &Path, data: &[u8]) -> io::Result<()> {
    atomic_write(path, data)
}
