use std::fs;
use std::io;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::ops::output::output_file;

/// Errors returned by the JSON helpers.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Read `path` and deserialize its JSON content into `T`.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, JsonError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Serialize `value` as pretty-printed JSON and write it to `path`.
///
/// The parent directory must already exist; use [`output_json`] to create
/// it on the way.
pub fn write_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<(), JsonError> {
    let body = render(value)?;
    fs::write(path, body)?;
    Ok(())
}

/// Like [`write_json`], creating missing parent directories first.
pub fn output_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<(), JsonError> {
    let body = render(value)?;
    output_file(path.as_ref(), body.as_bytes())?;
    Ok(())
}

fn render<T: Serialize>(value: &T) -> Result<String, JsonError> {
    let mut body = serde_json::to_string_pretty(value)?;
    body.push('\n');
    Ok(body)
}
