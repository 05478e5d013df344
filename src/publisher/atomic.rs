//! Whole-file replacement writes

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Indentation used by the plugin's own JSON files
const JSON_INDENT: &[u8] = b"    ";

/// Serialize `value` as JSON indented with four spaces
pub fn to_json_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(JSON_INDENT));
    value.serialize(&mut serializer).context("Failed to serialize JSON")?;
    Ok(buffer)
}

/// Replace `path` with `contents` (temp file + rename)
///
/// Readers see either the old or the new file, never a partial write.
pub fn write_replace(path: &Path, contents: &[u8]) -> Result<()> {
    let temp = temp_path(path);
    fs::write(&temp, contents)
        .with_context(|| format!("Failed to write temp file: {}", temp.display()))?;
    if let Err(e) = fs::rename(&temp, path) {
        let _ = fs::remove_file(&temp);
        return Err(e).with_context(|| format!("Failed to rename temp file to {}", path.display()));
    }
    Ok(())
}

/// Recursively remove `path`, treating a missing directory as success
///
/// Returns `Ok(true)` when something was removed.
pub fn remove_dir_if_exists(path: &Path) -> io::Result<bool> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
