//! Firmware discovery: the non-recursive `*.bin` glob over one directory.

use std::fs;
use std::path::Path;

use crate::config::FIRMWARE_EXTENSION;
use crate::error::{FwlinkError, Result};
use crate::utils;

/// True if `name` matches `*.bin` the way a shell glob would (no dotfiles, case-sensitive).
pub fn matches_firmware(name: &str) -> bool {
    if name.starts_with('.') {
        return false;
    }
    name.strip_suffix(FIRMWARE_EXTENSION)
        .map(|stem| stem.ends_with('.'))
        .unwrap_or(false)
}

/// List firmware file names in `dir`, sorted. Directories are skipped, as are
/// names that are not valid UTF-8 (with a log line).
pub fn list_firmware(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| FwlinkError::io("list directory", dir, e))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FwlinkError::io("list directory", dir, e))?;
        let raw = entry.file_name();
        let Some(name) = raw.to_str() else {
            utils::log_error(&format!("Skipping non UTF-8 name: {}", raw.to_string_lossy()));
            continue;
        };
        if !matches_firmware(name) {
            continue;
        }
        // follows symlinks; a dangling link still gets listed and fails on open
        if entry.path().is_dir() {
            continue;
        }
        names.push(name.to_string());
    }
    names.sort();
    Ok(names)
}
