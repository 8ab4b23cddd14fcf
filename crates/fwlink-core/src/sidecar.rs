//! `.sha256` sidecar files written next to each firmware image.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SIDECAR_EXTENSION;
use crate::error::{FwlinkError, Result};
use crate::hash::Digest;

/// Characters replaced by `_` in sidecar names.
pub const SANITIZE_CHARS: &[char] = &['(', ')', '-'];

/// Map a firmware file name to the name used for its sidecar stem.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if SANITIZE_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// `fw-v1(2).bin` -> `fw_v1_2_.bin.sha256`
pub fn sidecar_name(name: &str) -> String {
    format!("{}.{}", sanitize_name(name), SIDECAR_EXTENSION)
}

/// Write (truncating) the hex digest, with no trailing newline, into `dir/<sidecar_name>`.
pub fn write_sidecar(dir: &Path, name: &str, digest: &Digest) -> Result<PathBuf> {
    let path = dir.join(sidecar_name(name));
    fs::write(&path, digest.as_str()).map_err(|e| FwlinkError::io("write sidecar", &path, e))?;
    Ok(path)
}
