//! Streaming SHA-256 for firmware images.
//!
//! Images can be large, so content is never loaded whole: the reader is
//! drained through one fixed-size buffer into an incremental hasher.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::Serialize;
use sha2::{Digest as _, Sha256};

use crate::config::CHUNK_SIZE;
use crate::error::{FwlinkError, Result};

/// Length of a SHA-256 digest rendered as hex.
pub const HEX_LEN: usize = 64;

/// A SHA-256 digest as a 64-char lowercase hex string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Digest(String);

impl Digest {
    /// Accepts 64 hex chars in either case; stored lowercase.
    pub fn from_hex(s: &str) -> Option<Self> {
        if s.len() != HEX_LEN || !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self(s.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// SHA-256 of everything `reader` yields, reading at most `chunk_size` bytes per call.
pub fn digest_reader<R: Read>(mut reader: R, chunk_size: usize) -> io::Result<Digest> {
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; chunk_size.max(1)];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }
    Ok(Digest(format!("{:x}", hasher.finalize())))
}

/// SHA-256 of a file, streamed in `CHUNK_SIZE` reads.
pub fn digest_file(path: &Path) -> Result<Digest> {
    digest_file_chunked(path, CHUNK_SIZE)
}

pub(crate) fn digest_file_chunked(path: &Path, chunk_size: usize) -> Result<Digest> {
    let f = File::open(path).map_err(|e| FwlinkError::io("open", path, e))?;
    digest_reader(f, chunk_size).map_err(|e| FwlinkError::io("read", path, e))
}
