//! Fixed names and sizes used by a run. There are no config files: a `Layout`
//! only pins the working directory so the same constants can be pointed at
//! any directory (tests use a tempdir).

use std::path::{Path, PathBuf};

/// Extension of the firmware images picked up by the scan (`*.bin`).
pub const FIRMWARE_EXTENSION: &str = "bin";
/// Name of the content-addressed link directory, relative to the working dir.
pub const LINK_DIR: &str = "SHA256";
/// Extension appended to the sanitized firmware name for the sidecar.
pub const SIDECAR_EXTENSION: &str = "sha256";
/// Read size for streaming digests (64 KiB).
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Working directory plus the fixed layout derived from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pub root: PathBuf,
    pub chunk_size: usize,
}

impl Layout {
    pub fn in_dir(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            chunk_size: CHUNK_SIZE,
        }
    }

    /// Layout rooted at the process's current directory.
    pub fn current_dir() -> std::io::Result<Self> {
        Ok(Self::in_dir(std::env::current_dir()?))
    }

    /// `<root>/SHA256`
    pub fn link_dir(&self) -> PathBuf {
        self.root.join(LINK_DIR)
    }

    /// `<root>/SHA256/<hex>`
    pub fn link_path(&self, hex: &str) -> PathBuf {
        self.link_dir().join(hex)
    }

    /// Link target stored in the symlink: `../<name>`, relative to the link dir.
    pub fn link_target(&self, name: &str) -> PathBuf {
        Path::new("..").join(name)
    }

    pub fn firmware_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}
