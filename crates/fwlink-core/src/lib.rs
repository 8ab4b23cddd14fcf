//! Core library for fwlink: streaming SHA-256 of firmware images, `.sha256`
//! sidecars, and the content-addressed `SHA256/` link directory.
//! Used by the CLI binary.

pub mod config;
pub mod error;
pub mod hash;
pub mod link;
pub mod scan;
pub mod sidecar;
pub mod tag;
pub mod utils;

// Re-export main API for CLI
pub use config::{Layout, CHUNK_SIZE, FIRMWARE_EXTENSION, LINK_DIR, SIDECAR_EXTENSION};
pub use error::FwlinkError;
pub use hash::{digest_file, digest_reader, Digest};
pub use link::{ensure_link, LinkOutcome};
pub use scan::list_firmware;
pub use sidecar::{sanitize_name, sidecar_name, write_sidecar};
pub use tag::{tag_directory, tag_file, FileRecord, Report};
pub use utils::{log, log_error, set_quiet};
