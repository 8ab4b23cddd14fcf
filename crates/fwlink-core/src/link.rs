//! Content-addressed links: `SHA256/<hex>` -> `../<firmware name>`.
//! One link per digest. Whatever already sits at the link path wins, so a
//! second file with the same content only gets its sidecar.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::config::Layout;
use crate::error::{FwlinkError, Result};
use crate::hash::Digest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkOutcome {
    /// A new symlink was created for this digest
    Created,
    /// Something already existed at the link path and was left alone
    Existing,
}

/// Make sure `SHA256/<digest>` exists, creating a symlink to `../<name>` if nothing is there.
/// The existence check does not follow links: a dangling link counts as existing.
pub fn ensure_link(layout: &Layout, name: &str, digest: &Digest) -> Result<LinkOutcome> {
    let link_path = layout.link_path(digest.as_str());
    if fs::symlink_metadata(&link_path).is_ok() {
        return Ok(LinkOutcome::Existing);
    }
    let target = layout.link_target(name);
    match make_symlink(&target, &link_path) {
        Ok(()) => Ok(LinkOutcome::Created),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(LinkOutcome::Existing),
        Err(e) if e.kind() == io::ErrorKind::NotFound && !layout.link_dir().is_dir() => {
            Err(FwlinkError::MissingLinkDir { path: layout.link_dir() })
        }
        Err(e) => Err(FwlinkError::io("create link", &link_path, e)),
    }
}

#[cfg(unix)]
fn make_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn make_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}
