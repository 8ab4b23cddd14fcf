//! One tagging pass over a firmware directory: hash, print, sidecar, link.
//! Files are handled one at a time and the first error stops the run.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::config::Layout;
use crate::error::{FwlinkError, Result};
use crate::hash::{self, Digest};
use crate::link::{self, LinkOutcome};
use crate::scan;
use crate::sidecar;
use crate::utils;

/// What happened to one firmware file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub name: String,
    pub digest: Digest,
    pub sidecar: String,
    pub link: LinkOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub files: Vec<FileRecord>,
}

impl Report {
    pub fn links_created(&self) -> usize {
        self.files.iter().filter(|f| f.link == LinkOutcome::Created).count()
    }

    pub fn links_existing(&self) -> usize {
        self.files.iter().filter(|f| f.link == LinkOutcome::Existing).count()
    }

    /// One-line summary for the log.
    pub fn summary(&self) -> String {
        format!(
            "{} file(s) hashed, {} link(s) created, {} existing",
            self.files.len(),
            self.links_created(),
            self.links_existing()
        )
    }
}

/// Progress line for one file: `<name>: <hex>`.
pub fn progress_line(name: &str, digest: &Digest) -> String {
    format!("{}: {}", name, digest)
}

/// Hash, record and link a single firmware file in `layout.root`.
pub fn tag_file(layout: &Layout, name: &str, out: &mut dyn Write) -> Result<FileRecord> {
    let path = layout.firmware_path(name);
    let digest = hash::digest_file_chunked(&path, layout.chunk_size)?;

    writeln!(out, "{}", progress_line(name, &digest))
        .map_err(|e| FwlinkError::io("write progress", Path::new("<output>"), e))?;

    sidecar::write_sidecar(&layout.root, name, &digest)?;

    let outcome = link::ensure_link(layout, name, &digest)?;
    if outcome == LinkOutcome::Created {
        let link_path = layout.link_path(digest.as_str());
        utils::log(&format!("Linked {} -> ../{}", link_path.display(), name));
    }

    Ok(FileRecord {
        name: name.to_string(),
        sidecar: sidecar::sidecar_name(name),
        digest,
        link: outcome,
    })
}

/// Tag every `*.bin` in `layout.root`. Progress lines go to `out`.
pub fn tag_directory(layout: &Layout, out: &mut dyn Write) -> Result<Report> {
    let names = scan::list_firmware(&layout.root)?;
    utils::log(&format!(
        "Hashing {} firmware file(s) in {}",
        names.len(),
        layout.root.display()
    ));

    let mut report = Report::default();
    for name in &names {
        report.files.push(tag_file(layout, name, out)?);
    }

    utils::log(&report.summary());
    Ok(report)
}
