//! Error type for fwlink runs.
//! Every failure aborts the run; the variants only exist so callers and tests
//! can tell a missing link directory apart from a permission problem or plain I/O.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Main error type for fwlink operations
#[derive(Debug)]
pub enum FwlinkError {
    /// The content-addressed link directory (`SHA256/`) does not exist
    MissingLinkDir { path: PathBuf },
    /// Permission denied while touching a file or directory
    PermissionDenied { operation: String, path: PathBuf },
    /// Any other I/O failure
    Io {
        operation: String,
        path: PathBuf,
        source: io::Error,
    },
}

impl FwlinkError {
    /// Classify an I/O error raised by `operation` on `path`.
    pub fn io(operation: &str, path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::PermissionDenied {
            FwlinkError::PermissionDenied {
                operation: operation.to_string(),
                path: path.to_path_buf(),
            }
        } else {
            FwlinkError::Io {
                operation: operation.to_string(),
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

impl fmt::Display for FwlinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FwlinkError::MissingLinkDir { path } => {
                write!(
                    f,
                    "link directory {} does not exist (create it before running)",
                    path.display()
                )
            }
            FwlinkError::PermissionDenied { operation, path } => {
                write!(f, "permission denied in {} (path: {})", operation, path.display())
            }
            FwlinkError::Io { operation, path, source } => {
                write!(f, "I/O error in {}: {} (path: {})", operation, source, path.display())
            }
        }
    }
}

impl std::error::Error for FwlinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FwlinkError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FwlinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_is_classified() {
        let err = FwlinkError::io(
            "open",
            Path::new("a.bin"),
            io::Error::new(io::ErrorKind::PermissionDenied, "nope"),
        );
        assert!(matches!(
            err,
            FwlinkError::PermissionDenied { ref operation, ref path }
                if operation == "open" && path == Path::new("a.bin")
        ));
    }

    #[test]
    fn test_other_io_keeps_source() {
        let err = FwlinkError::io(
            "read",
            Path::new("b.bin"),
            io::Error::new(io::ErrorKind::UnexpectedEof, "short"),
        );
        let msg = err.to_string();
        assert!(msg.contains("read"));
        assert!(msg.contains("b.bin"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_missing_link_dir_message() {
        let err = FwlinkError::MissingLinkDir { path: PathBuf::from("fw/SHA256") };
        assert!(err.to_string().contains("fw/SHA256"));
    }
}
