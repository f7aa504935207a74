//! Error types for override scanning.
//!
//! Two small hierarchies: [`ConfigError`] for construction-time
//! validation of scanner configuration, and [`ScanError`] for failures
//! that abort a scan. Detected conflicts are never errors in this
//! sense; they are reported as messages in the scan result.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while validating scanner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The existing-override prefix is joined to each relative file path
    /// by plain string concatenation, so it must carry its own trailing
    /// separator.
    #[error("existing-override prefix {0:?} must end with a path separator")]
    MissingTrailingSeparator(String),

    /// The override file extension must be a single bare segment
    /// (e.g. `php`), with no dot and no separators.
    #[error("invalid override file extension {0:?}")]
    InvalidExtension(String),
}

/// Errors that abort an override scan.
///
/// A missing candidate directory or a missing existing counterpart is
/// not an error; only genuine I/O failures reading files (or walking
/// the candidate tree) escalate. Treating an unreadable file as empty
/// would silently hide conflicts, so the scan fails loudly instead.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Reading a file that was expected to exist failed, or the
    /// directory walk itself failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// The path the failed operation was addressing.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ScanError::Io { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::MissingTrailingSeparator("overrides".into());
        assert!(err.to_string().contains("overrides"));
        assert!(err.to_string().contains("path separator"));

        let err = ConfigError::InvalidExtension(".php".into());
        assert!(err.to_string().contains(".php"));
    }

    #[test]
    fn scan_error_carries_path() {
        let err = ScanError::Io {
            path: PathBuf::from("/tmp/missing.php"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.path(), std::path::Path::new("/tmp/missing.php"));
        assert!(err.to_string().contains("/tmp/missing.php"));
    }
}
