//! Scanner configuration.

use overscan_core::ConfigError;

/// Configuration for an [`OverrideScanner`](crate::OverrideScanner).
///
/// The existing-override location is a string *prefix*, not a
/// directory path: each candidate file's relative path is appended to
/// it by plain concatenation. The prefix therefore must end with a
/// path separator, and that requirement is validated here instead of
/// surfacing later as silently-missing counterpart files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    existing_prefix: String,
    extension: String,
}

/// Default override file extension.
pub const DEFAULT_EXTENSION: &str = "php";

impl ScanConfig {
    /// Create a configuration with the default `php` extension.
    pub fn new(existing_prefix: impl Into<String>) -> Result<Self, ConfigError> {
        let existing_prefix = existing_prefix.into();
        if !ends_with_separator(&existing_prefix) {
            return Err(ConfigError::MissingTrailingSeparator(existing_prefix));
        }
        Ok(Self {
            existing_prefix,
            extension: DEFAULT_EXTENSION.to_string(),
        })
    }

    /// Replace the override file extension. A single bare segment is
    /// required: no leading dot, no separators, not empty.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Result<Self, ConfigError> {
        let extension = extension.into();
        if extension.is_empty() || extension.contains(['.', '/', '\\']) {
            return Err(ConfigError::InvalidExtension(extension));
        }
        self.extension = extension;
        Ok(self)
    }

    /// The validated existing-override prefix, trailing separator
    /// included.
    pub fn existing_prefix(&self) -> &str {
        &self.existing_prefix
    }

    /// The override file extension, without a dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

fn ends_with_separator(prefix: &str) -> bool {
    prefix.ends_with(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_prefix_with_trailing_separator() {
        let config = ScanConfig::new("/opt/app/overrides/").unwrap();
        assert_eq!(config.existing_prefix(), "/opt/app/overrides/");
        assert_eq!(config.extension(), "php");
    }

    #[test]
    fn rejects_prefix_without_trailing_separator() {
        let err = ScanConfig::new("/opt/app/overrides").unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingTrailingSeparator("/opt/app/overrides".into())
        );
    }

    #[test]
    fn extension_must_be_a_bare_segment() {
        let config = ScanConfig::new("prefix/").unwrap();
        assert!(config.clone().with_extension("inc").is_ok());
        assert!(config.clone().with_extension(".php").is_err());
        assert!(config.clone().with_extension("a/b").is_err());
        assert!(config.with_extension("").is_err());
    }
}
