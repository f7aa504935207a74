//! File discovery and scan orchestration.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, trace};
use walkdir::WalkDir;

use overscan_core::ScanError;
use overscan_parser::extract_members;

use crate::config::ScanConfig;
use crate::conflict::members_conflict;
use crate::translate::{DefaultTranslator, Translator};

/// Message template rendered once per conflicting file pair.
const CONFLICT_TEMPLATE: &str = "override file %s conflicts with existing override in %s";

/// Message catalog domain for conflict messages.
const MESSAGE_DOMAIN: &str = "validate";

/// The outcome of one override scan.
///
/// Owned by the caller and produced fresh per [`OverrideScanner::scan`]
/// call, so results of one scan can never leak into the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    errors: Vec<String>,
}

impl ScanReport {
    /// Whether any conflicting file pair was found.
    pub fn has_conflict(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The accumulated conflict messages, in directory-enumeration
    /// order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Consume the report, yielding the messages.
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }

    /// Number of conflicting file pairs.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether the report holds no messages.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Scans a candidate override directory against installed overrides.
///
/// Each candidate file's path relative to the candidate directory is
/// appended to the configured existing-override prefix; when the
/// counterpart file exists, both files are tokenized, their member
/// names extracted, and the three name sets intersected. One message
/// is recorded per conflicting pair.
pub struct OverrideScanner<T: Translator = DefaultTranslator> {
    config: ScanConfig,
    translator: T,
}

impl OverrideScanner<DefaultTranslator> {
    /// Create a scanner with the default message formatter.
    pub fn new(config: ScanConfig) -> Self {
        Self::with_translator(config, DefaultTranslator)
    }
}

impl<T: Translator> OverrideScanner<T> {
    /// Create a scanner rendering messages through the given
    /// translator.
    pub fn with_translator(config: ScanConfig, translator: T) -> Self {
        Self { config, translator }
    }

    /// The scanner's configuration.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan `candidate_dir` for override files that conflict with
    /// already-installed overrides.
    ///
    /// A missing candidate directory, an empty one, and candidates
    /// with no installed counterpart all produce an empty report.
    /// I/O failures abort the scan: an unreadable file treated as
    /// empty would hide real conflicts.
    pub fn scan(&self, candidate_dir: &Path) -> Result<ScanReport, ScanError> {
        let mut report = ScanReport::default();

        if !candidate_dir.is_dir() {
            trace!(dir = %candidate_dir.display(), "candidate directory absent, nothing to scan");
            return Ok(report);
        }

        let mut compared = 0usize;
        for candidate in self.discover(candidate_dir)? {
            let rel = match candidate.strip_prefix(candidate_dir) {
                Ok(rel) => rel,
                Err(_) => continue,
            };
            // Concatenation, not join: the prefix carries its own
            // trailing separator.
            let existing = format!("{}{}", self.config.existing_prefix(), rel.display());
            if !Path::new(&existing).is_file() {
                trace!(candidate = %candidate.display(), existing = %existing, "no installed counterpart, skipped");
                continue;
            }

            let candidate_text = read_file(&candidate)?;
            let existing_text = read_file(Path::new(&existing))?;
            compared += 1;

            let candidate_members = extract_members(&candidate_text);
            let existing_members = extract_members(&existing_text);
            let conflict = members_conflict(&candidate_members, &existing_members);
            debug!(candidate = %candidate.display(), existing = %existing, conflict, "compared override pair");

            if conflict {
                let candidate_display = candidate.display().to_string();
                report.errors.push(self.translator.trans(
                    CONFLICT_TEMPLATE,
                    &[&candidate_display, &existing],
                    MESSAGE_DOMAIN,
                ));
            }
        }

        info!(
            dir = %candidate_dir.display(),
            compared,
            conflicts = report.len(),
            "override scan complete"
        );
        Ok(report)
    }

    /// Enumerate override files under the candidate directory, sorted
    /// by file name per directory so message order is deterministic.
    fn discover(&self, candidate_dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
        let mut files = Vec::new();
        for entry in WalkDir::new(candidate_dir).sort_by_file_name() {
            let entry = entry.map_err(|err| {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| candidate_dir.to_path_buf());
                match err.into_io_error() {
                    Some(source) => ScanError::Io { path, source },
                    None => ScanError::Io {
                        path,
                        source: std::io::Error::other("filesystem loop while walking overrides"),
                    },
                }
            })?;
            if entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .is_some_and(|ext| ext.to_str() == Some(self.config.extension()))
            {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

fn read_file(path: &Path) -> Result<String, ScanError> {
    fs::read_to_string(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })
}
