//! overscan — module override conflict detection.
//!
//! Given a directory of candidate override files and the path prefix of
//! the overrides already installed, overscan answers one question: do
//! two independently authored override files collide by declaring the
//! same method, property, or constant of the same class?
//!
//! The pipeline is deliberately shallow. Files are tokenized, never
//! parsed; member names are pulled from the token stream by small
//! state machines (see [`overscan_parser`]); and two files conflict
//! when any of their three name sets intersect. Malformed source is
//! tolerated everywhere: it degrades to "no members found", never to a
//! failed scan. Only real I/O failures abort.
//!
//! ```no_run
//! use overscan::{OverrideScanner, ScanConfig};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ScanConfig::new("/var/app/overrides/")?;
//! let scanner = OverrideScanner::new(config);
//! let report = scanner.scan(Path::new("modules/checkout/overrides"))?;
//! for message in report.errors() {
//!     eprintln!("{message}");
//! }
//! assert!(!report.has_conflict());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod conflict;
pub mod scan;
pub mod translate;

pub use config::ScanConfig;
pub use conflict::{
    has_conflicting_constant, has_conflicting_method, has_conflicting_property, members_conflict,
};
pub use overscan_core::{ConfigError, ScanError, Span};
pub use overscan_parser::{extract_members, Members};
pub use scan::{OverrideScanner, ScanReport};
pub use translate::{DefaultTranslator, Translator};
