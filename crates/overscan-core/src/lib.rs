//! Shared foundation for the overscan workspace.
//!
//! Holds the source-location type used by the tokenizer and the error
//! types surfaced by configuration and scanning. The parsing pipeline
//! itself is infallible; only construction-time validation and I/O can
//! fail, and both live here so every crate agrees on the taxonomy.

mod error;
mod span;

pub use error::{ConfigError, ScanError};
pub use span::Span;
