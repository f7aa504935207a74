//! Source location tracking.

use std::fmt;

/// A span of source text, identified by where it starts.
///
/// Tokens carry a span so diagnostics and tests can point at the
/// line:column a name was declared on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed, byte-based).
    pub col: u32,
    /// Length in bytes.
    pub len: u32,
}

impl Span {
    /// Create a span from a line, column, and byte length.
    #[inline]
    pub fn new(line: u32, col: u32, len: u32) -> Self {
        Self { line, col, len }
    }

    /// Create a zero-length span at a position.
    #[inline]
    pub fn point(line: u32, col: u32) -> Self {
        Self { line, col, len: 0 }
    }

    /// Whether this span covers no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The length of this span in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_basics() {
        let span = Span::new(2, 7, 4);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());

        let point = Span::point(2, 7);
        assert!(point.is_empty());
    }

    #[test]
    fn span_display() {
        assert_eq!(format!("{}", Span::new(3, 15, 5)), "3:15");
    }
}
