/// A cursor over source text that tracks position.
///
/// Provides peek/advance character access while maintaining byte
/// offset, line, and column. The lexer is built entirely on top of
/// this.
pub struct Cursor<'src> {
    /// The full source text.
    source: &'src str,
    /// Remaining text (slice starting at the current position).
    rest: &'src str,
    /// Current byte offset from the start of the source.
    offset: u32,
    /// Current line number (1-indexed).
    line: u32,
    /// Current column number (1-indexed, byte-based).
    column: u32,
}

impl<'src> Cursor<'src> {
    /// Create a cursor at the start of the source.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// The full source text.
    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Current byte offset from the start of the source.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Current line number (1-indexed).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-indexed, byte-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Whether the cursor has reached the end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.rest.is_empty()
    }

    /// Peek at the current character without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Peek at the nth character ahead (0 = current).
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    /// Whether the current character satisfies a predicate.
    #[inline]
    pub fn check(&self, f: impl Fn(char) -> bool) -> bool {
        self.peek().is_some_and(f)
    }

    /// Whether the upcoming bytes match the given string.
    #[inline]
    pub fn check_str(&self, s: &str) -> bool {
        self.rest.starts_with(s)
    }

    /// Consume the current character and advance, updating line and
    /// column tracking. Returns `None` at EOF.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.rest.chars().next()?;
        let len = ch.len_utf8() as u32;

        self.rest = &self.rest[len as usize..];
        self.offset += len;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += len;
        }

        Some(ch)
    }

    /// Consume the current character if it matches.
    #[inline]
    pub fn eat(&mut self, ch: char) -> bool {
        if self.peek() == Some(ch) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume characters while the predicate matches, returning the
    /// consumed slice.
    pub fn eat_while(&mut self, f: impl Fn(char) -> bool) -> &'src str {
        let start = self.offset as usize;
        while self.check(&f) {
            self.advance();
        }
        &self.source[start..self.offset as usize]
    }

    /// Slice of source from a starting offset to the current position.
    #[inline]
    pub fn slice_from(&self, start: u32) -> &'src str {
        &self.source[start as usize..self.offset as usize]
    }
}

/// Whether a character can start an identifier.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Whether a character can continue an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
