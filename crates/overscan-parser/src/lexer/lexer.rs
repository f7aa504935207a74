//! Tokenizer for PHP-dialect override files.
//!
//! The [`Lexer`] converts source text into a stream of [`Token`]s,
//! dispatching on the first character of each token. It never fails:
//! override files are only partially trusted, and one malformed file
//! must not abort a whole conflict scan. Unterminated strings and
//! comments consume to end of input; unrecognized bytes become
//! [`TokenKind::Other`] tokens.
//!
//! Whitespace and comments are dropped entirely. String literals are
//! kept (as `Other`) so that keywords inside them never reach the
//! member extractor as keywords.

use overscan_core::Span;

use super::cursor::{is_ident_continue, is_ident_start, Cursor};
use super::token::{lookup_keyword, Token, TokenKind};

/// Tokenizer over override source text.
///
/// Tokens borrow from the source string, so the source must outlive
/// the token sequence.
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Lexer<'src> {
    /// Create a lexer for the given source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Consume and return the next token. Returns an `Eof` token at
    /// end of input, and keeps returning it thereafter.
    pub fn next_token(&mut self) -> Token<'src> {
        self.scan_token()
    }

    /// Scan the next token from source.
    fn scan_token(&mut self) -> Token<'src> {
        self.skip_whitespace();

        if self.cursor.is_eof() {
            return self.make_eof();
        }

        let start_line = self.cursor.line();
        let start_col = self.cursor.column();
        let start_offset = self.cursor.offset();

        match self.cursor.peek().unwrap_or('\0') {
            // Comments or a stray slash
            '/' => self.scan_slash(start_line, start_col, start_offset),

            // Shell-style line comment
            '#' => {
                self.skip_line_comment();
                self.scan_token()
            }

            // String literals collapse to one opaque token each
            '"' => self.scan_string('"', start_line, start_col, start_offset),
            '\'' => self.scan_string('\'', start_line, start_col, start_offset),

            // Variables: `$` followed by an identifier
            '$' if self.cursor.peek_nth(1).is_some_and(is_ident_start) => {
                self.scan_variable(start_line, start_col, start_offset)
            }

            // Numbers are opaque downstream
            c if c.is_ascii_digit() => self.scan_number(start_line, start_col, start_offset),

            // Identifiers and keywords
            c if is_ident_start(c) => self.scan_identifier(start_line, start_col, start_offset),

            // Punctuation and everything else
            _ => self.scan_punctuation(start_line, start_col, start_offset),
        }
    }

    /// Skip whitespace and a leading BOM.
    fn skip_whitespace(&mut self) {
        if self.cursor.check_str("\u{FEFF}") {
            self.cursor.advance();
        }
        while self.cursor.check(|c| c.is_whitespace()) {
            self.cursor.advance();
        }
    }

    /// Consume to the end of the current line, exclusive of the newline.
    fn skip_line_comment(&mut self) {
        while let Some(c) = self.cursor.peek() {
            if c == '\n' {
                break;
            }
            self.cursor.advance();
        }
    }

    fn make_eof(&self) -> Token<'src> {
        Token::new(
            TokenKind::Eof,
            "",
            Span::point(self.cursor.line(), self.cursor.column()),
        )
    }

    /// Create a token spanning from the start position to the cursor.
    fn make_token(
        &self,
        kind: TokenKind,
        start_line: u32,
        start_col: u32,
        start_offset: u32,
    ) -> Token<'src> {
        let len = self.cursor.offset() - start_offset;
        let text = self.cursor.slice_from(start_offset);
        Token::new(kind, text, Span::new(start_line, start_col, len))
    }

    /// Scan a slash: `//` comment, `/* */` comment, or a lone operator.
    fn scan_slash(&mut self, start_line: u32, start_col: u32, start_offset: u32) -> Token<'src> {
        self.cursor.advance(); // '/'

        match self.cursor.peek() {
            Some('/') => {
                self.skip_line_comment();
                self.scan_token()
            }
            Some('*') => {
                self.cursor.advance();
                self.skip_block_comment();
                self.scan_token()
            }
            _ => self.make_token(TokenKind::Other, start_line, start_col, start_offset),
        }
    }

    /// Consume a block comment body. An unterminated comment consumes
    /// to EOF; that is tolerated, not reported.
    fn skip_block_comment(&mut self) {
        while let Some(c) = self.cursor.peek() {
            self.cursor.advance();
            if c == '*' && self.cursor.eat('/') {
                return;
            }
        }
    }

    /// Scan a quoted string as one opaque token. Backslash escapes are
    /// honored; an unterminated string consumes to EOF.
    fn scan_string(
        &mut self,
        quote: char,
        start_line: u32,
        start_col: u32,
        start_offset: u32,
    ) -> Token<'src> {
        self.cursor.advance(); // opening quote

        while let Some(c) = self.cursor.peek() {
            self.cursor.advance();
            if c == '\\' {
                self.cursor.advance();
            } else if c == quote {
                break;
            }
        }

        self.make_token(TokenKind::Other, start_line, start_col, start_offset)
    }

    /// Scan a `$`-sigil variable. The sigil stays in the token text so
    /// extracted property names keep their declared form.
    fn scan_variable(
        &mut self,
        start_line: u32,
        start_col: u32,
        start_offset: u32,
    ) -> Token<'src> {
        self.cursor.advance(); // '$'
        self.cursor.eat_while(is_ident_continue);
        self.make_token(TokenKind::Variable, start_line, start_col, start_offset)
    }

    /// Scan a numeric literal. The exact value never matters downstream,
    /// so digits, radix letters, underscores, and a decimal point are
    /// all folded into one `Other` token.
    fn scan_number(&mut self, start_line: u32, start_col: u32, start_offset: u32) -> Token<'src> {
        self.cursor
            .eat_while(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
        self.make_token(TokenKind::Other, start_line, start_col, start_offset)
    }

    /// Scan an identifier or keyword.
    fn scan_identifier(
        &mut self,
        start_line: u32,
        start_col: u32,
        start_offset: u32,
    ) -> Token<'src> {
        let text = self.cursor.eat_while(is_ident_continue);
        let kind = lookup_keyword(text).unwrap_or(TokenKind::Identifier);
        self.make_token(kind, start_line, start_col, start_offset)
    }

    /// Scan punctuation, including the two-character `->`, `=>`, and
    /// `::`. Anything unrecognized becomes a single-character `Other`.
    fn scan_punctuation(
        &mut self,
        start_line: u32,
        start_col: u32,
        start_offset: u32,
    ) -> Token<'src> {
        let kind = match self.cursor.advance().unwrap_or('\0') {
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '&' => TokenKind::Ampersand,
            '=' => {
                if self.cursor.eat('>') {
                    TokenKind::FatArrow
                } else {
                    TokenKind::Equal
                }
            }
            '-' => {
                if self.cursor.eat('>') {
                    TokenKind::Arrow
                } else {
                    TokenKind::Other
                }
            }
            ':' => {
                if self.cursor.eat(':') {
                    TokenKind::DoubleColon
                } else {
                    TokenKind::Other
                }
            }
            _ => TokenKind::Other,
        };
        self.make_token(kind, start_line, start_col, start_offset)
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}

/// Tokenize a whole source text into an ordered token sequence.
///
/// The EOF marker is omitted; an empty source yields an empty vec.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn tokenizes_method_declaration() {
        let tokens = tokenize("public function run() {}");
        let expected = [
            TokenKind::Public,
            TokenKind::Function,
            TokenKind::Identifier,
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
        ];
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            expected
        );
        assert_eq!(tokens[2].text, "run");
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(
            kinds("FUNCTION Foo"),
            vec![TokenKind::Function, TokenKind::Identifier]
        );
    }

    #[test]
    fn variable_keeps_sigil() {
        let tokens = tokenize("private $count;");
        assert_eq!(tokens[1].kind, TokenKind::Variable);
        assert_eq!(tokens[1].text, "$count");
    }

    #[test]
    fn lone_dollar_is_other() {
        assert_eq!(kinds("$ $x"), vec![TokenKind::Other, TokenKind::Variable]);
    }

    #[test]
    fn comments_are_dropped() {
        assert_eq!(
            kinds("// function hidden\n# function hidden\n/* function hidden */ class"),
            vec![TokenKind::Class]
        );
    }

    #[test]
    fn unterminated_block_comment_consumes_to_eof() {
        assert_eq!(kinds("class /* function oops"), vec![TokenKind::Class]);
    }

    #[test]
    fn strings_are_opaque() {
        let tokens = tokenize(r#"echo "function notAMethod";"#);
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::Echo, TokenKind::Other, TokenKind::Semicolon]
        );
        assert_eq!(tokens[1].text, r#""function notAMethod""#);
    }

    #[test]
    fn string_escapes_are_honored() {
        let tokens = tokenize(r#"'it\'s' class"#);
        assert_eq!(tokens[0].kind, TokenKind::Other);
        assert_eq!(tokens[1].kind, TokenKind::Class);
    }

    #[test]
    fn unterminated_string_consumes_to_eof() {
        let tokens = tokenize("\"function never closed");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Other);
    }

    #[test]
    fn two_char_punctuation() {
        assert_eq!(
            kinds("-> => ::"),
            vec![TokenKind::Arrow, TokenKind::FatArrow, TokenKind::DoubleColon]
        );
    }

    #[test]
    fn open_tag_degrades_to_other_tokens() {
        // `<?php` is not special; it must simply not break anything.
        let tokens = tokenize("<?php class Foo {}");
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Class));
    }

    #[test]
    fn spans_track_lines() {
        let tokens = tokenize("class\nFoo");
        assert_eq!(tokens[0].span.line, 1);
        assert_eq!(tokens[1].span.line, 2);
        assert_eq!(tokens[1].span.col, 1);
    }

    #[test]
    fn empty_and_garbage_input() {
        assert!(tokenize("").is_empty());
        let tokens = tokenize("\u{FEFF}@@@~~~");
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Other));
    }
}
