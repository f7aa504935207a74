//! Token types for the override-file tokenizer.
//!
//! The kinds mirror the granularity of the PHP tokenizer for the subset
//! the extractor cares about: declaration keywords, `$`-sigil
//! variables, identifiers, and brace-level punctuation. Everything the
//! extractor never inspects collapses into [`TokenKind::Other`].

use std::fmt;

use overscan_core::Span;

/// A token from override source text.
///
/// Borrows its text from the source string, so a token sequence lives
/// no longer than the text it was produced from.
#[derive(Clone, Copy, PartialEq)]
pub struct Token<'src> {
    /// The type of token.
    pub kind: TokenKind,
    /// The source text of this token (sigil included for variables).
    pub text: &'src str,
    /// Location in source.
    pub span: Span,
}

impl<'src> Token<'src> {
    /// Create a new token.
    #[inline]
    pub fn new(kind: TokenKind, text: &'src str, span: Span) -> Self {
        Self { kind, text, span }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?} @ {:?})", self.kind, self.text, self.span)
    }
}

/// All token types the tokenizer distinguishes.
///
/// Keywords are recognized case-insensitively, matching the dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // =========================================
    // Keywords - declarations
    // =========================================
    /// `function`
    Function,
    /// `class`
    Class,
    /// `const`
    Const,
    /// `var`
    Var,
    /// `fn` (short closures; distinct from `function` and never opens
    /// a brace-delimited body)
    Fn,
    /// `interface`
    Interface,
    /// `trait`
    Trait,
    /// `extends`
    Extends,
    /// `implements`
    Implements,
    /// `use`
    Use,
    /// `namespace`
    Namespace,

    // =========================================
    // Keywords - modifiers
    // =========================================
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
    /// `static`
    Static,
    /// `abstract`
    Abstract,
    /// `final`
    Final,
    /// `readonly`
    Readonly,

    // =========================================
    // Keywords - statements
    // =========================================
    /// `new`
    New,
    /// `return`
    Return,
    /// `if`
    If,
    /// `else`
    Else,
    /// `for`
    For,
    /// `foreach`
    Foreach,
    /// `while`
    While,
    /// `echo`
    Echo,

    // =========================================
    // Names
    // =========================================
    /// A bare identifier (class name, method name, constant name).
    Identifier,
    /// A `$`-prefixed variable; `text` keeps the sigil.
    Variable,

    // =========================================
    // Punctuation
    // =========================================
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `=`
    Equal,
    /// `&`
    Ampersand,
    /// `->`
    Arrow,
    /// `=>`
    FatArrow,
    /// `::`
    DoubleColon,

    // =========================================
    // Everything else
    // =========================================
    /// Any token with no semantic weight downstream: literals, open
    /// tags, operators, unrecognized bytes.
    Other,
    /// End of input.
    Eof,
}

/// The five coarse categories the member extractor reasons in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Keyword,
    Identifier,
    Variable,
    Punctuation,
    Other,
}

impl TokenKind {
    /// Collapse the fine-grained kind into its coarse category.
    pub fn category(self) -> TokenCategory {
        use TokenKind::*;
        match self {
            Function | Class | Const | Var | Fn | Interface | Trait | Extends | Implements
            | Use | Namespace | Public | Protected | Private | Static | Abstract | Final
            | Readonly | New | Return | If | Else | For | Foreach | While | Echo => {
                TokenCategory::Keyword
            }
            Identifier => TokenCategory::Identifier,
            Variable => TokenCategory::Variable,
            LeftBrace | RightBrace | LeftParen | RightParen | LeftBracket | RightBracket
            | Semicolon | Comma | Equal | Ampersand | Arrow | FatArrow | DoubleColon => {
                TokenCategory::Punctuation
            }
            Other | Eof => TokenCategory::Other,
        }
    }

    /// Whether this kind is a keyword.
    #[inline]
    pub fn is_keyword(self) -> bool {
        self.category() == TokenCategory::Keyword
    }
}

/// Look up a keyword kind for an identifier, case-insensitively.
///
/// Returns `None` for anything that should stay a plain identifier.
pub fn lookup_keyword(ident: &str) -> Option<TokenKind> {
    use TokenKind::*;
    Some(match ident.to_ascii_lowercase().as_str() {
        // Declarations
        "function" => Function,
        "class" => Class,
        "const" => Const,
        "var" => Var,
        "fn" => Fn,
        "interface" => Interface,
        "trait" => Trait,
        "extends" => Extends,
        "implements" => Implements,
        "use" => Use,
        "namespace" => Namespace,

        // Modifiers
        "public" => Public,
        "protected" => Protected,
        "private" => Private,
        "static" => Static,
        "abstract" => Abstract,
        "final" => Final,
        "readonly" => Readonly,

        // Statements
        "new" => New,
        "return" => Return,
        "if" => If,
        "else" => Else,
        "for" => For,
        "foreach" => Foreach,
        "while" => While,
        "echo" => Echo,

        _ => return None,
    })
}
