//! Lexical scanning of override source text.

mod cursor;
mod lexer;
mod token;

pub use cursor::Cursor;
pub use lexer::{tokenize, Lexer};
pub use token::{lookup_keyword, Token, TokenCategory, TokenKind};
