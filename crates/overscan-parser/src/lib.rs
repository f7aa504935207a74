//! Tokenizer and member extraction for PHP-dialect override files.
//!
//! This crate deliberately stops short of parsing: override files are
//! only partially trusted and frequently incomplete, so everything here
//! operates on a flat token stream. [`lexer`] turns raw text into
//! tokens; [`extract`] runs small state machines over the stream to
//! pull out class-level method, property, and constant names.
//!
//! Nothing in this crate can fail. Malformed input degrades to fewer
//! (or stranger) tokens, never to an error.

pub mod extract;
pub mod lexer;

pub use extract::{extract_members, Members};
pub use lexer::{tokenize, Lexer, Token, TokenCategory, TokenKind};
