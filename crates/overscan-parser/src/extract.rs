//! Member-name extraction from a flat token stream.
//!
//! Three small state machines walk the token sequence and collect the
//! names of methods, class-level properties, and class constants. No
//! parse tree is built; the machines only need "are we inside the
//! class body" and "are we inside a function body" flags.
//!
//! Two simplifying assumptions are deliberate and load-bearing:
//!
//! - One class per file: the inside-class flag is set on the first
//!   `class` keyword and never cleared. Multi-class files would need a
//!   brace-keyed scope stack instead.
//! - Function-body exit is approximated. The default [`NextBraceTracker`]
//!   clears the inside-function flag on the next `}` token rather than
//!   counting balanced braces, so an inner block inside a method ends
//!   the "inside function" state early. This reproduces the behavior
//!   override authors have relied on; [`BalancedBraceTracker`] is the
//!   corrected strategy for callers who want exact scoping.

use crate::lexer::{tokenize, Token, TokenKind};

/// The member names extracted from one override file.
///
/// Produced fresh per extraction; duplicates within a file are kept
/// (set semantics only apply when two files are compared).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Members {
    /// Method names, in declaration order.
    pub methods: Vec<String>,
    /// Property names, sigil included, in declaration order.
    pub properties: Vec<String>,
    /// Class constant names, in declaration order.
    pub constants: Vec<String>,
}

impl Members {
    /// Whether no members of any kind were found.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty() && self.properties.is_empty() && self.constants.is_empty()
    }
}

/// Tracks whether the current token position is inside a function body.
///
/// Isolates the body-exit heuristic so the approximate and the exact
/// strategy are interchangeable without touching the property pass.
pub trait BodyTracker {
    /// Observe one token and update state. Called after the token has
    /// been classified, so a `function` keyword marks the tokens that
    /// follow it (parameters included) as inside the function.
    fn observe(&mut self, kind: TokenKind);

    /// Whether the position after the last observed token is inside a
    /// function.
    fn inside_function(&self) -> bool;
}

/// The historical heuristic: inside-function is set on `function` and
/// cleared on the next `}`, whatever that brace closes.
///
/// A nested inner block inside a method therefore ends the
/// inside-function state early, and locals declared after it are
/// misclassified as class properties. Known, preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct NextBraceTracker {
    inside: bool,
}

impl BodyTracker for NextBraceTracker {
    fn observe(&mut self, kind: TokenKind) {
        match kind {
            TokenKind::Function => self.inside = true,
            TokenKind::RightBrace => self.inside = false,
            _ => {}
        }
    }

    fn inside_function(&self) -> bool {
        self.inside
    }
}

/// Exact body tracking by balanced brace depth.
///
/// `function` arms the tracker; the body starts at the next `{` and
/// ends when its matching `}` closes. A `;` before any `{` disarms it
/// (abstract and interface declarations have no body).
#[derive(Debug, Clone, Copy, Default)]
pub struct BalancedBraceTracker {
    state: BodyState,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum BodyState {
    #[default]
    Outside,
    /// Seen `function`, waiting for its body to open.
    AwaitingBody,
    /// Inside a body at the given brace depth.
    InBody(u32),
}

impl BodyTracker for BalancedBraceTracker {
    fn observe(&mut self, kind: TokenKind) {
        self.state = match (self.state, kind) {
            (BodyState::Outside, TokenKind::Function) => BodyState::AwaitingBody,
            (BodyState::AwaitingBody, TokenKind::Semicolon) => BodyState::Outside,
            (BodyState::AwaitingBody, TokenKind::LeftBrace) => BodyState::InBody(1),
            (BodyState::InBody(depth), TokenKind::LeftBrace) => BodyState::InBody(depth + 1),
            (BodyState::InBody(1), TokenKind::RightBrace) => BodyState::Outside,
            (BodyState::InBody(depth), TokenKind::RightBrace) => BodyState::InBody(depth - 1),
            (state, _) => state,
        };
    }

    fn inside_function(&self) -> bool {
        self.state != BodyState::Outside
    }
}

/// Extract method names: each `function` keyword followed immediately
/// by an identifier yields that identifier. Anonymous closures and
/// by-reference signatures have no identifier there and are skipped.
pub fn extract_methods(tokens: &[Token<'_>]) -> Vec<String> {
    let mut methods = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        if token.kind == TokenKind::Function
            && let Some(next) = tokens.get(i + 1)
            && next.kind == TokenKind::Identifier
        {
            methods.push(next.text.to_string());
        }
    }
    methods
}

/// Extract class constant names: for each `const` keyword inside the
/// class body, the first identifier that follows is the constant name.
pub fn extract_constants(tokens: &[Token<'_>]) -> Vec<String> {
    let mut constants = Vec::new();
    let mut inside_class = false;

    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Class => inside_class = true,
            TokenKind::Const if inside_class => {
                if let Some(name) = tokens[i + 1..]
                    .iter()
                    .find(|t| t.kind == TokenKind::Identifier)
                {
                    constants.push(name.text.to_string());
                }
            }
            _ => {}
        }
    }
    constants
}

/// Extract property names with the default [`NextBraceTracker`].
pub fn extract_properties(tokens: &[Token<'_>]) -> Vec<String> {
    extract_properties_with(tokens, &mut NextBraceTracker::default())
}

/// Extract property names: every variable token that sits inside the
/// class body but outside a function body, per the given tracker.
pub fn extract_properties_with(
    tokens: &[Token<'_>],
    tracker: &mut dyn BodyTracker,
) -> Vec<String> {
    let mut properties = Vec::new();
    let mut inside_class = false;

    for token in tokens {
        if token.kind == TokenKind::Class {
            inside_class = true;
        }
        if token.kind == TokenKind::Variable && inside_class && !tracker.inside_function() {
            properties.push(token.text.to_string());
        }
        tracker.observe(token.kind);
    }
    properties
}

/// Tokenize a source text and run all three extraction passes.
pub fn extract_members(source: &str) -> Members {
    let tokens = tokenize(source);
    Members {
        methods: extract_methods(&tokens),
        properties: extract_properties(&tokens),
        constants: extract_constants(&tokens),
    }
}
