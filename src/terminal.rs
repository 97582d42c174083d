//! Normalization of scanner tokens into grammar terminals.
//!
//! The parser never looks at raw [`TokenKind`]s: every token is first
//! mapped to the terminal symbol the grammar speaks in. The mapping is
//! pure and total; comments are elided here and never reach the parser.

use crate::token::{Span, Token, TokenKind};

/// Grammar-facing symbol a token is normalized to before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Terminal {
    /// Any numeric literal subkind.
    Num,
    /// Identifier.
    Ident,
    /// Reserved word, keyed by its lowercased lexeme.
    Keyword(String),
    /// Operator or delimiter, keyed by its exact lexeme.
    Symbol(String),
    /// String literal; matches no grammar position.
    StringLit,
    /// Character literal; matches no grammar position.
    CharLit,
    /// Unrecognized character; matches no grammar position.
    Unknown,
}

impl Terminal {
    /// Whether this terminal is the keyword `word`.
    #[must_use]
    pub fn is_keyword(&self, word: &str) -> bool {
        matches!(self, Self::Keyword(k) if k == word)
    }

    /// Whether this terminal is the operator or delimiter `symbol`.
    #[must_use]
    pub fn is_symbol(&self, symbol: &str) -> bool {
        matches!(self, Self::Symbol(s) if s == symbol)
    }
}

/// A terminal paired with the lexeme and position of the token it was
/// derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalToken {
    pub terminal: Terminal,
    pub lexeme: String,
    pub span: Span,
}

/// Map a scanned token sequence to the terminal stream the parser
/// consumes. Comments are dropped; every other kind maps 1:1.
#[must_use]
pub fn normalize(tokens: &[Token]) -> Vec<TerminalToken> {
    tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Comment)
        .map(|t| TerminalToken {
            terminal: terminal_of(t),
            lexeme: t.lexeme.clone(),
            span: t.span,
        })
        .collect()
}

fn terminal_of(token: &Token) -> Terminal {
    match token.kind {
        TokenKind::IntLit
        | TokenKind::FloatLit
        | TokenKind::HexLit
        | TokenKind::BinLit
        | TokenKind::OctLit => Terminal::Num,
        TokenKind::Identifier => Terminal::Ident,
        TokenKind::ReservedWord => Terminal::Keyword(token.lexeme.to_lowercase()),
        TokenKind::Delimiter | TokenKind::Operator => Terminal::Symbol(token.lexeme.clone()),
        TokenKind::StringLit => Terminal::StringLit,
        TokenKind::CharLit => Terminal::CharLit,
        // comments are filtered before this point
        TokenKind::Comment | TokenKind::Unknown => Terminal::Unknown,
    }
}
