//! Lexical error types.

use mica_ir::Span;
use std::fmt;

/// A lexical error with the span of the offending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }
}

/// What went wrong while scanning a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// String literal without a closing quote (or broken by a newline).
    UnterminatedString,
    /// Unknown escape sequence inside a string literal.
    UnknownEscape(char),
    /// Character that cannot start any token.
    IllegalChar(char),
    /// Numeric literal that cannot be parsed: bad suffix, out of range
    /// for its width, or trailing junk.
    MalformedNumber,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LexErrorKind::UnterminatedString => {
                write!(f, "unterminated string literal at {}", self.span)
            }
            LexErrorKind::UnknownEscape(c) => {
                write!(f, "unknown escape sequence `\\{c}` at {}", self.span)
            }
            LexErrorKind::IllegalChar(c) => {
                write!(f, "illegal character `{c}` at {}", self.span)
            }
            LexErrorKind::MalformedNumber => {
                write!(f, "malformed numeric literal at {}", self.span)
            }
        }
    }
}

impl std::error::Error for LexError {}
