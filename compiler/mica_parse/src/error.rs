//! Parse error types.

use mica_ir::{Span, TokenKind};
use mica_lexer::LexError;
use std::fmt;

/// An error produced while parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The lexer failed to produce a token.
    Lex(LexError),
    /// The parser found a token it cannot use here.
    UnexpectedToken {
        found: TokenKind,
        expected: &'static str,
        span: Span,
    },
    /// An identifier that no enclosing scope declares.
    UnknownName { name: String, span: Span },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(e) => write!(f, "{e}"),
            ParseError::UnexpectedToken {
                found,
                expected,
                span,
            } => {
                write!(
                    f,
                    "expected {expected}, found {} at {span}",
                    found.display_name()
                )
            }
            ParseError::UnknownName { name, span } => {
                write!(f, "unknown name `{name}` at {span}")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError::Lex(e)
    }
}
