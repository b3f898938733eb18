//! Token types for the Mica lexer.

use crate::{Name, Span};
use std::fmt;

/// A token with its span in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Create a dummy token for pre-lex parser state.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Width of an integer literal, selected by suffix (`10u8`), defaulting
/// to `I32`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum IntWidth {
    I8,
    I16,
    I32,
    U8,
    U16,
    U32,
}

/// Width of a float literal, selected by suffix, defaulting to `F64`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FloatWidth {
    F32,
    F64,
}

/// Token kinds for Mica.
///
/// Float literals store bits as u64 for Eq/Hash. String and identifier
/// payloads are interned, so their storage outlives the token.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Integer literal with width suffix applied: `42`, `255u8`
    Int(i64, IntWidth),
    /// Float literal (bits): `3.14`, `0.5f32`
    Float(u64, FloatWidth),
    /// String literal (interned): `"hello"`
    Str(Name),
    /// Identifier (interned)
    Ident(Name),

    // Keywords
    Fun,
    Struct,
    Union,
    If,
    Else,
    While,
    Return,

    // Primitive type keywords
    I8,
    I16,
    I32,
    U8,
    U16,
    U32,
    F32,
    F64,

    // Punctuation and operators
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Star,
    Minus,
    Arrow,      // ->
    Assign,     // =
    EqualEqual, // ==
    Less,       // <
    LessEqual,  // <=
    Great,      // >
    GreatEqual, // >=

    /// End of input. The lexer hands out one owned instance of this token
    /// and returns it by reference forever once the stream is exhausted.
    Eof,
}

impl TokenKind {
    /// Human-readable name for error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Int(..) => "integer literal",
            TokenKind::Float(..) => "float literal",
            TokenKind::Str(_) => "string literal",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Fun => "fun",
            TokenKind::Struct => "struct",
            TokenKind::Union => "union",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Return => "return",
            TokenKind::I8 => "i8",
            TokenKind::I16 => "i16",
            TokenKind::I32 => "i32",
            TokenKind::U8 => "u8",
            TokenKind::U16 => "u16",
            TokenKind::U32 => "u32",
            TokenKind::F32 => "f32",
            TokenKind::F64 => "f64",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Star => "*",
            TokenKind::Minus => "-",
            TokenKind::Arrow => "->",
            TokenKind::Assign => "=",
            TokenKind::EqualEqual => "==",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Great => ">",
            TokenKind::GreatEqual => ">=",
            TokenKind::Eof => "end of input",
        }
    }

    /// Check if this kind starts a primitive type.
    pub fn is_type_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::I8
                | TokenKind::I16
                | TokenKind::I32
                | TokenKind::U8
                | TokenKind::U16
                | TokenKind::U32
                | TokenKind::F32
                | TokenKind::F64
        )
    }
}
