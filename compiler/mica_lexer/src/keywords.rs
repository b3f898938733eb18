//! Keyword resolution.
//!
//! Exact-text keyword match resolved before identifier classification.
//! The lookup uses the identifier's length as a first-pass filter
//! (keywords range from 2-6 chars), then matches against the specific
//! keywords of that length.

use mica_ir::TokenKind;

/// Look up a keyword by text.
///
/// Returns the corresponding `TokenKind` if the text is a keyword or a
/// primitive type name, `None` if it's a regular identifier.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let len = text.len();

    // Guard: all keywords are 2-6 chars
    if !(2..=6).contains(&len) {
        return None;
    }

    match len {
        2 => match text {
            "if" => Some(TokenKind::If),
            "i8" => Some(TokenKind::I8),
            "u8" => Some(TokenKind::U8),
            _ => None,
        },
        3 => match text {
            "fun" => Some(TokenKind::Fun),
            "i16" => Some(TokenKind::I16),
            "i32" => Some(TokenKind::I32),
            "u16" => Some(TokenKind::U16),
            "u32" => Some(TokenKind::U32),
            "f32" => Some(TokenKind::F32),
            "f64" => Some(TokenKind::F64),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenKind::Else),
            _ => None,
        },
        5 => match text {
            "while" => Some(TokenKind::While),
            "union" => Some(TokenKind::Union),
            _ => None,
        },
        6 => match text {
            "struct" => Some(TokenKind::Struct),
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        _ => None,
    }
}
