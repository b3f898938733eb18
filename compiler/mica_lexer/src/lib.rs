//! Lexer for Mica.
//!
//! A pull-based tokenizer: the parser drives it one [`next`](Lexer::next)
//! call at a time, there is no token buffering beyond the most recently
//! produced token. Identifier and string payloads are interned into the
//! shared [`IdCache`], so token payloads stay valid for as long as the
//! cache lives.
//!
//! Once the input is exhausted, `next` returns the lexer's single owned
//! end-of-input token by reference forever — the same instance every time,
//! not merely an equal value.

mod keywords;
mod lex_error;

pub use lex_error::{LexError, LexErrorKind};

use memchr::{memchr, memchr3};
use mica_ir::{FloatWidth, IdCache, IntWidth, Span, Token, TokenKind};

/// Pull lexer over a source string.
pub struct Lexer<'a> {
    text: &'a str,
    pos: usize,
    ids: &'a IdCache,
    /// Most recently produced token (see [`last`](Self::last)).
    last_token: Token,
    /// The one end-of-input token instance.
    eof: Token,
    at_eof: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `text`, interning payloads into `ids`.
    pub fn new(text: &'a str, ids: &'a IdCache) -> Self {
        let end = to_u32(text.len());
        Lexer {
            text,
            pos: 0,
            ids,
            last_token: Token::dummy(TokenKind::Eof),
            eof: Token::new(TokenKind::Eof, Span::point(end)),
            at_eof: false,
        }
    }

    /// Advance and return the next token.
    ///
    /// Consumes whitespace and `//` line comments. Returns the end-of-input
    /// token once the stream is exhausted, and keeps returning that same
    /// instance on every further call.
    // Not an Iterator: errors and the borrowed return value rule it out.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&Token, LexError> {
        self.skip_trivia();
        if self.pos >= self.text.len() {
            self.at_eof = true;
            return Ok(&self.eof);
        }
        let token = self.scan_token()?;
        self.last_token = token;
        Ok(&self.last_token)
    }

    /// The most recently produced token, without advancing. Idempotent.
    pub fn last(&self) -> &Token {
        if self.at_eof {
            &self.eof
        } else {
            &self.last_token
        }
    }

    // Tied to the source lifetime, not `&self`, so callers can keep the
    // slice while advancing `pos`.
    fn bytes(&self) -> &'a [u8] {
        self.text.as_bytes()
    }

    fn skip_trivia(&mut self) {
        let bytes = self.bytes();
        while self.pos < bytes.len() {
            match bytes[self.pos] {
                b' ' | b'\t' | b'\r' | b'\n' => self.pos += 1,
                b'/' if bytes.get(self.pos + 1) == Some(&b'/') => {
                    match memchr(b'\n', &bytes[self.pos..]) {
                        Some(off) => self.pos += off + 1,
                        None => self.pos = bytes.len(),
                    }
                }
                _ => break,
            }
        }
    }

    fn scan_token(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        let bytes = self.bytes();
        let b = bytes[start];

        let kind = match b {
            b'(' => self.punct(TokenKind::LParen),
            b')' => self.punct(TokenKind::RParen),
            b'{' => self.punct(TokenKind::LBrace),
            b'}' => self.punct(TokenKind::RBrace),
            b',' => self.punct(TokenKind::Comma),
            b'*' => self.punct(TokenKind::Star),
            // Maximal munch: two-byte operators before their one-byte prefixes
            b'-' => self.punct2(b'>', TokenKind::Arrow, TokenKind::Minus),
            b'=' => self.punct2(b'=', TokenKind::EqualEqual, TokenKind::Assign),
            b'<' => self.punct2(b'=', TokenKind::LessEqual, TokenKind::Less),
            b'>' => self.punct2(b'=', TokenKind::GreatEqual, TokenKind::Great),
            b'"' => self.scan_string(start)?,
            b'0'..=b'9' => self.scan_number(start)?,
            b'_' | b'a'..=b'z' | b'A'..=b'Z' => self.scan_ident(start),
            _ => {
                let c = self.current_char();
                self.pos += c.len_utf8();
                return Err(LexError::new(
                    LexErrorKind::IllegalChar(c),
                    self.span_from(start),
                ));
            }
        };
        Ok(Token::new(kind, self.span_from(start)))
    }

    fn punct(&mut self, kind: TokenKind) -> TokenKind {
        self.pos += 1;
        kind
    }

    fn punct2(&mut self, second: u8, long: TokenKind, short: TokenKind) -> TokenKind {
        self.pos += 1;
        if self.bytes().get(self.pos) == Some(&second) {
            self.pos += 1;
            long
        } else {
            short
        }
    }

    fn scan_ident(&mut self, start: usize) -> TokenKind {
        let bytes = self.bytes();
        while self.pos < bytes.len() && is_ident_continue(bytes[self.pos]) {
            self.pos += 1;
        }
        let text = &self.text[start..self.pos];
        keywords::lookup(text).unwrap_or_else(|| TokenKind::Ident(self.ids.get(text)))
    }

    fn scan_string(&mut self, start: usize) -> Result<TokenKind, LexError> {
        self.pos += 1; // opening quote
        let mut value = String::new();
        loop {
            let rest = &self.bytes()[self.pos..];
            let Some(off) = memchr3(b'"', b'\\', b'\n', rest) else {
                self.pos = self.text.len();
                return Err(LexError::new(
                    LexErrorKind::UnterminatedString,
                    self.span_from(start),
                ));
            };
            value.push_str(&self.text[self.pos..self.pos + off]);
            self.pos += off;
            match self.bytes()[self.pos] {
                b'"' => {
                    self.pos += 1;
                    return Ok(TokenKind::Str(self.ids.get(&value)));
                }
                b'\n' => {
                    return Err(LexError::new(
                        LexErrorKind::UnterminatedString,
                        self.span_from(start),
                    ));
                }
                _ => {
                    // Escape sequence
                    self.pos += 1;
                    if self.pos >= self.text.len() {
                        return Err(LexError::new(
                            LexErrorKind::UnterminatedString,
                            self.span_from(start),
                        ));
                    }
                    let c = self.current_char();
                    match c {
                        'n' => value.push('\n'),
                        't' => value.push('\t'),
                        '\\' => value.push('\\'),
                        '"' => value.push('"'),
                        '0' => value.push('\0'),
                        _ => {
                            self.pos += c.len_utf8();
                            return Err(LexError::new(
                                LexErrorKind::UnknownEscape(c),
                                self.span_from(start),
                            ));
                        }
                    }
                    self.pos += 1;
                }
            }
        }
    }

    fn scan_number(&mut self, start: usize) -> Result<TokenKind, LexError> {
        let bytes = self.bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        let mut is_float = false;
        if self.pos + 1 < bytes.len()
            && bytes[self.pos] == b'.'
            && bytes[self.pos + 1].is_ascii_digit()
        {
            is_float = true;
            self.pos += 1;
            while self.pos < bytes.len() && bytes[self.pos].is_ascii_digit() {
                self.pos += 1;
            }
        }
        let digits_end = self.pos;

        // Width suffix: any trailing identifier run belongs to the literal
        while self.pos < bytes.len() && is_ident_continue(bytes[self.pos]) {
            self.pos += 1;
        }
        let digits = &self.text[start..digits_end];
        let suffix = &self.text[digits_end..self.pos];

        let malformed = || LexError::new(LexErrorKind::MalformedNumber, self.span_from(start));

        if is_float || suffix == "f32" || suffix == "f64" {
            let width = match suffix {
                "" | "f64" => FloatWidth::F64,
                "f32" => FloatWidth::F32,
                _ => return Err(malformed()),
            };
            let value: f64 = digits.parse().map_err(|_| malformed())?;
            return Ok(TokenKind::Float(value.to_bits(), width));
        }

        let width = match suffix {
            "" | "i32" => IntWidth::I32,
            "i8" => IntWidth::I8,
            "i16" => IntWidth::I16,
            "u8" => IntWidth::U8,
            "u16" => IntWidth::U16,
            "u32" => IntWidth::U32,
            _ => return Err(malformed()),
        };
        let value: i64 = digits.parse().map_err(|_| malformed())?;
        if !fits(value, width) {
            return Err(malformed());
        }
        Ok(TokenKind::Int(value, width))
    }

    fn current_char(&self) -> char {
        self.text[self.pos..].chars().next().unwrap_or('\0')
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(to_u32(start), to_u32(self.pos))
    }
}

fn is_ident_continue(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

/// Check a (sign-free) literal against its width. Negation is a separate
/// token, so the literal itself is always non-negative.
fn fits(value: i64, width: IntWidth) -> bool {
    let max = match width {
        IntWidth::I8 => i64::from(i8::MAX),
        IntWidth::I16 => i64::from(i16::MAX),
        IntWidth::I32 => i64::from(i32::MAX),
        IntWidth::U8 => i64::from(u8::MAX),
        IntWidth::U16 => i64::from(u16::MAX),
        IntWidth::U32 => i64::from(u32::MAX),
    };
    (0..=max).contains(&value)
}

fn to_u32(v: usize) -> u32 {
    u32::try_from(v).unwrap_or_else(|_| panic!("source offset {v} exceeds u32::MAX"))
}
