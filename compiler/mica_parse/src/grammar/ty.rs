//! Type productions.
//!
//! ```text
//! type      ::= base-type "*"*
//! base-type ::= "i8" | "i16" | "i32" | "u8" | "u16" | "u32" | "f32" | "f64"
//!             | "fun" "(" (type ("," type)*)? ")" ("->" type)?
//!             | IDENT                     // declared struct or union
//! ```

use crate::{ParseError, Parser};
use mica_ir::{AstNode, FunType, Name, NodeId, NodeKind, Span, TokenKind, TypeList};

impl Parser<'_> {
    /// Parse a type, including any trailing pointer stars.
    pub(crate) fn parse_type(&mut self) -> Result<NodeId, ParseError> {
        let ty = self.parse_base_type()?;
        self.parse_pointer_suffix(ty)
    }

    /// Wrap `ty` in one pointer level per trailing star.
    pub(crate) fn parse_pointer_suffix(&mut self, mut ty: NodeId) -> Result<NodeId, ParseError> {
        while self.eat(&TokenKind::Star)? {
            ty = self.ast.alloc(AstNode::PointerType { pointee: ty });
        }
        Ok(ty)
    }

    fn parse_base_type(&mut self) -> Result<NodeId, ParseError> {
        let kind = match self.cur.kind {
            TokenKind::I8 => NodeKind::I8Type,
            TokenKind::I16 => NodeKind::I16Type,
            TokenKind::I32 => NodeKind::I32Type,
            TokenKind::U8 => NodeKind::U8Type,
            TokenKind::U16 => NodeKind::U16Type,
            TokenKind::U32 => NodeKind::U32Type,
            TokenKind::F32 => NodeKind::F32Type,
            TokenKind::F64 => NodeKind::F64Type,
            TokenKind::Fun => return self.parse_fun_type(),
            TokenKind::Ident(name) => {
                let span = self.cur.span;
                self.bump()?;
                return self.named_type(name, span);
            }
            _ => return Err(self.unexpected("type")),
        };
        self.bump()?;
        Ok(self.ast.create(kind))
    }

    fn parse_fun_type(&mut self) -> Result<NodeId, ParseError> {
        self.expect(&TokenKind::Fun, "fun")?;
        self.finish_fun_type()
    }

    /// `(type, ...) -> type` after the `fun` keyword, in type position.
    /// Unnamed; the named form only arises from function definitions.
    pub(crate) fn finish_fun_type(&mut self) -> Result<NodeId, ParseError> {
        self.expect(&TokenKind::LParen, "(")?;

        let mut param_types = TypeList::new();
        if self.cur.kind != TokenKind::RParen {
            loop {
                param_types.push(self.parse_type()?);
                if !self.eat(&TokenKind::Comma)? {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RParen, ")")?;

        let return_type = if self.eat(&TokenKind::Arrow)? {
            self.parse_type()?
        } else {
            NodeId::UNDEFINED
        };

        Ok(self.ast.alloc(AstNode::FunType(FunType {
            name: Name::UNDEFINED,
            return_type,
            param_types,
        })))
    }

    /// Resolve an identifier in type position to a declared struct or union.
    fn named_type(&mut self, name: Name, span: Span) -> Result<NodeId, ParseError> {
        let Some(decl) = self.lookup(name) else {
            return Err(self.unknown_name(name, span));
        };
        match self.ast.node(decl).kind() {
            NodeKind::Struct => Ok(self.ast.alloc(AstNode::StructType { scope: decl })),
            NodeKind::Union => Ok(self.ast.alloc(AstNode::UnionType { scope: decl })),
            _ => Err(ParseError::UnexpectedToken {
                found: TokenKind::Ident(name),
                expected: "struct or union name",
                span,
            }),
        }
    }

    /// Check whether the lookahead can start a type.
    ///
    /// Identifiers count only when they resolve to a struct or union
    /// declaration; this is the one place the parser peeks at the symbol
    /// dictionaries to disambiguate (declaration versus expression
    /// statement).
    pub(crate) fn at_type_start(&self) -> bool {
        match self.cur.kind {
            TokenKind::Fun => true,
            TokenKind::Ident(name) => match self.lookup(name) {
                Some(decl) => {
                    matches!(self.ast.node(decl).kind(), NodeKind::Struct | NodeKind::Union)
                }
                None => false,
            },
            ref k => k.is_type_keyword(),
        }
    }
}
