//! Expression productions.
//!
//! ```text
//! expr       ::= relational ("=" expr)?            // right-assoc
//! relational ::= unary (("==" | "<" | "<=" | ">" | ">=") unary)*
//! unary      ::= "-" unary | primary
//! primary    ::= INT | FLOAT | STRING | IDENT | "(" expr ")"
//! ```
//!
//! Identifier leaves are resolved during parsing: the produced node is the
//! handle of the declaring variable (or field), not a separate reference
//! node. Literal type slots stay undefined until type checking.

use crate::{ParseError, Parser};
use mica_ir::{AstNode, BinaryExpr, FloatWidth, IntWidth, NodeId, TokenKind};

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) -> Result<NodeId, ParseError> {
        let left = self.parse_relational()?;
        if self.eat(&TokenKind::Assign)? {
            let right = self.parse_expr()?;
            return Ok(self
                .ast
                .alloc(AstNode::AssignExpr(BinaryExpr { left, right })));
        }
        Ok(left)
    }

    fn parse_relational(&mut self) -> Result<NodeId, ParseError> {
        let mut left = self.parse_unary()?;
        loop {
            let make: fn(BinaryExpr) -> AstNode = match self.cur.kind {
                TokenKind::EqualEqual => AstNode::EqualExpr,
                TokenKind::Less => AstNode::LessExpr,
                TokenKind::LessEqual => AstNode::LessOrEqualExpr,
                TokenKind::Great => AstNode::GreatExpr,
                TokenKind::GreatEqual => AstNode::GreatOrEqualExpr,
                _ => break,
            };
            self.bump()?;
            let right = self.parse_unary()?;
            left = self.ast.alloc(make(BinaryExpr { left, right }));
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<NodeId, ParseError> {
        if self.eat(&TokenKind::Minus)? {
            let expr = self.parse_unary()?;
            return Ok(self.ast.alloc(AstNode::NegExpr { expr }));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<NodeId, ParseError> {
        let span = self.cur.span;
        match self.cur.kind.clone() {
            TokenKind::Int(value, width) => {
                self.bump()?;
                Ok(self.int_literal(value, width))
            }
            TokenKind::Float(bits, width) => {
                self.bump()?;
                Ok(self.float_literal(bits, width))
            }
            TokenKind::Str(value) => {
                self.bump()?;
                Ok(self.ast.alloc(AstNode::StringLiteral {
                    ty: NodeId::UNDEFINED,
                    value,
                }))
            }
            TokenKind::Ident(name) => {
                self.bump()?;
                self.lookup(name)
                    .ok_or_else(|| self.unknown_name(name, span))
            }
            TokenKind::LParen => {
                self.bump()?;
                let expr = self.parse_expr()?;
                self.expect(&TokenKind::RParen, ")")?;
                Ok(self.ast.alloc(AstNode::ParenthExpr { expr }))
            }
            _ => Err(self.unexpected("expression")),
        }
    }

    /// Check whether the lookahead can start an expression.
    pub(crate) fn at_expr_start(&self) -> bool {
        matches!(
            self.cur.kind,
            TokenKind::Int(..)
                | TokenKind::Float(..)
                | TokenKind::Str(_)
                | TokenKind::Ident(_)
                | TokenKind::LParen
                | TokenKind::Minus
        )
    }

    // The lexer range-checks every literal against its width suffix.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn int_literal(&mut self, value: i64, width: IntWidth) -> NodeId {
        let ty = NodeId::UNDEFINED;
        let node = match width {
            IntWidth::I8 => AstNode::I8Literal {
                ty,
                value: value as i8,
            },
            IntWidth::I16 => AstNode::I16Literal {
                ty,
                value: value as i16,
            },
            IntWidth::I32 => AstNode::I32Literal {
                ty,
                value: value as i32,
            },
            IntWidth::U8 => AstNode::U8Literal {
                ty,
                value: value as u8,
            },
            IntWidth::U16 => AstNode::U16Literal {
                ty,
                value: value as u16,
            },
            IntWidth::U32 => AstNode::U32Literal {
                ty,
                value: value as u32,
            },
        };
        self.ast.alloc(node)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn float_literal(&mut self, bits: u64, width: FloatWidth) -> NodeId {
        let ty = NodeId::UNDEFINED;
        let value = f64::from_bits(bits);
        let node = match width {
            FloatWidth::F32 => AstNode::F32Literal {
                ty,
                value: value as f32,
            },
            FloatWidth::F64 => AstNode::F64Literal { ty, value },
        };
        self.ast.alloc(node)
    }
}
