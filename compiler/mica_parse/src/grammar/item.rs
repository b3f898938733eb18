//! Top-level declarations.
//!
//! ```text
//! item ::= function | struct | union | stmt
//!
//! function ::= "fun" IDENT "(" (param ("," param)*)? ")" ("->" type)? block
//! param    ::= type IDENT
//! struct   ::= "struct" IDENT "{" (type IDENT)* "}"
//! union    ::= "union" IDENT "{" (type IDENT)* "}"
//! ```
//!
//! Function, struct, and union names are registered in the enclosing scope
//! before their bodies are parsed, so bodies can refer back to the
//! declaration (recursive calls, self-referential pointer fields).

use crate::{ParseError, Parser};
use mica_ir::{
    AstNode, FunType, Name, NameList, NodeId, NodeKind, Scope, TokenKind, TypeList, Variable,
};
use tracing::trace;

impl Parser<'_> {
    /// Parse one top-level declaration or statement.
    pub(crate) fn parse_item(&mut self) -> Result<NodeId, ParseError> {
        match self.cur.kind {
            TokenKind::Fun => self.parse_fun_decl_or_var(),
            TokenKind::Struct => self.parse_struct(),
            TokenKind::Union => self.parse_union(),
            _ => self.parse_stmt(),
        }
    }

    /// `fun` opens either a function definition or a variable declaration
    /// of function type; the token after the keyword decides (identifier
    /// versus `(`).
    pub(crate) fn parse_fun_decl_or_var(&mut self) -> Result<NodeId, ParseError> {
        self.expect(&TokenKind::Fun, "fun")?;
        match self.cur.kind {
            TokenKind::Ident(_) => self.parse_function(),
            TokenKind::LParen => {
                let fun_ty = self.finish_fun_type()?;
                let ty = self.parse_pointer_suffix(fun_ty)?;
                self.finish_var_decl(ty)
            }
            _ => Err(self.unexpected("function name or `(`")),
        }
    }

    fn parse_function(&mut self) -> Result<NodeId, ParseError> {
        let name = self.expect_ident()?;
        trace!(name = self.ids.resolve(name), "function");

        let outer = self.current_scope();
        let fun_node = self.ast.create(NodeKind::Function);
        *self.scope_mut(fun_node) = Scope::new(outer, name);
        self.declare(name, fun_node);

        self.scopes.push(fun_node);
        let signature = self.parse_signature(fun_node, name);
        let body = signature.and_then(|fun_type| {
            let body = self.parse_block()?;
            Ok((fun_type, body))
        });
        self.scopes.pop();
        let (fun_type, body) = body?;

        if let AstNode::Function {
            fun_type: ft_slot,
            body: body_slot,
            ..
        } = self.ast.node_mut(fun_node)
        {
            *ft_slot = fun_type;
            *body_slot = body;
        }
        Ok(self.ast.alloc(AstNode::FunctionDeclStmt(fun_node)))
    }

    /// Parameters and return type. Parameters become local variables in the
    /// function's own scope, in declaration order.
    fn parse_signature(&mut self, fun_node: NodeId, name: Name) -> Result<NodeId, ParseError> {
        self.expect(&TokenKind::LParen, "(")?;

        let mut param_types = TypeList::new();
        let mut names = NameList::new();
        if self.cur.kind != TokenKind::RParen {
            loop {
                let ty = self.parse_type()?;
                let param_name = self.expect_ident()?;
                let var = self.ast.alloc(AstNode::LocalVariable(Variable {
                    ty,
                    name: param_name,
                }));
                self.scope_mut(fun_node).dict.append(param_name, var);
                param_types.push(ty);
                names.push(param_name);
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

        Ok(self.ast.alloc(AstNode::FunTypeWithNamedParams {
            fun_type: FunType {
                name,
                return_type,
                param_types,
            },
            names,
        }))
    }

    pub(crate) fn parse_struct(&mut self) -> Result<NodeId, ParseError> {
        self.expect(&TokenKind::Struct, "struct")?;
        let name = self.expect_ident()?;
        trace!(name = self.ids.resolve(name), "struct");

        let outer = self.current_scope();
        let node = self.ast.create(NodeKind::Struct);
        *self.scope_mut(node) = Scope::new(outer, name);
        self.declare(name, node);

        self.scopes.push(node);
        let fields = self.parse_fields(node, NodeKind::StructField);
        self.scopes.pop();
        fields?;

        Ok(self.ast.alloc(AstNode::StructDeclStmt(node)))
    }

    pub(crate) fn parse_union(&mut self) -> Result<NodeId, ParseError> {
        self.expect(&TokenKind::Union, "union")?;
        let name = self.expect_ident()?;
        trace!(name = self.ids.resolve(name), "union");

        let outer = self.current_scope();
        let node = self.ast.create(NodeKind::Union);
        *self.scope_mut(node) = Scope::new(outer, name);
        self.declare(name, node);

        self.scopes.push(node);
        let fields = self.parse_fields(node, NodeKind::UnionField);
        self.scopes.pop();
        fields?;

        Ok(self.ast.alloc(AstNode::UnionDeclStmt(node)))
    }

    /// `{ (type IDENT)* }`. Field offsets stay zero until layout runs.
    fn parse_fields(&mut self, scope_node: NodeId, field_kind: NodeKind) -> Result<(), ParseError> {
        self.expect(&TokenKind::LBrace, "{")?;
        while self.cur.kind != TokenKind::RBrace {
            let ty = self.parse_type()?;
            let field_name = self.expect_ident()?;
            let field = match field_kind {
                NodeKind::StructField => self.ast.alloc(AstNode::StructField {
                    ty,
                    name: field_name,
                    offset: 0,
                }),
                _ => self.ast.alloc(AstNode::UnionField {
                    ty,
                    name: field_name,
                }),
            };
            self.scope_mut(scope_node).dict.append(field_name, field);
        }
        self.expect(&TokenKind::RBrace, "}")
    }
}
