//! Statement productions.
//!
//! ```text
//! stmt ::= block
//!        | function | struct | union     // nested declarations
//!        | "if" "(" expr ")" stmt ("else" stmt)?
//!        | "while" "(" expr ")" stmt
//!        | "return" expr?
//!        | type IDENT ("=" expr)?        // variable declaration
//!        | expr                          // expression statement
//! block ::= "{" stmt* "}"
//! ```
//!
//! There are no statement terminators. A leading identifier is a variable
//! declaration when it resolves to a struct or union, an expression
//! otherwise; a leading `fun` is a function definition when followed by an
//! identifier, a fun-type variable declaration when followed by `(`.

use crate::{ParseError, Parser};
use mica_ir::{AstNode, Name, NodeId, NodeKind, Scope, TokenKind, Variable};

impl Parser<'_> {
    pub(crate) fn parse_stmt(&mut self) -> Result<NodeId, ParseError> {
        match self.cur.kind {
            TokenKind::LBrace => self.parse_block(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Return => self.parse_return(),
            TokenKind::Fun => self.parse_fun_decl_or_var(),
            TokenKind::Struct => self.parse_struct(),
            TokenKind::Union => self.parse_union(),
            _ if self.at_type_start() => self.parse_var_decl(),
            _ => self.parse_expr(),
        }
    }

    /// Parse a braced block. Creates a block scope nested in the current
    /// scope and a block statement holding the inner statements in order.
    pub(crate) fn parse_block(&mut self) -> Result<NodeId, ParseError> {
        self.expect(&TokenKind::LBrace, "{")?;

        let outer = self.current_scope();
        let scope_node = self.ast.create(NodeKind::BlockScope);
        let stmt_node = self.ast.create(NodeKind::BlockStmt);
        *self.scope_mut(scope_node) = Scope::new(outer, Name::UNDEFINED);
        if let AstNode::BlockScope { block_stmt, .. } = self.ast.node_mut(scope_node) {
            *block_stmt = stmt_node;
        }
        if let AstNode::BlockStmt { block_scope, .. } = self.ast.node_mut(stmt_node) {
            *block_scope = scope_node;
        }

        self.scopes.push(scope_node);
        let mut stmts = Vec::new();
        let body = loop {
            if self.cur.kind == TokenKind::RBrace {
                break Ok(());
            }
            match self.parse_stmt() {
                Ok(stmt) => stmts.push(stmt),
                Err(e) => break Err(e),
            }
        };
        self.scopes.pop();
        body?;
        self.expect(&TokenKind::RBrace, "}")?;

        if let AstNode::BlockStmt { stmts: slot, .. } = self.ast.node_mut(stmt_node) {
            *slot = stmts;
        }
        Ok(stmt_node)
    }

    fn parse_if(&mut self) -> Result<NodeId, ParseError> {
        self.expect(&TokenKind::If, "if")?;
        self.expect(&TokenKind::LParen, "(")?;
        let cond = self.parse_expr()?;
        self.expect(&TokenKind::RParen, ")")?;

        let then_stmt = self.parse_stmt()?;
        let else_stmt = if self.eat(&TokenKind::Else)? {
            self.parse_stmt()?
        } else {
            NodeId::UNDEFINED
        };

        Ok(self.ast.alloc(AstNode::IfElseStmt {
            cond,
            then_stmt,
            else_stmt,
        }))
    }

    fn parse_while(&mut self) -> Result<NodeId, ParseError> {
        self.expect(&TokenKind::While, "while")?;
        self.expect(&TokenKind::LParen, "(")?;
        let cond = self.parse_expr()?;
        self.expect(&TokenKind::RParen, ")")?;
        let body = self.parse_stmt()?;

        Ok(self.ast.alloc(AstNode::WhileStmt { cond, body }))
    }

    /// `return` with an optional value; the value is present whenever the
    /// lookahead can start an expression.
    fn parse_return(&mut self) -> Result<NodeId, ParseError> {
        self.expect(&TokenKind::Return, "return")?;
        let expr = if self.at_expr_start() {
            self.parse_expr()?
        } else {
            NodeId::UNDEFINED
        };
        Ok(self.ast.alloc(AstNode::ReturnStmt { expr }))
    }

    fn parse_var_decl(&mut self) -> Result<NodeId, ParseError> {
        let ty = self.parse_type()?;
        self.finish_var_decl(ty)
    }

    /// Variable name and optional initializer, once the type is parsed.
    pub(crate) fn finish_var_decl(&mut self, ty: NodeId) -> Result<NodeId, ParseError> {
        let name = self.expect_ident()?;

        let payload = Variable { ty, name };
        let variable = if self.at_top_level() {
            self.ast.alloc(AstNode::GlobalVariable(payload))
        } else {
            self.ast.alloc(AstNode::LocalVariable(payload))
        };
        self.declare(name, variable);

        let init_expr = if self.eat(&TokenKind::Assign)? {
            self.parse_expr()?
        } else {
            NodeId::UNDEFINED
        };

        Ok(self.ast.alloc(AstNode::VariableDeclStmt {
            variable,
            init_expr,
        }))
    }
}
