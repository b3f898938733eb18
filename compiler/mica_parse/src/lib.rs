//! Recursive-descent parser for Mica.
//!
//! The parser pulls tokens from [`mica_lexer::Lexer`] one at a time and
//! builds nodes directly into a caller-owned [`Ast`] arena. Declarations
//! are resolved as they are parsed: every scope-opening construct pushes
//! its node onto a scope stack, and identifier expressions resolve to the
//! declaring node's handle through that stack, innermost scope first.
//!
//! [`Parser::parse`] consumes a whole translation unit and returns the
//! handle of a synthetic root block statement holding the top-level
//! declarations; the root's block scope owns the global symbol dictionary.

mod error;
mod grammar;

pub use error::ParseError;

use mica_ir::{Ast, AstNode, IdCache, Name, NodeId, NodeKind, Scope, Span, Token, TokenKind};
use mica_lexer::Lexer;
use tracing::trace;

/// Single-pass parser over one source string.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    ast: &'a mut Ast,
    ids: &'a IdCache,
    /// One-token lookahead, held by value.
    cur: Token,
    /// Scope-carrying nodes enclosing the current position, outermost first.
    scopes: Vec<NodeId>,
}

impl<'a> Parser<'a> {
    /// Create a parser over `text`, building nodes into `ast`.
    pub fn new(text: &'a str, ast: &'a mut Ast, ids: &'a IdCache) -> Self {
        Parser {
            lexer: Lexer::new(text, ids),
            ast,
            ids,
            cur: Token::dummy(TokenKind::Eof),
            scopes: Vec::new(),
        }
    }

    /// Parse a whole translation unit.
    ///
    /// Returns the root block statement. Its block scope holds the
    /// top-level function, struct, union, and global variable declarations
    /// in source order.
    pub fn parse(&mut self) -> Result<NodeId, ParseError> {
        self.bump()?;

        let root_scope = self.ast.create(NodeKind::BlockScope);
        let root_stmt = self.ast.create(NodeKind::BlockStmt);
        if let AstNode::BlockScope { block_stmt, .. } = self.ast.node_mut(root_scope) {
            *block_stmt = root_stmt;
        }
        if let AstNode::BlockStmt { block_scope, .. } = self.ast.node_mut(root_stmt) {
            *block_scope = root_scope;
        }

        self.scopes.push(root_scope);
        let mut stmts = Vec::new();
        while self.cur.kind != TokenKind::Eof {
            stmts.push(self.parse_item()?);
        }
        self.scopes.pop();
        trace!(top_level = stmts.len(), nodes = self.ast.len(), "parsed unit");

        if let AstNode::BlockStmt { stmts: slot, .. } = self.ast.node_mut(root_stmt) {
            *slot = stmts;
        }
        Ok(root_stmt)
    }

    /// Advance the lookahead.
    fn bump(&mut self) -> Result<(), ParseError> {
        self.cur = self.lexer.next()?.clone();
        Ok(())
    }

    /// Consume the lookahead if it matches `kind`, error otherwise.
    ///
    /// Only usable for payload-free kinds; identifiers go through
    /// [`expect_ident`](Self::expect_ident).
    fn expect(&mut self, kind: &TokenKind, expected: &'static str) -> Result<(), ParseError> {
        if self.cur.kind == *kind {
            self.bump()
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Consume an identifier and return its interned name.
    fn expect_ident(&mut self) -> Result<Name, ParseError> {
        match self.cur.kind {
            TokenKind::Ident(name) => {
                self.bump()?;
                Ok(name)
            }
            _ => Err(self.unexpected("identifier")),
        }
    }

    /// Consume the lookahead if it matches `kind`.
    fn eat(&mut self, kind: &TokenKind) -> Result<bool, ParseError> {
        if self.cur.kind == *kind {
            self.bump()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        ParseError::UnexpectedToken {
            found: self.cur.kind.clone(),
            expected,
            span: self.cur.span,
        }
    }

    /// The innermost enclosing scope node.
    fn current_scope(&self) -> NodeId {
        match self.scopes.last() {
            Some(&id) => id,
            None => unreachable!("scope stack is never empty while parsing"),
        }
    }

    /// Mutable access to the scope payload of a node on the scope stack.
    fn scope_mut(&mut self, id: NodeId) -> &mut Scope {
        match self.ast.node_mut(id).scope_mut() {
            Some(scope) => scope,
            None => unreachable!("scope stack holds only scope-carrying nodes"),
        }
    }

    /// Register a named declaration in the innermost scope.
    fn declare(&mut self, name: Name, node: NodeId) {
        let scope_id = self.current_scope();
        self.scope_mut(scope_id).dict.append(name, node);
    }

    /// Resolve a name through the enclosing scopes, innermost first.
    fn lookup(&self, name: Name) -> Option<NodeId> {
        for &scope_id in self.scopes.iter().rev() {
            let scope = self.ast.node(scope_id).scope()?;
            if let Some(node) = scope.dict.find(name) {
                return Some(node);
            }
        }
        None
    }

    fn unknown_name(&self, name: Name, span: Span) -> ParseError {
        ParseError::UnknownName {
            name: self.ids.resolve(name).to_owned(),
            span,
        }
    }

    /// Check whether parsing happens at translation-unit level.
    fn at_top_level(&self) -> bool {
        self.scopes.len() == 1
    }
}
