//! Mica IR - core data structures for the Mica compiler front end.
//!
//! This crate contains:
//! - [`Span`] for source locations
//! - [`Name`] and [`IdCache`] for interned identifiers
//! - [`Token`]/[`TokenKind`] for lexer output
//! - [`AstNode`]/[`NodeKind`] tagged AST nodes
//! - [`Ast`], the node arena with slot recycling
//! - [`ScopeDict`]/[`Scope`], insertion-ordered symbol tables
//!
//! # Design
//!
//! - **Intern everything**: identifier and string-literal text becomes a
//!   `Name(u32)` with O(1) equality.
//! - **Flatten everything**: no `Box<AstNode>`; children are `NodeId(u32)`
//!   handles into the arena.
//! - Cross-node links are one-directional; only a scope's `outer` field
//!   points back up, and it is a non-owning handle.

mod arena;
mod interner;
mod name;
mod node;
mod node_id;
mod scope;
mod span;
mod token;

pub use arena::Ast;
pub use interner::{IdCache, InternError};
pub use name::Name;
pub use node::{AstNode, BinaryExpr, FunType, NameList, NodeKind, TypeList, Variable};
pub use node_id::NodeId;
pub use scope::{Scope, ScopeDict};
pub use span::Span;
pub use token::{FloatWidth, IntWidth, Token, TokenKind};
