//! Grammar productions, split by syntactic category.
//!
//! Each submodule extends [`Parser`](crate::Parser) with the productions
//! for one category; `item` is the entry point for top-level declarations.

mod expr;
mod item;
mod stmt;
mod ty;
