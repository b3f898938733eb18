//! AST node handles.

use std::fmt;

/// Index into the AST node arena.
///
/// Handles are stable for the lifetime of the node they address: the arena
/// grows without relocating slots, and a handle is only invalidated by an
/// explicit [`Ast::remove`](crate::Ast::remove). A removed slot may be
/// recycled, so callers must not dereference handles they held across a
/// `remove` they do not control.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Sentinel for "no node" (absent else-branch, missing initializer,
    /// root scope's outer scope).
    pub const UNDEFINED: NodeId = NodeId(u32::MAX);

    /// Create a new `NodeId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this handle addresses a node (not the sentinel).
    #[inline]
    pub const fn is_defined(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_defined() {
            write!(f, "NodeId({})", self.0)
        } else {
            write!(f, "NodeId::UNDEFINED")
        }
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::UNDEFINED
    }
}
