//! Interned identifier handle.

use std::fmt;

/// Interned identifier handle.
///
/// A compact `u32` index into the [`IdCache`](crate::IdCache). Two `Name`s
/// compare equal exactly when the interned text they refer to is equal.
///
/// `Name::UNDEFINED` is the sentinel for "no name" (anonymous scopes,
/// unnamed function types).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Sentinel for "no name".
    pub const UNDEFINED: Name = Name(u32::MAX);

    /// Create from a raw cache index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        Name(index)
    }

    /// Index into the cache's storage.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a real interned name (not the sentinel).
    #[inline]
    pub const fn is_defined(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_defined() {
            write!(f, "Name({})", self.0)
        } else {
            write!(f, "Name::UNDEFINED")
        }
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::UNDEFINED
    }
}
