//! Identifier interner for efficient name storage.
//!
//! Provides O(1) interning and lookup. Interned text is stored once; every
//! occurrence of the same text maps to the same [`Name`] handle, so name
//! equality is an integer compare.

use crate::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// Cache exceeded capacity (the `u32::MAX` index is the `Name` sentinel).
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "identifier cache exceeded capacity: {} strings, max is {}",
                count,
                u32::MAX - 1
            ),
        }
    }
}

impl std::error::Error for InternError {}

struct CacheInner {
    /// Map from string content to cache index.
    map: FxHashMap<&'static str, Name>,
    /// Storage for string contents, indexed by `Name`.
    strings: Vec<&'static str>,
}

/// Identifier interner.
///
/// `get` takes `&self` (internal `RwLock`), so the lexer can intern while the
/// parser holds shared references to the cache. Storage grows monotonically
/// and is never shrunk; interned text lives for the lifetime of the process
/// (strings are leaked to obtain the `'static` lifetime, as one cache serves
/// a whole translation unit).
pub struct IdCache {
    inner: RwLock<CacheInner>,
}

impl IdCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        IdCache {
            inner: RwLock::new(CacheInner {
                map: FxHashMap::default(),
                strings: Vec::with_capacity(256),
            }),
        }
    }

    /// Try to intern a string, returning its `Name` or an error on overflow.
    pub fn try_get(&self, text: &str) -> Result<Name, InternError> {
        // Fast path: already interned
        {
            let guard = self.inner.read();
            if let Some(&name) = guard.map.get(text) {
                return Ok(name);
            }
        }

        let mut guard = self.inner.write();

        // Double-check after acquiring the write lock
        if let Some(&name) = guard.map.get(text) {
            return Ok(name);
        }

        let index = u32::try_from(guard.strings.len())
            .ok()
            .filter(|&i| i != u32::MAX)
            .ok_or(InternError::Overflow {
                count: guard.strings.len(),
            })?;

        // Leak the copy to get the 'static lifetime
        let leaked: &'static str = Box::leak(text.to_owned().into_boxed_str());
        let name = Name::new(index);
        guard.strings.push(leaked);
        guard.map.insert(leaked, name);
        Ok(name)
    }

    /// Intern a string, returning its `Name`.
    ///
    /// Repeated calls with equal text return the same handle; distinct texts
    /// always get distinct handles. No normalization is performed.
    ///
    /// # Panics
    /// Panics if the cache exceeds capacity. Use `try_get` to handle that
    /// case gracefully.
    #[inline]
    pub fn get(&self, text: &str) -> Name {
        self.try_get(text).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up the text for a `Name`.
    ///
    /// The returned reference is `'static` because interned strings are never
    /// deallocated.
    ///
    /// # Panics
    /// Panics if given a handle this cache never issued.
    pub fn resolve(&self, name: Name) -> &'static str {
        self.inner.read().strings[name.index()]
    }

    /// Number of interned strings.
    pub fn len(&self) -> usize {
        self.inner.read().strings.len()
    }

    /// Check if nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for IdCache {
    fn default() -> Self {
        Self::new()
    }
}
