//! Lexical scopes and their ordered member dictionaries.

use crate::{Name, NodeId};
use rustc_hash::FxHashMap;

/// Insertion-ordered member dictionary with first-wins lookup.
///
/// Every insertion is appended to the declaration-order sequence, but the
/// name lookup only ever resolves to the *first* node inserted under a name.
/// Later insertions of the same name keep their position in the order (so
/// shape-sensitive consumers like struct layout still see them) without
/// replacing the lookup result. Whether a re-declaration is an error is a
/// semantic-analysis decision, not made here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScopeDict {
    map: FxHashMap<Name, NodeId>,
    nodes: Vec<NodeId>,
}

impl ScopeDict {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named member.
    ///
    /// The first occurrence of `name` records the lookup mapping; subsequent
    /// occurrences only extend the declaration order.
    pub fn append(&mut self, name: Name, node: NodeId) {
        self.map.entry(name).or_insert(node);
        self.nodes.push(node);
    }

    /// Append an anonymous member (declaration order only).
    pub fn append_anon(&mut self, node: NodeId) {
        self.nodes.push(node);
    }

    /// Look up a name. Returns the first node ever inserted under it.
    pub fn find(&self, name: Name) -> Option<NodeId> {
        self.map.get(&name).copied()
    }

    /// Members in declaration order, duplicates included.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of members in declaration order.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the dictionary has no members.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Lexical scope attached to function, struct, and union nodes.
///
/// `outer` links to the enclosing scope node (`NodeId::UNDEFINED` for the
/// root scope). The link is a plain back-reference by handle, not an
/// ownership edge.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scope {
    pub outer: NodeId,
    pub name: Name,
    pub dict: ScopeDict,
}

impl Scope {
    /// Create an empty scope nested in `outer`.
    pub fn new(outer: NodeId, name: Name) -> Self {
        Scope {
            outer,
            name,
            dict: ScopeDict::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_wins_lookup() {
        let mut dict = ScopeDict::new();
        let a = Name::new(0);
        let b = Name::new(1);
        let (n1, n2, n3) = (NodeId::new(10), NodeId::new(11), NodeId::new(12));

        dict.append(a, n1);
        dict.append(a, n2);
        dict.append(b, n3);

        assert_eq!(dict.find(a), Some(n1));
        assert_eq!(dict.find(b), Some(n3));
        assert_eq!(dict.nodes(), &[n1, n2, n3]);
    }

    #[test]
    fn test_anonymous_members_skip_lookup() {
        let mut dict = ScopeDict::new();
        let n = NodeId::new(7);

        dict.append_anon(n);
        assert_eq!(dict.nodes(), &[n]);
        assert_eq!(dict.find(Name::new(0)), None);
    }

    #[test]
    fn test_missing_name() {
        let dict = ScopeDict::new();
        assert_eq!(dict.find(Name::new(3)), None);
        assert!(dict.is_empty());
    }
}
