//! AST node arena with slot recycling.

use crate::{AstNode, NodeId, NodeKind};

/// Arena owning every AST node for one translation unit.
///
/// Nodes are addressed by [`NodeId`] index, so the backing `Vec` can grow
/// freely without invalidating handles. Removed slots are recycled by later
/// `create`/`alloc` calls.
///
/// # Handle discipline
///
/// The arena performs no liveness check: dereferencing a handle after the
/// node it addressed was removed (and possibly recycled) silently aliases
/// whatever occupies the slot now. Callers must not retain handles across
/// `remove` calls they do not control.
#[derive(Debug, Default)]
pub struct Ast {
    nodes: Vec<AstNode>,
    removed: Vec<NodeId>,
}

impl Ast {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a zero-initialized node of the given kind.
    ///
    /// Reuses a removed slot when one is available; the recycled slot holds
    /// exactly [`AstNode::empty`]`(kind)` with no residue from the previous
    /// occupant (its owned sub-lists were dropped on removal).
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX - 1` live slots.
    pub fn create(&mut self, kind: NodeKind) -> NodeId {
        self.alloc(AstNode::empty(kind))
    }

    /// Insert a fully-built node, reusing a removed slot when available.
    pub fn alloc(&mut self, node: AstNode) -> NodeId {
        if let Some(id) = self.removed.pop() {
            self.nodes[id.index()] = node;
            return id;
        }
        let index = u32::try_from(self.nodes.len())
            .ok()
            .filter(|&i| i != u32::MAX)
            .unwrap_or_else(|| panic!("AST arena exceeded capacity: {} nodes", self.nodes.len()));
        self.nodes.push(node);
        NodeId::new(index)
    }

    /// Read access to a node.
    ///
    /// # Panics
    /// Panics if the handle was never issued by this arena.
    #[inline]
    pub fn node(&self, id: NodeId) -> &AstNode {
        &self.nodes[id.index()]
    }

    /// Mutable access to a node.
    ///
    /// # Panics
    /// Panics if the handle was never issued by this arena.
    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut AstNode {
        &mut self.nodes[id.index()]
    }

    /// Remove a node, releasing any heap-backed payload it owned, and mark
    /// the slot free for reuse.
    ///
    /// The slot is reset to [`AstNode::None`]; dropping the old variant frees
    /// its parameter lists, statement lists, and scope dictionary.
    pub fn remove(&mut self, id: NodeId) {
        self.nodes[id.index()] = AstNode::None;
        self.removed.push(id);
    }

    /// Total number of slots (live and removed).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FunType, Name, TypeList, Variable};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_sets_kind() {
        let mut ast = Ast::new();
        let id = ast.create(NodeKind::I32Type);
        assert_eq!(ast.node(id).kind(), NodeKind::I32Type);
    }

    #[test]
    fn test_remove_then_create_reuses_slot() {
        let mut ast = Ast::new();
        let id = ast.create(NodeKind::BlockStmt);
        if let AstNode::BlockStmt { stmts, .. } = ast.node_mut(id) {
            stmts.push(NodeId::new(99));
        }
        ast.remove(id);

        let reused = ast.create(NodeKind::WhileStmt);
        assert_eq!(reused, id);
        assert_eq!(ast.node(reused).kind(), NodeKind::WhileStmt);
        // No residue from the removed occupant
        assert_eq!(
            *ast.node(reused),
            AstNode::empty(NodeKind::WhileStmt),
        );
    }

    #[test]
    fn test_removed_slot_is_none_until_reused() {
        let mut ast = Ast::new();
        let keep = ast.create(NodeKind::I8Type);
        let gone = ast.create(NodeKind::U16Type);
        ast.remove(gone);

        assert_eq!(ast.node(gone).kind(), NodeKind::None);
        assert_eq!(ast.node(keep).kind(), NodeKind::I8Type);
        assert_eq!(ast.len(), 2);
    }

    #[test]
    fn test_fun_type_roundtrip() {
        let mut ast = Ast::new();
        let name = Name::new(0);

        let i32_ty = ast.create(NodeKind::I32Type);
        let mut param_types = TypeList::new();
        param_types.push(i32_ty);
        param_types.push(i32_ty);
        let fun_ty = ast.alloc(AstNode::FunType(FunType {
            name,
            return_type: i32_ty,
            param_types,
        }));

        match ast.node(fun_ty) {
            AstNode::FunType(ft) => {
                assert_eq!(ft.name, name);
                assert_eq!(ast.node(ft.return_type).kind(), NodeKind::I32Type);
                assert_eq!(ft.param_types.len(), 2);
                for &p in &ft.param_types {
                    assert_eq!(ast.node(p).kind(), NodeKind::I32Type);
                }
            }
            other => panic!("expected FunType, got {other:?}"),
        }
    }

    #[test]
    fn test_alloc_carries_payload() {
        let mut ast = Ast::new();
        let ty = ast.create(NodeKind::F64Type);
        let var = ast.alloc(AstNode::LocalVariable(Variable {
            ty,
            name: Name::new(3),
        }));

        match ast.node(var) {
            AstNode::LocalVariable(v) => {
                assert_eq!(v.ty, ty);
                assert_eq!(v.name, Name::new(3));
            }
            other => panic!("expected LocalVariable, got {other:?}"),
        }
    }
}
