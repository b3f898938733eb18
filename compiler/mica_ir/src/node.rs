//! AST node model.
//!
//! Every node is one variant of [`AstNode`], discriminated by [`NodeKind`].
//! Children are [`NodeId`] handles into the arena, never boxes. Variants
//! that own heap-backed lists (function-type parameter lists, block
//! statement lists, scope dictionaries) release them when the variant is
//! dropped or overwritten, so slot recycling needs no per-kind cleanup
//! switch.

use crate::{Name, NodeId, Scope};
use smallvec::SmallVec;

/// Parameter-type list for function types. Inline up to 4 entries.
pub type TypeList = SmallVec<[NodeId; 4]>;

/// Parameter-name list for named function types. Inline up to 4 entries.
pub type NameList = SmallVec<[Name; 4]>;

/// Node kind discriminator.
///
/// Kinds are grouped into four overlapping categories exposed as
/// classification predicates: types, values, statements, and scopes.
/// The expression kinds form a fifth informal group tested by `is_expr`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    None,

    // Types
    I8Type,
    I16Type,
    I32Type,
    U8Type,
    U16Type,
    U32Type,
    F32Type,
    F64Type,
    PointerType,
    StructType,
    UnionType,
    FunType,
    FunTypeWithNamedParams,

    // Values
    LocalVariable,
    GlobalVariable,
    StringLiteral,
    I8Literal,
    I16Literal,
    I32Literal,
    U8Literal,
    U16Literal,
    U32Literal,
    F32Literal,
    F64Literal,
    StructField,
    UnionField,

    // Expressions
    AssignExpr,
    EqualExpr,
    GreatExpr,
    GreatOrEqualExpr,
    LessExpr,
    LessOrEqualExpr,
    ParenthExpr,
    NegExpr,

    // Scopes
    Function,
    Struct,
    Union,
    BlockScope,

    // Statements
    VariableDeclStmt,
    BlockStmt,
    FunctionDeclStmt,
    StructDeclStmt,
    UnionDeclStmt,
    IfElseStmt,
    WhileStmt,
    ReturnStmt,
}

impl NodeKind {
    /// Check if this kind is a type.
    pub fn is_type(self) -> bool {
        matches!(
            self,
            NodeKind::I8Type
                | NodeKind::I16Type
                | NodeKind::I32Type
                | NodeKind::U8Type
                | NodeKind::U16Type
                | NodeKind::U32Type
                | NodeKind::F32Type
                | NodeKind::F64Type
                | NodeKind::PointerType
                | NodeKind::StructType
                | NodeKind::UnionType
                | NodeKind::FunType
                | NodeKind::FunTypeWithNamedParams
        )
    }

    /// Check if this kind is a value.
    pub fn is_value(self) -> bool {
        matches!(
            self,
            NodeKind::LocalVariable
                | NodeKind::GlobalVariable
                | NodeKind::StringLiteral
                | NodeKind::I8Literal
                | NodeKind::I16Literal
                | NodeKind::I32Literal
                | NodeKind::U8Literal
                | NodeKind::U16Literal
                | NodeKind::U32Literal
                | NodeKind::F32Literal
                | NodeKind::F64Literal
                | NodeKind::StructField
                | NodeKind::UnionField
        )
    }

    /// Check if this kind is a binary expression.
    pub fn is_expr(self) -> bool {
        matches!(
            self,
            NodeKind::AssignExpr
                | NodeKind::EqualExpr
                | NodeKind::GreatExpr
                | NodeKind::GreatOrEqualExpr
                | NodeKind::LessExpr
                | NodeKind::LessOrEqualExpr
        )
    }

    /// Check if this kind is a statement.
    pub fn is_stmt(self) -> bool {
        matches!(
            self,
            NodeKind::VariableDeclStmt
                | NodeKind::BlockStmt
                | NodeKind::FunctionDeclStmt
                | NodeKind::StructDeclStmt
                | NodeKind::UnionDeclStmt
                | NodeKind::IfElseStmt
                | NodeKind::WhileStmt
                | NodeKind::ReturnStmt
        )
    }

    /// Check if this kind opens a named lexical scope.
    pub fn is_scope(self) -> bool {
        matches!(self, NodeKind::Function | NodeKind::Struct | NodeKind::Union)
    }
}

/// Variable payload: declared type plus name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Variable {
    pub ty: NodeId,
    pub name: Name,
}

/// Function type payload: optional name, return type, parameter types in
/// declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FunType {
    pub name: Name,
    pub return_type: NodeId,
    pub param_types: TypeList,
}

impl FunType {
    /// Append a parameter type.
    pub fn add_param_type(&mut self, ty: NodeId) {
        self.param_types.push(ty);
    }
}

/// Binary expression payload with explicit left/right children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BinaryExpr {
    pub left: NodeId,
    pub right: NodeId,
}

/// A tagged AST node.
///
/// Undefined handles (`NodeId::UNDEFINED`) mark absent children: a variable
/// declaration without initializer, an `if` without `else`, a literal whose
/// type the checker has not filled in yet.
#[derive(Clone, Debug, PartialEq)]
pub enum AstNode {
    None,

    // Types
    I8Type,
    I16Type,
    I32Type,
    U8Type,
    U16Type,
    U32Type,
    F32Type,
    F64Type,
    /// Pointer to another type node.
    PointerType { pointee: NodeId },
    /// Reference to a declared `Struct` scope node.
    StructType { scope: NodeId },
    /// Reference to a declared `Union` scope node.
    UnionType { scope: NodeId },
    FunType(FunType),
    FunTypeWithNamedParams { fun_type: FunType, names: NameList },

    // Values
    LocalVariable(Variable),
    GlobalVariable(Variable),
    StringLiteral { ty: NodeId, value: Name },
    I8Literal { ty: NodeId, value: i8 },
    I16Literal { ty: NodeId, value: i16 },
    I32Literal { ty: NodeId, value: i32 },
    U8Literal { ty: NodeId, value: u8 },
    U16Literal { ty: NodeId, value: u16 },
    U32Literal { ty: NodeId, value: u32 },
    F32Literal { ty: NodeId, value: f32 },
    F64Literal { ty: NodeId, value: f64 },
    /// Struct member. `offset` is filled by the layout phase, not the parser.
    StructField { ty: NodeId, name: Name, offset: u32 },
    UnionField { ty: NodeId, name: Name },

    // Expressions
    AssignExpr(BinaryExpr),
    EqualExpr(BinaryExpr),
    GreatExpr(BinaryExpr),
    GreatOrEqualExpr(BinaryExpr),
    LessExpr(BinaryExpr),
    LessOrEqualExpr(BinaryExpr),
    ParenthExpr { expr: NodeId },
    NegExpr { expr: NodeId },

    // Scopes
    Function { scope: Scope, fun_type: NodeId, body: NodeId },
    Struct { scope: Scope },
    Union { scope: Scope },
    BlockScope { scope: Scope, block_stmt: NodeId },

    // Statements
    VariableDeclStmt { variable: NodeId, init_expr: NodeId },
    BlockStmt { block_scope: NodeId, stmts: Vec<NodeId> },
    FunctionDeclStmt(NodeId),
    StructDeclStmt(NodeId),
    UnionDeclStmt(NodeId),
    IfElseStmt { cond: NodeId, then_stmt: NodeId, else_stmt: NodeId },
    WhileStmt { cond: NodeId, body: NodeId },
    ReturnStmt { expr: NodeId },
}

impl AstNode {
    /// Build the empty (zero-initialized) node for a kind: all handles
    /// undefined, all lists empty, all scalar payloads zero.
    pub fn empty(kind: NodeKind) -> AstNode {
        match kind {
            NodeKind::None => AstNode::None,
            NodeKind::I8Type => AstNode::I8Type,
            NodeKind::I16Type => AstNode::I16Type,
            NodeKind::I32Type => AstNode::I32Type,
            NodeKind::U8Type => AstNode::U8Type,
            NodeKind::U16Type => AstNode::U16Type,
            NodeKind::U32Type => AstNode::U32Type,
            NodeKind::F32Type => AstNode::F32Type,
            NodeKind::F64Type => AstNode::F64Type,
            NodeKind::PointerType => AstNode::PointerType {
                pointee: NodeId::UNDEFINED,
            },
            NodeKind::StructType => AstNode::StructType {
                scope: NodeId::UNDEFINED,
            },
            NodeKind::UnionType => AstNode::UnionType {
                scope: NodeId::UNDEFINED,
            },
            NodeKind::FunType => AstNode::FunType(FunType::default()),
            NodeKind::FunTypeWithNamedParams => AstNode::FunTypeWithNamedParams {
                fun_type: FunType::default(),
                names: NameList::default(),
            },
            NodeKind::LocalVariable => AstNode::LocalVariable(Variable::default()),
            NodeKind::GlobalVariable => AstNode::GlobalVariable(Variable::default()),
            NodeKind::StringLiteral => AstNode::StringLiteral {
                ty: NodeId::UNDEFINED,
                value: Name::UNDEFINED,
            },
            NodeKind::I8Literal => AstNode::I8Literal {
                ty: NodeId::UNDEFINED,
                value: 0,
            },
            NodeKind::I16Literal => AstNode::I16Literal {
                ty: NodeId::UNDEFINED,
                value: 0,
            },
            NodeKind::I32Literal => AstNode::I32Literal {
                ty: NodeId::UNDEFINED,
                value: 0,
            },
            NodeKind::U8Literal => AstNode::U8Literal {
                ty: NodeId::UNDEFINED,
                value: 0,
            },
            NodeKind::U16Literal => AstNode::U16Literal {
                ty: NodeId::UNDEFINED,
                value: 0,
            },
            NodeKind::U32Literal => AstNode::U32Literal {
                ty: NodeId::UNDEFINED,
                value: 0,
            },
            NodeKind::F32Literal => AstNode::F32Literal {
                ty: NodeId::UNDEFINED,
                value: 0.0,
            },
            NodeKind::F64Literal => AstNode::F64Literal {
                ty: NodeId::UNDEFINED,
                value: 0.0,
            },
            NodeKind::StructField => AstNode::StructField {
                ty: NodeId::UNDEFINED,
                name: Name::UNDEFINED,
                offset: 0,
            },
            NodeKind::UnionField => AstNode::UnionField {
                ty: NodeId::UNDEFINED,
                name: Name::UNDEFINED,
            },
            NodeKind::AssignExpr => AstNode::AssignExpr(BinaryExpr::default()),
            NodeKind::EqualExpr => AstNode::EqualExpr(BinaryExpr::default()),
            NodeKind::GreatExpr => AstNode::GreatExpr(BinaryExpr::default()),
            NodeKind::GreatOrEqualExpr => AstNode::GreatOrEqualExpr(BinaryExpr::default()),
            NodeKind::LessExpr => AstNode::LessExpr(BinaryExpr::default()),
            NodeKind::LessOrEqualExpr => AstNode::LessOrEqualExpr(BinaryExpr::default()),
            NodeKind::ParenthExpr => AstNode::ParenthExpr {
                expr: NodeId::UNDEFINED,
            },
            NodeKind::NegExpr => AstNode::NegExpr {
                expr: NodeId::UNDEFINED,
            },
            NodeKind::Function => AstNode::Function {
                scope: Scope::default(),
                fun_type: NodeId::UNDEFINED,
                body: NodeId::UNDEFINED,
            },
            NodeKind::Struct => AstNode::Struct {
                scope: Scope::default(),
            },
            NodeKind::Union => AstNode::Union {
                scope: Scope::default(),
            },
            NodeKind::BlockScope => AstNode::BlockScope {
                scope: Scope::default(),
                block_stmt: NodeId::UNDEFINED,
            },
            NodeKind::VariableDeclStmt => AstNode::VariableDeclStmt {
                variable: NodeId::UNDEFINED,
                init_expr: NodeId::UNDEFINED,
            },
            NodeKind::BlockStmt => AstNode::BlockStmt {
                block_scope: NodeId::UNDEFINED,
                stmts: Vec::new(),
            },
            NodeKind::FunctionDeclStmt => AstNode::FunctionDeclStmt(NodeId::UNDEFINED),
            NodeKind::StructDeclStmt => AstNode::StructDeclStmt(NodeId::UNDEFINED),
            NodeKind::UnionDeclStmt => AstNode::UnionDeclStmt(NodeId::UNDEFINED),
            NodeKind::IfElseStmt => AstNode::IfElseStmt {
                cond: NodeId::UNDEFINED,
                then_stmt: NodeId::UNDEFINED,
                else_stmt: NodeId::UNDEFINED,
            },
            NodeKind::WhileStmt => AstNode::WhileStmt {
                cond: NodeId::UNDEFINED,
                body: NodeId::UNDEFINED,
            },
            NodeKind::ReturnStmt => AstNode::ReturnStmt {
                expr: NodeId::UNDEFINED,
            },
        }
    }

    /// Get this node's kind.
    pub fn kind(&self) -> NodeKind {
        match self {
            AstNode::None => NodeKind::None,
            AstNode::I8Type => NodeKind::I8Type,
            AstNode::I16Type => NodeKind::I16Type,
            AstNode::I32Type => NodeKind::I32Type,
            AstNode::U8Type => NodeKind::U8Type,
            AstNode::U16Type => NodeKind::U16Type,
            AstNode::U32Type => NodeKind::U32Type,
            AstNode::F32Type => NodeKind::F32Type,
            AstNode::F64Type => NodeKind::F64Type,
            AstNode::PointerType { .. } => NodeKind::PointerType,
            AstNode::StructType { .. } => NodeKind::StructType,
            AstNode::UnionType { .. } => NodeKind::UnionType,
            AstNode::FunType(_) => NodeKind::FunType,
            AstNode::FunTypeWithNamedParams { .. } => NodeKind::FunTypeWithNamedParams,
            AstNode::LocalVariable(_) => NodeKind::LocalVariable,
            AstNode::GlobalVariable(_) => NodeKind::GlobalVariable,
            AstNode::StringLiteral { .. } => NodeKind::StringLiteral,
            AstNode::I8Literal { .. } => NodeKind::I8Literal,
            AstNode::I16Literal { .. } => NodeKind::I16Literal,
            AstNode::I32Literal { .. } => NodeKind::I32Literal,
            AstNode::U8Literal { .. } => NodeKind::U8Literal,
            AstNode::U16Literal { .. } => NodeKind::U16Literal,
            AstNode::U32Literal { .. } => NodeKind::U32Literal,
            AstNode::F32Literal { .. } => NodeKind::F32Literal,
            AstNode::F64Literal { .. } => NodeKind::F64Literal,
            AstNode::StructField { .. } => NodeKind::StructField,
            AstNode::UnionField { .. } => NodeKind::UnionField,
            AstNode::AssignExpr(_) => NodeKind::AssignExpr,
            AstNode::EqualExpr(_) => NodeKind::EqualExpr,
            AstNode::GreatExpr(_) => NodeKind::GreatExpr,
            AstNode::GreatOrEqualExpr(_) => NodeKind::GreatOrEqualExpr,
            AstNode::LessExpr(_) => NodeKind::LessExpr,
            AstNode::LessOrEqualExpr(_) => NodeKind::LessOrEqualExpr,
            AstNode::ParenthExpr { .. } => NodeKind::ParenthExpr,
            AstNode::NegExpr { .. } => NodeKind::NegExpr,
            AstNode::Function { .. } => NodeKind::Function,
            AstNode::Struct { .. } => NodeKind::Struct,
            AstNode::Union { .. } => NodeKind::Union,
            AstNode::BlockScope { .. } => NodeKind::BlockScope,
            AstNode::VariableDeclStmt { .. } => NodeKind::VariableDeclStmt,
            AstNode::BlockStmt { .. } => NodeKind::BlockStmt,
            AstNode::FunctionDeclStmt(_) => NodeKind::FunctionDeclStmt,
            AstNode::StructDeclStmt(_) => NodeKind::StructDeclStmt,
            AstNode::UnionDeclStmt(_) => NodeKind::UnionDeclStmt,
            AstNode::IfElseStmt { .. } => NodeKind::IfElseStmt,
            AstNode::WhileStmt { .. } => NodeKind::WhileStmt,
            AstNode::ReturnStmt { .. } => NodeKind::ReturnStmt,
        }
    }

    /// Access the scope of a scope-carrying node (function, struct, union,
    /// block scope).
    pub fn scope(&self) -> Option<&Scope> {
        match self {
            AstNode::Function { scope, .. }
            | AstNode::Struct { scope }
            | AstNode::Union { scope }
            | AstNode::BlockScope { scope, .. } => Some(scope),
            _ => None,
        }
    }

    /// Mutable access to the scope of a scope-carrying node.
    pub fn scope_mut(&mut self) -> Option<&mut Scope> {
        match self {
            AstNode::Function { scope, .. }
            | AstNode::Struct { scope }
            | AstNode::Union { scope }
            | AstNode::BlockScope { scope, .. } => Some(scope),
            _ => None,
        }
    }

    /// Access the left/right children of a binary expression node.
    pub fn binary(&self) -> Option<&BinaryExpr> {
        match self {
            AstNode::AssignExpr(b)
            | AstNode::EqualExpr(b)
            | AstNode::GreatExpr(b)
            | AstNode::GreatOrEqualExpr(b)
            | AstNode::LessExpr(b)
            | AstNode::LessOrEqualExpr(b) => Some(b),
            _ => None,
        }
    }
}
