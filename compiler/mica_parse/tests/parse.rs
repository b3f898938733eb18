//! End-to-end parser tests: source text in, arena shape out.

use mica_ir::{Ast, AstNode, IdCache, Name, NodeId, NodeKind};
use mica_parse::{ParseError, Parser};
use pretty_assertions::assert_eq;

fn parse(text: &str) -> (Ast, IdCache, NodeId) {
    let ids = IdCache::new();
    let mut ast = Ast::new();
    let root = match Parser::new(text, &mut ast, &ids).parse() {
        Ok(root) => root,
        Err(e) => panic!("parse failed: {e}"),
    };
    (ast, ids, root)
}

fn parse_err(text: &str) -> ParseError {
    let ids = IdCache::new();
    let mut ast = Ast::new();
    match Parser::new(text, &mut ast, &ids).parse() {
        Ok(_) => panic!("expected parse error"),
        Err(e) => e,
    }
}

fn block_stmts(ast: &Ast, block: NodeId) -> &[NodeId] {
    match ast.node(block) {
        AstNode::BlockStmt { stmts, .. } => stmts,
        other => panic!("expected block statement, got {other:?}"),
    }
}

fn member_names(ast: &Ast, scope_node: NodeId) -> Vec<Name> {
    let scope = match ast.node(scope_node).scope() {
        Some(s) => s,
        None => panic!("node carries no scope"),
    };
    scope
        .dict
        .nodes()
        .iter()
        .map(|&member| match ast.node(member) {
            AstNode::LocalVariable(v) | AstNode::GlobalVariable(v) => v.name,
            AstNode::StructField { name, .. } | AstNode::UnionField { name, .. } => *name,
            other => panic!("unexpected scope member {other:?}"),
        })
        .collect()
}

#[test]
fn test_function_declaration() {
    let (ast, ids, root) = parse("fun test(i8* str, i32 len) -> i32 { return 10 }");

    let stmts = block_stmts(&ast, root);
    assert_eq!(stmts.len(), 1);
    let fun_node = match ast.node(stmts[0]) {
        AstNode::FunctionDeclStmt(id) => *id,
        other => panic!("expected function declaration, got {other:?}"),
    };

    // The function is findable from the root scope under its name.
    let root_scope = match ast.node(root) {
        AstNode::BlockStmt { block_scope, .. } => *block_scope,
        other => panic!("expected block statement, got {other:?}"),
    };
    let scope = ast.node(root_scope).scope().map(|s| s.dict.find(ids.get("test")));
    assert_eq!(scope, Some(Some(fun_node)));

    let (fun_scope, fun_type, body) = match ast.node(fun_node) {
        AstNode::Function {
            scope,
            fun_type,
            body,
        } => (scope, *fun_type, *body),
        other => panic!("expected function, got {other:?}"),
    };

    // Parameters registered in the function scope, declaration order.
    assert_eq!(fun_scope.name, ids.get("test"));
    assert_eq!(
        member_names(&ast, fun_node),
        vec![ids.get("str"), ids.get("len")]
    );
    let str_param = match fun_scope.dict.find(ids.get("str")) {
        Some(id) => id,
        None => panic!("str parameter missing"),
    };
    match ast.node(str_param) {
        AstNode::LocalVariable(v) => match ast.node(v.ty) {
            AstNode::PointerType { pointee } => {
                assert_eq!(ast.node(*pointee).kind(), NodeKind::I8Type);
            }
            other => panic!("expected pointer type, got {other:?}"),
        },
        other => panic!("expected local variable, got {other:?}"),
    }

    // Signature: named fun type with two params and an i32 return type.
    match ast.node(fun_type) {
        AstNode::FunTypeWithNamedParams { fun_type, names } => {
            assert_eq!(fun_type.name, ids.get("test"));
            assert_eq!(fun_type.param_types.len(), 2);
            assert_eq!(ast.node(fun_type.return_type).kind(), NodeKind::I32Type);
            assert_eq!(names.as_slice(), &[ids.get("str"), ids.get("len")]);
        }
        other => panic!("expected named fun type, got {other:?}"),
    }

    // Body: a single `return 10`.
    let body_stmts = block_stmts(&ast, body);
    assert_eq!(body_stmts.len(), 1);
    match ast.node(body_stmts[0]) {
        AstNode::ReturnStmt { expr } => match ast.node(*expr) {
            AstNode::I32Literal { value, .. } => assert_eq!(*value, 10),
            other => panic!("expected i32 literal, got {other:?}"),
        },
        other => panic!("expected return, got {other:?}"),
    }
}

#[test]
fn test_struct_with_self_referential_field() {
    let (ast, ids, root) = parse("struct Node { i32 value Node* next }");

    let stmts = block_stmts(&ast, root);
    let struct_node = match ast.node(stmts[0]) {
        AstNode::StructDeclStmt(id) => *id,
        other => panic!("expected struct declaration, got {other:?}"),
    };

    assert_eq!(
        member_names(&ast, struct_node),
        vec![ids.get("value"), ids.get("next")]
    );

    // `next` is a pointer back to the struct being declared.
    let scope = match ast.node(struct_node).scope() {
        Some(s) => s,
        None => panic!("struct carries no scope"),
    };
    let next = match scope.dict.find(ids.get("next")) {
        Some(id) => id,
        None => panic!("next field missing"),
    };
    match ast.node(next) {
        AstNode::StructField { ty, offset, .. } => {
            assert_eq!(*offset, 0);
            match ast.node(*ty) {
                AstNode::PointerType { pointee } => match ast.node(*pointee) {
                    AstNode::StructType { scope } => assert_eq!(*scope, struct_node),
                    other => panic!("expected struct type, got {other:?}"),
                },
                other => panic!("expected pointer type, got {other:?}"),
            }
        }
        other => panic!("expected struct field, got {other:?}"),
    }
}

#[test]
fn test_union_fields_in_order() {
    let (ast, ids, root) = parse("union Value { i32 int_repr f32 float_repr }");

    let stmts = block_stmts(&ast, root);
    let union_node = match ast.node(stmts[0]) {
        AstNode::UnionDeclStmt(id) => *id,
        other => panic!("expected union declaration, got {other:?}"),
    };
    assert_eq!(
        member_names(&ast, union_node),
        vec![ids.get("int_repr"), ids.get("float_repr")]
    );
}

#[test]
fn test_global_variable() {
    let (ast, ids, root) = parse("i32 counter = 3");

    let stmts = block_stmts(&ast, root);
    assert_eq!(stmts.len(), 1);
    let (variable, init) = match ast.node(stmts[0]) {
        AstNode::VariableDeclStmt {
            variable,
            init_expr,
        } => (*variable, *init_expr),
        other => panic!("expected variable declaration, got {other:?}"),
    };

    match ast.node(variable) {
        AstNode::GlobalVariable(v) => {
            assert_eq!(v.name, ids.get("counter"));
            assert_eq!(ast.node(v.ty).kind(), NodeKind::I32Type);
        }
        other => panic!("expected global variable, got {other:?}"),
    }
    match ast.node(init) {
        AstNode::I32Literal { value, .. } => assert_eq!(*value, 3),
        other => panic!("expected i32 literal, got {other:?}"),
    }
}

#[test]
fn test_control_flow() {
    let (ast, _ids, root) = parse(
        "fun main() {\n\
         \u{20}   i32 x = 0\n\
         \u{20}   while (x < 10) {\n\
         \u{20}       x = x\n\
         \u{20}   }\n\
         \u{20}   if (x == 10) return 1 else return 0\n\
         }",
    );

    let stmts = block_stmts(&ast, root);
    let fun_node = match ast.node(stmts[0]) {
        AstNode::FunctionDeclStmt(id) => *id,
        other => panic!("expected function declaration, got {other:?}"),
    };
    let body = match ast.node(fun_node) {
        AstNode::Function { body, .. } => *body,
        other => panic!("expected function, got {other:?}"),
    };

    let body_stmts = block_stmts(&ast, body);
    assert_eq!(body_stmts.len(), 3);
    assert_eq!(ast.node(body_stmts[0]).kind(), NodeKind::VariableDeclStmt);

    match ast.node(body_stmts[1]) {
        AstNode::WhileStmt { cond, body } => {
            assert_eq!(ast.node(*cond).kind(), NodeKind::LessExpr);
            let inner = block_stmts(&ast, *body);
            assert_eq!(inner.len(), 1);
            assert_eq!(ast.node(inner[0]).kind(), NodeKind::AssignExpr);
        }
        other => panic!("expected while, got {other:?}"),
    }

    match ast.node(body_stmts[2]) {
        AstNode::IfElseStmt {
            cond,
            then_stmt,
            else_stmt,
        } => {
            assert_eq!(ast.node(*cond).kind(), NodeKind::EqualExpr);
            assert_eq!(ast.node(*then_stmt).kind(), NodeKind::ReturnStmt);
            assert_eq!(ast.node(*else_stmt).kind(), NodeKind::ReturnStmt);
        }
        other => panic!("expected if-else, got {other:?}"),
    }
}

#[test]
fn test_local_shadows_global() {
    let (ast, _ids, root) = parse(
        "i32 x = 1\n\
         fun f() -> i32 {\n\
         \u{20}   i32 x = 2\n\
         \u{20}   return x\n\
         }",
    );

    let stmts = block_stmts(&ast, root);
    let fun_node = match ast.node(stmts[1]) {
        AstNode::FunctionDeclStmt(id) => *id,
        other => panic!("expected function declaration, got {other:?}"),
    };
    let body = match ast.node(fun_node) {
        AstNode::Function { body, .. } => *body,
        other => panic!("expected function, got {other:?}"),
    };
    let body_stmts = block_stmts(&ast, body);

    let local = match ast.node(body_stmts[0]) {
        AstNode::VariableDeclStmt { variable, .. } => *variable,
        other => panic!("expected variable declaration, got {other:?}"),
    };
    match ast.node(body_stmts[1]) {
        AstNode::ReturnStmt { expr } => assert_eq!(*expr, local),
        other => panic!("expected return, got {other:?}"),
    }
}

#[test]
fn test_declared_type_vs_expression_statement() {
    let (ast, _ids, root) = parse(
        "struct Pt { i32 x i32 y }\n\
         fun f() {\n\
         \u{20}   Pt p\n\
         \u{20}   p = p\n\
         }",
    );

    let stmts = block_stmts(&ast, root);
    let fun_node = match ast.node(stmts[1]) {
        AstNode::FunctionDeclStmt(id) => *id,
        other => panic!("expected function declaration, got {other:?}"),
    };
    let body = match ast.node(fun_node) {
        AstNode::Function { body, .. } => *body,
        other => panic!("expected function, got {other:?}"),
    };
    let body_stmts = block_stmts(&ast, body);
    assert_eq!(body_stmts.len(), 2);
    assert_eq!(ast.node(body_stmts[0]).kind(), NodeKind::VariableDeclStmt);
    assert_eq!(ast.node(body_stmts[1]).kind(), NodeKind::AssignExpr);
}

#[test]
fn test_nested_expression_shape() {
    let (ast, _ids, root) = parse("fun f() -> i32 { return -(1 <= 2) }");

    let stmts = block_stmts(&ast, root);
    let fun_node = match ast.node(stmts[0]) {
        AstNode::FunctionDeclStmt(id) => *id,
        other => panic!("expected function declaration, got {other:?}"),
    };
    let body = match ast.node(fun_node) {
        AstNode::Function { body, .. } => *body,
        other => panic!("expected function, got {other:?}"),
    };
    let ret = block_stmts(&ast, body)[0];
    let neg = match ast.node(ret) {
        AstNode::ReturnStmt { expr } => *expr,
        other => panic!("expected return, got {other:?}"),
    };
    let parenth = match ast.node(neg) {
        AstNode::NegExpr { expr } => *expr,
        other => panic!("expected negation, got {other:?}"),
    };
    let cmp = match ast.node(parenth) {
        AstNode::ParenthExpr { expr } => *expr,
        other => panic!("expected parenthesized expression, got {other:?}"),
    };
    assert_eq!(ast.node(cmp).kind(), NodeKind::LessOrEqualExpr);
}

#[test]
fn test_fun_type_in_type_position() {
    let (ast, ids, root) = parse("fun(i32, i8*) -> f64 callback");

    let stmts = block_stmts(&ast, root);
    let variable = match ast.node(stmts[0]) {
        AstNode::VariableDeclStmt { variable, .. } => *variable,
        other => panic!("expected variable declaration, got {other:?}"),
    };
    match ast.node(variable) {
        AstNode::GlobalVariable(v) => {
            assert_eq!(v.name, ids.get("callback"));
            match ast.node(v.ty) {
                AstNode::FunType(ft) => {
                    assert_eq!(ft.name, Name::UNDEFINED);
                    assert_eq!(ft.param_types.len(), 2);
                    assert_eq!(ast.node(ft.return_type).kind(), NodeKind::F64Type);
                }
                other => panic!("expected fun type, got {other:?}"),
            }
        }
        other => panic!("expected global variable, got {other:?}"),
    }
}

#[test]
fn test_nested_struct_declaration() {
    let (ast, ids, root) = parse(
        "fun f() {\n\
         \u{20}   struct S { i32 x }\n\
         \u{20}   S* p\n\
         }",
    );

    let stmts = block_stmts(&ast, root);
    let fun_node = match ast.node(stmts[0]) {
        AstNode::FunctionDeclStmt(id) => *id,
        other => panic!("expected function declaration, got {other:?}"),
    };
    let body = match ast.node(fun_node) {
        AstNode::Function { body, .. } => *body,
        other => panic!("expected function, got {other:?}"),
    };
    let body_stmts = block_stmts(&ast, body);
    assert_eq!(body_stmts.len(), 2);

    let struct_node = match ast.node(body_stmts[0]) {
        AstNode::StructDeclStmt(id) => *id,
        other => panic!("expected struct declaration, got {other:?}"),
    };

    // The local variable's type points back at the nested struct.
    let variable = match ast.node(body_stmts[1]) {
        AstNode::VariableDeclStmt { variable, .. } => *variable,
        other => panic!("expected variable declaration, got {other:?}"),
    };
    match ast.node(variable) {
        AstNode::LocalVariable(v) => {
            assert_eq!(v.name, ids.get("p"));
            match ast.node(v.ty) {
                AstNode::PointerType { pointee } => match ast.node(*pointee) {
                    AstNode::StructType { scope } => assert_eq!(*scope, struct_node),
                    other => panic!("expected struct type, got {other:?}"),
                },
                other => panic!("expected pointer type, got {other:?}"),
            }
        }
        other => panic!("expected local variable, got {other:?}"),
    }
}

#[test]
fn test_nested_function_declaration() {
    let (ast, ids, root) = parse(
        "fun outer() {\n\
         \u{20}   fun inner() -> i32 { return 1 }\n\
         }",
    );

    let stmts = block_stmts(&ast, root);
    let outer_node = match ast.node(stmts[0]) {
        AstNode::FunctionDeclStmt(id) => *id,
        other => panic!("expected function declaration, got {other:?}"),
    };
    let body = match ast.node(outer_node) {
        AstNode::Function { body, .. } => *body,
        other => panic!("expected function, got {other:?}"),
    };
    let body_stmts = block_stmts(&ast, body);
    assert_eq!(body_stmts.len(), 1);

    let inner_node = match ast.node(body_stmts[0]) {
        AstNode::FunctionDeclStmt(id) => *id,
        other => panic!("expected nested function declaration, got {other:?}"),
    };
    match ast.node(inner_node) {
        AstNode::Function { scope, .. } => assert_eq!(scope.name, ids.get("inner")),
        other => panic!("expected function, got {other:?}"),
    }
}

#[test]
fn test_local_fun_type_variable() {
    let (ast, ids, root) = parse("fun f() { fun(i32) -> i32 cb }");

    let stmts = block_stmts(&ast, root);
    let fun_node = match ast.node(stmts[0]) {
        AstNode::FunctionDeclStmt(id) => *id,
        other => panic!("expected function declaration, got {other:?}"),
    };
    let body = match ast.node(fun_node) {
        AstNode::Function { body, .. } => *body,
        other => panic!("expected function, got {other:?}"),
    };
    let body_stmts = block_stmts(&ast, body);
    let variable = match ast.node(body_stmts[0]) {
        AstNode::VariableDeclStmt { variable, .. } => *variable,
        other => panic!("expected variable declaration, got {other:?}"),
    };
    match ast.node(variable) {
        AstNode::LocalVariable(v) => {
            assert_eq!(v.name, ids.get("cb"));
            match ast.node(v.ty) {
                AstNode::FunType(ft) => {
                    assert_eq!(ft.param_types.len(), 1);
                    assert_eq!(ast.node(ft.return_type).kind(), NodeKind::I32Type);
                }
                other => panic!("expected fun type, got {other:?}"),
            }
        }
        other => panic!("expected local variable, got {other:?}"),
    }
}

#[test]
fn test_unknown_name_in_expression() {
    match parse_err("fun f() { return y }") {
        ParseError::UnknownName { name, .. } => assert_eq!(name, "y"),
        other => panic!("expected unknown-name error, got {other:?}"),
    }
}

#[test]
fn test_unexpected_token_in_params() {
    match parse_err("fun f(}") {
        ParseError::UnexpectedToken { expected, .. } => assert_eq!(expected, "type"),
        other => panic!("expected unexpected-token error, got {other:?}"),
    }
}

#[test]
fn test_lex_error_propagates() {
    match parse_err("fun f() { i32 x = 300u8 }") {
        ParseError::Lex(_) => {}
        other => panic!("expected lex error, got {other:?}"),
    }
}

#[test]
fn test_empty_input() {
    let (ast, _ids, root) = parse("");
    assert!(block_stmts(&ast, root).is_empty());
}
