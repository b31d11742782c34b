//! Type resolution normalizer
//!
//! Marks struct names inside type annotations as absolute. This is a trust
//! annotation only; no name lookup happens here. Useful after parsing text
//! that is known to contain fully-qualified types.
#![allow(dead_code)]

use crate::frontend::ast::{Expr, TupleItem};
use crate::types::type_system::Type;

/// Marks the given type as resolved (struct names are absolute). Idempotent.
///
/// Panics on type variants that cannot carry annotations (tuples); hitting
/// that path means an upstream pass handed this function a type it was never
/// meant to see.
pub fn mark_type_resolved(ty: Type) -> Type {
    match ty {
        Type::Felt => Type::Felt,
        Type::Pointer(pointee) => Type::Pointer(Box::new(mark_type_resolved(*pointee))),
        Type::Struct { scope, .. } => Type::Struct { scope, is_fully_resolved: true },
        ty @ Type::Tuple(_) => unimplemented!("type '{}' is not supported", ty),
    }
}

/// Returns true if the type is resolved (struct names are absolute).
pub fn is_type_resolved(ty: &Type) -> bool {
    match ty {
        Type::Felt => true,
        Type::Pointer(pointee) => is_type_resolved(pointee),
        Type::Struct { is_fully_resolved, .. } => *is_fully_resolved,
        Type::Tuple(_) => unimplemented!("type '{}' is not supported", ty),
    }
}

/// Same as `mark_type_resolved` except that it operates on all destination
/// types within an expression.
pub fn mark_types_in_expr_resolved(expr: Expr) -> Expr {
    match expr {
        Expr::Const { .. }
        | Expr::SubstConst { .. }
        | Expr::FutureLabel { .. }
        | Expr::Reg { .. }
        | Expr::Identifier { .. } => expr,
        Expr::Op { op, a, b, span } => Expr::Op {
            op,
            a: Box::new(mark_types_in_expr_resolved(*a)),
            b: Box::new(mark_types_in_expr_resolved(*b)),
            span,
        },
        Expr::Neg { val, span } => Expr::Neg {
            val: Box::new(mark_types_in_expr_resolved(*val)),
            span,
        },
        Expr::Parens { val, span } => Expr::Parens {
            val: Box::new(mark_types_in_expr_resolved(*val)),
            span,
        },
        Expr::AddressOf { expr, span } => Expr::AddressOf {
            expr: Box::new(mark_types_in_expr_resolved(*expr)),
            span,
        },
        Expr::Deref { addr, span } => Expr::Deref {
            addr: Box::new(mark_types_in_expr_resolved(*addr)),
            span,
        },
        Expr::Dot { expr, member, span } => Expr::Dot {
            expr: Box::new(mark_types_in_expr_resolved(*expr)),
            member,
            span,
        },
        Expr::Cast { expr, dest, kind, span } => Expr::Cast {
            expr: Box::new(mark_types_in_expr_resolved(*expr)),
            dest: mark_type_resolved(dest),
            kind,
            span,
        },
        Expr::Tuple { members, span } => Expr::Tuple {
            members: members
                .into_iter()
                .map(|item| TupleItem {
                    name: item.name,
                    expr: mark_types_in_expr_resolved(item.expr),
                })
                .collect(),
            span,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::parser::parse_expr;

    #[test]
    fn test_mark_type_resolved() {
        let unresolved = Type::pointer(Type::struct_type("a.b.T", false));
        let resolved = Type::pointer(Type::struct_type("a.b.T", true));
        assert!(!is_type_resolved(&unresolved));
        assert!(is_type_resolved(&resolved));
        assert_eq!(mark_type_resolved(unresolved), resolved);
        assert_eq!(mark_type_resolved(Type::Felt), Type::Felt);
    }

    #[test]
    fn test_mark_type_resolved_idempotent() {
        let ty = Type::pointer(Type::pointer(Type::struct_type("T", false)));
        let once = mark_type_resolved(ty);
        let twice = mark_type_resolved(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    #[should_panic(expected = "is not supported")]
    fn test_mark_type_resolved_tuple() {
        mark_type_resolved(Type::Tuple(vec![Type::Felt]));
    }

    #[test]
    fn test_mark_types_in_expr_resolved() {
        let expr = parse_expr("(cast(fp, T*), [cast(ap, a.b.S)])").unwrap();
        let marked = mark_types_in_expr_resolved(expr);
        let types: Vec<&Type> = collect_cast_types(&marked);
        assert_eq!(types.len(), 2);
        for ty in &types {
            assert!(is_type_resolved(ty));
        }
        // Idempotent: a second pass yields the same tree.
        let again = mark_types_in_expr_resolved(marked.clone());
        assert_eq!(again.to_string(), marked.to_string());
    }

    fn collect_cast_types(expr: &Expr) -> Vec<&Type> {
        match expr {
            Expr::Cast { expr, dest, .. } => {
                let mut types = collect_cast_types(expr);
                types.push(dest);
                types
            }
            Expr::Op { a, b, .. } => {
                let mut types = collect_cast_types(a);
                types.extend(collect_cast_types(b));
                types
            }
            Expr::Neg { val, .. } | Expr::Parens { val, .. } => collect_cast_types(val),
            Expr::AddressOf { expr, .. } | Expr::Dot { expr, .. } => collect_cast_types(expr),
            Expr::Deref { addr, .. } => collect_cast_types(addr),
            Expr::Tuple { members, .. } => members
                .iter()
                .flat_map(|item| collect_cast_types(&item.expr))
                .collect(),
            _ => Vec::new(),
        }
    }
}
