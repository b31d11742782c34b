//! Cast compatibility rules
//!
//! The predicate is tiered: every cast legal in an assignment context is
//! legal when unpacking return values, and every one of those is legal in an
//! explicit `cast()`.
#![allow(dead_code)]

use crate::frontend::ast::Expr;
use crate::types::type_system::Type;
use crate::utils::{Error, Result};

/// The context a cast appears in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastKind {
    /// Implicit cast on assignment
    Assign,
    /// Cast applied when unpacking returned values
    Unpacking,
    /// An explicit `cast(expr, T)` in the source
    Explicit,
}

/// Returns true if `expr` can be cast from `src` to `dest` in the given
/// context. `Ok(false)` is a plain shape mismatch; the only error case is an
/// explicit cast to a struct type whose source expression has no address.
pub fn check_cast(src: &Type, dest: &Type, expr: &Expr, kind: CastKind) -> Result<bool> {
    // Identical types are always castable, and a pointer may always be
    // relabeled as a plain felt.
    if src == dest {
        return Ok(true);
    }
    if matches!(src, Type::Pointer(_)) && matches!(dest, Type::Felt) {
        return Ok(true);
    }
    if kind == CastKind::Assign {
        return Ok(false);
    }

    if matches!(src, Type::Felt) && matches!(dest, Type::Pointer(_)) {
        return Ok(true);
    }
    if kind == CastKind::Unpacking {
        return Ok(false);
    }

    // An explicit cast may relabel memory as a struct, which only makes
    // sense for an expression that denotes an address.
    if matches!(dest, Type::Struct { .. }) {
        if !matches!(expr, Expr::Deref { .. }) {
            return Err(Error::CastNoAddress {
                dest: dest.to_string(),
                span: expr.span(),
            });
        }
        return Ok(true);
    }

    Ok(false)
}
