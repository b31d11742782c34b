//! Type-checking expression simplifier
//!
//! Verifies every operator, cast, dereference and member access against the
//! type model and rewrites the expression into a canonical form paired with
//! its inferred type. The output contains no cast and no parenthesization
//! nodes, and every dot-access is expanded to dereference(+offset) form the
//! code generator can lower directly.

use log::debug;

use crate::frontend::ast::{BinOp, Expr, TupleItem};
use crate::frontend::symbols::SymbolTable;
use crate::types::casts::check_cast;
use crate::types::type_system::{ScopedName, Type};
use crate::utils::{Error, Result, Span};

/// Extract the address a simplified expression denotes. Only a dereference
/// node denotes an address.
pub fn get_expr_addr(expr: Expr) -> Result<Expr> {
    match expr {
        Expr::Deref { addr, .. } => Ok(*addr),
        other => Err(Error::NoAddress { span: other.span() }),
    }
}

/// Given an expression, returns a type-simplified expression and its type.
///
/// This includes checking types in operations, removing casts, and expanding
/// dot operators. For example:
/// - `[cast(fp, T*)]` is transformed into `([fp], T)`;
/// - if T is a struct with member `x` of type S at offset 2, then
///   `[cast(fp, T*)].x` is transformed into `([[fp] + 2], S)`. The
///   definition of T is looked up, and must be present, in `symbols`.
///
/// `symbols` is only required for dot-operator expressions.
pub fn simplify_type_system(
    expr: &Expr,
    symbols: Option<&SymbolTable>,
) -> Result<(Expr, Type)> {
    let simplifier = TypeSimplifier { symbols };
    let (simplified, ty) = simplifier.simplify(expr)?;
    debug!("simplified expression to '{}' of type '{}'", simplified, ty);
    Ok((simplified, ty))
}

struct TypeSimplifier<'a> {
    symbols: Option<&'a SymbolTable>,
}

impl TypeSimplifier<'_> {
    fn simplify(&self, expr: &Expr) -> Result<(Expr, Type)> {
        match expr {
            // Leaves that the machine reads as plain words.
            Expr::Const { .. }
            | Expr::SubstConst { .. }
            | Expr::FutureLabel { .. }
            | Expr::Reg { .. } => Ok((expr.clone(), Type::Felt)),

            // The resolution pass runs before this one; a surviving raw name
            // means the caller skipped it.
            Expr::Identifier { name, span } => Err(Error::UnresolvedIdentifier {
                name: name.to_string(),
                span: *span,
            }),

            Expr::Op { op, a, b, span } => self.simplify_op(*op, a, b, *span),

            Expr::Neg { val, span } => {
                let (val_expr, val_type) = self.simplify(val)?;
                if val_type != Type::Felt {
                    return Err(Error::NegNotSupported {
                        ty: val_type.to_string(),
                        span: *span,
                    });
                }
                Ok((
                    Expr::Neg { val: Box::new(val_expr), span: *span },
                    Type::Felt,
                ))
            }

            // Parentheses carry no semantics; the node is dropped.
            Expr::Parens { val, .. } => self.simplify(val),

            Expr::AddressOf { expr: inner, .. } => {
                let (inner_expr, inner_type) = self.simplify(inner)?;
                Ok((get_expr_addr(inner_expr)?, Type::pointer(inner_type)))
            }

            Expr::Deref { addr, span } => {
                let (addr_expr, addr_type) = self.simplify(addr)?;
                let result_type = match addr_type {
                    Type::Felt => Type::Felt,
                    Type::Pointer(pointee) => *pointee,
                    other => {
                        return Err(Error::CannotDereference {
                            ty: other.to_string(),
                            span: *span,
                        })
                    }
                };
                Ok((
                    Expr::Deref { addr: Box::new(addr_expr), span: *span },
                    result_type,
                ))
            }

            Expr::Dot { expr: inner, member, span } => {
                self.simplify_dot(inner, member, *span)
            }

            Expr::Cast { expr: inner, dest, kind, span } => {
                let (inner_expr, inner_type) = self.simplify(inner)?;
                if !check_cast(&inner_type, dest, &inner_expr, *kind)? {
                    return Err(Error::CannotCast {
                        src: inner_type.to_string(),
                        dest: dest.to_string(),
                        span: *span,
                    });
                }
                // The cast node is erased; only the type changes.
                Ok((inner_expr, dest.clone()))
            }

            Expr::Tuple { members, span } => {
                let mut simplified = Vec::with_capacity(members.len());
                let mut member_types = Vec::with_capacity(members.len());
                for item in members {
                    let (member_expr, member_type) = self.simplify(&item.expr)?;
                    simplified.push(TupleItem {
                        name: item.name.clone(),
                        expr: member_expr,
                    });
                    member_types.push(member_type);
                }
                Ok((
                    Expr::Tuple { members: simplified, span: *span },
                    Type::Tuple(member_types),
                ))
            }
        }
    }

    fn simplify_op(&self, op: BinOp, a: &Expr, b: &Expr, span: Span) -> Result<(Expr, Type)> {
        let (a_expr, a_type) = self.simplify(a)?;
        let (b_expr, b_type) = self.simplify(b)?;

        let result_type = match (&a_type, &b_type) {
            (Type::Felt, Type::Felt) => Type::Felt,
            // Pointer arithmetic: stepping a pointer by a scalar keeps the
            // pointer type; subtracting two pointers of the same type gives
            // the scalar distance.
            (Type::Pointer(_), Type::Felt) if matches!(op, BinOp::Add | BinOp::Sub) => {
                a_type.clone()
            }
            (Type::Felt, Type::Pointer(_)) if op == BinOp::Add => b_type.clone(),
            (Type::Pointer(_), Type::Pointer(_)) if a_type == b_type && op == BinOp::Sub => {
                Type::Felt
            }
            _ => {
                return Err(Error::OperatorNotImplemented {
                    op: op.symbol(),
                    lhs: a_type.to_string(),
                    rhs: b_type.to_string(),
                    span,
                })
            }
        };
        Ok((
            Expr::Op {
                op,
                a: Box::new(a_expr),
                b: Box::new(b_expr),
                span,
            },
            result_type,
        ))
    }

    fn simplify_dot(&self, inner: &Expr, member: &str, span: Span) -> Result<(Expr, Type)> {
        let Some(symbols) = self.symbols else {
            return Err(Error::SymbolsNotLoaded { span });
        };

        let (inner_expr, inner_type) = self.simplify(inner)?;

        // A pointer to a struct gets one implicit dereference: the base
        // expression already denotes the address to step off of. A direct
        // struct value must itself denote an address.
        let (base_addr, scope) = match inner_type {
            Type::Pointer(pointee) => match *pointee {
                Type::Struct { scope, is_fully_resolved } => {
                    (inner_expr, resolved_scope(scope, is_fully_resolved, span)?)
                }
                other => {
                    return Err(Error::DotPointerNonStruct {
                        ty: Type::pointer(other).to_string(),
                        span,
                    })
                }
            },
            Type::Struct { scope, is_fully_resolved } => (
                get_expr_addr(inner_expr)?,
                resolved_scope(scope, is_fully_resolved, span)?,
            ),
            other => {
                return Err(Error::DotNonStruct {
                    ty: other.to_string(),
                    span,
                })
            }
        };

        let struct_def = symbols.get_struct(&scope, span)?;
        let Some(member_def) = struct_def.get_member(member) else {
            return Err(Error::UnknownMember {
                member: member.to_string(),
                strct: scope.to_string(),
                span,
            });
        };

        let addr = if member_def.offset == 0 {
            base_addr
        } else {
            Expr::Op {
                op: BinOp::Add,
                a: Box::new(base_addr),
                b: Box::new(Expr::Const {
                    value: member_def.offset as i128,
                    span,
                }),
                span,
            }
        };
        Ok((
            Expr::Deref { addr: Box::new(addr), span },
            member_def.ty.clone(),
        ))
    }
}

/// The scope of a struct type, which must be absolute by the time the
/// simplifier consumes it.
fn resolved_scope(scope: ScopedName, is_fully_resolved: bool, span: Span) -> Result<ScopedName> {
    if is_fully_resolved {
        Ok(scope)
    } else {
        Err(Error::UnresolvedType { span })
    }
}
