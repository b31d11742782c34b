//! Type model for the Quartz compiler
//!
//! The machine itself has no notion of types; only the compiler checks them.
//! The model is deliberately small: the base scalar, pointers, nominal struct
//! references and ordered tuples.
#![allow(dead_code)]

use std::fmt;

/// An absolute, dot-separated path naming a struct definition (e.g. `a.b.T`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScopedName {
    path: Vec<String>,
}

impl ScopedName {
    pub fn new(path: Vec<String>) -> Self {
        Self { path }
    }

    /// Parse a dotted string such as `"a.b.T"`
    pub fn from_string(name: &str) -> Self {
        Self {
            path: name.split('.').map(str::to_string).collect(),
        }
    }

    /// The last path segment
    pub fn name(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or("")
    }
}

impl fmt::Display for ScopedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.join("."))
    }
}

/// A type in the Quartz type system
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// The base scalar: a field element
    Felt,
    /// Pointer to another type; nests (`T**`)
    Pointer(Box<Type>),
    /// A struct definition referenced by name. `is_fully_resolved` marks the
    /// scope as absolute; unresolved struct types must pass through
    /// `mark_type_resolved` before the simplifier may consume them.
    Struct {
        scope: ScopedName,
        is_fully_resolved: bool,
    },
    /// Ordered members; the empty tuple is the unit type
    Tuple(Vec<Type>),
}

impl Type {
    pub fn pointer(pointee: Type) -> Self {
        Type::Pointer(Box::new(pointee))
    }

    pub fn struct_type(scope: &str, is_fully_resolved: bool) -> Self {
        Type::Struct {
            scope: ScopedName::from_string(scope),
            is_fully_resolved,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Felt => write!(f, "felt"),
            Type::Pointer(pointee) => write!(f, "{}*", pointee),
            Type::Struct { scope, .. } => write!(f, "{}", scope),
            Type::Tuple(members) => {
                write!(f, "(")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", member)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        let t = Type::struct_type("T", true);
        assert_eq!(t.to_string(), "T");
        assert_eq!(Type::pointer(t.clone()).to_string(), "T*");
        assert_eq!(Type::pointer(Type::pointer(t.clone())).to_string(), "T**");
        assert_eq!(Type::Felt.to_string(), "felt");
        assert_eq!(
            Type::Tuple(vec![Type::Felt, t.clone(), Type::pointer(t)]).to_string(),
            "(felt, T, T*)"
        );
        assert_eq!(Type::Tuple(vec![]).to_string(), "()");
    }

    #[test]
    fn test_scoped_name() {
        let name = ScopedName::from_string("a.b.T");
        assert_eq!(name.to_string(), "a.b.T");
        assert_eq!(name.name(), "T");
        assert_eq!(name, ScopedName::from_string("a.b.T"));
        assert_ne!(name, ScopedName::from_string("a.T"));
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(
            Type::pointer(Type::struct_type("T", true)),
            Type::pointer(Type::struct_type("T", true))
        );
        assert_ne!(
            Type::struct_type("T", true),
            Type::struct_type("T", false)
        );
        assert_ne!(
            Type::struct_type("T", true),
            Type::struct_type("S", true)
        );
    }
}
