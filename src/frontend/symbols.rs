//! Struct definitions and the symbol table
//!
//! The table is produced by the layout builder upstream and is strictly
//! read-only during simplification; many expressions may be simplified
//! against one shared table.
#![allow(dead_code)]

use std::collections::HashMap;

use crate::types::type_system::{ScopedName, Type};
use crate::utils::{Error, Result, Span};

/// A single struct member: its word offset from the struct base and type
#[derive(Debug, Clone)]
pub struct MemberDefinition {
    pub offset: usize,
    pub ty: Type,
}

/// A struct definition, keyed by member name
#[derive(Debug, Clone)]
pub struct StructDefinition {
    pub full_name: ScopedName,
    members: HashMap<String, MemberDefinition>,
    pub size: usize,
}

impl StructDefinition {
    /// Build a definition from members in declaration order.
    ///
    /// Member names must be unique and offsets strictly increasing; the
    /// layout builder guarantees both, so violations are asserted rather
    /// than reported.
    pub fn new(
        full_name: ScopedName,
        members: Vec<(String, MemberDefinition)>,
        size: usize,
    ) -> Self {
        let mut map = HashMap::with_capacity(members.len());
        let mut prev_offset: Option<usize> = None;
        for (name, member) in members {
            if let Some(prev) = prev_offset {
                assert!(
                    member.offset > prev,
                    "member offsets of '{}' must be strictly increasing",
                    full_name
                );
            }
            prev_offset = Some(member.offset);
            let duplicate = map.insert(name.clone(), member);
            assert!(
                duplicate.is_none(),
                "duplicate member '{}' in struct '{}'",
                name,
                full_name
            );
        }
        Self {
            full_name,
            members: map,
            size,
        }
    }

    pub fn get_member(&self, name: &str) -> Option<&MemberDefinition> {
        self.members.get(name)
    }
}

/// Read-only lookup of struct definitions by fully-qualified name
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    structs: HashMap<ScopedName, StructDefinition>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a struct definition
    pub fn define_struct(&mut self, definition: StructDefinition) -> Result<()> {
        let name = definition.full_name.clone();
        if self.structs.contains_key(&name) {
            // Definitions carry no source spans; the layout builder attaches
            // one when it surfaces this error.
            return Err(Error::DuplicateDefinition {
                name: name.to_string(),
                span: Span::dummy(),
            });
        }
        self.structs.insert(name, definition);
        Ok(())
    }

    /// Look up a struct definition by fully-qualified name
    pub fn get_struct(&self, name: &ScopedName, span: Span) -> Result<&StructDefinition> {
        self.structs.get(name).ok_or_else(|| Error::UnknownIdentifier {
            name: name.to_string(),
            span,
        })
    }
}
