// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Host type introspection.
//!
//! [`TypeOracle`] is the seam through which the generator reads class
//! declarations. Structural queries that every caller needs (superclass
//! walks, subtype checks, container detection) are provided once on
//! `dyn TypeOracle`.
//!
//! [`TypeUniverse`] is the in-memory implementation: declarations registered
//! in code or loaded from a JSON snapshot exported by the host compiler.

use indexmap::{IndexMap, IndexSet};

use super::types::{ClassDecl, TypeName, TypeRef};
use crate::error::GenerateError;

/// Read access to host class declarations.
pub trait TypeOracle {
    /// Declaration of `name`, if the host knows it.
    fn find_class(&self, name: &TypeName) -> Option<&ClassDecl>;
}

impl dyn TypeOracle + '_ {
    /// Declaration of `name`, failing with [`GenerateError::UnknownType`].
    pub fn load(&self, name: &TypeName) -> Result<&ClassDecl, GenerateError> {
        self.find_class(name)
            .ok_or_else(|| GenerateError::UnknownType(name.clone()))
    }

    /// `name` followed by its superclasses, most derived first.
    ///
    /// Stops at the first undeclared superclass. A malformed hierarchy that
    /// loops back on itself ends at the repeat.
    pub fn superclass_chain(&self, name: &TypeName) -> Vec<&ClassDecl> {
        let mut chain: Vec<&ClassDecl> = Vec::new();
        let mut next = self.find_class(name);
        while let Some(decl) = next {
            if chain.iter().any(|seen| seen.name == decl.name) {
                break;
            }
            chain.push(decl);
            next = decl
                .superclass
                .as_ref()
                .and_then(|parent| self.find_class(parent));
        }
        chain
    }

    /// Check whether `sub` is `sup` or inherits from it through superclasses
    /// or interfaces.
    pub fn is_subtype_of(&self, sub: &TypeName, sup: &TypeName) -> bool {
        let mut visited: IndexSet<&TypeName> = IndexSet::new();
        let mut pending: Vec<&TypeName> = vec![sub];
        while let Some(current) = pending.pop() {
            if current == sup {
                return true;
            }
            if !visited.insert(current) {
                continue;
            }
            if let Some(decl) = self.find_class(current) {
                pending.extend(decl.superclass.iter());
                pending.extend(decl.interfaces.iter());
            }
        }
        false
    }

    /// Check whether `sub` is a subtype of `sup` and not `sup` itself.
    pub fn is_proper_subtype_of(&self, sub: &TypeName, sup: &TypeName) -> bool {
        sub != sup && self.is_subtype_of(sub, sup)
    }

    /// Check whether a declared type is unwrapped to its element type when
    /// cascaded: arrays, and subtypes of any of `roots`.
    pub fn is_container(&self, ty: &TypeRef, roots: &[TypeName]) -> bool {
        if ty.is_array() {
            return true;
        }
        match ty.erasure() {
            Some(erased) => roots.iter().any(|root| self.is_subtype_of(erased, root)),
            None => false
        }
    }
}

/// In-memory [`TypeOracle`].
///
/// Declarations keep their registration order, which keeps every derived
/// listing deterministic.
#[derive(Debug, Clone, Default)]
pub struct TypeUniverse {
    classes: IndexMap<TypeName, ClassDecl>
}

impl TypeUniverse {
    /// Empty universe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Universe pre-populated with the platform types the generator relies
    /// on: `java.lang.Object`, `java.lang.String`, the core collection
    /// interfaces with their type parameters, and the `Default` group.
    pub fn with_platform_types() -> Self {
        let object = || TypeRef::class("java.lang.Object");
        let mut universe = Self::new();
        universe
            .insert(ClassDecl::class("java.lang.Object"))
            .insert(ClassDecl::class("java.lang.String").extends("java.lang.Object"))
            .insert(ClassDecl::interface("java.lang.Iterable").type_param("T", object()))
            .insert(
                ClassDecl::interface("java.util.Collection")
                    .type_param("E", object())
                    .implements("java.lang.Iterable")
            )
            .insert(
                ClassDecl::interface("java.util.List")
                    .type_param("E", object())
                    .implements("java.util.Collection")
            )
            .insert(
                ClassDecl::interface("java.util.Set")
                    .type_param("E", object())
                    .implements("java.util.Collection")
            )
            .insert(
                ClassDecl::interface("java.util.Map")
                    .type_param("K", object())
                    .type_param("V", object())
            )
            .insert(ClassDecl::interface("javax.validation.groups.Default"));
        universe
    }

    /// Register (or replace) a declaration.
    pub fn insert(&mut self, decl: ClassDecl) -> &mut Self {
        self.classes.insert(decl.name.clone(), decl);
        self
    }

    /// Register a declaration, consuming and returning the universe.
    #[must_use]
    pub fn with(mut self, decl: ClassDecl) -> Self {
        self.insert(decl);
        self
    }

    /// Load declarations from a JSON array and register them on top of
    /// the platform types.
    pub fn from_json(json: &str) -> Result<Self, GenerateError> {
        let decls: Vec<ClassDecl> = serde_json::from_str(json)?;
        let mut universe = Self::with_platform_types();
        for decl in decls {
            universe.insert(decl);
        }
        Ok(universe)
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check for an empty universe.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// All declarations in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassDecl> {
        self.classes.values()
    }
}

impl TypeOracle for TypeUniverse {
    fn find_class(&self, name: &TypeName) -> Option<&ClassDecl> {
        self.classes.get(name)
    }
}
