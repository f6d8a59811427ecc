// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! One resolved data type.
//!
//! A [`ResolvedType`] pairs a host class declaration with the descriptor the
//! constraint engine produced for it and answers the structural questions
//! generated code cannot ask at run time: which field or getter declares a
//! property, what element type a cascade reaches, and which properties are
//! readable.
//!
//! # Association unwrapping
//!
//! | Declared type | Element type |
//! |---------------|--------------|
//! | `Employee[]` | `Employee` |
//! | `List<Employee>` | `Employee` |
//! | `Map<String, Employee>` | `Employee` (last argument) |
//! | raw `List` | bound of `List`'s last type parameter |
//! | `Employee` | `Employee` |
//! | `T extends Employee` | unwrapped bound |
//! | `int` | none |

use std::collections::HashSet;

use tracing::debug;

use crate::host::{BeanDescriptor, ClassDecl, TypeName, TypeOracle, TypeRef, qualify};

/// Suffix of every generated per-type validator name.
pub const VALIDATOR_SUFFIX: &str = "Validator";

/// Getter name of `property`: `salary` becomes `getSalary`.
pub fn getter_name(property: &str) -> String {
    let mut chars = property.chars();
    match chars.next() {
        Some(first) => format!("get{}{}", first.to_uppercase(), chars.as_str()),
        None => "get".to_string()
    }
}

/// Property name of an accessor suffix, following bean naming rules.
///
/// `Salary` becomes `salary`; a suffix starting with two capitals (`URL`)
/// is kept as is.
fn decapitalize(suffix: &str) -> String {
    let mut chars = suffix.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) if first.is_uppercase() && second.is_uppercase() => {
            suffix.to_string()
        }
        (Some(first), _) => {
            let mut name: String = first.to_lowercase().collect();
            name.push_str(&suffix[first.len_utf8()..]);
            name
        }
        (None, _) => String::new()
    }
}

/// Property reachable through a zero-argument accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadableProperty {
    /// Property name (`salary`).
    pub name: String,

    /// Host accessor name (`getSalary`).
    pub getter: String,

    /// Accessor return type.
    pub ty: TypeRef
}

impl ReadableProperty {
    fn from_accessor(name: &str, returns: &TypeRef) -> Option<Self> {
        let suffix = if let Some(rest) = name.strip_prefix("get") {
            rest
        } else if returns.is_boolean() {
            name.strip_prefix("is")?
        } else {
            return None;
        };
        if suffix.is_empty() {
            return None;
        }
        Some(Self {
            name:   decapitalize(suffix),
            getter: name.to_string(),
            ty:     returns.clone()
        })
    }
}

/// Data type together with its constraint descriptor.
///
/// Created once per type and run by [`TypeCache`](super::TypeCache).
#[derive(Debug, Clone)]
pub struct ResolvedType {
    decl:       ClassDecl,
    descriptor: BeanDescriptor
}

impl ResolvedType {
    /// Pair a declaration with its descriptor.
    pub fn new(decl: ClassDecl, descriptor: BeanDescriptor) -> Self {
        Self {
            decl,
            descriptor
        }
    }

    /// Input type.
    pub fn ty(&self) -> &TypeName {
        &self.decl.name
    }

    /// Host declaration of the input type.
    pub fn decl(&self) -> &ClassDecl {
        &self.decl
    }

    /// Engine descriptor of the input type.
    pub fn descriptor(&self) -> &BeanDescriptor {
        &self.descriptor
    }

    /// Name of the per-type validator, e.g. `_EmployeeValidator`.
    ///
    /// Nested types keep their enclosing names: `Outer$Inner` becomes
    /// `_Outer_InnerValidator`.
    pub fn output_name(&self) -> String {
        format!("_{}{}", self.decl.name.source_name(), VALIDATOR_SUFFIX).replace('.', "_")
    }

    /// Package of the per-type validator: the input type's package.
    pub fn output_package(&self) -> &str {
        self.decl.name.package()
    }

    /// `output_package.output_name`.
    pub fn qualified_output_name(&self) -> String {
        qualify(self.output_package(), &self.output_name())
    }

    /// Expression naming the per-type validator singleton.
    pub fn singleton_access_expression(&self) -> String {
        format!("{}.INSTANCE", self.qualified_output_name())
    }

    /// Input type followed by its declared superclasses.
    fn lineage<'a>(&'a self, types: &'a dyn TypeOracle) -> impl Iterator<Item = &'a ClassDecl> {
        let ancestors = match &self.decl.superclass {
            Some(parent) => types.superclass_chain(parent),
            None => Vec::new()
        };
        std::iter::once(&self.decl).chain(ancestors)
    }

    /// Declared type of field `property` on this type or an ancestor.
    pub fn field_type(&self, types: &dyn TypeOracle, property: &str) -> Option<TypeRef> {
        self.lineage(types)
            .find_map(|decl| decl.field_named(property))
            .map(|field| field.ty.clone())
    }

    /// Return type of the getter of `property` on this type or an ancestor.
    pub fn getter_type(&self, types: &dyn TypeOracle, property: &str) -> Option<TypeRef> {
        let getter = getter_name(property);
        self.lineage(types)
            .find_map(|decl| decl.accessor_named(&getter))
            .and_then(|method| method.returns.clone())
    }

    /// Check whether `property` is declared as a field along the
    /// superclass chain.
    pub fn has_field(&self, types: &dyn TypeOracle, property: &str) -> bool {
        self.field_type(types, property).is_some()
    }

    /// Check whether `property` has a zero-argument getter along the
    /// superclass chain.
    pub fn has_getter(&self, types: &dyn TypeOracle, property: &str) -> bool {
        self.getter_type(types, property).is_some()
    }

    /// Type a cascade through `property` reaches.
    ///
    /// Reads the declared type of the field (`use_field`) or of the getter,
    /// then unwraps arrays and generic containers. `None` means the property
    /// is not declared along the superclass chain, or it unwraps to a
    /// primitive.
    pub fn association_element_type(
        &self,
        types: &dyn TypeOracle,
        property: &str,
        use_field: bool
    ) -> Option<TypeRef> {
        let declared = if use_field {
            self.field_type(types, property)
        } else {
            self.getter_type(types, property)
        }?;
        unwrap_element(types, &declared)
    }

    /// Properties with a readable accessor, sorted by name.
    ///
    /// `getX()` accessors always count; `isX()` only when returning
    /// `boolean`. An accessor on a subclass hides the same property on an
    /// ancestor.
    pub fn readable_properties(&self, types: &dyn TypeOracle) -> Vec<ReadableProperty> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut properties: Vec<ReadableProperty> = Vec::new();
        for decl in self.lineage(types) {
            for method in decl.methods.iter().filter(|m| m.is_accessor()) {
                let Some(returns) = &method.returns else {
                    continue;
                };
                if let Some(property) = ReadableProperty::from_accessor(&method.name, returns)
                    && seen.insert(property.name.clone())
                {
                    properties.push(property);
                }
            }
        }
        properties.sort_by(|a, b| a.name.cmp(&b.name));
        properties
    }
}

fn unwrap_element(types: &dyn TypeOracle, declared: &TypeRef) -> Option<TypeRef> {
    match declared {
        TypeRef::Primitive(_) => None,
        TypeRef::Array(component) => Some(component.as_ref().clone()),
        TypeRef::Parameterized {
            raw,
            args
        } => {
            if args.len() > 2 {
                debug!(container = %raw, arity = args.len(), "using last type argument");
            }
            match args.last() {
                Some(last) => Some(last.clone()),
                None => unwrap_raw(types, raw, declared)
            }
        }
        TypeRef::Class(name) => unwrap_raw(types, name, declared),
        TypeRef::Variable {
            bound, ..
        } => unwrap_element(types, bound)
    }
}

fn unwrap_raw(types: &dyn TypeOracle, raw: &TypeName, declared: &TypeRef) -> Option<TypeRef> {
    match types
        .find_class(raw)
        .and_then(|decl| decl.type_params.last())
    {
        Some(param) => Some(param.bound.clone()),
        None => Some(declared.clone())
    }
}
