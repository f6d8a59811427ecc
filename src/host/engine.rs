// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Constraint-engine seam.
//!
//! The authoritative answers to "which properties are constrained", "which
//! cascade" and "what element class does a cascade carry" come from a real
//! validation engine consulted at build time. [`ConstraintEngine`] is that
//! seam; [`DescriptorTable`] replays descriptors exported from an engine as
//! a JSON snapshot.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{TypeName, TypeRef};
use crate::error::GenerateError;

/// Reason the engine could not describe a type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The type cannot carry constraints (e.g., a primitive wrapper).
    #[error("{0} is not a constrainable bean type")]
    NotABean(TypeName),

    /// The engine has no metadata for the type.
    #[error("no constraint metadata recorded for {0}")]
    Missing(TypeName),

    /// The engine rejected the constraint configuration.
    #[error("{type_name} has an invalid constraint configuration: {reason}")]
    Rejected {
        /// Offending type.
        type_name: TypeName,
        /// Engine-reported reason.
        reason:    String
    }
}

/// One constraint declaration, kept opaque to the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintDecl {
    /// Constraint annotation type (e.g., `javax.validation.constraints.NotNull`).
    pub annotation: TypeName,

    /// Groups the constraint belongs to; empty means `Default`.
    #[serde(default)]
    pub groups: Vec<TypeName>
}

impl ConstraintDecl {
    /// Constraint in the default group.
    pub fn new(annotation: impl Into<TypeName>) -> Self {
        Self {
            annotation: annotation.into(),
            groups:     Vec::new()
        }
    }
}

/// Engine view of one constrained property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Property name.
    pub name: String,

    /// Whether the referenced object(s) must be validated too.
    #[serde(default)]
    pub cascaded: bool,

    /// Element class as the engine sees it (the declared container type
    /// for collection-valued properties).
    pub element_class: TypeRef,

    /// Constraints declared on the property.
    #[serde(default)]
    pub constraints: Vec<ConstraintDecl>
}

impl PropertyDescriptor {
    /// Non-cascaded property carrying `constraints`.
    pub fn constrained(
        name: impl Into<String>,
        element_class: TypeRef,
        constraints: Vec<ConstraintDecl>
    ) -> Self {
        Self {
            name: name.into(),
            cascaded: false,
            element_class,
            constraints
        }
    }

    /// Cascaded property without own constraints.
    pub fn cascaded(name: impl Into<String>, element_class: TypeRef) -> Self {
        Self {
            name: name.into(),
            cascaded: true,
            element_class,
            constraints: Vec::new()
        }
    }
}

/// Engine view of one bean type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeanDescriptor {
    /// Described type.
    pub bean: TypeName,

    /// Class-level constraints.
    #[serde(default)]
    pub class_constraints: Vec<ConstraintDecl>,

    /// Constrained or cascaded properties.
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>
}

impl BeanDescriptor {
    /// Descriptor with no constraints.
    pub fn new(bean: impl Into<TypeName>) -> Self {
        Self {
            bean:              bean.into(),
            class_constraints: Vec::new(),
            properties:        Vec::new()
        }
    }

    /// Add a property.
    #[must_use]
    pub fn property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    /// Add a class-level constraint.
    #[must_use]
    pub fn class_constraint(mut self, constraint: ConstraintDecl) -> Self {
        self.class_constraints.push(constraint);
        self
    }

    /// Check whether the type carries any constraint or cascade.
    pub fn is_bean_constrained(&self) -> bool {
        !self.class_constraints.is_empty()
            || self
                .properties
                .iter()
                .any(|p| p.cascaded || !p.constraints.is_empty())
    }

    /// Properties marked cascaded.
    pub fn cascaded_properties(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.properties.iter().filter(|p| p.cascaded)
    }

    /// Property by name.
    pub fn property_named(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// Build-time constraint validation engine.
pub trait ConstraintEngine {
    /// Describe `ty`, or explain why it cannot be described.
    fn descriptor_for(&self, ty: &TypeName) -> Result<BeanDescriptor, EngineError>;

    /// Check whether `ty` carries any constraint or cascade.
    fn is_constrained(&self, ty: &TypeName) -> bool {
        self.descriptor_for(ty)
            .map(|descriptor| descriptor.is_bean_constrained())
            .unwrap_or(false)
    }
}

/// [`ConstraintEngine`] backed by recorded descriptors.
#[derive(Debug, Clone, Default)]
pub struct DescriptorTable {
    descriptors: IndexMap<TypeName, BeanDescriptor>
}

impl DescriptorTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) a descriptor.
    pub fn insert(&mut self, descriptor: BeanDescriptor) -> &mut Self {
        self.descriptors
            .insert(descriptor.bean.clone(), descriptor);
        self
    }

    /// Record a descriptor, consuming and returning the table.
    #[must_use]
    pub fn with(mut self, descriptor: BeanDescriptor) -> Self {
        self.insert(descriptor);
        self
    }

    /// Load descriptors from a JSON array.
    pub fn from_json(json: &str) -> Result<Self, GenerateError> {
        let descriptors: Vec<BeanDescriptor> = serde_json::from_str(json)?;
        let mut table = Self::new();
        for descriptor in descriptors {
            table.insert(descriptor);
        }
        Ok(table)
    }

    /// Number of recorded descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Check for an empty table.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl ConstraintEngine for DescriptorTable {
    fn descriptor_for(&self, ty: &TypeName) -> Result<BeanDescriptor, EngineError> {
        self.descriptors
            .get(ty)
            .cloned()
            .ok_or_else(|| EngineError::Missing(ty.clone()))
    }
}
