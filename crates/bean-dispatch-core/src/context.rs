// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-call validation context and the per-type validator contract.
//!
//! A generated dispatching validator picks the per-type validator for the
//! presented bean, binds a [`ValidationContext`] and delegates:
//!
//! ```rust,ignore
//! if <dyn Bean>::is_instance_of(object, <Manager as BeanClass>::CLASS) {
//!     let context = ValidationContext::new(
//!         object.class(),
//!         Some(object),
//!         _ManagerValidator::INSTANCE.constraints(self.groups_metadata()),
//!         &*self.interpolator,
//!         &*self.traversable,
//!         self.groups_metadata()
//!     );
//!     return _ManagerValidator::INSTANCE.validate(&context, object, groups);
//! }
//! ```

use std::any::Any;

use crate::{class::Bean, class::Class, error::ValidationError, groups::GroupChainMetadata};

/// Constraint summary of one bean type, as seen at run time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeanDescriptor {
    /// Described bean type.
    pub class: &'static Class,

    /// Names of properties carrying constraints or cascades.
    pub constrained_properties: &'static [&'static str],

    /// Whether the type carries any constraint at all.
    pub bean_constrained: bool
}

impl BeanDescriptor {
    /// Check whether `property` is constrained.
    pub fn is_property_constrained(&self, property: &str) -> bool {
        self.constrained_properties.contains(&property)
    }
}

/// One failed constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    /// Qualified name of the root bean class.
    pub root_class: &'static str,

    /// Dotted path from the root bean to the violating value.
    pub property_path: String,

    /// Interpolated message.
    pub message: String
}

/// Turns constraint message templates into user-facing text.
pub trait MessageInterpolator: Send + Sync {
    /// Interpolate `template` for a violation on `property_path`.
    fn interpolate(&self, template: &str, property_path: &str) -> String;
}

/// Interpolator that returns templates unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessageInterpolator;

impl MessageInterpolator for DefaultMessageInterpolator {
    fn interpolate(&self, template: &str, _property_path: &str) -> String {
        template.to_string()
    }
}

/// Decides which properties validation may read and cascade into.
pub trait TraversableResolver: Send + Sync {
    /// Whether `property` of `bean` may be read.
    fn is_reachable(&self, bean: Option<&dyn Bean>, property: &str) -> bool;

    /// Whether `property` of `bean` may be cascaded into.
    fn is_cascadable(&self, bean: Option<&dyn Bean>, property: &str) -> bool;
}

/// Resolver that allows everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTraversableResolver;

impl TraversableResolver for DefaultTraversableResolver {
    fn is_reachable(&self, _bean: Option<&dyn Bean>, _property: &str) -> bool {
        true
    }

    fn is_cascadable(&self, _bean: Option<&dyn Bean>, _property: &str) -> bool {
        true
    }
}

/// State bound for one dispatched call.
pub struct ValidationContext<'a> {
    root_class:   &'static Class,
    root_bean:    Option<&'a dyn Bean>,
    descriptor:   &'static BeanDescriptor,
    interpolator: &'a dyn MessageInterpolator,
    traversable:  &'a dyn TraversableResolver,
    groups:       &'a GroupChainMetadata
}

impl<'a> ValidationContext<'a> {
    /// Bind a context.
    ///
    /// `root_bean` is `None` for value validation, where no instance exists.
    pub fn new(
        root_class: &'static Class,
        root_bean: Option<&'a dyn Bean>,
        descriptor: &'static BeanDescriptor,
        interpolator: &'a dyn MessageInterpolator,
        traversable: &'a dyn TraversableResolver,
        groups: &'a GroupChainMetadata
    ) -> Self {
        Self {
            root_class,
            root_bean,
            descriptor,
            interpolator,
            traversable,
            groups
        }
    }

    /// Static class of the validated root.
    pub const fn root_class(&self) -> &'static Class {
        self.root_class
    }

    /// Validated root bean, if any.
    pub fn root_bean(&self) -> Option<&'a dyn Bean> {
        self.root_bean
    }

    /// Constraints of the matched type.
    pub const fn descriptor(&self) -> &'static BeanDescriptor {
        self.descriptor
    }

    /// Message interpolator.
    pub fn interpolator(&self) -> &'a dyn MessageInterpolator {
        self.interpolator
    }

    /// Traversable resolver.
    pub fn traversable(&self) -> &'a dyn TraversableResolver {
        self.traversable
    }

    /// Group metadata of the dispatching validator.
    pub const fn groups(&self) -> &'a GroupChainMetadata {
        self.groups
    }

    /// Build a violation rooted at this context.
    pub fn violation(&self, property_path: &str, template: &str) -> ConstraintViolation {
        ConstraintViolation {
            root_class:    self.root_class.name(),
            property_path: property_path.to_string(),
            message:       self.interpolator.interpolate(template, property_path)
        }
    }
}

/// Contract implemented by every per-type validator.
///
/// Generated dispatch code reaches implementations through the marker
/// struct's `INSTANCE` constant and never names this trait's implementors
/// any other way.
pub trait BeanValidator: Send + Sync {
    /// Constraints of the validated type under `groups`.
    fn constraints(&self, groups: &GroupChainMetadata) -> &'static BeanDescriptor;

    /// Validate a whole bean.
    fn validate(
        &self,
        context: &ValidationContext<'_>,
        bean: &dyn Bean,
        groups: &[&'static Class]
    ) -> Result<Vec<ConstraintViolation>, ValidationError>;

    /// Validate one property of a bean.
    fn validate_property(
        &self,
        context: &ValidationContext<'_>,
        bean: &dyn Bean,
        property_name: &str,
        groups: &[&'static Class]
    ) -> Result<Vec<ConstraintViolation>, ValidationError>;

    /// Validate a candidate value for one property without an instance.
    fn validate_value(
        &self,
        context: &ValidationContext<'_>,
        bean_class: &'static Class,
        property_name: &str,
        value: &dyn Any,
        groups: &[&'static Class]
    ) -> Result<Vec<ConstraintViolation>, ValidationError>;
}
