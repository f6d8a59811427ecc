// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Static class handles.
//!
//! Generated validators identify bean types by [`Class`] handles that live in
//! `static` items. Handles are compared by fully-qualified name, so two
//! handles emitted for the same type in different crates still match.

use std::{any::Any, fmt};

/// Static description of one bean type.
///
/// Carries only what dispatch needs: the qualified name and the links used
/// to answer "is this an instance of that".
#[derive(Debug)]
pub struct Class {
    /// Fully-qualified name (e.g., `"com.acme.Manager"`).
    name: &'static str,

    /// Direct superclass, if any.
    superclass: Option<&'static Class>,

    /// Directly implemented interfaces.
    interfaces: &'static [&'static Class]
}

impl Class {
    /// Create a class handle.
    ///
    /// # Arguments
    ///
    /// * `name` - Fully-qualified name
    /// * `superclass` - Direct superclass, `None` for roots and interfaces
    /// * `interfaces` - Directly implemented (or extended) interfaces
    pub const fn new(
        name: &'static str,
        superclass: Option<&'static Class>,
        interfaces: &'static [&'static Class]
    ) -> Self {
        Self {
            name,
            superclass,
            interfaces
        }
    }

    /// Fully-qualified name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Name without the package prefix.
    ///
    /// ```rust
    /// use bean_dispatch_core::Class;
    ///
    /// static EMPLOYEE: Class = Class::new("com.acme.Employee", None, &[]);
    /// assert_eq!(EMPLOYEE.simple_name(), "Employee");
    /// ```
    pub fn simple_name(&self) -> &'static str {
        match self.name.rfind('.') {
            Some(idx) => &self.name[idx + 1..],
            None => self.name
        }
    }

    /// Direct superclass.
    pub const fn superclass(&self) -> Option<&'static Class> {
        self.superclass
    }

    /// Directly implemented interfaces.
    pub const fn interfaces(&self) -> &'static [&'static Class] {
        self.interfaces
    }

    /// Check whether `other` is this class or one of its subtypes.
    ///
    /// Walks the superclass chain and every interface of `other`.
    pub fn is_assignable_from(&self, other: &Class) -> bool {
        if self == other {
            return true;
        }
        if let Some(parent) = other.superclass
            && self.is_assignable_from(parent)
        {
            return true;
        }
        other
            .interfaces
            .iter()
            .any(|iface| self.is_assignable_from(iface))
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Class {}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Object-side access to the run-time class of a bean.
///
/// Implemented for every bean type that a generated validator dispatches on.
pub trait Bean: Any + 'static {
    /// Run-time class of this object.
    fn class(&self) -> &'static Class;
}

/// Type-side access to the class handle of a bean type.
pub trait BeanClass {
    /// Class handle for `Self`.
    const CLASS: &'static Class;
}

impl dyn Bean {
    /// Check whether this object is an instance of `class` or a subtype.
    pub fn is_instance_of(&self, class: &Class) -> bool {
        class.is_assignable_from(self.class())
    }

    /// Check whether the run-time class of this object is exactly `class`.
    pub fn is_exactly(&self, class: &Class) -> bool {
        self.class() == class
    }

    /// Downcast to a concrete bean type.
    pub fn downcast_ref<T: Bean>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}
