// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Host type model.
//!
//! Language-neutral description of the data classes the generator reads:
//! binary names, declared static types, and class declarations with their
//! fields, zero-argument accessors and inheritance links.
//!
//! # Names
//!
//! | Binary name | Package | Source name | Simple name |
//! |-------------|---------|-------------|-------------|
//! | `com.acme.Manager` | `com.acme` | `Manager` | `Manager` |
//! | `com.acme.Outer$Inner` | `com.acme` | `Outer.Inner` | `Inner` |
//! | `Root` | `` | `Root` | `Root` |

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fully-qualified binary type name.
///
/// Packages are separated by `.`, nested types by `$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    /// Wrap a binary name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Binary name as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Declaring package; empty for the default package.
    pub fn package(&self) -> &str {
        match self.0.rfind('.') {
            Some(idx) => &self.0[..idx],
            None => ""
        }
    }

    /// Name inside the package, with nested types joined by `.`.
    ///
    /// ```rust
    /// use bean_dispatch::TypeName;
    ///
    /// assert_eq!(TypeName::new("com.acme.Outer$Inner").source_name(), "Outer.Inner");
    /// ```
    pub fn source_name(&self) -> String {
        let local = match self.0.rfind('.') {
            Some(idx) => &self.0[idx + 1..],
            None => self.0.as_str()
        };
        local.replace('$', ".")
    }

    /// Innermost simple name.
    pub fn simple_name(&self) -> &str {
        self.0
            .rsplit(['.', '$'])
            .next()
            .unwrap_or(self.0.as_str())
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Declared static type of a field, accessor result or type parameter bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    /// Primitive such as `int` or `boolean`.
    Primitive(String),

    /// Class or interface used without type arguments.
    Class(TypeName),

    /// Generic type with explicit arguments, e.g. `Map<String, Employee>`.
    Parameterized {
        /// Generic type.
        raw:  TypeName,
        /// Type arguments in declared order.
        args: Vec<TypeRef>
    },

    /// Array of the component type.
    Array(Box<TypeRef>),

    /// Type variable or bounded wildcard, represented by its bound.
    Variable {
        /// Variable name (`T`, `?`).
        name:  String,
        /// Upper bound.
        bound: Box<TypeRef>
    }
}

impl TypeRef {
    /// Plain class reference.
    pub fn class(name: impl Into<TypeName>) -> Self {
        Self::Class(name.into())
    }

    /// Parameterized reference.
    pub fn parameterized(raw: impl Into<TypeName>, args: Vec<TypeRef>) -> Self {
        Self::Parameterized {
            raw: raw.into(),
            args
        }
    }

    /// Array of `component`.
    pub fn array(component: TypeRef) -> Self {
        Self::Array(Box::new(component))
    }

    /// Type variable with an explicit bound.
    pub fn variable(name: impl Into<String>, bound: TypeRef) -> Self {
        Self::Variable {
            name:  name.into(),
            bound: Box::new(bound)
        }
    }

    /// Primitive type.
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::Primitive(name.into())
    }

    /// Class or interface this type erases to.
    ///
    /// Arrays and primitives have no class erasure.
    pub fn erasure(&self) -> Option<&TypeName> {
        match self {
            Self::Class(name) => Some(name),
            Self::Parameterized {
                raw, ..
            } => Some(raw),
            Self::Variable {
                bound, ..
            } => bound.erasure(),
            Self::Array(_) | Self::Primitive(_) => None
        }
    }

    /// Check for an array type.
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Check for primitive `boolean`.
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Primitive(name) if name == "boolean")
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(name) => f.write_str(name),
            Self::Class(name) => write!(f, "{name}"),
            Self::Parameterized {
                raw,
                args
            } => {
                write!(f, "{raw}<")?;
                for (idx, arg) in args.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            Self::Array(component) => write!(f, "{component}[]"),
            Self::Variable {
                name, ..
            } => f.write_str(name)
        }
    }
}

/// Whether a declaration is a class or an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    /// Concrete or abstract class.
    #[default]
    Class,

    /// Interface.
    Interface
}

/// Formal type parameter of a generic declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParam {
    /// Parameter name (e.g., `E`).
    pub name: String,

    /// First declared bound; `java.lang.Object` when unbounded.
    pub bound: TypeRef
}

/// Declared field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Field name.
    pub name: String,

    /// Declared static type.
    pub ty: TypeRef
}

/// Declared method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDecl {
    /// Method name as declared (e.g., `getSalary`).
    pub name: String,

    /// Parameter types.
    #[serde(default)]
    pub params: Vec<TypeRef>,

    /// Return type; `None` for `void`.
    #[serde(default)]
    pub returns: Option<TypeRef>
}

impl MethodDecl {
    /// Check for a zero-argument method returning a value.
    pub fn is_accessor(&self) -> bool {
        self.params.is_empty() && self.returns.is_some()
    }
}

/// Declaration of one class or interface.
///
/// # Example
///
/// ```rust
/// use bean_dispatch::{ClassDecl, TypeRef};
///
/// let manager = ClassDecl::class("com.acme.Manager")
///     .extends("com.acme.Employee")
///     .field("salary", TypeRef::primitive("long"))
///     .getter("getSalary", TypeRef::primitive("long"));
///
/// assert!(manager.field_named("salary").is_some());
/// assert!(manager.accessor_named("getSalary").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    /// Binary name.
    pub name: TypeName,

    /// Class or interface.
    #[serde(default)]
    pub kind: ClassKind,

    /// Direct superclass.
    #[serde(default)]
    pub superclass: Option<TypeName>,

    /// Directly implemented or extended interfaces.
    #[serde(default)]
    pub interfaces: Vec<TypeName>,

    /// Formal type parameters.
    #[serde(default)]
    pub type_params: Vec<TypeParam>,

    /// Declared fields (not inherited ones).
    #[serde(default)]
    pub fields: Vec<FieldDecl>,

    /// Declared methods (not inherited ones).
    #[serde(default)]
    pub methods: Vec<MethodDecl>,

    /// Members of the group sequence declared on this type, if any.
    #[serde(default)]
    pub group_sequence: Option<Vec<TypeName>>
}

impl ClassDecl {
    fn with_kind(name: impl Into<TypeName>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            superclass: None,
            interfaces: Vec::new(),
            type_params: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            group_sequence: None
        }
    }

    /// Start a class declaration.
    pub fn class(name: impl Into<TypeName>) -> Self {
        Self::with_kind(name, ClassKind::Class)
    }

    /// Start an interface declaration.
    pub fn interface(name: impl Into<TypeName>) -> Self {
        Self::with_kind(name, ClassKind::Interface)
    }

    /// Set the superclass.
    #[must_use]
    pub fn extends(mut self, superclass: impl Into<TypeName>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    /// Add an implemented (or, for interfaces, extended) interface.
    #[must_use]
    pub fn implements(mut self, interface: impl Into<TypeName>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Add a formal type parameter bounded by `bound`.
    #[must_use]
    pub fn type_param(mut self, name: impl Into<String>, bound: TypeRef) -> Self {
        self.type_params.push(TypeParam {
            name: name.into(),
            bound
        });
        self
    }

    /// Add a field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.fields.push(FieldDecl {
            name: name.into(),
            ty
        });
        self
    }

    /// Add a zero-argument method returning `returns`.
    #[must_use]
    pub fn getter(mut self, name: impl Into<String>, returns: TypeRef) -> Self {
        self.methods.push(MethodDecl {
            name:    name.into(),
            params:  Vec::new(),
            returns: Some(returns)
        });
        self
    }

    /// Add an arbitrary method.
    #[must_use]
    pub fn method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    /// Mark this type as a group sequence over `members`.
    #[must_use]
    pub fn group_sequence(mut self, members: Vec<TypeName>) -> Self {
        self.group_sequence = Some(members);
        self
    }

    /// Check for an interface.
    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface
    }

    /// Field declared directly on this type.
    pub fn field_named(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Zero-argument, value-returning method declared directly on this type.
    pub fn accessor_named(&self, name: &str) -> Option<&MethodDecl> {
        self.methods
            .iter()
            .find(|m| m.name == name && m.is_accessor())
    }
}
