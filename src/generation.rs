// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! What one dispatching validator covers.
//!
//! A [`GenerationSpec`] is built either in code or from a marker item:
//!
//! ```rust,ignore
//! #[validator(targets(com::acme::Manager, com::acme::Employee))]
//! pub struct AcmeValidator;
//! ```
//!
//! Marker paths name host types by package: `com::acme::Manager` is
//! `com.acme.Manager`. Keyword segments may be written raw (`r#type`).
//!
//! ```text
//! generation.rs (coordinator, GenerationSpec)
//! ├── attrs.rs - ValidatorAttrs (darling parsing struct)
//! └── tests.rs - Unit tests
//! ```

mod attrs;

use darling::FromDeriveInput;
use syn::{DeriveInput, Ident, Visibility, ext::IdentExt};

pub use self::attrs::ValidatorAttrs;
use crate::{
    config::GeneratorConfig,
    emit::ident,
    error::GenerateError,
    host::{TypeName, qualify}
};

/// Group validated when none is configured.
pub const DEFAULT_GROUP: &str = "javax.validation.groups.Default";

/// Host type named by a marker path.
fn type_name_of(path: &syn::Path) -> TypeName {
    let segments: Vec<String> = path
        .segments
        .iter()
        .map(|segment| segment.ident.unraw().to_string())
        .collect();
    TypeName::new(segments.join("."))
}

fn type_names_of(paths: &[syn::Path]) -> Vec<TypeName> {
    paths.iter().map(type_name_of).collect()
}

fn or_default_group(groups: Vec<TypeName>) -> Vec<TypeName> {
    if groups.is_empty() {
        vec![TypeName::new(DEFAULT_GROUP)]
    } else {
        groups
    }
}

/// Target types, groups and settings of one dispatching validator.
///
/// # Example
///
/// ```rust
/// use bean_dispatch::GenerationSpec;
///
/// let spec = GenerationSpec::new("AcmeValidator", ["com.acme.Manager", "com.acme.Employee"])
///     .unwrap()
///     .with_groups(["javax.validation.groups.Default", "com.acme.Strict"]);
///
/// assert_eq!(spec.package, "com.acme");
/// assert_eq!(spec.qualified_output_name(), "com.acme.AcmeValidator");
/// ```
#[derive(Debug, Clone)]
pub struct GenerationSpec {
    /// Name of the dispatching validator.
    pub name: Ident,

    /// Visibility of the dispatching validator.
    pub vis: Visibility,

    /// Output package (dotted).
    pub package: String,

    /// Data types to dispatch over, in declared order.
    ///
    /// Never empty.
    pub targets: Vec<TypeName>,

    /// Validation groups in declared order.
    ///
    /// Never empty; defaults to [`DEFAULT_GROUP`].
    pub groups: Vec<TypeName>,

    /// Types that get property access; empty means every resolved type.
    pub reflect: Vec<TypeName>,

    /// Run settings.
    pub config: GeneratorConfig
}

impl GenerationSpec {
    /// Spec named `name` over `targets`, validating the default group.
    ///
    /// The output package is the first target's package.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::InvalidName`] if `name` is not an identifier
    /// - [`GenerateError::InvalidSpec`] if `targets` is empty
    pub fn new<I, T>(name: &str, targets: I) -> Result<Self, GenerateError>
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>
    {
        let name = ident(name)?;
        let targets: Vec<TypeName> = targets.into_iter().map(Into::into).collect();
        let Some(first) = targets.first() else {
            return Err(darling::Error::custom("at least one target type is required")
                .with_span(&name)
                .into());
        };
        Ok(Self {
            package: first.package().to_string(),
            name,
            vis: syn::parse_quote!(pub),
            targets,
            groups: or_default_group(Vec::new()),
            reflect: Vec::new(),
            config: GeneratorConfig::default()
        })
    }

    /// Replace the validation groups; an empty list means the default group.
    #[must_use]
    pub fn with_groups<I, T>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>
    {
        self.groups = or_default_group(groups.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict property access to `reflect`.
    #[must_use]
    pub fn with_reflect<I, T>(mut self, reflect: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>
    {
        self.reflect = reflect.into_iter().map(Into::into).collect();
        self
    }

    /// Override the output package.
    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Replace the run settings.
    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Parse a spec from a `#[validator(...)]` marker.
    ///
    /// # Errors
    ///
    /// - Applied to anything but a unit struct
    /// - Missing or empty `targets(...)`
    /// - Malformed attribute values
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = ValidatorAttrs::from_derive_input(input)?;

        let targets = type_names_of(&attrs.targets);
        let Some(first) = targets.first() else {
            return Err(darling::Error::custom(
                "validator requires at least one type in `targets(...)`"
            )
            .with_span(&attrs.ident));
        };
        let package = attrs
            .package
            .clone()
            .unwrap_or_else(|| first.package().to_string());

        let mut config = GeneratorConfig::default()
            .with_runtime(attrs.runtime)
            .with_root(attrs.root);
        if !attrs.containers.is_empty() {
            config = config.with_container_roots(type_names_of(&attrs.containers));
        }

        Ok(Self {
            name: attrs.ident,
            vis: attrs.vis,
            package,
            targets,
            groups: or_default_group(type_names_of(&attrs.groups)),
            reflect: type_names_of(&attrs.reflect),
            config
        })
    }

    /// Parse a spec from marker source text.
    pub fn parse_str(source: &str) -> Result<Self, GenerateError> {
        let input: DeriveInput = syn::parse_str(source)?;
        Ok(Self::from_derive_input(&input)?)
    }

    /// Qualified name of the dispatching validator.
    pub fn qualified_output_name(&self) -> String {
        qualify(&self.package, &self.name.to_string())
    }
}
