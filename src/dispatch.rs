// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dispatching validator emitter.
//!
//! Produces one artifact per [`GenerationSpec`]: a struct named after the
//! marker that routes every validation call to the right per-type validator
//! with an ordered chain of static class checks.
//!
//! # Architecture
//!
//! ```text
//! dispatch.rs (coordinator)
//! ├── plan.rs        - DispatchPlan: ordered types, group steps, reflected properties
//! ├── groups.rs      - Group-chain metadata builder
//! ├── validate.rs    - validate, validate_property, validate_value
//! ├── constraints.rs - constraints_for_class
//! ├── reflect.rs     - get_property
//! └── tests.rs       - Unit tests
//! ```
//!
//! # Dispatch Rules
//!
//! | Operation | Guard | Fallback |
//! |-----------|-------|----------|
//! | `validate` | `object.is_instance_of(T)` | `UnsupportedType` |
//! | `validate_property` | `object.is_instance_of(T)` | `UnsupportedType` |
//! | `validate_value` | `bean_type == T` | `UnsupportedType` |
//! | `constraints_for_class` | `clazz == T` | `UnsupportedType` |
//! | `get_property` | `object.is_exactly(T)`, then property name | `NoSuchProperty` / `ClassNotReflected` |
//!
//! Branches follow most-specific-first order, so an instance of a subtype
//! never reaches an ancestor's branch.
//!
//! # Generated Code
//!
//! For targets `Manager` and `Employee` (`Manager extends Employee`):
//!
//! ```rust,ignore
//! pub struct AcmeValidator {
//!     groups:       OnceLock<GroupChainMetadata>,
//!     interpolator: Box<dyn MessageInterpolator>,
//!     traversable:  Box<dyn TraversableResolver>,
//! }
//!
//! impl AcmeValidator {
//!     pub const SUPPORTED_TYPES: &'static [&'static str] =
//!         &["com.acme.Manager", "com.acme.Employee"];
//!
//!     pub fn validate(&self, object: &dyn Bean, groups: &[&'static Class])
//!         -> Result<Vec<ConstraintViolation>, ValidationError>
//!     {
//!         if object.is_instance_of(<Manager as BeanClass>::CLASS) {
//!             let context = ValidationContext::new(/* ... */);
//!             return BeanValidator::validate(&_ManagerValidator::INSTANCE, &context, object, groups);
//!         }
//!         if object.is_instance_of(<Employee as BeanClass>::CLASS) { /* ... */ }
//!         Err(ValidationError::UnsupportedType { /* ... */ })
//!     }
//!     // validate_property, validate_value, constraints_for_class, get_property
//! }
//! ```

mod constraints;
mod groups;
mod plan;
mod reflect;
mod validate;

use proc_macro2::TokenStream;
use quote::quote;

pub use self::plan::{DispatchPlan, GroupStep, ReflectedType};
use crate::{
    emit::{SourceEmitter, item_path, type_path},
    error::GenerateError,
    generation::GenerationSpec,
    host::{HostContext, TypeName},
    metadata::{ResolvedType, TypeCache}
};

/// Paths shared by every rendered branch.
pub(crate) struct Paths<'a> {
    rt:   &'a syn::Path,
    root: &'a syn::Path
}

impl<'a> Paths<'a> {
    fn new(spec: &'a GenerationSpec) -> Self {
        Self {
            rt:   &spec.config.runtime,
            root: &spec.config.root
        }
    }

    /// Rust path of a host type.
    fn bean_type(&self, name: &TypeName) -> Result<TokenStream, GenerateError> {
        type_path(self.root, name)
    }

    /// `<T as BeanClass>::CLASS`.
    fn class_of(&self, name: &TypeName) -> Result<TokenStream, GenerateError> {
        let ty = self.bean_type(name)?;
        let rt = self.rt;
        Ok(quote! { <#ty as #rt::BeanClass>::CLASS })
    }

    /// Rust path of a type's marker struct.
    fn marker(&self, resolved: &ResolvedType) -> Result<TokenStream, GenerateError> {
        item_path(self.root, resolved.output_package(), &resolved.output_name())
    }
}

/// One type branch: guard class and validator singleton.
pub(crate) struct Branch {
    ty:     TokenStream,
    class:  TokenStream,
    marker: TokenStream
}

impl Branch {
    fn new(paths: &Paths<'_>, resolved: &ResolvedType) -> Result<Self, GenerateError> {
        Ok(Self {
            ty:     paths.bean_type(resolved.ty())?,
            class:  paths.class_of(resolved.ty())?,
            marker: paths.marker(resolved)?
        })
    }
}

/// Emitter of one dispatching validator.
///
/// # Example
///
/// ```rust
/// use bean_dispatch::{
///     BeanDescriptor, ClassDecl, DescriptorTable, DispatchEmitter, GenerationSpec,
///     GeneratorConfig, HostContext, MemoryArtifacts, SourceEmitter, TypeCache, TypeUniverse
/// };
///
/// let types = TypeUniverse::with_platform_types()
///     .with(ClassDecl::class("com.acme.Employee"))
///     .with(ClassDecl::class("com.acme.Manager").extends("com.acme.Employee"));
/// let engine = DescriptorTable::new()
///     .with(BeanDescriptor::new("com.acme.Employee"))
///     .with(BeanDescriptor::new("com.acme.Manager"));
/// let spec = GenerationSpec::new("AcmeValidator", ["com.acme.Employee", "com.acme.Manager"]).unwrap();
///
/// let mut artifacts = MemoryArtifacts::new();
/// let config = GeneratorConfig::default();
/// let mut host = HostContext::new(&types, &engine, &mut artifacts, &config);
/// let mut cache = TypeCache::new();
/// let mut emitter = DispatchEmitter::new(&spec, &mut cache, &mut host).unwrap();
///
/// let ordered: Vec<&str> = emitter.plan().ordered_names().collect();
/// assert_eq!(ordered, ["com.acme.Manager", "com.acme.Employee"]);
///
/// let name = emitter.generate(&mut *host.artifacts).unwrap();
/// assert_eq!(name, "com.acme.AcmeValidator");
/// ```
pub struct DispatchEmitter<'s> {
    spec: &'s GenerationSpec,
    plan: DispatchPlan
}

impl<'s> DispatchEmitter<'s> {
    /// Resolve every target of `spec` and plan the dispatch chains.
    ///
    /// # Errors
    ///
    /// Any resolution failure of a target, reflected type or group.
    pub fn new(
        spec: &'s GenerationSpec,
        cache: &mut TypeCache,
        host: &mut HostContext<'_>
    ) -> Result<Self, GenerateError> {
        let plan = DispatchPlan::build(spec, cache, host)?;
        Ok(Self {
            spec,
            plan
        })
    }

    /// Planned dispatch.
    pub fn plan(&self) -> &DispatchPlan {
        &self.plan
    }

    /// Render the validator struct and its impl blocks.
    pub fn render(&self) -> Result<TokenStream, GenerateError> {
        let paths = Paths::new(self.spec);
        let rt = paths.rt;
        let name = &self.spec.name;
        let vis = &self.spec.vis;

        let branches = self
            .plan
            .ordered()
            .iter()
            .map(|resolved| Branch::new(&paths, resolved))
            .collect::<Result<Vec<_>, _>>()?;

        let supported: Vec<&str> = self.plan.ordered_names().collect();
        let doc = format!(" Dispatching validator over {}.", supported.join(", "));

        let groups = groups::render(&paths, self.plan.group_steps())?;
        let validate = validate::render_validate(rt, &branches);
        let validate_property = validate::render_validate_property(rt, &branches);
        let validate_value = validate::render_validate_value(rt, &branches);
        let constraints = constraints::render(rt, &branches);
        let get_property = reflect::render(&paths, self.plan.reflected())?;

        Ok(quote! {
            #[doc = #doc]
            #vis struct #name {
                groups: ::std::sync::OnceLock<#rt::GroupChainMetadata>,
                interpolator: ::std::boxed::Box<dyn #rt::MessageInterpolator>,
                traversable: ::std::boxed::Box<dyn #rt::TraversableResolver>
            }

            impl #name {
                /// Qualified names of every dispatched type, most specific first.
                pub const SUPPORTED_TYPES: &'static [&'static str] = &[#(#supported),*];

                /// Validator with the default interpolator and traversable resolver.
                pub fn new() -> Self {
                    Self::with_collaborators(
                        ::std::boxed::Box::new(#rt::DefaultMessageInterpolator),
                        ::std::boxed::Box::new(#rt::DefaultTraversableResolver)
                    )
                }

                /// Validator with custom collaborators.
                pub fn with_collaborators(
                    interpolator: ::std::boxed::Box<dyn #rt::MessageInterpolator>,
                    traversable: ::std::boxed::Box<dyn #rt::TraversableResolver>
                ) -> Self {
                    let validator = Self {
                        groups: ::std::sync::OnceLock::new(),
                        interpolator,
                        traversable
                    };
                    validator.groups_metadata();
                    validator
                }

                #groups

                /// Group-chain metadata, built on first use.
                pub fn groups_metadata(&self) -> &#rt::GroupChainMetadata {
                    self.groups.get_or_init(Self::create_groups_metadata)
                }

                #validate
                #validate_property
                #validate_value
                #constraints
                #get_property
            }

            impl ::std::default::Default for #name {
                fn default() -> Self {
                    Self::new()
                }
            }
        })
    }
}

impl SourceEmitter for DispatchEmitter<'_> {
    fn output_package(&self) -> String {
        self.spec.package.clone()
    }

    fn output_name(&self) -> String {
        self.spec.name.to_string()
    }

    fn write_body(&mut self) -> Result<TokenStream, GenerateError> {
        self.render()
    }
}
