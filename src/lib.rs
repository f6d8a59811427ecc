// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # bean-dispatch
//!
//! Build-time generator of reflection-free dispatching bean validators.
//!
//! A constraint engine is consulted once per data class at build time. The
//! generator then emits Rust source that reproduces the engine's dispatch
//! decisions with static class checks only, for targets where run-time
//! reflection is unavailable.
//!
//! # Pipeline
//!
//! ```text
//! GenerationSpec ──► TypeCache::resolve ──► order_by_specificity ──► DispatchEmitter
//!   (targets,          (engine descriptors,    (subtypes first)        (one artifact)
//!    groups)            marker artifacts,
//!                       cascade discovery)
//! ```
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`host`] | Collaborator seams: type oracle, constraint engine, artifact sink |
//! | [`metadata`] | [`ResolvedType`] and the memoizing [`TypeCache`] |
//! | [`specificity`] | Most-specific-first ordering |
//! | [`emit`] | [`SourceEmitter`] protocol, naming, marker artifacts |
//! | [`dispatch`] | [`DispatchEmitter`] for the dispatching validator |
//! | [`generation`] | [`GenerationSpec`] from code or a `#[validator(...)]` marker |
//!
//! # Quick Start
//!
//! In a `build.rs`, with host metadata exported as JSON snapshots:
//!
//! ```rust,ignore
//! use bean_dispatch::{DescriptorTable, DirArtifacts, TypeUniverse, generate_from_source};
//!
//! let types = TypeUniverse::from_json(&std::fs::read_to_string("meta/types.json")?)?;
//! let engine = DescriptorTable::from_json(&std::fs::read_to_string("meta/constraints.json")?)?;
//! let mut artifacts = DirArtifacts::new(std::env::var("OUT_DIR")?);
//!
//! generate_from_source(
//!     r#"
//!     #[validator(targets(com::acme::Manager, com::acme::Employee))]
//!     pub struct AcmeValidator;
//!     "#,
//!     &types,
//!     &engine,
//!     &mut artifacts,
//! )?;
//! ```
//!
//! Generated code depends on `bean-dispatch-core` for class handles, group
//! metadata and the per-type validator contract.

pub mod config;
pub mod dispatch;
pub mod emit;
pub mod error;
pub mod generation;
pub mod host;
pub mod metadata;
pub mod specificity;

#[cfg(test)]
mod testing;

use tracing::info;

pub use config::GeneratorConfig;
pub use dispatch::{DispatchEmitter, DispatchPlan, GroupStep, ReflectedType};
pub use emit::{MarkerEmitter, SourceEmitter};
pub use error::GenerateError;
pub use generation::{DEFAULT_GROUP, GenerationSpec};
pub use host::{
    ArtifactSink, ArtifactWriter, BeanDescriptor, ClassDecl, ClassKind, ConstraintDecl,
    ConstraintEngine, DescriptorTable, DirArtifacts, EngineError, FieldDecl, HostContext,
    MemoryArtifacts, MethodDecl, PropertyDescriptor, TypeName, TypeOracle, TypeParam, TypeRef,
    TypeUniverse
};
pub use metadata::{ReadableProperty, ResolvedType, TypeCache};
pub use specificity::order_by_specificity;

/// Generate the dispatching validator of `spec` and every marker artifact
/// it needs, returning the validator's qualified name.
///
/// Each call is one generation run with a fresh [`TypeCache`].
///
/// # Errors
///
/// The first fatal [`GenerateError`]. The dispatching validator is never
/// committed after an error; markers of types resolved before it may be.
///
/// # Example
///
/// ```rust
/// use bean_dispatch::{
///     BeanDescriptor, ClassDecl, DescriptorTable, GenerationSpec, MemoryArtifacts, TypeUniverse,
///     generate
/// };
///
/// let types = TypeUniverse::with_platform_types().with(ClassDecl::class("com.acme.Employee"));
/// let engine = DescriptorTable::new().with(BeanDescriptor::new("com.acme.Employee"));
/// let spec = GenerationSpec::new("AcmeValidator", ["com.acme.Employee"]).unwrap();
///
/// let mut artifacts = MemoryArtifacts::new();
/// let name = generate(&spec, &types, &engine, &mut artifacts).unwrap();
///
/// assert_eq!(name, "com.acme.AcmeValidator");
/// assert!(artifacts.contains("com.acme._EmployeeValidator"));
/// assert!(artifacts.contains("com.acme.AcmeValidator"));
/// ```
pub fn generate(
    spec: &GenerationSpec,
    types: &dyn TypeOracle,
    engine: &dyn ConstraintEngine,
    artifacts: &mut dyn ArtifactSink
) -> Result<String, GenerateError> {
    let mut cache = TypeCache::new();
    let mut host = HostContext::new(types, engine, artifacts, &spec.config);
    let mut emitter = DispatchEmitter::new(spec, &mut cache, &mut host)?;
    let name = emitter.generate(&mut *host.artifacts)?;
    info!(validator = %name, types = cache.len(), "generation run finished");
    Ok(name)
}

/// Parse a `#[validator(...)]` marker and [`generate`] it.
///
/// # Errors
///
/// Marker parsing failures, then anything [`generate`] reports.
pub fn generate_from_source(
    source: &str,
    types: &dyn TypeOracle,
    engine: &dyn ConstraintEngine,
    artifacts: &mut dyn ArtifactSink
) -> Result<String, GenerateError> {
    let spec = GenerationSpec::parse_str(source)?;
    generate(&spec, types, engine, artifacts)
}
