// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Collaborators the generator consumes.
//!
//! The generator never inspects host classes, evaluates constraints or
//! touches the filesystem directly. It goes through three seams:
//!
//! ```text
//! host.rs (coordinator)
//! ├── types.rs     - TypeName, TypeRef, ClassDecl (host type model)
//! ├── oracle.rs    - TypeOracle seam, TypeUniverse (in-memory)
//! ├── engine.rs    - ConstraintEngine seam, DescriptorTable (snapshot)
//! └── artifacts.rs - ArtifactSink seam, MemoryArtifacts, DirArtifacts
//! ```
//!
//! [`HostContext`] bundles one run's collaborators so they can be threaded
//! through resolution and emission as a single argument.

mod artifacts;
mod engine;
mod oracle;
mod types;

pub use artifacts::{ArtifactSink, ArtifactWriter, DirArtifacts, MemoryArtifacts};
pub(crate) use artifacts::qualify;
pub use engine::{
    BeanDescriptor, ConstraintDecl, ConstraintEngine, DescriptorTable, EngineError,
    PropertyDescriptor
};
pub use oracle::{TypeOracle, TypeUniverse};
pub use types::{ClassDecl, ClassKind, FieldDecl, MethodDecl, TypeName, TypeParam, TypeRef};

use crate::config::GeneratorConfig;

/// Collaborators of one generation run.
pub struct HostContext<'h> {
    /// Host type introspection.
    pub types: &'h dyn TypeOracle,

    /// Build-time constraint engine.
    pub engine: &'h dyn ConstraintEngine,

    /// Output for generated artifacts.
    pub artifacts: &'h mut dyn ArtifactSink,

    /// Run settings.
    pub config: &'h GeneratorConfig
}

impl<'h> HostContext<'h> {
    /// Bundle collaborators.
    pub fn new(
        types: &'h dyn TypeOracle,
        engine: &'h dyn ConstraintEngine,
        artifacts: &'h mut dyn ArtifactSink,
        config: &'h GeneratorConfig
    ) -> Self {
        Self {
            types,
            engine,
            artifacts,
            config
        }
    }
}
