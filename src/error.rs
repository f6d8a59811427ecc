// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation-time errors.
//!
//! Every failure here is fatal for the generation run. A dispatching
//! validator that references a type whose metadata could not be built would
//! not compile, so the dispatcher is never committed after an error. Marker
//! artifacts of types resolved before the failure may already have been
//! committed and are not rolled back.
//!
//! The recoverable "association not found" condition is not an error at all;
//! it is logged and the property is skipped (see
//! [`TypeCache::resolve`](crate::TypeCache::resolve)).

use std::path::PathBuf;

use thiserror::Error;

use crate::host::{EngineError, TypeName};

/// Error returned by every fallible generator operation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The constraint engine rejected a reachable type.
    #[error("cannot build constraint metadata for {type_name}: {source}")]
    UnresolvableType {
        /// Offending type.
        type_name: TypeName,
        /// Engine-reported reason.
        #[source]
        source:    EngineError
    },

    /// The host type system has no declaration for a referenced type.
    #[error("type {0} is not known to the host type system")]
    UnknownType(TypeName),

    /// The validator marker declaration is malformed.
    #[error("invalid validator declaration: {0}")]
    InvalidSpec(#[from] darling::Error),

    /// The validator marker source could not be parsed.
    #[error("invalid declaration syntax: {0}")]
    Syntax(#[from] syn::Error),

    /// A host name cannot be expressed in emitted Rust.
    #[error("`{name}` cannot be used as a Rust {kind}")]
    InvalidName {
        /// Offending name or segment.
        name: String,
        /// What the name was meant to become (e.g., `"identifier"`).
        kind: &'static str
    },

    /// Writing a generated artifact failed.
    #[error("failed to write artifact {}: {source}", .path.display())]
    Io {
        /// Destination file.
        path:   PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error
    },

    /// A JSON metadata snapshot could not be read.
    #[error("malformed metadata snapshot: {0}")]
    Json(#[from] serde_json::Error)
}

impl GenerateError {
    /// Check whether the error names a specific offending type.
    pub fn type_name(&self) -> Option<&TypeName> {
        match self {
            Self::UnresolvableType {
                type_name, ..
            } => Some(type_name),
            Self::UnknownType(type_name) => Some(type_name),
            _ => None
        }
    }
}
