// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Failures raised by generated dispatching validators.

use thiserror::Error;

/// Error returned by generated dispatch code and per-type validators.
///
/// The dispatch variants always name the rejected class or property, and
/// where the set of valid alternatives is finite they list it too.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No target type of the dispatching validator matched.
    #[error("{found} is not a valid bean type. Supported types: [{}]", .supported.join(", "))]
    UnsupportedType {
        /// Qualified name of the presented class.
        found:     &'static str,
        /// Qualified names of every type the validator dispatches on.
        supported: &'static [&'static str]
    },

    /// The class is reflected but has no readable property of that name.
    #[error("{class} has no readable property named \"{property}\"")]
    NoSuchProperty {
        /// Qualified name of the matched class.
        class:    &'static str,
        /// Requested property name.
        property: String
    },

    /// Property access was requested for a class outside the generated table.
    #[error("{class} is not reflected by this validator")]
    ClassNotReflected {
        /// Qualified name of the presented class.
        class: &'static str
    },

    /// A per-type validator could not complete.
    #[error("validation failed: {0}")]
    Failed(String)
}

impl ValidationError {
    /// Check if this error comes from a dispatch fallback branch.
    pub const fn is_dispatch(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedType { .. } | Self::NoSuchProperty { .. } | Self::ClassNotReflected { .. }
        )
    }
}
