// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Marker attribute parsing with darling.
//!
//! Internal shape of `#[validator(...)]`; the public API is
//! [`GenerationSpec`](super::GenerationSpec).
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `targets(..)` | Yes | | Data types to dispatch over |
//! | `groups(..)` | No | `Default` group | Validation groups and sequences |
//! | `reflect(..)` | No | every resolved type | Types with property access |
//! | `containers(..)` | No | `Iterable`, `Map` | Container roots |
//! | `package` | No | first target's package | Output package |
//! | `runtime` | No | `::bean_dispatch_core` | Run-time crate path |
//! | `root` | No | `crate` | Path under which host packages live |

use darling::{FromDeriveInput, util::PathList};
use syn::{Ident, Visibility};

use crate::config::{default_root, default_runtime};

/// Attributes of a validator marker.
///
/// # Example
///
/// ```rust,ignore
/// #[validator(
///     targets(com::acme::Manager, com::acme::Employee),
///     groups(javax::validation::groups::Default, com::acme::Strict),
///     reflect(com::acme::Manager)
/// )]
/// pub struct AcmeValidator;
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(validator), supports(struct_unit))]
pub struct ValidatorAttrs {
    /// Marker identifier; names the dispatching validator.
    pub ident: Ident,

    /// Marker visibility, reused for the dispatching validator.
    pub vis: Visibility,

    /// Data types to dispatch over, in declared order.
    #[darling(default)]
    pub targets: PathList,

    /// Validation groups; sequences are detected from their declarations.
    #[darling(default)]
    pub groups: PathList,

    /// Types that get reflection-free property access.
    #[darling(default)]
    pub reflect: PathList,

    /// Container roots replacing the defaults.
    #[darling(default)]
    pub containers: PathList,

    /// Output package override (dotted).
    #[darling(default)]
    pub package: Option<String>,

    /// Path of the run-time contract crate.
    #[darling(default = "default_runtime")]
    pub runtime: syn::Path,

    /// Path under which host packages are mounted.
    #[darling(default = "default_root")]
    pub root: syn::Path
}
