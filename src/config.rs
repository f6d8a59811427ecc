// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generator configuration.
//!
//! Controls how host names are turned into Rust paths in emitted code and
//! which host types count as containers during cascade discovery.
//!
//! # Defaults
//!
//! | Setting | Default | Attribute |
//! |---------|---------|-----------|
//! | Run-time crate | `::bean_dispatch_core` | `runtime = "..."` |
//! | Root of host packages | `crate` | `root = "..."` |
//! | Container roots | `java.lang.Iterable`, `java.util.Map` | `containers(...)` |

use crate::host::TypeName;

/// Default path of the run-time contract crate.
pub(crate) fn default_runtime() -> syn::Path {
    syn::parse_quote!(::bean_dispatch_core)
}

/// Default path under which host packages are mounted as modules.
pub(crate) fn default_root() -> syn::Path {
    syn::parse_quote!(crate)
}

/// Default container roots: iterables and maps.
pub(crate) fn default_container_roots() -> Vec<TypeName> {
    vec![
        TypeName::new("java.lang.Iterable"),
        TypeName::new("java.util.Map")
    ]
}

/// Settings shared by every emitter in one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Path of the run-time contract crate referenced by emitted code.
    pub runtime: syn::Path,

    /// Path under which host package `a.b` is reachable as module `a::b`.
    pub root: syn::Path,

    /// Types whose subtypes are unwrapped to their element type when a
    /// property cascades into them.
    pub container_roots: Vec<TypeName>
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            runtime:         default_runtime(),
            root:            default_root(),
            container_roots: default_container_roots()
        }
    }
}

impl GeneratorConfig {
    /// Replace the run-time crate path.
    #[must_use]
    pub fn with_runtime(mut self, runtime: syn::Path) -> Self {
        self.runtime = runtime;
        self
    }

    /// Replace the root path of host packages.
    #[must_use]
    pub fn with_root(mut self, root: syn::Path) -> Self {
        self.root = root;
        self
    }

    /// Replace the container roots.
    #[must_use]
    pub fn with_container_roots(mut self, roots: Vec<TypeName>) -> Self {
        self.container_roots = roots;
        self
    }
}
