// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Bean metadata extraction and caching.
//!
//! ```text
//! metadata.rs (coordinator)
//! ├── resolved.rs - ResolvedType: one type plus its engine descriptor
//! └── cache.rs    - TypeCache: memoized cascade discovery
//! ```
//!
//! # Discovery
//!
//! Resolving a type pulls in every type reachable from it through cascaded
//! properties. Whether a property cascades, and what it carries, is decided
//! by the constraint engine; the host type model is only consulted to pick
//! between field and getter declarations and to unwrap containers.
//!
//! | Cascaded element | Followed when |
//! |------------------|---------------|
//! | Array, iterable or map | field or getter declares it (both tried) |
//! | Plain class | the engine reports the class as constrained |

mod cache;
mod resolved;

pub use cache::TypeCache;
pub use resolved::{ReadableProperty, ResolvedType, VALIDATOR_SUFFIX, getter_name};
