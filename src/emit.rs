// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Source emission.
//!
//! ```text
//! emit.rs (coordinator)
//! ├── source.rs - SourceEmitter: claim, write and commit one artifact
//! ├── naming.rs - host names as Rust identifiers and paths
//! └── marker.rs - MarkerEmitter: per-type singleton holder
//! ```
//!
//! The dispatching validator emitter lives in [`crate::dispatch`] and is
//! built on the same [`SourceEmitter`] protocol.

mod marker;
mod naming;
mod source;

pub use marker::MarkerEmitter;
pub use naming::{ident, item_path, method_ident, type_path};
pub use source::SourceEmitter;
