// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for bean-dispatch generated validators.
//!
//! This crate is the run-time side of the contract. Code emitted by
//! `bean-dispatch` at build time compiles against these types and never
//! needs reflection: every decision it makes is a static class comparison.
//!
//! # Overview
//!
//! - [`Class`] - Static class handle with superclass and interface links
//! - [`Bean`] / [`BeanClass`] - Object-side and type-side class access
//! - [`GroupChainMetadata`] - Configured validation groups and sequences
//! - [`ValidationContext`] - Per-call state handed to per-type validators
//! - [`BeanValidator`] - Contract implemented by per-type validators
//! - [`ValidationError`] - Dispatch failures raised by generated code
//! - [`prelude`] - Convenient re-exports
//!
//! # Usage
//!
//! ```rust
//! use bean_dispatch_core::prelude::*;
//!
//! static EMPLOYEE: Class = Class::new("com.acme.Employee", None, &[]);
//! static MANAGER: Class = Class::new("com.acme.Manager", Some(&EMPLOYEE), &[]);
//!
//! assert!(EMPLOYEE.is_assignable_from(&MANAGER));
//! assert!(!MANAGER.is_assignable_from(&EMPLOYEE));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod class;
mod context;
mod error;
mod groups;
pub mod prelude;

pub use class::{Bean, BeanClass, Class};
pub use context::{
    BeanDescriptor, BeanValidator, ConstraintViolation, DefaultMessageInterpolator,
    DefaultTraversableResolver, MessageInterpolator, TraversableResolver, ValidationContext
};
pub use error::ValidationError;
pub use groups::{GroupChainMetadata, GroupChainMetadataBuilder};
