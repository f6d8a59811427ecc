// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bean_dispatch_core::prelude::*;
//! ```

pub use crate::{
    Bean, BeanClass, BeanDescriptor, BeanValidator, Class, ConstraintViolation,
    GroupChainMetadata, ValidationContext, ValidationError
};
