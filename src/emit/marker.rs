// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-type marker artifact.
//!
//! Gives the per-type validator a stable name and a singleton access point
//! before its body exists. The body itself comes from a separate generator.
//!
//! # Generated Code
//!
//! For `com.acme.Employee`:
//!
//! ```rust,ignore
//! #[allow(non_camel_case_types)]
//! pub struct _EmployeeValidator;
//!
//! impl _EmployeeValidator {
//!     pub const INSTANCE: Self = Self;
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::{naming::ident, source::SourceEmitter};
use crate::{error::GenerateError, metadata::ResolvedType};

/// Emitter of one marker artifact.
pub struct MarkerEmitter<'a> {
    resolved: &'a ResolvedType
}

impl<'a> MarkerEmitter<'a> {
    /// Marker for `resolved`.
    pub fn new(resolved: &'a ResolvedType) -> Self {
        Self {
            resolved
        }
    }
}

impl SourceEmitter for MarkerEmitter<'_> {
    fn output_package(&self) -> String {
        self.resolved.output_package().to_string()
    }

    fn output_name(&self) -> String {
        self.resolved.output_name()
    }

    fn write_body(&mut self) -> Result<TokenStream, GenerateError> {
        let name = ident(&self.resolved.output_name())?;
        let doc = format!(" Validator of `{}`.", self.resolved.ty());
        Ok(quote! {
            #[doc = #doc]
            #[allow(non_camel_case_types)]
            pub struct #name;

            impl #name {
                /// Shared instance.
                pub const INSTANCE: Self = Self;
            }
        })
    }
}
