// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `constraints_for_class` dispatch chain.

use proc_macro2::TokenStream;
use quote::quote;

use super::Branch;

/// Render `constraints_for_class`.
pub(super) fn render(rt: &syn::Path, branches: &[Branch]) -> TokenStream {
    let arms = branches.iter().map(|branch| {
        let class = &branch.class;
        let marker = &branch.marker;
        quote! {
            if clazz == #class {
                return Ok(#rt::BeanValidator::constraints(&#marker::INSTANCE, self.groups_metadata()));
            }
        }
    });
    quote! {
        /// Constraint descriptor of `clazz`.
        pub fn constraints_for_class(
            &self,
            clazz: &'static #rt::Class
        ) -> ::std::result::Result<&'static #rt::BeanDescriptor, #rt::ValidationError> {
            #(#arms)*
            Err(#rt::ValidationError::UnsupportedType {
                found: clazz.name(),
                supported: Self::SUPPORTED_TYPES
            })
        }
    }
}
