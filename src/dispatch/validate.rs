// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `validate`, `validate_property` and `validate_value` dispatch chains.
//!
//! Instance operations guard with `is_instance_of`; `validate_value` has no
//! instance and compares the requested class instead. All three end in
//! `UnsupportedType` listing every dispatched type.

use proc_macro2::TokenStream;
use quote::quote;

use super::Branch;

/// Per-call context bound to the matched branch.
///
/// Instance operations root the context at the branch class, so a subtype
/// without its own branch reports against the ancestor that handled it.
fn context(rt: &syn::Path, branch: &Branch, root_class: TokenStream, root_bean: TokenStream) -> TokenStream {
    let marker = &branch.marker;
    quote! {
        let context = #rt::ValidationContext::new(
            #root_class,
            #root_bean,
            #rt::BeanValidator::constraints(&#marker::INSTANCE, self.groups_metadata()),
            &*self.interpolator,
            &*self.traversable,
            self.groups_metadata()
        );
    }
}

/// Render `validate`.
pub(super) fn render_validate(rt: &syn::Path, branches: &[Branch]) -> TokenStream {
    let arms = branches.iter().map(|branch| {
        let class = &branch.class;
        let marker = &branch.marker;
        let context = context(rt, branch, class.clone(), quote!(Some(object)));
        quote! {
            if object.is_instance_of(#class) {
                #context
                return #rt::BeanValidator::validate(&#marker::INSTANCE, &context, object, groups);
            }
        }
    });
    quote! {
        /// Validate `object` with the validator of its most specific type.
        pub fn validate(
            &self,
            object: &dyn #rt::Bean,
            groups: &[&'static #rt::Class]
        ) -> ::std::result::Result<::std::vec::Vec<#rt::ConstraintViolation>, #rt::ValidationError> {
            #(#arms)*
            Err(#rt::ValidationError::UnsupportedType {
                found: object.class().name(),
                supported: Self::SUPPORTED_TYPES
            })
        }
    }
}

/// Render `validate_property`.
pub(super) fn render_validate_property(rt: &syn::Path, branches: &[Branch]) -> TokenStream {
    let arms = branches.iter().map(|branch| {
        let class = &branch.class;
        let marker = &branch.marker;
        let context = context(rt, branch, class.clone(), quote!(Some(object)));
        quote! {
            if object.is_instance_of(#class) {
                #context
                return #rt::BeanValidator::validate_property(
                    &#marker::INSTANCE,
                    &context,
                    object,
                    property_name,
                    groups
                );
            }
        }
    });
    quote! {
        /// Validate one property of `object`.
        pub fn validate_property(
            &self,
            object: &dyn #rt::Bean,
            property_name: &str,
            groups: &[&'static #rt::Class]
        ) -> ::std::result::Result<::std::vec::Vec<#rt::ConstraintViolation>, #rt::ValidationError> {
            #(#arms)*
            Err(#rt::ValidationError::UnsupportedType {
                found: object.class().name(),
                supported: Self::SUPPORTED_TYPES
            })
        }
    }
}

/// Render `validate_value`.
pub(super) fn render_validate_value(rt: &syn::Path, branches: &[Branch]) -> TokenStream {
    let arms = branches.iter().map(|branch| {
        let class = &branch.class;
        let marker = &branch.marker;
        let context = context(rt, branch, quote!(bean_type), quote!(None));
        quote! {
            if bean_type == #class {
                #context
                return #rt::BeanValidator::validate_value(
                    &#marker::INSTANCE,
                    &context,
                    bean_type,
                    property_name,
                    value,
                    groups
                );
            }
        }
    });
    quote! {
        /// Validate a candidate `value` for a property of `bean_type`.
        pub fn validate_value(
            &self,
            bean_type: &'static #rt::Class,
            property_name: &str,
            value: &dyn ::std::any::Any,
            groups: &[&'static #rt::Class]
        ) -> ::std::result::Result<::std::vec::Vec<#rt::ConstraintViolation>, #rt::ValidationError> {
            #(#arms)*
            Err(#rt::ValidationError::UnsupportedType {
                found: bean_type.name(),
                supported: Self::SUPPORTED_TYPES
            })
        }
    }
}
