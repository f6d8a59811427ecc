// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `get_property`: property access by name without reflection.
//!
//! Each reflected type gets one branch matched by exact class (property
//! sets are per concrete type), and inside it one `match` arm per readable
//! property. Accessors are expected to return owned `'static` values.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! if object.is_exactly(<Manager as BeanClass>::CLASS) {
//!     if let Some(bean) = object.downcast_ref::<Manager>() {
//!         return match property_name {
//!             "salary" => Ok(Box::new(bean.get_salary()) as Box<dyn Any>),
//!             _ => Err(ValidationError::NoSuchProperty { /* ... */ }),
//!         };
//!     }
//! }
//! Err(ValidationError::ClassNotReflected { class: object.class().name() })
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::{Branch, Paths, ReflectedType};
use crate::{emit::method_ident, error::GenerateError};

fn render_type(
    paths: &Paths<'_>,
    reflected: &ReflectedType
) -> Result<TokenStream, GenerateError> {
    let rt = paths.rt;
    let branch = Branch::new(paths, &reflected.resolved)?;
    let ty = &branch.ty;
    let class = &branch.class;

    let arms = reflected
        .properties
        .iter()
        .map(|property| {
            let name = &property.name;
            let getter = method_ident(&property.getter)?;
            Ok(quote! {
                #name => Ok(::std::boxed::Box::new(bean.#getter())
                    as ::std::boxed::Box<dyn ::std::any::Any>),
            })
        })
        .collect::<Result<Vec<_>, GenerateError>>()?;

    Ok(quote! {
        if object.is_exactly(#class) {
            if let Some(bean) = object.downcast_ref::<#ty>() {
                return match property_name {
                    #(#arms)*
                    _ => Err(#rt::ValidationError::NoSuchProperty {
                        class: #class.name(),
                        property: ::std::string::ToString::to_string(property_name)
                    }),
                };
            }
        }
    })
}

/// Render `get_property`.
pub(super) fn render(
    paths: &Paths<'_>,
    reflected: &[ReflectedType]
) -> Result<TokenStream, GenerateError> {
    let rt = paths.rt;
    let branches = reflected
        .iter()
        .map(|reflected| render_type(paths, reflected))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(quote! {
        /// Read `property_name` from `object` through its generated accessor table.
        pub fn get_property(
            &self,
            object: &dyn #rt::Bean,
            property_name: &str
        ) -> ::std::result::Result<::std::boxed::Box<dyn ::std::any::Any>, #rt::ValidationError> {
            #(#branches)*
            Err(#rt::ValidationError::ClassNotReflected {
                class: object.class().name()
            })
        }
    })
}
