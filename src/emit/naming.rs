// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Host names as Rust identifiers and paths.
//!
//! | Host name | Rust form |
//! |-----------|-----------|
//! | package `com.acme` | module path `#root::com::acme` |
//! | type `com.acme.Outer$Inner` | `#root::com::acme::Outer_Inner` |
//! | getter `getSalary` | method `get_salary` |
//! | segment `type` | raw identifier `r#type` |
//!
//! `self`, `Self`, `super` and `crate` cannot be raw identifiers and are
//! rejected along with anything that is not an identifier at all.

use convert_case::{Case, Casing};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use crate::{error::GenerateError, host::TypeName};

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let head = matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic());
    head && name != "_" && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Identifier for `name`, raw when `name` is a keyword.
///
/// # Errors
///
/// [`GenerateError::InvalidName`] when `name` cannot be spelled as a Rust
/// identifier.
pub fn ident(name: &str) -> Result<Ident, GenerateError> {
    let invalid = || GenerateError::InvalidName {
        name: name.to_string(),
        kind: "identifier"
    };
    if !is_identifier(name) {
        return Err(invalid());
    }
    if syn::parse_str::<Ident>(name).is_ok() {
        return Ok(Ident::new(name, Span::call_site()));
    }
    match name {
        "self" | "Self" | "super" | "crate" => Err(invalid()),
        _ => Ok(Ident::new_raw(name, Span::call_site()))
    }
}

/// Module path segments of a dotted package.
fn package_segments(package: &str) -> Result<Vec<Ident>, GenerateError> {
    package
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(ident)
        .collect()
}

/// Path of item `name` declared in host package `package`.
pub fn item_path(root: &syn::Path, package: &str, name: &str) -> Result<TokenStream, GenerateError> {
    let segments = package_segments(package)?;
    let item = ident(name)?;
    Ok(quote! { #root #(:: #segments)* :: #item })
}

/// Rust path of host type `name`.
///
/// ```rust
/// use bean_dispatch::{TypeName, emit::type_path};
///
/// let path = type_path(&syn::parse_quote!(crate), &TypeName::new("com.acme.Manager")).unwrap();
/// assert_eq!(path.to_string().replace(' ', ""), "crate::com::acme::Manager");
/// ```
pub fn type_path(root: &syn::Path, name: &TypeName) -> Result<TokenStream, GenerateError> {
    item_path(root, name.package(), &name.source_name().replace('.', "_"))
}

/// Method identifier of host accessor `getter`, in snake case.
pub fn method_ident(getter: &str) -> Result<Ident, GenerateError> {
    ident(&getter.to_case(Case::Snake))
}
