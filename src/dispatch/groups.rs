// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Group-chain metadata builder.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! fn create_groups_metadata() -> GroupChainMetadata {
//!     GroupChainMetadata::builder()
//!         .add_group(<Default as BeanClass>::CLASS, &[])
//!         .add_sequence(<Strict as BeanClass>::CLASS, &[
//!             <Default as BeanClass>::CLASS,
//!             <Strict as BeanClass>::CLASS,
//!         ])
//!         .build()
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::{GroupStep, Paths};
use crate::error::GenerateError;

fn render_step(paths: &Paths<'_>, step: &GroupStep) -> Result<TokenStream, GenerateError> {
    match step {
        GroupStep::Group {
            group,
            parents
        } => {
            let group = paths.class_of(group)?;
            let parents = parents
                .iter()
                .map(|parent| paths.class_of(parent))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(quote! { .add_group(#group, &[#(#parents),*]) })
        }
        GroupStep::Sequence {
            sequence,
            members
        } => {
            let sequence = paths.class_of(sequence)?;
            let members = members
                .iter()
                .map(|member| paths.class_of(member))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(quote! { .add_sequence(#sequence, &[#(#members),*]) })
        }
    }
}

/// Render `create_groups_metadata`.
pub(super) fn render(paths: &Paths<'_>, steps: &[GroupStep]) -> Result<TokenStream, GenerateError> {
    let rt = paths.rt;
    let steps = steps
        .iter()
        .map(|step| render_step(paths, step))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(quote! {
        /// Configured groups and sequences.
        fn create_groups_metadata() -> #rt::GroupChainMetadata {
            #rt::GroupChainMetadata::builder()
                #(#steps)*
                .build()
        }
    })
}
