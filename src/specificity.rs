// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Most-specific-first ordering of resolved types.
//!
//! Generated dispatch chains test candidates in order and stop at the first
//! match, so a subtype must be tested before any of its ancestors.
//!
//! Subtyping is only a partial order, so a comparison sort with a
//! "subclass first" comparator is not well defined. Instead each type is
//! inserted right before the first already-placed type it inherits from,
//! or appended when there is none. The result keeps unrelated types in
//! input order and is identical for identical input.

use std::rc::Rc;

use crate::{host::TypeOracle, metadata::ResolvedType};

/// Order `resolved` so that subtypes precede their ancestors.
///
/// Subtyping follows superclasses and interfaces as reported by `types`.
///
/// # Example
///
/// With `Manager extends Employee`, input `[Employee, Manager]` becomes
/// `[Manager, Employee]`.
pub fn order_by_specificity(
    types: &dyn TypeOracle,
    resolved: impl IntoIterator<Item = Rc<ResolvedType>>
) -> Vec<Rc<ResolvedType>> {
    let mut ordered: Vec<Rc<ResolvedType>> = Vec::new();
    for candidate in resolved {
        let position = ordered
            .iter()
            .position(|placed| types.is_proper_subtype_of(candidate.ty(), placed.ty()));
        match position {
            Some(idx) => ordered.insert(idx, candidate),
            None => ordered.push(candidate)
        }
    }
    ordered
}
