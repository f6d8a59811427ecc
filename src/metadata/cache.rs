// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Memoized discovery of every type reachable through cascades.

use std::rc::Rc;

use indexmap::IndexMap;
use tracing::{debug, warn};

use super::resolved::ResolvedType;
use crate::{
    emit::{MarkerEmitter, SourceEmitter},
    error::GenerateError,
    host::{HostContext, PropertyDescriptor, TypeName}
};

/// One [`ResolvedType`] per type for the duration of a generation run.
///
/// The cache doubles as the recursion guard: an entry is inserted before
/// its cascades are followed, so cyclic graphs terminate.
///
/// Not meant for sharing across threads; a run owns its cache.
#[derive(Debug, Default)]
pub struct TypeCache {
    entries: IndexMap<TypeName, Rc<ResolvedType>>
}

impl TypeCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached entry for `ty`.
    pub fn get(&self, ty: &TypeName) -> Option<Rc<ResolvedType>> {
        self.entries.get(ty).cloned()
    }

    /// Check whether `ty` was resolved.
    pub fn contains(&self, ty: &TypeName) -> bool {
        self.entries.contains_key(ty)
    }

    /// Resolved types in discovery order.
    pub fn values(&self) -> impl Iterator<Item = &Rc<ResolvedType>> {
        self.entries.values()
    }

    /// Number of resolved types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check for an empty cache.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every entry, e.g. between independent runs.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Resolve `ty` and everything reachable from it through cascaded
    /// properties.
    ///
    /// On first sight of a type this fetches its descriptor, emits the
    /// per-type marker artifact and walks its cascades. Later calls return
    /// the same entry without touching the engine.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::UnresolvableType`] when the engine cannot describe
    ///   a reachable type
    /// - [`GenerateError::UnknownType`] when the host has no declaration
    ///   for it
    /// - any artifact sink failure
    pub fn resolve(
        &mut self,
        ty: &TypeName,
        host: &mut HostContext<'_>
    ) -> Result<Rc<ResolvedType>, GenerateError> {
        if let Some(cached) = self.get(ty) {
            debug!(ty = %ty, "metadata cache hit");
            return Ok(cached);
        }
        debug!(ty = %ty, "metadata cache miss");

        let descriptor =
            host.engine
                .descriptor_for(ty)
                .map_err(|source| GenerateError::UnresolvableType {
                    type_name: ty.clone(),
                    source
                })?;
        let decl = host.types.load(ty)?.clone();
        let resolved = Rc::new(ResolvedType::new(decl, descriptor));
        self.entries.insert(ty.clone(), Rc::clone(&resolved));

        MarkerEmitter::new(&resolved).generate(&mut *host.artifacts)?;

        for property in resolved.descriptor().cascaded_properties() {
            self.follow(&resolved, property, host)?;
        }
        Ok(resolved)
    }

    fn follow(
        &mut self,
        owner: &ResolvedType,
        property: &PropertyDescriptor,
        host: &mut HostContext<'_>
    ) -> Result<(), GenerateError> {
        let types = host.types;
        if !types.is_container(&property.element_class, &host.config.container_roots) {
            if let Some(element) = property.element_class.erasure()
                && host.engine.is_constrained(element)
            {
                debug!(from = %owner.ty(), property = %property.name, to = %element, "cascade");
                self.resolve(element, host)?;
            }
            return Ok(());
        }

        let mut found = false;
        for use_field in [true, false] {
            let declared = if use_field {
                owner.has_field(types, &property.name)
            } else {
                owner.has_getter(types, &property.name)
            };
            if !declared {
                continue;
            }
            let element = owner
                .association_element_type(types, &property.name, use_field)
                .and_then(|element| element.erasure().cloned());
            if let Some(element) = element {
                found = true;
                debug!(
                    from = %owner.ty(),
                    property = %property.name,
                    to = %element,
                    via = if use_field { "field" } else { "getter" },
                    "container cascade"
                );
                self.resolve(&element, host)?;
            }
        }
        if !found {
            warn!(
                ty = %owner.ty(),
                property = %property.name,
                "no field or getter declares an association type; skipping cascade"
            );
        }
        Ok(())
    }
}
