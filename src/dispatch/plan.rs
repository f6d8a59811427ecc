// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! What a dispatching validator will contain, before any rendering.

use std::rc::Rc;

use indexmap::IndexSet;
use tracing::debug;

use crate::{
    error::GenerateError,
    generation::GenerationSpec,
    host::{HostContext, TypeName},
    metadata::{ReadableProperty, ResolvedType, TypeCache},
    specificity::order_by_specificity
};

/// One step of the group-chain metadata builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupStep {
    /// Plain group with its declared super-interfaces.
    Group {
        /// Group type.
        group:   TypeName,
        /// Interfaces the group extends.
        parents: Vec<TypeName>
    },

    /// Group sequence with its members in declared order.
    Sequence {
        /// Sequence type.
        sequence: TypeName,
        /// Member groups.
        members:  Vec<TypeName>
    }
}

/// Type with reflection-free property access.
#[derive(Debug, Clone)]
pub struct ReflectedType {
    /// Resolved type.
    pub resolved: Rc<ResolvedType>,

    /// Readable properties, sorted by name.
    pub properties: Vec<ReadableProperty>
}

/// Planned content of one dispatching validator.
#[derive(Debug, Clone)]
pub struct DispatchPlan {
    ordered:   Vec<Rc<ResolvedType>>,
    groups:    Vec<GroupStep>,
    reflected: Vec<ReflectedType>
}

fn unique(names: &[TypeName]) -> IndexSet<&TypeName> {
    names.iter().collect()
}

impl DispatchPlan {
    /// Resolve and order everything `spec` needs.
    ///
    /// Targets are resolved first, so every type reachable from them is
    /// cached before the reflected set defaults to "all cached types".
    pub fn build(
        spec: &GenerationSpec,
        cache: &mut TypeCache,
        host: &mut HostContext<'_>
    ) -> Result<Self, GenerateError> {
        let mut targets = Vec::new();
        for target in unique(&spec.targets) {
            targets.push(cache.resolve(target, host)?);
        }
        let ordered = order_by_specificity(host.types, targets);

        let mut explicit = Vec::new();
        for name in unique(&spec.reflect) {
            explicit.push(cache.resolve(name, host)?);
        }
        let reflected_types = if explicit.is_empty() {
            cache.values().cloned().collect()
        } else {
            explicit
        };
        let reflected = order_by_specificity(host.types, reflected_types)
            .into_iter()
            .map(|resolved| ReflectedType {
                properties: resolved.readable_properties(host.types),
                resolved
            })
            .collect();

        let mut groups = Vec::new();
        for group in unique(&spec.groups) {
            let decl = host.types.load(group)?;
            let step = match &decl.group_sequence {
                Some(members) => GroupStep::Sequence {
                    sequence: group.clone(),
                    members:  members.clone()
                },
                None => GroupStep::Group {
                    group:   group.clone(),
                    parents: decl.interfaces.clone()
                }
            };
            groups.push(step);
        }

        let plan = Self {
            ordered,
            groups,
            reflected
        };
        debug!(
            ordered = ?plan.ordered_names().collect::<Vec<_>>(),
            groups = plan.groups.len(),
            reflected = plan.reflected.len(),
            "dispatch planned"
        );
        Ok(plan)
    }

    /// Target types, most specific first.
    pub fn ordered(&self) -> &[Rc<ResolvedType>] {
        &self.ordered
    }

    /// Binary names of the ordered targets.
    pub fn ordered_names(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(|resolved| resolved.ty().as_str())
    }

    /// Group-chain builder steps in configured order.
    pub fn group_steps(&self) -> &[GroupStep] {
        &self.groups
    }

    /// Types with property access.
    pub fn reflected(&self) -> &[ReflectedType] {
        &self.reflected
    }
}
