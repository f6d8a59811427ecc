// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Validation group metadata.
//!
//! Generated dispatching validators build one [`GroupChainMetadata`] from
//! their configured groups and keep it for their whole lifetime.
//!
//! ```rust
//! use bean_dispatch_core::{Class, GroupChainMetadata};
//!
//! static DEFAULT: Class = Class::new("javax.validation.groups.Default", None, &[]);
//! static STRICT: Class = Class::new("com.acme.Strict", None, &[]);
//!
//! let metadata = GroupChainMetadata::builder()
//!     .add_group(&DEFAULT, &[])
//!     .add_sequence(&STRICT, &[&DEFAULT, &STRICT])
//!     .build();
//!
//! assert!(metadata.is_sequence(&STRICT));
//! assert_eq!(metadata.sequence_members(&STRICT).map(<[_]>::len), Some(2));
//! ```

use crate::class::Class;

/// A plain group and the groups it inherits from.
#[derive(Debug, Clone)]
struct GroupEntry {
    group:   &'static Class,
    parents: Vec<&'static Class>
}

/// A group sequence and its ordered members.
#[derive(Debug, Clone)]
struct SequenceEntry {
    sequence: &'static Class,
    members:  Vec<&'static Class>
}

/// Immutable group and sequence configuration.
#[derive(Debug, Clone, Default)]
pub struct GroupChainMetadata {
    groups:    Vec<GroupEntry>,
    sequences: Vec<SequenceEntry>
}

impl GroupChainMetadata {
    /// Start building metadata.
    pub fn builder() -> GroupChainMetadataBuilder {
        GroupChainMetadataBuilder::default()
    }

    /// All plain groups in insertion order.
    pub fn groups(&self) -> impl Iterator<Item = &'static Class> + '_ {
        self.groups.iter().map(|entry| entry.group)
    }

    /// All sequences in insertion order.
    pub fn sequences(&self) -> impl Iterator<Item = &'static Class> + '_ {
        self.sequences.iter().map(|entry| entry.sequence)
    }

    /// Check whether `class` was registered as a sequence.
    pub fn is_sequence(&self, class: &Class) -> bool {
        self.sequences.iter().any(|entry| entry.sequence == class)
    }

    /// Ordered members of the sequence `class`.
    pub fn sequence_members(&self, class: &Class) -> Option<&[&'static Class]> {
        self.sequences
            .iter()
            .find(|entry| entry.sequence == class)
            .map(|entry| entry.members.as_slice())
    }

    /// Declared parents of the plain group `class`.
    pub fn parents_of(&self, class: &Class) -> Option<&[&'static Class]> {
        self.groups
            .iter()
            .find(|entry| entry.group == class)
            .map(|entry| entry.parents.as_slice())
    }

    /// Expand requested groups into the ordered list that validation walks.
    ///
    /// Sequences are replaced by their members; plain groups are followed by
    /// their parents. Each group appears once, at its first position.
    pub fn expand(&self, requested: &[&'static Class]) -> Vec<&'static Class> {
        let mut out: Vec<&'static Class> = Vec::new();
        for group in requested {
            match self.sequence_members(group) {
                Some(members) => {
                    for member in members {
                        push_unique(&mut out, *member);
                    }
                }
                None => {
                    push_unique(&mut out, *group);
                    for parent in self.parents_of(group).unwrap_or_default() {
                        push_unique(&mut out, *parent);
                    }
                }
            }
        }
        out
    }
}

fn push_unique(out: &mut Vec<&'static Class>, class: &'static Class) {
    if !out.contains(&class) {
        out.push(class);
    }
}

/// Builder used by generated `groups_metadata` functions.
#[derive(Debug, Default)]
pub struct GroupChainMetadataBuilder {
    groups:    Vec<GroupEntry>,
    sequences: Vec<SequenceEntry>
}

impl GroupChainMetadataBuilder {
    /// Register a plain group with its inherited groups.
    pub fn add_group(mut self, group: &'static Class, parents: &[&'static Class]) -> Self {
        self.groups.push(GroupEntry {
            group,
            parents: parents.to_vec()
        });
        self
    }

    /// Register a group sequence with its members in declared order.
    pub fn add_sequence(mut self, sequence: &'static Class, members: &[&'static Class]) -> Self {
        self.sequences.push(SequenceEntry {
            sequence,
            members: members.to_vec()
        });
        self
    }

    /// Finish building.
    pub fn build(self) -> GroupChainMetadata {
        GroupChainMetadata {
            groups:    self.groups,
            sequences: self.sequences
        }
    }
}
