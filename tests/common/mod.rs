// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared fixtures for generation tests.

#![allow(dead_code)]

use bean_dispatch::{
    DescriptorTable, GenerateError, GenerationSpec, MemoryArtifacts, TypeUniverse,
    generate
};

pub const TYPES: &str = include_str!("../fixtures/types.json");
pub const CONSTRAINTS: &str = include_str!("../fixtures/constraints.json");

/// Host types and constraints exported from the `com.acme` model.
pub fn acme() -> (TypeUniverse, DescriptorTable) {
    let types = TypeUniverse::from_json(TYPES).unwrap();
    let engine = DescriptorTable::from_json(CONSTRAINTS).unwrap();
    (types, engine)
}

/// Spec named `AcmeValidator` over `targets`.
pub fn spec(targets: &[&str]) -> GenerationSpec {
    GenerationSpec::new("AcmeValidator", targets.iter().copied()).unwrap()
}

/// Run one generation into a fresh in-memory sink.
pub fn run(spec: &GenerationSpec) -> Result<MemoryArtifacts, GenerateError> {
    let (types, engine) = acme();
    let mut artifacts = MemoryArtifacts::new();
    generate(spec, &types, &engine, &mut artifacts)?;
    Ok(artifacts)
}

/// Source of the committed `com.acme.AcmeValidator`.
pub fn dispatcher(artifacts: &MemoryArtifacts) -> &str {
    artifacts
        .get("com.acme.AcmeValidator")
        .expect("dispatcher committed")
}

/// Byte offset of `fragment` in `source`.
pub fn position(source: &str, fragment: &str) -> usize {
    source
        .find(fragment)
        .unwrap_or_else(|| panic!("missing `{fragment}`"))
}
