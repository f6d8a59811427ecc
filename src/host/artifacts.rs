// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generated artifact output.
//!
//! An [`ArtifactSink`] hands out at most one [`ArtifactWriter`] per
//! qualified name in a run. A second request for the same name returns
//! `None`, and emitters treat that as "already generated" rather than as a
//! failure.
//!
//! | Sink | Destination |
//! |------|-------------|
//! | [`MemoryArtifacts`] | In-memory map, for tests and tooling |
//! | [`DirArtifacts`] | `<root>/<package dirs>/<name>.rs`, for `build.rs` |

use std::{
    fs,
    path::{Path, PathBuf}
};

use indexmap::{IndexMap, IndexSet};
use proc_macro2::TokenStream;

use crate::error::GenerateError;

/// Join a package and a simple name into a qualified name.
pub(crate) fn qualify(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{package}.{name}")
    }
}

/// Open output for one artifact.
#[derive(Debug)]
pub struct ArtifactWriter {
    package: String,
    name:    String,
    source:  String
}

impl ArtifactWriter {
    /// Writer for `package.name` with an empty body.
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name:    name.into(),
            source:  String::new()
        }
    }

    /// Output package.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Output simple name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Output qualified name.
    pub fn qualified_name(&self) -> String {
        qualify(&self.package, &self.name)
    }

    /// Append a line of text.
    pub fn write_line(&mut self, line: &str) {
        self.source.push_str(line);
        self.source.push('\n');
    }

    /// Append rendered tokens.
    pub fn write_tokens(&mut self, tokens: &TokenStream) {
        self.source.push_str(&tokens.to_string());
        self.source.push('\n');
    }

    /// Source written so far.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Consume the writer, returning its source.
    pub fn into_source(self) -> String {
        self.source
    }
}

/// Destination of generated artifacts.
pub trait ArtifactSink {
    /// Claim `package.name`, or `None` if it was already claimed this run.
    fn try_create(&mut self, package: &str, name: &str) -> Option<ArtifactWriter>;

    /// Persist a finished artifact.
    fn commit(&mut self, writer: ArtifactWriter) -> Result<(), GenerateError>;
}

/// Sink that keeps committed sources in memory.
#[derive(Debug, Default)]
pub struct MemoryArtifacts {
    claimed:   IndexSet<String>,
    committed: IndexMap<String, String>
}

impl MemoryArtifacts {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Source committed under `qualified_name`.
    pub fn get(&self, qualified_name: &str) -> Option<&str> {
        self.committed.get(qualified_name).map(String::as_str)
    }

    /// Check whether `qualified_name` was committed.
    pub fn contains(&self, qualified_name: &str) -> bool {
        self.committed.contains_key(qualified_name)
    }

    /// Qualified names of committed artifacts in commit order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.committed.keys().map(String::as_str)
    }

    /// Number of committed artifacts.
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    /// Check for no committed artifacts.
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}

impl ArtifactSink for MemoryArtifacts {
    fn try_create(&mut self, package: &str, name: &str) -> Option<ArtifactWriter> {
        self.claimed
            .insert(qualify(package, name))
            .then(|| ArtifactWriter::new(package, name))
    }

    fn commit(&mut self, writer: ArtifactWriter) -> Result<(), GenerateError> {
        let qualified = writer.qualified_name();
        self.committed.insert(qualified, writer.into_source());
        Ok(())
    }
}

/// Sink that writes one `.rs` file per artifact below a root directory.
///
/// Package `com.acme` maps to `<root>/com/acme/`.
#[derive(Debug)]
pub struct DirArtifacts {
    root:    PathBuf,
    claimed: IndexSet<String>,
    written: Vec<PathBuf>
}

impl DirArtifacts {
    /// Sink rooted at `root` (typically `OUT_DIR`).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root:    root.into(),
            claimed: IndexSet::new(),
            written: Vec::new()
        }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Files written so far, in commit order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Destination file of `package.name`.
    pub fn path_for(&self, package: &str, name: &str) -> PathBuf {
        let mut path = self.root.clone();
        for segment in package.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{name}.rs"));
        path
    }
}

impl ArtifactSink for DirArtifacts {
    fn try_create(&mut self, package: &str, name: &str) -> Option<ArtifactWriter> {
        self.claimed
            .insert(qualify(package, name))
            .then(|| ArtifactWriter::new(package, name))
    }

    fn commit(&mut self, writer: ArtifactWriter) -> Result<(), GenerateError> {
        let path = self.path_for(writer.package(), writer.name());
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|source| GenerateError::Io {
                path: dir.to_path_buf(),
                source
            })?;
        }
        fs::write(&path, writer.source()).map_err(|source| GenerateError::Io {
            path: path.clone(),
            source
        })?;
        self.written.push(path);
        Ok(())
    }
}
