// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! One-artifact-per-input scaffolding.

use proc_macro2::TokenStream;
use tracing::{debug, info};

use crate::{
    error::GenerateError,
    host::{ArtifactSink, ArtifactWriter, qualify}
};

/// Generator producing exactly one artifact.
///
/// Implementors name the artifact and write its body; the provided
/// [`generate`](SourceEmitter::generate) owns the claim, write and commit
/// protocol.
pub trait SourceEmitter {
    /// Package of the artifact.
    fn output_package(&self) -> String;

    /// Simple name of the artifact.
    fn output_name(&self) -> String;

    /// `output_package.output_name`.
    fn qualified_output_name(&self) -> String {
        qualify(&self.output_package(), &self.output_name())
    }

    /// Write leading comments or attributes.
    fn compose_header(&self, writer: &mut ArtifactWriter) {
        writer.write_line(&format!(
            "// @generated by bean-dispatch for {}. Do not edit.",
            self.qualified_output_name()
        ));
    }

    /// Build the artifact body.
    fn write_body(&mut self) -> Result<TokenStream, GenerateError>;

    /// Claim, write and commit the artifact, returning its qualified name.
    ///
    /// When the sink reports the name as already claimed, nothing is
    /// written and the name is returned as is.
    fn generate(&mut self, sink: &mut dyn ArtifactSink) -> Result<String, GenerateError> {
        let package = self.output_package();
        let name = self.output_name();
        let qualified = qualify(&package, &name);
        let Some(mut writer) = sink.try_create(&package, &name) else {
            debug!(artifact = %qualified, "artifact already claimed; skipping");
            return Ok(qualified);
        };
        self.compose_header(&mut writer);
        let body = self.write_body()?;
        writer.write_tokens(&body);
        sink.commit(writer)?;
        info!(artifact = %qualified, "artifact generated");
        Ok(qualified)
    }
}
