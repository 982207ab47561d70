//! TypeScript client emitter for Swagger documents.
//!
//! This module is a thin wrapper around the IR-based code generation.
//! The pipeline is:
//! 1. Parse: Swagger JSON -> SwaggerSpec
//! 2. Normalize: SwaggerSpec -> ApiIR (all Swagger logic resolved)
//! 3. Codegen: ApiIR -> TsModule (TypeScript AST)
//! 4. Emit: TsModule -> String (via Emit trait)

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::diagnostics::Diagnostics;
use crate::error::GenerateResult;
use crate::openapi::ir::{Emit, codegen_module, normalize_spec};
use crate::openapi::spec::SwaggerSpec;

/// Result of a successful run.
#[derive(Debug)]
pub struct GeneratedClient {
    /// The complete TypeScript module.
    pub code: String,
    /// Non-fatal findings, in the order they were raised.
    pub diagnostics: Diagnostics,
    /// Number of emitted interfaces.
    pub interfaces: usize,
    /// Number of emitted client methods.
    pub methods: usize,
    /// Endpoints left out, as `verb:url`.
    pub skipped: Vec<String>,
}

/// Generate a TypeScript client from a Swagger JSON string.
///
/// Nothing is produced unless every stage succeeds.
pub fn generate(swagger_json: &str, config: &GeneratorConfig) -> GenerateResult<GeneratedClient> {
    // Parse Swagger document
    let spec = SwaggerSpec::from_json(swagger_json)?;
    debug!(
        definitions = spec.definitions.len(),
        paths = spec.paths.len(),
        "parsed document"
    );

    // Normalize to API IR (all Swagger logic resolved here)
    let mut diagnostics = Diagnostics::new();
    let api_ir = normalize_spec(&spec, config, &mut diagnostics)?;

    // Generate TypeScript AST and emit to string
    let code = codegen_module(&api_ir, config).emit();

    Ok(GeneratedClient {
        code,
        diagnostics,
        interfaces: api_ir.definitions.len(),
        methods: api_ir.operations.len(),
        skipped: api_ir.skipped,
    })
}
