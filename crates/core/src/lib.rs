//! Swagger (OpenAPI v2) to TypeScript API client generation.
//!
//! The crate is pure: it takes document text and a [`GeneratorConfig`] and
//! returns the generated module text, or the first fatal [`GenerateError`].
//! Loading the document and writing the result are left to the caller.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod openapi;

pub use config::{GeneratorConfig, Policy};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use error::{GenerateError, GenerateResult};
pub use openapi::ir::{ResolvedType, make_readable_method_name, solve_type, validate_def_name};
pub use openapi::spec::SwaggerSpec;
pub use openapi::{GeneratedClient, generate};
