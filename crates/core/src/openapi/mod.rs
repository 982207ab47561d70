//! Swagger to TypeScript client generator.
//!
//! This module parses Swagger (OpenAPI v2) documents and generates one
//! TypeScript module with:
//! - An interface per accepted definition
//! - An abstract client class with one method per accepted operation

mod emitter;
pub mod ir;
pub mod spec;

pub use emitter::{GeneratedClient, generate};
