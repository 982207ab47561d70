//! Intermediate Representation for Swagger to TypeScript code generation.
//!
//! This module defines a three-layer architecture:
//! 1. API-level IR: accepted definitions and operations (Swagger-agnostic)
//! 2. TypeScript AST IR: types, expressions, statements, declarations
//! 3. Emission: AST to TypeScript code strings via the `Emit` trait
//!
//! The separation allows:
//! - All Swagger corner cases resolved in normalization
//! - Code generation builds structured AST (testable)
//! - Emission is purely mechanical string building
//!
//! ## Module Structure
//!
//! - `types`: TypeScript AST IR (TsType, TsExpr, TsStmt, TsInterface, TsClass, TsModule)
//! - `api`: API-level IR (DefinitionIR, OperationIR, ParamIR, ResponseIR)
//! - `resolve`: schema fragment -> TypeScript type
//! - `naming`: operation summary -> method name
//! - `normalize`: Swagger document -> API IR conversion
//! - `codegen`: API IR -> TypeScript AST
//! - `emit`: TypeScript AST -> code strings (via Emit trait)
//! - `utils`: Common utilities shared across modules

pub mod api;
mod codegen;
mod emit;
mod naming;
mod normalize;
mod resolve;
pub mod types;
pub mod utils;

// Re-export the main entry points
pub use codegen::codegen_module;
pub use emit::Emit;
pub use naming::make_readable_method_name;
pub use normalize::normalize_spec;
pub use resolve::{ResolvedType, solve_type};
pub use utils::validate_def_name;
