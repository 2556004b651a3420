//! Code generation for Ethereum contract bindings
//!
//! Turns an ABI description into typed client bindings for Rust (against
//! `abi-gen-runtime`) and Python. The pipeline runs left to right:
//! [`loader`] normalizes the JSON, [`types`] resolves parameter types and
//! synthesizes tuple types, [`model`] builds per-method descriptors with their
//! [`validation`] rules, [`render`] feeds them through the per-language
//! templates and [`verify`] compares the output with committed fixtures.

pub mod cli;
pub mod config;
pub mod generator;
pub mod loader;
pub mod model;
pub mod naming;
pub mod render;
pub mod targets;
pub mod templates;
pub mod types;
pub mod validation;
pub mod verify;

pub use config::{CodegenConfig, ConfigManager};
pub use generator::{generate_batch, BatchReport, ContractCodegen, ContractSource, GeneratedFile};
pub use loader::{AbiDocument, AbiEntry, AbiLoader, AbiParameter};
pub use model::{ContractModel, MethodDescriptor, ModelBuilder, ReturnShape};
pub use render::Renderer;
pub use targets::Language;
pub use types::{AbiType, TupleType, TypeResolver};
pub use validation::ValidationRule;
pub use verify::{GoldenVerifier, VerifyOutcome};

use abi_gen_common::Result;
use std::path::Path;

/// Generate bindings for a single ABI file
pub async fn generate_contract_code(
    abi_file_path: &Path,
    contract_name: Option<&str>,
    config: CodegenConfig,
) -> Result<Vec<GeneratedFile>> {
    let mut source = ContractSource::new(abi_file_path);
    if let Some(name) = contract_name {
        source = source.with_name(name);
    }

    let codegen = ContractCodegen::new(config)?;
    codegen.generate(&source).await
}
