//! Target languages
//!
//! A [`Target`] supplies everything that differs between output languages:
//! reserved words, the type mapping table, normalization statements and the
//! template used to render a contract.

mod python;
mod rust;

pub use python::PythonTarget;
pub use rust::RustTarget;

use crate::model::ReturnShape;
use crate::types::{AbiType, TypeResolver};
use crate::validation::ValidationRule;
use abi_gen_common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Output language of the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Rust,
    Python,
}

impl Language {
    pub fn all() -> Vec<Language> {
        vec![Language::Rust, Language::Python]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Rust => "rust",
            Language::Python => "python",
        }
    }

    /// Parse a comma-separated list such as `rust,python`; `all` selects every language
    pub fn parse_list(value: &str) -> Result<Vec<Language>> {
        let mut languages = Vec::new();
        for item in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if item.eq_ignore_ascii_case("all") {
                return Ok(Language::all());
            }
            let language: Language = item.parse()?;
            if !languages.contains(&language) {
                languages.push(language);
            }
        }
        if languages.is_empty() {
            return Err(Error::config("No target language selected"));
        }
        Ok(languages)
    }

    pub fn target(&self) -> &'static dyn Target {
        match self {
            Language::Rust => &RustTarget,
            Language::Python => &PythonTarget,
        }
    }

    /// Where the bindings of `module_name` are written below `output_dir`
    pub fn output_path(&self, output_dir: &Path, module_name: &str) -> PathBuf {
        match self {
            Language::Rust => output_dir.join("rust").join(format!("{}.rs", module_name)),
            Language::Python => output_dir
                .join("python")
                .join(module_name)
                .join("__init__.py"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rust" | "rs" => Ok(Language::Rust),
            "python" | "py" => Ok(Language::Python),
            other => Err(Error::config(format!("Unknown target language '{}'", other))),
        }
    }
}

/// Where a normalization statement runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Body of a method's input validation
    Method,
    /// Body of a tuple's field normalization
    Tuple,
}

/// Language-specific half of the renderer
pub trait Target: Send + Sync {
    fn language(&self) -> Language;

    /// Name of the registered template
    fn template_name(&self) -> &'static str;

    /// Rename reserved words and identifiers starting with a digit
    fn escape_identifier(&self, raw: &str) -> String;

    /// Type of a method argument
    fn input_type(&self, ty: &AbiType, resolver: &TypeResolver) -> String;

    /// Owned type of a tuple field or decoded output
    fn value_type(&self, ty: &AbiType, resolver: &TypeResolver) -> String;

    /// Return type of the read entry point
    fn return_type(&self, shape: &ReturnShape, resolver: &TypeResolver) -> Result<String>;

    /// Runtime function decoding the outputs of a call, if the target needs one
    fn decode_function(&self, shape: &ReturnShape) -> &'static str;

    /// Statements run on a method argument before it is validated
    fn prepare_lines(&self, ty: &AbiType, var: &str) -> Vec<String>;

    /// Statements implementing a validation rule on `var`, a value of type `ty`
    fn normalize_lines(
        &self,
        rule: &ValidationRule,
        ty: &AbiType,
        var: &str,
        scope: Scope,
        resolver: &TypeResolver,
    ) -> Vec<String>;

    /// Indentation of the statements of `scope`
    fn indent(&self, scope: Scope) -> &'static str;

    /// Source literal embedding the ABI JSON verbatim
    fn abi_literal(&self, abi_json: &str) -> String;
}
