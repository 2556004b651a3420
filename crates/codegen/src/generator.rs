//! Contract binding generator
//!
//! Runs the pipeline for one contract (load, model, render per language, write)
//! and fans a batch of contracts out over Tokio tasks.

use crate::config::CodegenConfig;
use crate::loader::AbiLoader;
use crate::model::{ContractModel, ModelBuilder};
use crate::render::Renderer;
use crate::targets::Language;
use abi_gen_common::{Error, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info};

/// One ABI file to generate bindings for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractSource {
    pub abi_path: PathBuf,
    /// Contract name; the file stem when absent
    pub name: Option<String>,
}

impl ContractSource {
    pub fn new<P: Into<PathBuf>>(abi_path: P) -> Self {
        Self {
            abi_path: abi_path.into(),
            name: None,
        }
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn contract_name(&self) -> Result<String> {
        match &self.name {
            Some(name) => Ok(name.clone()),
            None => contract_name_from_path(&self.abi_path),
        }
    }
}

/// Contract name derived from the stem of an ABI file name
pub fn contract_name_from_path(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::config(format!("Cannot derive a contract name from {}", path.display())))
}

/// Rendered bindings of one contract in one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub contract: String,
    pub language: Language,
    /// Path relative to the output directory
    pub relative_path: PathBuf,
    pub content: String,
}

/// Code generator for contract bindings
pub struct ContractCodegen {
    config: CodegenConfig,
    loader: AbiLoader,
    renderer: Renderer,
}

impl ContractCodegen {
    /// Create a new code generator with the given configuration
    pub fn new(config: CodegenConfig) -> Result<Self> {
        if config.languages.is_empty() {
            return Err(Error::config("No target language selected"));
        }
        Ok(Self {
            config,
            loader: AbiLoader::new(),
            renderer: Renderer::new()?,
        })
    }

    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    /// Build the model of a contract from ABI JSON text
    pub fn build_model(&self, contract_name: &str, abi_json: &str) -> Result<ContractModel> {
        let document = self.loader.load_str(abi_json)?;
        // A fresh builder per contract keeps tuple identities run-scoped
        ModelBuilder::new().build(contract_name, &document)
    }

    /// Render every configured language without touching the filesystem
    pub fn render_contract(&self, contract_name: &str, abi_json: &str) -> Result<Vec<GeneratedFile>> {
        let model = self.build_model(contract_name, abi_json)?;
        debug!(
            "Contract {} has {} methods, {} events and {} tuple types",
            model.name,
            model.methods.len(),
            model.events.len(),
            model.tuples().len()
        );

        self.config
            .languages
            .iter()
            .map(|&language| {
                Ok(GeneratedFile {
                    contract: model.name.clone(),
                    language,
                    relative_path: language.output_path(Path::new(""), &model.module_name),
                    content: self.renderer.render(&model, language)?,
                })
            })
            .collect()
    }

    /// Generate and write the bindings of one contract
    pub async fn generate(&self, source: &ContractSource) -> Result<Vec<GeneratedFile>> {
        let contract_name = source.contract_name()?;
        info!(
            "Generating bindings for contract {} from {}",
            contract_name,
            source.abi_path.display()
        );

        let abi_json = tokio::fs::read_to_string(&source.abi_path).await.map_err(|e| {
            Error::io(format!("Failed to read {}: {}", source.abi_path.display(), e))
        })?;
        let files = self.render_contract(&contract_name, &abi_json)?;

        let output_dir = Path::new(&self.config.output_dir);
        for file in &files {
            self.write_file(&output_dir.join(&file.relative_path), &file.content)
                .await?;
        }

        Ok(files)
    }

    async fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        if self.config.dry_run {
            println!("\n--- {} ---", path.display());
            println!("{}", content);
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::io(format!("Failed to create directory {}: {}", parent.display(), e))
            })?;
        }
        tokio::fs::write(path, content)
            .await
            .map_err(|e| Error::io(format!("Failed to write file {}: {}", path.display(), e)))?;
        info!("Wrote {}", path.display());
        Ok(())
    }
}

/// A contract whose generation failed
#[derive(Debug)]
pub struct BatchFailure {
    pub source: ContractSource,
    pub error: Error,
}

/// Outcome of [`generate_batch`]
#[derive(Debug, Default)]
pub struct BatchReport {
    pub generated: Vec<GeneratedFile>,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Generate bindings for many contracts, one task per contract.
///
/// A failing contract is recorded in the report and the others still run.
/// Results are ordered like `sources`.
pub async fn generate_batch(config: CodegenConfig, sources: Vec<ContractSource>) -> Result<BatchReport> {
    let codegen = Arc::new(ContractCodegen::new(config)?);

    let handles: Vec<_> = sources
        .into_iter()
        .map(|source| {
            let codegen = Arc::clone(&codegen);
            tokio::spawn(async move {
                let result = codegen.generate(&source).await;
                (source, result)
            })
        })
        .collect();

    let mut report = BatchReport::default();
    for handle in handles {
        let (source, result) = handle
            .await
            .map_err(|e| Error::io(format!("Generation task failed: {}", e)))?;
        match result {
            Ok(files) => report.generated.extend(files),
            Err(err) if err.is_fatal_for_batch() => return Err(err),
            Err(err) => {
                error!("Failed to generate {}: {}", source.abi_path.display(), err);
                report.failures.push(BatchFailure { source, error: err });
            }
        }
    }

    info!(
        "Generated {} files, {} contracts failed",
        report.generated.len(),
        report.failures.len()
    );
    Ok(report)
}
