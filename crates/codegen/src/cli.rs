//! CLI interface for contract binding generation

use crate::config::{CodegenConfig, ConfigManager};
use crate::generator::{generate_batch, ContractCodegen, ContractSource};
use crate::targets::Language;
use crate::verify::{GoldenVerifier, VerifyOutcome};
use abi_gen_common::Error;
use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::{Path, PathBuf};
use tracing::{error, info};
use walkdir::WalkDir;

/// Build the top-level `abi-gen` command
pub fn build_cli() -> Command {
    Command::new("abi-gen")
        .about("Generate typed contract client bindings from Ethereum ABI descriptions")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(build_generate_command())
        .subcommand(build_verify_command())
}

fn paths_arg() -> Arg {
    Arg::new("paths")
        .help("ABI JSON files or directories searched recursively for *.json")
        .required(true)
        .num_args(1..)
        .value_name("PATH")
}

fn language_arg() -> Arg {
    Arg::new("language")
        .long("language")
        .short('l')
        .help("Comma-separated target languages: rust, python or all")
        .value_name("LANGUAGES")
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .help("Configuration file (.toml, .json, .yaml)")
        .value_name("FILE")
}

/// Build the `generate` subcommand
pub fn build_generate_command() -> Command {
    Command::new("generate")
        .about("Generate contract bindings from ABI files")
        .arg(paths_arg())
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .short('o')
                .help("Output directory for generated bindings")
                .value_name("PATH"),
        )
        .arg(language_arg())
        .arg(
            Arg::new("name")
                .long("name")
                .help("Contract name, when generating a single ABI file")
                .value_name("NAME"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Print generated code without writing files")
                .action(ArgAction::SetTrue),
        )
        .arg(config_arg())
}

/// Build the `verify` subcommand
pub fn build_verify_command() -> Command {
    Command::new("verify")
        .about("Compare generated bindings with committed fixtures")
        .arg(paths_arg())
        .arg(
            Arg::new("expected-dir")
                .long("expected-dir")
                .help("Directory holding the expected output tree")
                .required(true)
                .value_name("PATH"),
        )
        .arg(
            Arg::new("bless")
                .long("bless")
                .help("Overwrite the fixtures with freshly generated output")
                .action(ArgAction::SetTrue),
        )
        .arg(language_arg())
        .arg(config_arg())
}

/// Resolve the configuration of a subcommand: file, then environment, then flags
pub fn load_config(matches: &ArgMatches) -> Result<CodegenConfig> {
    let config_path = matches.get_one::<String>("config").map(Path::new);
    let mut config = ConfigManager::load(config_path)?.into_config();

    if let Some(languages) = matches.get_one::<String>("language") {
        config.languages = Language::parse_list(languages)
            .with_context(|| format!("Invalid --language value: {}", languages))?;
    }
    if let Ok(Some(output_dir)) = matches.try_get_one::<String>("output-dir") {
        config.output_dir = output_dir.clone();
    }
    if let Ok(Some(true)) = matches.try_get_one::<bool>("dry-run") {
        config.dry_run = true;
    }

    config.validate()?;
    Ok(config)
}

/// Expand files and directories into the ABI files to process, in a stable order
pub fn collect_sources(paths: &[PathBuf], name: Option<&str>) -> Result<Vec<ContractSource>> {
    let mut sources = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found = Vec::new();
            for entry in WalkDir::new(path).follow_links(true) {
                let entry = entry.map_err(|e| {
                    Error::io(format!("Failed to read {}: {}", path.display(), e))
                })?;
                let is_json = entry.path().extension().and_then(|e| e.to_str()) == Some("json");
                if entry.file_type().is_file() && is_json {
                    found.push(entry.into_path());
                }
            }
            found.sort();
            sources.extend(found.into_iter().map(ContractSource::new));
        } else if path.is_file() {
            sources.push(ContractSource::new(path.clone()));
        } else {
            return Err(Error::config(format!("No such file or directory: {}", path.display())).into());
        }
    }

    if sources.is_empty() {
        return Err(Error::config("No ABI files found").into());
    }
    if let Some(name) = name {
        if sources.len() != 1 {
            return Err(Error::config(format!(
                "--name applies to a single ABI file, found {}",
                sources.len()
            ))
            .into());
        }
        sources = sources.into_iter().map(|source| source.with_name(name)).collect();
    }
    Ok(sources)
}

fn paths(matches: &ArgMatches) -> Vec<PathBuf> {
    matches
        .get_many::<String>("paths")
        .map(|values| values.map(PathBuf::from).collect())
        .unwrap_or_default()
}

/// Handle the `generate` subcommand
pub async fn handle_generate_command(matches: &ArgMatches, config: CodegenConfig) -> Result<()> {
    let name = matches.get_one::<String>("name").map(String::as_str);
    let sources = collect_sources(&paths(matches), name)?;
    let dry_run = config.dry_run;
    let output_dir = config.output_dir.clone();

    info!(
        "Generating {} bindings for {} contract(s)",
        config
            .languages
            .iter()
            .map(Language::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        sources.len()
    );

    let report = generate_batch(config, sources).await?;
    if !report.is_success() {
        let failed: Vec<String> = report
            .failures
            .iter()
            .map(|f| format!("{}: {}", f.source.abi_path.display(), f.error))
            .collect();
        anyhow::bail!(
            "{} contract(s) failed to generate:\n  {}",
            failed.len(),
            failed.join("\n  ")
        );
    }

    if !dry_run {
        info!("Generated {} files in {}", report.generated.len(), output_dir);
    }
    Ok(())
}

/// Handle the `verify` subcommand
pub async fn handle_verify_command(matches: &ArgMatches, config: CodegenConfig) -> Result<()> {
    let sources = collect_sources(&paths(matches), None)?;
    let expected_dir = matches
        .get_one::<String>("expected-dir")
        .map(PathBuf::from)
        .ok_or_else(|| Error::config("--expected-dir is required"))?;
    let verifier = GoldenVerifier::new().with_bless(matches.get_flag("bless"));
    let codegen = ContractCodegen::new(config)?;

    let mut failures = Vec::new();
    let mut checked = 0;
    for source in &sources {
        let contract_name = source.contract_name()?;
        let abi_json = tokio::fs::read_to_string(&source.abi_path)
            .await
            .with_context(|| format!("Failed to read {}", source.abi_path.display()))?;

        let files = match codegen.render_contract(&contract_name, &abi_json) {
            Ok(files) => files,
            Err(err) => {
                error!("Failed to generate {}: {}", source.abi_path.display(), err);
                failures.push(format!("{}: {}", source.abi_path.display(), err));
                continue;
            }
        };

        for file in files {
            let fixture = expected_dir.join(&file.relative_path);
            match verifier.verify(&fixture, &file.content).await {
                Ok(VerifyOutcome::Matched) | Ok(VerifyOutcome::Blessed) => checked += 1,
                Err(err) => {
                    error!("{}", err);
                    failures.push(err.to_string());
                }
            }
        }
    }

    if !failures.is_empty() {
        anyhow::bail!(
            "{} fixture(s) did not match:\n{}",
            failures.len(),
            failures.join("\n")
        );
    }

    if verifier.is_blessing() {
        info!("Blessed {} fixtures in {}", checked, expected_dir.display());
    } else {
        info!("{} fixtures match", checked);
    }
    Ok(())
}
