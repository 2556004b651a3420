/// Configuration management for the code generator
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::targets::Language;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error) or a full filter directive
    pub level: String,

    /// Log format (pretty, json)
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Settings of a generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// Root directory of the generated bindings
    pub output_dir: String,

    /// Languages to emit
    pub languages: Vec<Language>,

    /// Print generated files instead of writing them
    pub dry_run: bool,

    /// Logging settings for the binary
    pub logging: LogConfig,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            output_dir: "./generated".to_string(),
            languages: Language::all(),
            dry_run: false,
            logging: LogConfig::default(),
        }
    }
}

impl CodegenConfig {
    /// Check the settings before a run
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.trim().is_empty() {
            return Err(anyhow::anyhow!("output_dir must not be empty"));
        }
        if self.languages.is_empty() {
            return Err(anyhow::anyhow!("At least one language must be selected"));
        }
        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(anyhow::anyhow!(
                "Invalid log format '{}'. Supported formats: pretty, json",
                other
            )),
        }
    }
}

/// Loads [`CodegenConfig`] from files and the environment
pub struct ConfigManager {
    config: CodegenConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Create a manager holding the default configuration
    pub fn new() -> Self {
        Self {
            config: CodegenConfig::default(),
            config_path: None,
        }
    }

    /// Load configuration from a `.toml`, `.json` or `.yaml` file, then apply environment overrides
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config = match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML configuration file: {}", path.display()))?,
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON configuration file: {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML configuration file: {}", path.display()))?,
            _ => return Err(anyhow::anyhow!("Unsupported configuration file format. Supported formats: .toml, .json, .yaml, .yml")),
        };

        let mut manager = Self {
            config,
            config_path: Some(path.to_path_buf()),
        };
        manager.apply_environment_overrides()?;

        Ok(manager)
    }

    /// Load from `path` when given, otherwise start from the defaults; overrides apply either way
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => {
                let mut manager = Self::new();
                manager.apply_environment_overrides()?;
                Ok(manager)
            }
        }
    }

    /// Apply `ABI_GEN_*` environment variable overrides
    pub fn apply_environment_overrides(&mut self) -> Result<()> {
        if let Ok(output_dir) = env::var("ABI_GEN_OUTPUT_DIR") {
            self.config.output_dir = output_dir;
        }
        if let Ok(languages) = env::var("ABI_GEN_LANGUAGES") {
            self.config.languages = Language::parse_list(&languages)
                .with_context(|| format!("Invalid ABI_GEN_LANGUAGES value: {}", languages))?;
        }
        if let Ok(log_level) = env::var("ABI_GEN_LOG_LEVEL") {
            self.config.logging.level = log_level;
        }
        if let Ok(dry_run) = env::var("ABI_GEN_DRY_RUN") {
            self.config.dry_run = match dry_run.to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                _ => return Err(anyhow::anyhow!("Invalid ABI_GEN_DRY_RUN value: {}", dry_run)),
            };
        }

        Ok(())
    }

    /// Get the configuration
    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    /// Get a mutable reference to the configuration
    pub fn config_mut(&mut self) -> &mut CodegenConfig {
        &mut self.config
    }

    /// File the configuration was loaded from, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn into_config(self) -> CodegenConfig {
        self.config
    }

    /// Save the current configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => toml::to_string_pretty(&self.config)
                .with_context(|| "Failed to serialize configuration to TOML")?,
            Some("json") => serde_json::to_string_pretty(&self.config)
                .with_context(|| "Failed to serialize configuration to JSON")?,
            Some("yaml") | Some("yml") => serde_yaml::to_string(&self.config)
                .with_context(|| "Failed to serialize configuration to YAML")?,
            _ => return Err(anyhow::anyhow!("Unsupported configuration file format. Supported formats: .toml, .json, .yaml, .yml")),
        };

        fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
