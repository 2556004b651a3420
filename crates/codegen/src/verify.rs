//! Golden-output verification
//!
//! Compares generated source with committed fixtures byte for byte. In bless
//! mode the fixture is rewritten from the generated source instead.

use abi_gen_common::{Error, Result};
use std::path::Path;
use tracing::{debug, info};

const END_OF_FILE: &str = "<end of file>";

/// Result of checking one fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Fixture and generated source are identical
    Matched,
    /// Fixture was (re)written from the generated source
    Blessed,
}

/// Byte-equality check against fixture files
#[derive(Debug, Clone, Default)]
pub struct GoldenVerifier {
    bless: bool,
}

impl GoldenVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write fixtures instead of comparing against them
    pub fn with_bless(mut self, bless: bool) -> Self {
        self.bless = bless;
        self
    }

    pub fn is_blessing(&self) -> bool {
        self.bless
    }

    /// Check `actual` against the fixture at `fixture_path`
    pub async fn verify(&self, fixture_path: &Path, actual: &str) -> Result<VerifyOutcome> {
        if self.bless {
            if let Some(parent) = fixture_path.parent() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    Error::io(format!("Failed to create directory {}: {}", parent.display(), e))
                })?;
            }
            tokio::fs::write(fixture_path, actual).await.map_err(|e| {
                Error::io(format!("Failed to write fixture {}: {}", fixture_path.display(), e))
            })?;
            info!("Blessed {}", fixture_path.display());
            return Ok(VerifyOutcome::Blessed);
        }

        let expected = tokio::fs::read_to_string(fixture_path).await.map_err(|e| {
            Error::io(format!(
                "Failed to read fixture {}: {}",
                fixture_path.display(),
                e
            ))
        })?;
        compare(&fixture_path.display().to_string(), &expected, actual)?;
        debug!("{} matches", fixture_path.display());
        Ok(VerifyOutcome::Matched)
    }
}

/// Compare two texts, reporting the first line where they differ
pub fn compare(path: &str, expected: &str, actual: &str) -> Result<()> {
    if expected == actual {
        return Ok(());
    }

    // Splitting on '\n' keeps a missing trailing newline visible as an extra empty line
    let expected_lines: Vec<&str> = expected.split('\n').collect();
    let actual_lines: Vec<&str> = actual.split('\n').collect();
    let index = expected_lines
        .iter()
        .zip(actual_lines.iter())
        .position(|(e, a)| e != a)
        .unwrap_or_else(|| expected_lines.len().min(actual_lines.len()));

    Err(Error::GoldenMismatch {
        path: path.to_string(),
        line: index + 1,
        expected_line: expected_lines
            .get(index)
            .copied()
            .unwrap_or(END_OF_FILE)
            .to_string(),
        actual_line: actual_lines
            .get(index)
            .copied()
            .unwrap_or(END_OF_FILE)
            .to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
    })
}
