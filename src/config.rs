// src/config.rs

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Root configuration loaded from `config.yaml`.
///
/// This file controls:
/// - Where submissions are sent
/// - Default form fields
/// - Optional request timeout
/// - Output formatting
///
/// CLI flags only override config values; the file is the source of
/// truth. `FORMPOST_ENDPOINT` in the environment overrides `endpoint`.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Destination URL for submissions.
    ///
    /// Must be an absolute URL; it is validated when the submitter is
    /// constructed, not here.
    pub endpoint: String,

    /// Optional per-request timeout in seconds.
    ///
    /// Absent means no explicit timeout: a submission runs until the
    /// transport resolves or fails on its own.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Default form fields submitted with every `send`.
    ///
    /// A list rather than a map, so entry order and repeated names
    /// survive into the encoded body.
    ///
    /// Example:
    /// fields:
    ///   - name: subject
    ///     value: contact
    #[serde(default)]
    pub fields: Vec<Field>,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// One default form field.
#[derive(Debug, Deserialize, Clone)]
pub struct Field {
    pub name: String,
    pub value: String,
}

/// Output configuration.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_mode")]
    pub mode: OutputMode,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            mode: default_output_mode(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Print `success` / `error` only.
    Stdout,
    /// Print the detailed outcome as a JSON document.
    Json,
}

fn default_output_mode() -> OutputMode {
    OutputMode::Stdout
}

impl Config {
    /// Load and parse `config.yaml` from disk.
    ///
    /// This performs:
    /// - File read
    /// - YAML deserialization
    /// - Environment override of the endpoint
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let mut cfg: Config =
            serde_yaml::from_str(&raw).context("Failed to parse YAML config")?;

        if let Ok(endpoint) = std::env::var("FORMPOST_ENDPOINT") {
            cfg.endpoint = endpoint;
        }

        Ok(cfg)
    }
}

/// Load a standalone fields file (YAML list of name/value entries).
///
/// Used by `send --data fields.yaml`. Anything that does not deserialize
/// into string name/value pairs is rejected here rather than coerced.
pub fn load_fields_file(path: &Path) -> Result<Vec<Field>> {
    let raw = crate::util::read_to_string(path)?;
    let fields: Vec<Field> = serde_yaml::from_str(&raw)
        .with_context(|| format!("Failed to parse fields file {:?}", path))?;
    Ok(fields)
}
