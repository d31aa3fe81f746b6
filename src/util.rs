// src/util.rs

use anyhow::{bail, Context, Result};
use std::path::Path;

/// Read a UTF-8 file into a String with a clear error message.
///
/// This is mainly used for:
/// - fields files
/// - anything else loaded relative to the working directory
pub fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Split a `key=value` CLI argument into a field pair.
///
/// The key must be non-empty; the value may be empty and may itself
/// contain further `=` characters. Anything else is rejected rather than
/// coerced into a field.
pub fn parse_field(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => bail!("Invalid field '{}': expected key=value", raw),
    }
}
