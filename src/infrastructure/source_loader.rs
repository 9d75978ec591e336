//! Menu document loading
//!
//! Reads a JSON, TOML or YAML document into an `EntrySource`. Documents are
//! parsed into an order-preserving `serde_json::Value` first so that mapping
//! entries keep the order they were written in.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::domain::EntrySource;
use crate::error::{MenuError, MenuResult};

/// Document syntax, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Toml,
    Yaml,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(SourceFormat::Json),
            "toml" => Some(SourceFormat::Toml),
            "yaml" | "yml" => Some(SourceFormat::Yaml),
            _ => None,
        }
    }
}

fn parse_value(content: &str, format: SourceFormat) -> Result<Value, String> {
    match format {
        SourceFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        SourceFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        SourceFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
    }
}

/// Parse document text of a known format.
///
/// Syntax errors are reported as `InvalidSource` against `file`; a document
/// of the wrong shape keeps its `UnsupportedInputKind` error.
pub fn parse_source(content: &str, format: SourceFormat, file: &Path) -> MenuResult<EntrySource> {
    let value = parse_value(content, format).map_err(|message| MenuError::InvalidSource {
        file: file.to_path_buf(),
        message,
    })?;
    EntrySource::from_value(value)
}

/// Load a menu document from disk.
pub fn load_source(path: &Path) -> MenuResult<EntrySource> {
    let format = SourceFormat::from_path(path).ok_or_else(|| MenuError::InvalidSource {
        file: path.to_path_buf(),
        message: "expected a .json, .toml, .yaml or .yml file".to_string(),
    })?;
    let content = fs::read_to_string(path)?;
    let source = parse_source(&content, format, path)?;

    tracing::debug!(file = %path.display(), ?format, items = source.len(), "loaded menu document");
    Ok(source)
}
