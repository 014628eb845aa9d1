// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for exported slug tables

use super::loader::{TableDocument, TableError};
use super::SlugMap;
use clap::ValueEnum;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableFormat {
    Json,
    Yaml,
}

impl TableFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(TableFormat::Json),
            "yaml" | "yml" => Some(TableFormat::Yaml),
            _ => None,
        }
    }

    /// Format implied by a file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(TableFormat::parse)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            TableFormat::Json => "json",
            TableFormat::Yaml => "yaml",
        }
    }

    /// Render `map` as a document that [`SlugMap::load`] reads back.
    pub fn serialize(&self, map: &SlugMap) -> Result<String, TableError> {
        let document = TableDocument::from_map(map);
        match self {
            TableFormat::Json => Ok(serde_json::to_string_pretty(&document)?),
            TableFormat::Yaml => Ok(serde_yaml::to_string(&document)?),
        }
    }

    /// Parse a table document written in this format.
    pub fn deserialize(&self, source: &str) -> Result<SlugMap, TableError> {
        match self {
            TableFormat::Json => SlugMap::from_json_str(source),
            TableFormat::Yaml => SlugMap::from_yaml_str(source),
        }
    }
}
