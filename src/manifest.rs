//! Screenshot manifest loading.
//!
//! The manifest is a JSON array of objects. Only the `filename` field is
//! consulted; everything else is carried along untouched.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

/// Reasons a manifest cannot be used. All of them abort the run.
#[derive(thiserror::Error, Debug)]
pub enum ManifestError {
    /// No file exists at the manifest path.
    #[error("manifest '{}' not found", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("read manifest '{}': {source}", .path.display())]
    Read {
        /// Manifest path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("parse manifest '{}': {source}", .path.display())]
    Parse {
        /// Manifest path.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The top-level JSON value is not an array.
    #[error("manifest '{}' must be a JSON array, found {found}", .path.display())]
    NotASequence {
        /// Manifest path.
        path: PathBuf,
        /// JSON type that was found instead.
        found: &'static str,
    },
}

/// One manifest entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ManifestRecord {
    /// Output file name, e.g. `space-my-cool-app.png`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Fields the generator does not look at.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ManifestRecord {
    pub fn with_filename(filename: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            extra: BTreeMap::new(),
        }
    }

    /// Lenient conversion: a non-object element, or one whose `filename` is
    /// not a string, becomes a record without a filename.
    pub fn from_value(value: serde_json::Value) -> Self {
        let serde_json::Value::Object(mut map) = value else {
            return Self::default();
        };
        let filename = match map.remove("filename") {
            Some(serde_json::Value::String(s)) => Some(s),
            Some(other) => {
                map.insert("filename".to_string(), other);
                None
            }
            None => None,
        };
        Self {
            filename,
            extra: map.into_iter().collect(),
        }
    }
}

/// Read and parse the manifest at `path`.
pub fn load_manifest(path: &Path) -> Result<Vec<ManifestRecord>, ManifestError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ManifestError::NotFound(path.to_path_buf())
        } else {
            ManifestError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    parse_manifest_at(&text, path)
}

/// Parse manifest JSON held in memory.
pub fn parse_manifest(json: &str) -> Result<Vec<ManifestRecord>, ManifestError> {
    parse_manifest_at(json, Path::new("<memory>"))
}

fn parse_manifest_at(json: &str, path: &Path) -> Result<Vec<ManifestRecord>, ManifestError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    match value {
        serde_json::Value::Array(items) => {
            Ok(items.into_iter().map(ManifestRecord::from_value).collect())
        }
        other => Err(ManifestError::NotASequence {
            path: path.to_path_buf(),
            found: json_type_name(&other),
        }),
    }
}

fn json_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "../tests/unit/manifest.rs"]
mod tests;
