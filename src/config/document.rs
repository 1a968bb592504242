//! Locating, reading, and writing the JSON configuration document.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use super::loader::ConfigError;
use crate::constants::{CONFIG_CANDIDATES, DEFAULT_CONFIG_PATH};

/// Where the configuration lives on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    path: PathBuf,
    exists: bool,
}

impl ConfigDocument {
    /// Probe the candidate locations under `root` in priority order.
    ///
    /// Falls back to `.breathecode/bc.json`, the path every save writes
    /// to. A document already saved there is read back like any other.
    pub fn locate(root: &Path) -> Self {
        let path = CONFIG_CANDIDATES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.is_file())
            .unwrap_or_else(|| root.join(DEFAULT_CONFIG_PATH));
        let exists = path.is_file();
        Self { path, exists }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a document was found when probing.
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Read and parse the document as a JSON object.
    pub fn read(&self) -> Result<Map<String, Value>, ConfigError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::ReadFile {
            path: self.path.clone(),
            source: e,
        })?;
        let value: Value = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: self.path.clone(),
            source: e,
        })?;
        match value {
            Value::Object(map) => Ok(map),
            _ => Err(ConfigError::NotAnObject {
                path: self.path.clone(),
            }),
        }
    }

    /// Write `value` as JSON indented with four spaces.
    ///
    /// Creates the parent directory when needed.
    pub fn write<T: Serialize>(&self, value: &T) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let content = to_pretty_json(value)?;
        std::fs::write(&self.path, content).map_err(|e| ConfigError::WriteFile {
            path: self.path.clone(),
            source: e,
        })
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, ConfigError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser).map_err(ConfigError::Serialize)?;
    Ok(buf)
}
