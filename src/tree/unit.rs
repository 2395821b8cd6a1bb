//! On-disk envelope for one resolved compilation unit

use super::{CompilationUnit, TypeTable};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed tree in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A compilation unit as handed over by the front-end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceUnit {
    /// Path of the original `.java` file
    pub path: PathBuf,
    /// Whether symbol and type resolution succeeded for this unit
    #[serde(default = "default_semantic")]
    pub semantic: bool,
    #[serde(default)]
    pub types: TypeTable,
    pub unit: CompilationUnit,
}

fn default_semantic() -> bool {
    true
}

impl SourceUnit {
    pub fn new(path: impl Into<PathBuf>, types: TypeTable, unit: CompilationUnit) -> Self {
        Self {
            path: path.into(),
            semantic: true,
            types,
            unit,
        }
    }

    pub fn without_semantic(mut self) -> Self {
        self.semantic = false;
        self
    }

    pub fn from_json(json: &str, origin: &Path) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(|source| LoadError::Json {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents, path)
    }
}
