//! Project configuration
//!
//! Read from `javachecks.toml` or `javachecks.yml`/`.yaml`; every field is
//! optional. CLI flags are applied on top by the binary.

use crate::analysis::IssueKind;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File names searched for in the analyzed directory, in order
pub const DEFAULT_CONFIG_FILES: &[&str] = &["javachecks.toml", "javachecks.yml", "javachecks.yaml"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unsupported config format: {0} (expected .toml, .yml or .yaml)")]
    UnsupportedFormat(PathBuf),

    #[error("invalid exclude pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("unknown rule id '{0}'")]
    UnknownRule(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rule ids (`S4201`, `S3510`) that should not run
    pub disabled_rules: Vec<String>,

    /// Regex patterns; matching tree files are skipped
    pub exclude: Vec<String>,

    /// Overrides each unit's "semantic model available" flag
    pub assume_semantic: Option<bool>,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&contents).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            })?,
            Some("yml") | Some("yaml") => {
                serde_yaml::from_str(&contents).map_err(|source| ConfigError::Yaml {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        config.validate()?;
        Ok(config)
    }

    /// Load the first default config file found in `dir`, or defaults
    pub fn from_default_locations(dir: &Path) -> Result<Self, ConfigError> {
        for name in DEFAULT_CONFIG_FILES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Self::from_file(&candidate);
            }
        }
        Ok(Self::default())
    }

    /// Reject unknown rule ids and uncompilable exclude patterns
    pub fn validate(&self) -> Result<(), ConfigError> {
        for rule in &self.disabled_rules {
            if IssueKind::from_code(rule).is_none() {
                return Err(ConfigError::UnknownRule(rule.clone()));
            }
        }
        self.exclude_patterns().map(|_| ())
    }

    pub fn exclude_patterns(&self) -> Result<Vec<Regex>, ConfigError> {
        self.exclude
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| ConfigError::Pattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect()
    }

    pub fn is_rule_enabled(&self, kind: IssueKind) -> bool {
        !self
            .disabled_rules
            .iter()
            .any(|rule| rule.eq_ignore_ascii_case(kind.code()))
    }

    /// Keep only the listed rules enabled
    pub fn restrict_to(&mut self, rules: &[IssueKind]) {
        self.disabled_rules = IssueKind::ALL
            .into_iter()
            .filter(|kind| !rules.contains(kind))
            .map(|kind| kind.code().to_string())
            .collect();
    }
}
