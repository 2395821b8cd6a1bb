//! Locates serialized compilation units (`*.tree.json`) on disk

use crate::config::{Config, ConfigError};
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Suffix of files holding one serialized compilation unit
pub const TREE_SUFFIX: &str = ".tree.json";

pub struct FileFinder {
    exclude: Vec<Regex>,
}

impl FileFinder {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            exclude: config.exclude_patterns()?,
        })
    }

    fn is_tree_file(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(TREE_SUFFIX))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let text = path.to_string_lossy();
        self.exclude.iter().any(|re| re.is_match(&text))
    }

    /// Tree files under `root` (or `root` itself when it is a file), sorted
    pub fn find_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("Skipping unreadable entry: {}", err);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| Self::is_tree_file(path))
            .filter(|path| {
                let excluded = self.is_excluded(path);
                if excluded {
                    debug!("Excluded {}", path.display());
                }
                !excluded
            })
            .collect();

        files.sort();
        files
    }

    pub fn find_all(&self, roots: &[PathBuf]) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = roots.iter().flat_map(|root| self.find_files(root)).collect();
        files.sort();
        files.dedup();
        files
    }
}
