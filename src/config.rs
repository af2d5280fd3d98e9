//! Trie tuning configuration
//!
//! Loaded from JSON, by default from ~/.config/clust/config.json.
//! Every field is optional in the file and falls back to its default.

use crate::model::Symbol;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default maximum key length (barcode width)
pub const DEFAULT_MAX_KEY_LENGTH: usize = 16;

/// Default number of query symbols checked ahead of a repair
pub const DEFAULT_LOOKAHEAD_DEPTH: usize = 3;

/// Tuning constants for a [`BarcodeTrie`](crate::BarcodeTrie)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieConfig {
    /// Longest key accepted by insert; deletion repairs are truncated to it
    pub max_key_length: usize,
    /// How many symbols past a mismatch a repair must keep aligning
    pub lookahead_depth: usize,
    /// Symbol appended to restore length after an insertion repair
    pub filler: Symbol,
}

impl Default for TrieConfig {
    fn default() -> Self {
        TrieConfig {
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            lookahead_depth: DEFAULT_LOOKAHEAD_DEPTH,
            filler: Symbol::A,
        }
    }
}

impl TrieConfig {
    /// Default config file location (~/.config/clust/config.json)
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not find config directory".into()))?;
        Ok(config_dir.join("clust").join("config.json"))
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: TrieConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, else the default location if it exists, else defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Ok(default) if default.exists() => {
                log::info!("Using config from {}", default.display());
                Self::load(default)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_key_length == 0 {
            return Err(Error::Config("max_key_length must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = TrieConfig::default();
        assert_eq!(config.max_key_length, 16);
        assert_eq!(config.lookahead_depth, 3);
        assert_eq!(config.filler, Symbol::A);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"max_key_length": 12}"#).unwrap();

        let config = TrieConfig::load(&path).unwrap();
        assert_eq!(config.max_key_length, 12);
        assert_eq!(config.lookahead_depth, DEFAULT_LOOKAHEAD_DEPTH);
    }

    #[test]
    fn test_load_rejects_zero_length() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"max_key_length": 0}"#).unwrap();

        assert!(matches!(TrieConfig::load(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = TrieConfig::load(dir.path().join("nope.json"));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_resolve_explicit_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"filler": "C"}"#).unwrap();

        let config = TrieConfig::resolve(Some(path.as_path())).unwrap();
        assert_eq!(config.filler, Symbol::C);
    }
}
