//! Configuration for the analysis engine.
//!
//! Settings only affect scheduling. Results are identical whichever
//! options are chosen.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors from loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Analysis configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Run the four analyzers for one schema concurrently
    #[serde(default = "default_true")]
    pub parallel_lenses: bool,

    /// Analyze the schemas of a batch concurrently
    #[serde(default = "default_true")]
    pub parallel_batch: bool,
}

fn default_true() -> bool {
    true
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            parallel_lenses: true,
            parallel_batch: true,
        }
    }
}

impl AnalysisConfig {
    /// Configuration that runs everything on the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel_lenses: false,
            parallel_batch: false,
        }
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert!(config.parallel_lenses);
        assert!(config.parallel_batch);
    }

    #[test]
    fn test_sequential_config() {
        let config = AnalysisConfig::sequential();
        assert!(!config.parallel_lenses);
        assert!(!config.parallel_batch);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = AnalysisConfig::from_yaml("parallel_lenses: false\n").unwrap();
        assert!(!config.parallel_lenses);
        assert!(config.parallel_batch);
    }

    #[test]
    fn test_empty_mapping_is_default() {
        let config = AnalysisConfig::from_yaml("{}").unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn test_invalid_yaml() {
        let result = AnalysisConfig::from_yaml("parallel_lenses: [not, a, bool]");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "parallel_lenses: true").unwrap();
        writeln!(file, "parallel_batch: false").unwrap();

        let config = AnalysisConfig::from_yaml_file(file.path()).unwrap();
        assert!(config.parallel_lenses);
        assert!(!config.parallel_batch);
    }

    #[test]
    fn test_missing_file() {
        let result = AnalysisConfig::from_yaml_file("/nonexistent/ontolens.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = AnalysisConfig::sequential();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(AnalysisConfig::from_yaml(&yaml).unwrap(), config);
    }
}
