//! Configuration for the ontolens CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

use ontolens_core::AnalysisConfig;

/// CLI configuration, loaded from YAML.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Engine scheduling settings
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Report rendering settings
    #[serde(default)]
    pub report: ReportConfig,
}

impl CliConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Invalid CLI config YAML")
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        Self::from_yaml(&content)
    }

    /// Load from `path` if given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_yaml_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// How `analyze` renders its output.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    #[default]
    Json,
    Summary,
}

/// Report rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// Default output format for `analyze`
    #[serde(default)]
    pub format: ReportFormat,

    /// Indent JSON output
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// Characters of concept description shown by `concepts`
    #[serde(default = "default_concept_description_width")]
    pub concept_description_width: usize,

    /// Characters of final-cause summary quoted in the summary format
    #[serde(default = "default_summary_excerpt_chars")]
    pub summary_excerpt_chars: usize,
}

fn default_true() -> bool {
    true
}

fn default_concept_description_width() -> usize {
    40
}

fn default_summary_excerpt_chars() -> usize {
    80
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Json,
            pretty: true,
            concept_description_width: 40,
            summary_excerpt_chars: 80,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.report.format, ReportFormat::Json);
        assert!(config.report.pretty);
        assert_eq!(config.report.concept_description_width, 40);
        assert_eq!(config.report.summary_excerpt_chars, 80);
        assert!(config.analysis.parallel_lenses);
    }

    #[test]
    fn test_partial_yaml() {
        let config = CliConfig::from_yaml(
            r#"
report:
  format: summary
analysis:
  parallel_batch: false
"#,
        )
        .unwrap();
        assert_eq!(config.report.format, ReportFormat::Summary);
        assert!(config.report.pretty);
        assert!(!config.analysis.parallel_batch);
        assert!(config.analysis.parallel_lenses);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(CliConfig::from_yaml("report:\n  format: xml\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "report:").unwrap();
        writeln!(file, "  pretty: false").unwrap();
        writeln!(file, "  concept_description_width: 20").unwrap();

        let config = CliConfig::load(Some(file.path())).unwrap();
        assert!(!config.report.pretty);
        assert_eq!(config.report.concept_description_width, 20);
    }

    #[test]
    fn test_load_without_path_is_default() {
        assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(CliConfig::load(Some(Path::new("/nonexistent/ontolens.yaml"))).is_err());
    }
}
