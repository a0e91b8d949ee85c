//! Ontolens CLI
//!
//! Command-line interface for ontological analysis of function-calling schemas.
//!
//! ## Usage
//!
//! ```bash
//! # Analyze a schema (JSON output)
//! ontolens analyze schema.json
//!
//! # One-paragraph summary instead
//! ontolens analyze schema.json --format summary
//!
//! # Full human-readable report
//! ontolens report schema.json
//!
//! # List the twelve concepts
//! ontolens concepts
//! ```
//!
//! A schema file holds one schema object or a JSON array of them.
//!
//! ## Exit Codes
//!
//! - 0: Every schema analyzed
//! - 1: A schema was rejected (malformed JSON or missing name)
//! - 2: I/O or configuration error

mod config;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ontolens_core::{
    AnalysisError, AnalysisOrchestrator, ConceptRegistry, FullAnalysis, FunctionSchema,
};

use config::{CliConfig, ReportFormat};

/// Ontolens: ontological analysis of function-calling schemas
#[derive(Parser)]
#[command(name = "ontolens")]
#[command(version)]
#[command(about = "Read function schemas through Aristotle, Heidegger, and Peirce", long_about = None)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a schema file
    Analyze {
        /// Path to a JSON file holding a schema or an array of schemas
        file: PathBuf,

        /// Output format (defaults to the configured format)
        #[arg(short, long)]
        format: Option<ReportFormat>,
    },

    /// Print the full text report for a schema file
    Report {
        /// Path to a JSON file holding a schema or an array of schemas
        file: PathBuf,
    },

    /// List the twelve ontological concepts
    Concepts,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze { file, format } => {
            let format = format.unwrap_or(config.report.format);
            analyze_command(&file, format, &config)
        }
        Commands::Report { file } => analyze_command(&file, ReportFormat::Text, &config),
        Commands::Concepts => {
            println!("{}", report::format_concepts(&ConceptRegistry::canonical(), &config.report));
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Read a schema file into one JSON value per schema.
///
/// The outer error is an I/O failure; the inner one means the text is not JSON.
fn load_schemas(path: &Path) -> Result<ontolens_core::Result<(Vec<Value>, bool)>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema from {:?}", path))?;

    if path.extension().map(|e| e != "json").unwrap_or(true) {
        tracing::warn!(path = ?path, "Schema file does not have a .json extension");
    }

    Ok(match serde_json::from_str::<Value>(&content) {
        Ok(Value::Array(items)) => Ok((items, true)),
        Ok(value) => Ok((vec![value], false)),
        Err(e) => Err(AnalysisError::from(e)),
    })
}

fn analyze_command(path: &Path, format: ReportFormat, config: &CliConfig) -> Result<ExitCode> {
    let (values, is_batch) = match load_schemas(path)? {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Schema rejected: {}", e);
            return Ok(ExitCode::from(1));
        }
    };

    let orchestrator = AnalysisOrchestrator::with_config(config.analysis.clone());
    let results = analyze_values(&orchestrator, values, is_batch);

    let mut failed = false;
    let mut analyses = Vec::new();
    for (i, result) in results.into_iter().enumerate() {
        match result {
            Ok(analysis) => analyses.push(analysis),
            Err(e) => {
                failed = true;
                if is_batch {
                    eprintln!("Schema #{} rejected: {}", i + 1, e);
                } else {
                    eprintln!("Schema rejected: {}", e);
                }
            }
        }
    }

    print_analyses(&analyses, format, is_batch, config)?;

    Ok(if failed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}

/// Analyze decoded schemas, one result per value in input order.
fn analyze_values(
    orchestrator: &AnalysisOrchestrator,
    values: Vec<Value>,
    is_batch: bool,
) -> Vec<ontolens_core::Result<FullAnalysis>> {
    if !is_batch {
        return values
            .into_iter()
            .map(|v| orchestrator.analyze_value(v))
            .collect();
    }

    // Shape errors are reported per schema, like missing names
    let parsed: Vec<ontolens_core::Result<FunctionSchema>> =
        values.into_iter().map(FunctionSchema::from_value).collect();
    let schemas: Vec<FunctionSchema> = parsed
        .iter()
        .filter_map(|r| r.as_ref().ok().cloned())
        .collect();
    let mut analyzed = orchestrator.analyze_batch(&schemas).into_iter();

    parsed
        .into_iter()
        .filter_map(|r| match r {
            Ok(_) => analyzed.next(),
            Err(e) => Some(Err(e)),
        })
        .collect()
}

fn print_analyses(
    analyses: &[FullAnalysis],
    format: ReportFormat,
    is_batch: bool,
    config: &CliConfig,
) -> Result<()> {
    match format {
        ReportFormat::Json if is_batch => {
            let json = if config.report.pretty {
                serde_json::to_string_pretty(analyses)?
            } else {
                serde_json::to_string(analyses)?
            };
            println!("{}", json);
        }
        ReportFormat::Json => {
            for analysis in analyses {
                println!("{}", report::format_json_report(analysis, &config.report)?);
            }
        }
        ReportFormat::Text => {
            for analysis in analyses {
                println!("{}", report::format_text_report(analysis));
            }
        }
        ReportFormat::Summary => {
            for analysis in analyses {
                println!("{}", report::format_summary(analysis, &config.report));
            }
        }
    }

    Ok(())
}
