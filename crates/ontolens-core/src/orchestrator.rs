//! Orchestration of the four analyzers.
//!
//! The orchestrator validates the schema's identity once, fans out to the
//! causes, context, and sign lenses plus the grounding mapper, and fans the
//! results back into one [`FullAnalysis`].
//!
//! - Fan-out: the four analyzers run concurrently via nested `rayon::join`
//!   (or sequentially when `parallel_lenses` is off)
//! - Fan-in: every sub-result must carry the input's function name
//! - Batches of schemas are analyzed with a parallel iterator, in input order

use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::grounding::{GroundingMapper, GroundingResult};
use crate::lenses::{CausesAnalyzer, ContextAnalyzer, Lens, SignAnalyzer};
use crate::schema::FunctionSchema;
use crate::types::{ContextResult, FourCausesResult, SignResult};

/// The composed analysis of one function.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FullAnalysis {
    pub function_name: String,
    pub four_causes: FourCausesResult,
    pub context: ContextResult,
    pub signs: SignResult,
    pub grounding: GroundingResult,
}

impl FullAnalysis {
    /// Structural form of the analysis.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Canonical compact text encoding.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Indented text encoding for display.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Shorthand for the grounding coverage ratio.
    pub fn coverage_ratio(&self) -> f64 {
        self.grounding.coverage_ratio()
    }
}

/// Runs every analyzer over a schema and composes the results.
#[derive(Debug, Clone, Default)]
pub struct AnalysisOrchestrator {
    config: AnalysisConfig,
    causes: CausesAnalyzer,
    context: ContextAnalyzer,
    signs: SignAnalyzer,
    grounding: GroundingMapper,
}

impl AnalysisOrchestrator {
    /// Create an orchestrator with default configuration.
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::default())
    }

    pub fn with_config(config: AnalysisConfig) -> Self {
        Self {
            config,
            causes: CausesAnalyzer::new(),
            context: ContextAnalyzer::new(),
            signs: SignAnalyzer::new(),
            grounding: GroundingMapper::new(),
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze a parsed schema.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AnalysisError::MissingName`] before any analyzer runs
    /// if the schema has no name.
    pub fn analyze(&self, schema: &FunctionSchema) -> Result<FullAnalysis> {
        let name = schema.require_name()?;

        tracing::debug!(
            function = name,
            parallel = self.config.parallel_lenses,
            "Analyzing schema"
        );

        let (four_causes, context, signs, grounding) = if self.config.parallel_lenses {
            let ((causes, context), (signs, grounding)) = rayon::join(
                || {
                    rayon::join(
                        || self.causes.analyze(schema),
                        || self.context.analyze(schema),
                    )
                },
                || {
                    rayon::join(
                        || self.signs.analyze(schema),
                        || self.grounding.ground(schema),
                    )
                },
            );
            (causes?, context?, signs?, grounding?)
        } else {
            (
                self.causes.analyze(schema)?,
                self.context.analyze(schema)?,
                self.signs.analyze(schema)?,
                self.grounding.ground(schema)?,
            )
        };

        let analysis = FullAnalysis {
            function_name: name.to_string(),
            four_causes,
            context,
            signs,
            grounding,
        };
        assert_consistent_names(&analysis);

        Ok(analysis)
    }

    /// Parse JSON text and analyze it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AnalysisError::MalformedInput`] if the text is not a
    /// schema-shaped JSON object.
    pub fn analyze_json(&self, json: &str) -> Result<FullAnalysis> {
        let schema = FunctionSchema::from_json(json)?;
        self.analyze(&schema)
    }

    /// Analyze an already-decoded JSON value.
    pub fn analyze_value(&self, value: Value) -> Result<FullAnalysis> {
        let schema = FunctionSchema::from_value(value)?;
        self.analyze(&schema)
    }

    /// Analyze many schemas, returning one result per schema in input order.
    pub fn analyze_batch(&self, schemas: &[FunctionSchema]) -> Vec<Result<FullAnalysis>> {
        tracing::debug!(
            count = schemas.len(),
            parallel = self.config.parallel_batch,
            "Analyzing batch"
        );

        if self.config.parallel_batch {
            schemas.par_iter().map(|s| self.analyze(s)).collect()
        } else {
            schemas.iter().map(|s| self.analyze(s)).collect()
        }
    }
}

/// Every sub-result must report the name the analysis was built for.
fn assert_consistent_names(analysis: &FullAnalysis) {
    let reported = [
        ("four_causes", &analysis.four_causes.function_name),
        ("context", &analysis.context.function_name),
        ("signs", &analysis.signs.function_name),
        ("grounding", &analysis.grounding.function_name),
    ];
    for (section, name) in reported {
        assert_eq!(
            name, &analysis.function_name,
            "{} reported function name '{}' but the schema is '{}'",
            section, name, analysis.function_name
        );
    }
}
