//! # ontolens-core
//!
//! Deterministic ontological analysis of function-calling schemas.
//!
//! This crate reads a function schema (name, description, parameter shape)
//! through three analytical traditions and grounds the result in a fixed
//! catalogue of twelve concepts:
//! - What is the function made of, and what is it for? (Aristotelian causes)
//! - What world does it assume, and how does it break down? (Heideggerian context)
//! - What does its name signify to a caller? (Peircean signs)
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same schema always produces the same analysis
//! 2. **Stateless**: No value survives from one call to the next
//! 3. **Consistent**: Every sub-result carries the schema's function name
//! 4. **Parallel-safe**: The analyzers share nothing and may run concurrently
//!
//! ## Example
//!
//! ```rust
//! use ontolens_core::{AnalysisOrchestrator, FunctionSchema};
//!
//! let schema = FunctionSchema::from_json(r#"{"name": "get_weather"}"#)?;
//! let analysis = AnalysisOrchestrator::new().analyze(&schema)?;
//!
//! assert_eq!(analysis.function_name, "get_weather");
//! assert_eq!(analysis.grounding.mappings.len(), 12);
//! # Ok::<(), ontolens_core::AnalysisError>(())
//! ```

pub mod config;
pub mod error;
pub mod grounding;
pub mod lenses;
pub mod ontology;
pub mod orchestrator;
pub mod schema;
pub mod types;

// Re-export main types at crate root
pub use config::{AnalysisConfig, ConfigError};
pub use error::{AnalysisError, Result};
pub use grounding::{GroundingMapper, GroundingMapping, GroundingResult};
pub use lenses::{CausesAnalyzer, ContextAnalyzer, Lens, SignAnalyzer};
pub use ontology::{Concept, ConceptRegistry, Domain, CONCEPT_COUNT};
pub use orchestrator::{AnalysisOrchestrator, FullAnalysis};
pub use schema::{FunctionSchema, ParsedName};
pub use types::{
    AssumptionAspect, BreakdownCondition, CauseAnalysis, CauseType, Confidence, ContextResult,
    FourCausesResult, Severity, SignAnalysis, SignComponent, SignResult, WorldAssumption,
};

/// Analyze a schema with the default orchestrator.
///
/// This is the main entry point for one-off analysis.
pub fn analyze(schema: &FunctionSchema) -> Result<FullAnalysis> {
    AnalysisOrchestrator::new().analyze(schema)
}

/// Parse JSON text and analyze it with the default orchestrator.
pub fn analyze_json(json: &str) -> Result<FullAnalysis> {
    AnalysisOrchestrator::new().analyze_json(json)
}
