//! Aristotelian Four Causes Lens
//!
//! **Question**: What is it made of, what shape does it take, what sets it in
//! motion, and what is it for?
//!
//! ## Confidence Policy
//!
//! | Cause | Confidence | Reason |
//! |-------|------------|--------|
//! | **Material** | high | Parameters are directly observable |
//! | **Formal** | high | Schema shape is directly observable |
//! | **Efficient** | medium | The caller is inferred, never declared |
//! | **Final** | high / low | High with a description, low from naming alone |

use crate::error::Result;
use crate::ontology::Domain;
use crate::schema::{FunctionSchema, Parameter, ParsedName};
use crate::types::{CauseAnalysis, CauseType, Confidence, FourCausesResult};

use super::Lens;

/// The Aristotelian four-causes lens.
#[derive(Debug, Clone, Copy, Default)]
pub struct CausesAnalyzer;

impl CausesAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// What the function is made of.
    fn material(&self, name: &str, params: &[Parameter<'_>]) -> CauseAnalysis {
        if params.is_empty() {
            return CauseAnalysis {
                cause_type: CauseType::Material,
                summary: format!(
                    "{} takes no parameters; its material cause is vacuous.",
                    name
                ),
                evidence: vec!["No parameters defined in schema.".to_string()],
                confidence: Confidence::High,
            };
        }

        // Histogram in first-appearance order
        let mut type_counts: Vec<(&str, usize)> = Vec::new();
        for p in params {
            match type_counts.iter_mut().find(|(t, _)| *t == p.param_type) {
                Some((_, count)) => *count += 1,
                None => type_counts.push((p.param_type, 1)),
            }
        }
        let type_summary = type_counts
            .iter()
            .map(|(t, count)| format!("{} {}", count, t))
            .collect::<Vec<_>>()
            .join(", ");

        let param_names: Vec<&str> = params.iter().map(|p| p.name).collect();
        let required_names: Vec<&str> = params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();

        let required_list = if required_names.is_empty() {
            "none".to_string()
        } else {
            required_names.join(", ")
        };

        CauseAnalysis {
            cause_type: CauseType::Material,
            summary: format!(
                "{} is materially composed of {} parameter(s) ({}), of which {} are required.",
                name,
                params.len(),
                type_summary,
                required_names.len()
            ),
            evidence: vec![
                format!("Parameters: {}", param_names.join(", ")),
                format!("Required: {}", required_list),
                format!("Type composition: {}", type_summary),
            ],
            confidence: Confidence::High,
        }
    }

    /// The shape the function takes.
    fn formal(&self, name: &str, schema: &FunctionSchema, param_count: usize) -> CauseAnalysis {
        let schema_type = schema.schema_type();
        let has_required = schema.has_required();
        let has_enums = schema.has_enums();

        let mut constraints = Vec::new();
        if has_required {
            constraints.push("required-field constraints");
        }
        if has_enums {
            constraints.push("enumerated-value constraints");
        }
        if constraints.is_empty() {
            constraints.push("no additional constraints");
        }

        CauseAnalysis {
            cause_type: CauseType::Formal,
            summary: format!(
                "The formal shape of {} is a {} schema with {} properties and {}.",
                name,
                schema_type,
                param_count,
                constraints.join(", ")
            ),
            evidence: vec![
                format!("Top-level parameter type: {}", schema_type),
                format!("Has required constraints: {}", has_required),
                format!("Has enum constraints: {}", has_enums),
                format!("Parameter count: {}", param_count),
            ],
            confidence: Confidence::High,
        }
    }

    /// What sets the function in motion.
    fn efficient(&self, name: &str, schema: &FunctionSchema, parsed: &ParsedName) -> CauseAnalysis {
        CauseAnalysis {
            cause_type: CauseType::Efficient,
            summary: format!(
                "{} is triggered by an external caller (agent, user, or system event). \
                 The verb '{}' indicates the initiating action.",
                name, parsed.verb
            ),
            evidence: vec![
                format!("Function name verb: '{}'", parsed.verb),
                format!("Description: '{}'", schema.description().unwrap_or("")),
            ],
            confidence: Confidence::Medium,
        }
    }

    /// What the function is for.
    fn final_cause(&self, name: &str, schema: &FunctionSchema, parsed: &ParsedName) -> CauseAnalysis {
        let purpose = parsed.purpose();
        let description = schema.description();

        let evidence = vec![
            format!("Inferred purpose category: {}", purpose),
            format!("Description: '{}'", description.unwrap_or("")),
        ];

        // Explicit text always outranks the naming heuristic
        let (summary, confidence) = match description {
            Some(desc) => (
                format!("The telos of {} is {}: {}", name, purpose, desc),
                Confidence::High,
            ),
            None => (
                format!(
                    "The telos of {} is inferred as {} based on naming convention alone.",
                    name, purpose
                ),
                Confidence::Low,
            ),
        };

        CauseAnalysis {
            cause_type: CauseType::Final,
            summary,
            evidence,
            confidence,
        }
    }
}

impl Lens for CausesAnalyzer {
    type Finding = FourCausesResult;

    fn tradition(&self) -> Domain {
        Domain::Aristotelian
    }

    fn analyze(&self, schema: &FunctionSchema) -> Result<FourCausesResult> {
        let name = schema.require_name()?;
        let params = schema.parameters();
        let parsed = ParsedName::parse(name);

        tracing::debug!(function = name, tradition = %self.tradition(), "Running lens");

        Ok(FourCausesResult {
            function_name: name.to_string(),
            material: self.material(name, &params),
            formal: self.formal(name, schema, params.len()),
            efficient: self.efficient(name, schema, &parsed),
            final_cause: self.final_cause(name, schema, &parsed),
        })
    }
}
