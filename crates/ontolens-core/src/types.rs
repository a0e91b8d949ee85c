//! Result records produced by the lenses.
//!
//! Every record is built fresh per analysis and never mutated afterwards.
//! Fixed label sets are closed enums so they serialize to the same tags
//! the JSON report uses.

use serde::{Deserialize, Serialize};

/// How strongly the schema evidences a cause.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

/// The four Aristotelian causes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CauseType {
    Material,
    Formal,
    Efficient,
    Final,
}

impl CauseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CauseType::Material => "material",
            CauseType::Formal => "formal",
            CauseType::Efficient => "efficient",
            CauseType::Final => "final",
        }
    }
}

/// Analysis of one cause.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CauseAnalysis {
    /// Which cause this is
    pub cause_type: CauseType,

    /// One-line human-readable summary
    pub summary: String,

    /// Schema elements that ground the analysis
    pub evidence: Vec<String>,

    /// How well the evidence supports the summary
    pub confidence: Confidence,
}

/// All four causes of one function.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FourCausesResult {
    pub function_name: String,
    pub material: CauseAnalysis,
    pub formal: CauseAnalysis,
    pub efficient: CauseAnalysis,
    #[serde(rename = "final")]
    pub final_cause: CauseAnalysis,
}

impl FourCausesResult {
    /// The four causes in canonical order.
    pub fn all_causes(&self) -> [&CauseAnalysis; 4] {
        [&self.material, &self.formal, &self.efficient, &self.final_cause]
    }
}

/// Kind of world-state a function presupposes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AssumptionAspect {
    CallableContext,
    GeographicReality,
    EntityExistence,
    AuthState,
    ServiceAvailability,
}

impl AssumptionAspect {
    /// Serialized tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssumptionAspect::CallableContext => "callable_context",
            AssumptionAspect::GeographicReality => "geographic_reality",
            AssumptionAspect::EntityExistence => "entity_existence",
            AssumptionAspect::AuthState => "auth_state",
            AssumptionAspect::ServiceAvailability => "service_availability",
        }
    }
}

impl std::fmt::Display for AssumptionAspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_str().replace('_', " "))
    }
}

/// A precondition the function takes for granted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorldAssumption {
    pub aspect: AssumptionAspect,
    pub description: String,

    /// The schema element that triggered this assumption
    pub derived_from: String,
}

/// How badly a breakdown interrupts the caller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Minor,
    Major,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Minor => "minor",
            Severity::Major => "major",
        }
    }
}

/// A condition under which the tool stops being transparent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BreakdownCondition {
    pub trigger: String,
    pub consequence: String,
    pub severity: Severity,
}

/// Heideggerian reading of one function.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContextResult {
    pub function_name: String,

    /// Dasein: what the world must already be like
    pub world_assumptions: Vec<WorldAssumption>,

    /// Zuhandenheit: when the tool withdraws into use
    pub transparency_conditions: Vec<String>,

    /// Vorhandenheit: when the tool becomes an object of attention
    pub breakdown_conditions: Vec<BreakdownCondition>,
}

impl ContextResult {
    /// Check if an assumption with the given aspect was derived.
    pub fn assumes(&self, aspect: AssumptionAspect) -> bool {
        self.world_assumptions.iter().any(|wa| wa.aspect == aspect)
    }
}

/// The three Peircean sign components.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SignComponent {
    Representamen,
    Object,
    Interpretant,
}

impl SignComponent {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignComponent::Representamen => "representamen",
            SignComponent::Object => "object",
            SignComponent::Interpretant => "interpretant",
        }
    }
}

/// Analysis of one sign component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignAnalysis {
    pub component: SignComponent,
    pub summary: String,
    pub evidence: Vec<String>,
}

/// Peircean reading of one function.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignResult {
    pub function_name: String,
    pub representamen: SignAnalysis,
    pub object: SignAnalysis,
    pub interpretant: SignAnalysis,
}

impl SignResult {
    /// The three components in canonical order.
    pub fn all_components(&self) -> [&SignAnalysis; 3] {
        [&self.representamen, &self.object, &self.interpretant]
    }
}
