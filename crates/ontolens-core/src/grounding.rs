//! Grounding: scoring every concept against the schema.
//!
//! The mapper walks the concept registry in canonical order and decides, for
//! each concept, whether the schema evidences it. It re-derives everything
//! from the raw schema and never reads the lens results, so its verdicts can
//! be checked against the lenses independently.
//!
//! ## Applicability Rules
//!
//! | Concept | Applies when |
//! |---------|--------------|
//! | Material Cause | parameter properties are declared |
//! | Formal / Efficient / Final Cause | always |
//! | Dasein / Zuhandenheit / Vorhandenheit | always |
//! | Representamen | always |
//! | Object | the name yields a noun, or a description exists |
//! | Interpretant | a description exists, or the name yields a noun |
//! | Grounding | always; anchor reports `K/10` over the tradition concepts |
//! | Telos Bridge | a description exists |
//!
//! Coverage divides by all twelve concepts, so it differs from the `K/10`
//! figure in the grounding anchor. Both are reported.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::{AnalysisError, Result};
use crate::lenses::excerpt;
use crate::ontology::{Concept, ConceptRegistry, Domain, CONCEPT_COUNT};
use crate::schema::{FunctionSchema, ParsedName};

/// Number of tradition-specific concepts counted by the grounding anchor.
const TRADITION_CONCEPTS: usize = 10;

/// Characters of description quoted in anchors.
const ANCHOR_EXCERPT_CHARS: usize = 60;

/// Characters of description quoted in the telos bridge explanation.
const TELOS_EXCERPT_CHARS: usize = 50;

/// One concept's verdict for a schema.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundingMapping {
    pub concept: &'static Concept,
    pub applies: bool,

    /// The schema element cited as evidence
    pub anchor: String,

    /// Why the concept does or does not apply
    pub explanation: String,
}

impl GroundingMapping {
    fn new(concept: &'static Concept, applies: bool, anchor: String, explanation: String) -> Self {
        Self {
            concept,
            applies,
            anchor,
            explanation,
        }
    }
}

impl Serialize for GroundingMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("GroundingMapping", 6)?;
        state.serialize_field("concept", self.concept.name)?;
        state.serialize_field("key", self.concept.key)?;
        state.serialize_field("domain", &self.concept.domain)?;
        state.serialize_field("applies", &self.applies)?;
        state.serialize_field("anchor", &self.anchor)?;
        state.serialize_field("explanation", &self.explanation)?;
        state.end()
    }
}

/// All twelve verdicts for one function.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundingResult {
    pub function_name: String,

    /// One mapping per concept, in registry order
    pub mappings: Vec<GroundingMapping>,
}

impl GroundingResult {
    /// Number of concepts that apply.
    pub fn applicable_count(&self) -> usize {
        self.mappings.iter().filter(|m| m.applies).count()
    }

    /// Fraction of all twelve concepts that apply.
    pub fn coverage_ratio(&self) -> f64 {
        self.applicable_count() as f64 / CONCEPT_COUNT as f64
    }

    /// Mappings whose concept applies.
    pub fn applicable_mappings(&self) -> Vec<&GroundingMapping> {
        self.mappings.iter().filter(|m| m.applies).collect()
    }

    /// Mappings of one domain, preserving registry order.
    pub fn mappings_by_domain(&self, domain: Domain) -> Vec<&GroundingMapping> {
        self.mappings
            .iter()
            .filter(|m| m.concept.domain == domain)
            .collect()
    }

    /// Mapping for a concept key, if present.
    pub fn mapping(&self, key: &str) -> Option<&GroundingMapping> {
        self.mappings.iter().find(|m| m.concept.key == key)
    }
}

impl Serialize for GroundingResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let rounded = (self.coverage_ratio() * 1000.0).round() / 1000.0;

        let mut state = serializer.serialize_struct("GroundingResult", 5)?;
        state.serialize_field("function_name", &self.function_name)?;
        state.serialize_field("applicable_count", &self.applicable_count())?;
        state.serialize_field("total_concepts", &CONCEPT_COUNT)?;
        state.serialize_field("coverage_ratio", &rounded)?;
        state.serialize_field("mappings", &self.mappings)?;
        state.end()
    }
}

/// Schema facts shared by every applicability rule.
struct Facts<'a> {
    name: &'a str,
    description: Option<&'a str>,
    parsed: ParsedName,
    parameter_names: Vec<&'a str>,
    schema_type: &'a str,
    has_required: bool,
    has_enums: bool,
}

impl<'a> Facts<'a> {
    fn gather(name: &'a str, schema: &'a FunctionSchema) -> Self {
        Self {
            name,
            description: schema.description(),
            parsed: ParsedName::parse(name),
            parameter_names: schema.parameter_names(),
            schema_type: schema.schema_type(),
            has_required: schema.has_required(),
            has_enums: schema.has_enums(),
        }
    }

    fn constraint_text(&self) -> String {
        let mut constraints = Vec::new();
        if self.has_required {
            constraints.push("required-field constraints");
        }
        if self.has_enums {
            constraints.push("enum constraints");
        }
        if constraints.is_empty() {
            "no additional constraints".to_string()
        } else {
            constraints.join(", ")
        }
    }

    fn breakdown_triggers(&self) -> String {
        let mut triggers = Vec::new();
        if self.has_required {
            triggers.push("missing required parameters");
        }
        if self.has_enums {
            triggers.push("invalid enum values");
        }
        triggers.push("unexpected errors");
        triggers.join(", ")
    }
}

/// Maps a schema onto the concept registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroundingMapper {
    registry: ConceptRegistry,
}

impl GroundingMapper {
    pub fn new() -> Self {
        Self::with_registry(ConceptRegistry::canonical())
    }

    pub fn with_registry(registry: ConceptRegistry) -> Self {
        Self { registry }
    }

    /// Decide every concept for `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::MissingName`] if the schema has no name, or
    /// [`AnalysisError::UnknownConcept`] if the registry holds a concept
    /// without an applicability rule.
    pub fn ground(&self, schema: &FunctionSchema) -> Result<GroundingResult> {
        let name = schema.require_name()?;
        let facts = Facts::gather(name, schema);

        let mut mappings: Vec<GroundingMapping> = Vec::with_capacity(self.registry.len());
        for concept in self.registry.all() {
            let mapping = self.map_concept(concept, &facts, &mappings)?;
            mappings.push(mapping);
        }

        let result = GroundingResult {
            function_name: name.to_string(),
            mappings,
        };

        tracing::debug!(
            function = name,
            applicable = result.applicable_count(),
            coverage = result.coverage_ratio(),
            "Grounding complete"
        );

        Ok(result)
    }

    fn map_concept(
        &self,
        concept: &'static Concept,
        facts: &Facts<'_>,
        preceding: &[GroundingMapping],
    ) -> Result<GroundingMapping> {
        let name = facts.name;

        let mapping = match concept.key {
            "material_cause" => {
                if facts.parameter_names.is_empty() {
                    GroundingMapping::new(
                        concept,
                        false,
                        "no parameters".to_string(),
                        "The function takes no parameters; material cause is vacuous.".to_string(),
                    )
                } else {
                    let list = facts.parameter_names.join(", ");
                    GroundingMapping::new(
                        concept,
                        true,
                        format!("parameters: {}", list),
                        format!(
                            "The function's material consists of {} parameter(s) ({}) that constitute its raw input.",
                            facts.parameter_names.len(),
                            list
                        ),
                    )
                }
            }
            "formal_cause" => {
                let constraints = facts.constraint_text();
                GroundingMapping::new(
                    concept,
                    true,
                    format!("schema structure with {}", constraints),
                    format!(
                        "The formal shape is defined by the schema: a {} type with {}.",
                        facts.schema_type, constraints
                    ),
                )
            }
            "efficient_cause" => GroundingMapping::new(
                concept,
                true,
                "caller/agent invocation".to_string(),
                format!(
                    "'{}' is triggered by an external caller, whether an agent, a user, or a system event.",
                    name
                ),
            ),
            "final_cause" => match facts.description {
                Some(desc) => GroundingMapping::new(
                    concept,
                    true,
                    format!("description: '{}'", excerpt(desc, ANCHOR_EXCERPT_CHARS)),
                    format!("The function's telos is stated: {}", desc),
                ),
                None => GroundingMapping::new(
                    concept,
                    true,
                    format!("function name: '{}'", name),
                    format!(
                        "The telos is implicit in the name '{}', though no explicit description is provided.",
                        name
                    ),
                ),
            },
            "dasein" => GroundingMapping::new(
                concept,
                true,
                "function existence presupposes a callable world".to_string(),
                format!(
                    "'{}' assumes a world in which it can be called, along with the entities its parameters reference.",
                    name
                ),
            ),
            "zuhandenheit" => GroundingMapping::new(
                concept,
                true,
                "valid-input happy path".to_string(),
                format!(
                    "When called with valid arguments, '{}' is ready-to-hand: the caller uses it without reflecting on it.",
                    name
                ),
            ),
            "vorhandenheit" => {
                let triggers = facts.breakdown_triggers();
                GroundingMapping::new(
                    concept,
                    true,
                    format!("breakdown conditions: {}", triggers),
                    format!(
                        "'{}' becomes present-at-hand when breakdown occurs: {}.",
                        name, triggers
                    ),
                )
            }
            "representamen" => GroundingMapping::new(
                concept,
                true,
                format!("identifier: '{}'", name),
                format!(
                    "The sign is the identifier '{}' together with its parameter names, the syntactic surface the caller encounters.",
                    name
                ),
            ),
            "object" => {
                let referent = if facts.parsed.has_noun() {
                    Some(facts.parsed.noun_phrase())
                } else {
                    facts.description.map(|d| excerpt(d, ANCHOR_EXCERPT_CHARS))
                };
                match referent {
                    Some(referent) => GroundingMapping::new(
                        concept,
                        true,
                        format!("referent: '{}'", referent),
                        format!(
                            "The function's referent (what it acts upon) is identifiable as '{}'.",
                            referent
                        ),
                    ),
                    None => GroundingMapping::new(
                        concept,
                        false,
                        "no identifiable referent".to_string(),
                        "Neither the function name nor description identifies a referent to act upon."
                            .to_string(),
                    ),
                }
            }
            "interpretant" => {
                if facts.description.is_some() || facts.parsed.has_noun() {
                    let source = if facts.description.is_some() {
                        " and its description"
                    } else {
                        ""
                    };
                    GroundingMapping::new(
                        concept,
                        true,
                        "name + description convey meaning".to_string(),
                        format!("The caller can derive meaning from '{}'{}.", name, source),
                    )
                } else {
                    GroundingMapping::new(
                        concept,
                        false,
                        "insufficient semiotic information".to_string(),
                        "Without a description or meaningful noun, the caller cannot reliably derive the function's meaning."
                            .to_string(),
                    )
                }
            }
            "grounding" => {
                let grounded = preceding
                    .iter()
                    .take(TRADITION_CONCEPTS)
                    .filter(|m| m.applies)
                    .count();
                GroundingMapping::new(
                    concept,
                    true,
                    format!("{}/{} concepts grounded", grounded, TRADITION_CONCEPTS),
                    format!(
                        "This grounding analysis anchors {} of {} tradition-specific concepts to concrete schema elements.",
                        grounded, TRADITION_CONCEPTS
                    ),
                )
            }
            "telos_bridge" => match facts.description {
                Some(desc) => GroundingMapping::new(
                    concept,
                    true,
                    "final cause + system context".to_string(),
                    format!(
                        "The function's micro-telos ('{}') can be connected to a broader system purpose.",
                        excerpt(desc, TELOS_EXCERPT_CHARS)
                    ),
                ),
                None => GroundingMapping::new(
                    concept,
                    false,
                    "no explicit telos to bridge".to_string(),
                    "Without an explicit description, the bridge from micro-telos to system purpose cannot be built."
                        .to_string(),
                ),
            },
            other => return Err(AnalysisError::UnknownConcept(other.to_string())),
        };

        Ok(mapping)
    }
}
