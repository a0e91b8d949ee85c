//! Heideggerian Phenomenology Lens
//!
//! **Question**: What world does it assume, when does it withdraw into use,
//! and when does it break down?
//!
//! This lens derives:
//! - **Dasein**: world assumptions, each citing the schema element that triggered it
//! - **Zuhandenheit**: transparency conditions for the happy path
//! - **Vorhandenheit**: breakdown conditions where the tool demands attention
//!
//! ## Lexical Cues
//!
//! | Aspect | Parameter names | Descriptions |
//! |--------|-----------------|--------------|
//! | `callable_context` | always | always |
//! | `geographic_reality` | location, city, latitude, ... | same words |
//! | `entity_existence` | id, uuid, identifier | same words |
//! | `auth_state` | auth, token, key, password, ... | same words |
//! | `service_availability` | - | schema description only |
//!
//! Parameter names are tokenized with the name parser, so `userId` and
//! `user_id` both yield the `id` cue. Descriptions are matched on word
//! boundaries, case-insensitively. Both accept a trailing plural `s`.
//!
//! ## Breakdown Severity
//!
//! | Trigger | Severity |
//! |---------|----------|
//! | Missing required parameters | major |
//! | Rejected credentials / unreachable service | major |
//! | Invalid enum value | minor |
//! | Unresolvable place / missing entity | minor |
//! | Unexpected error | minor |

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Result;
use crate::ontology::Domain;
use crate::schema::{tokenize, FunctionSchema, Parameter};
use crate::types::{
    AssumptionAspect, BreakdownCondition, ContextResult, Severity, WorldAssumption,
};

use super::Lens;

const GEO_WORDS: &[&str] = &[
    "location",
    "city",
    "country",
    "address",
    "region",
    "lat",
    "lng",
    "lon",
    "latitude",
    "longitude",
    "zip",
    "zipcode",
    "postal",
    "coordinates",
    "coords",
    "place",
    "timezone",
];

const ENTITY_WORDS: &[&str] = &["id", "uuid", "identifier"];

const AUTH_WORDS: &[&str] = &[
    "auth",
    "authorization",
    "token",
    "key",
    "apikey",
    "password",
    "secret",
    "credential",
    "credentials",
    "bearer",
    "session",
];

const SERVICE_WORDS: &[&str] = &["service", "server", "api", "endpoint", "backend"];

/// One lexical cue for a world assumption.
struct Cue {
    aspect: AssumptionAspect,
    /// Tokens matched against tokenized parameter names, plural `s` allowed
    tokens: HashSet<&'static str>,
    /// Word-boundary pattern for free text
    pattern: Regex,
    /// Whether parameter names and descriptions are scanned
    scans_parameters: bool,
}

impl Cue {
    fn new(aspect: AssumptionAspect, words: &[&'static str], scans_parameters: bool) -> Self {
        let pattern = format!(r"(?i)\b(?:{})s?\b", words.join("|"));
        Self {
            aspect,
            tokens: words.iter().copied().collect(),
            // Built from fixed word lists above
            pattern: Regex::new(&pattern).unwrap(),
            scans_parameters,
        }
    }

    fn matches_name(&self, name: &str) -> bool {
        tokenize(name).iter().any(|t| {
            self.tokens.contains(t.as_str())
                || t.strip_suffix('s').is_some_and(|stem| self.tokens.contains(stem))
        })
    }

    fn matches_text(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

lazy_static! {
    /// Cues in the order assumptions are reported.
    static ref CUES: Vec<Cue> = vec![
        Cue::new(AssumptionAspect::GeographicReality, GEO_WORDS, true),
        Cue::new(AssumptionAspect::EntityExistence, ENTITY_WORDS, true),
        Cue::new(AssumptionAspect::AuthState, AUTH_WORDS, true),
        Cue::new(AssumptionAspect::ServiceAvailability, SERVICE_WORDS, false),
    ];
}

/// The Heideggerian phenomenology lens.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextAnalyzer;

impl ContextAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Find the first schema element that triggers a cue.
    ///
    /// Scan order: each parameter's name, then its description, then the
    /// schema description.
    fn find_trigger(
        &self,
        cue: &Cue,
        schema: &FunctionSchema,
        params: &[Parameter<'_>],
    ) -> Option<String> {
        if cue.scans_parameters {
            for p in params {
                if cue.matches_name(p.name) {
                    return Some(format!("parameter '{}'", p.name));
                }
                if !p.description.is_empty() && cue.matches_text(p.description) {
                    return Some(format!("description of parameter '{}'", p.name));
                }
            }
        }

        schema
            .description()
            .filter(|d| cue.matches_text(d))
            .map(|_| "schema description".to_string())
    }

    /// Dasein: what must already be true of the world.
    fn world_assumptions(
        &self,
        name: &str,
        schema: &FunctionSchema,
        params: &[Parameter<'_>],
    ) -> Vec<WorldAssumption> {
        let mut assumptions = vec![WorldAssumption {
            aspect: AssumptionAspect::CallableContext,
            description: format!(
                "A runtime exists that can invoke {} with structured arguments and hand its result back to the caller.",
                name
            ),
            derived_from: format!("function name '{}'", name),
        }];

        for cue in CUES.iter() {
            let Some(derived_from) = self.find_trigger(cue, schema, params) else {
                continue;
            };

            let description = match cue.aspect {
                AssumptionAspect::GeographicReality => {
                    "The world contains resolvable places; the location the caller names refers to somewhere that exists.".to_string()
                }
                AssumptionAspect::EntityExistence => {
                    "The entities referenced by identifier already exist and can be looked up.".to_string()
                }
                AssumptionAspect::AuthState => {
                    "The caller holds valid credentials and is permitted to act.".to_string()
                }
                AssumptionAspect::ServiceAvailability => format!(
                    "A remote service behind {} is reachable and responsive.",
                    name
                ),
                AssumptionAspect::CallableContext => continue,
            };

            assumptions.push(WorldAssumption {
                aspect: cue.aspect,
                description,
                derived_from,
            });
        }

        assumptions
    }

    /// Zuhandenheit: when the tool withdraws into use.
    fn transparency_conditions(
        &self,
        name: &str,
        schema: &FunctionSchema,
        params: &[Parameter<'_>],
        assumptions: &[WorldAssumption],
    ) -> Vec<String> {
        let mut conditions = vec![format!(
            "{} is ready-to-hand when the caller supplies valid arguments that match the declared schema.",
            name
        )];

        if schema.has_required() {
            conditions.push(format!(
                "All required parameters are present: {}.",
                schema.required().join(", ")
            ));
        }

        let enums: Vec<String> = params
            .iter()
            .filter(|p| p.is_enum())
            .map(|p| format!("{} ({})", p.name, p.allowed_values.join(", ")))
            .collect();
        if !enums.is_empty() {
            conditions.push(format!(
                "Enum-constrained parameters take one of their allowed values: {}.",
                enums.join("; ")
            ));
        }

        let presupposed: Vec<String> = assumptions
            .iter()
            .filter(|wa| wa.aspect != AssumptionAspect::CallableContext)
            .map(|wa| wa.aspect.to_string())
            .collect();
        if !presupposed.is_empty() {
            conditions.push(format!(
                "The world matches what the call presupposes ({}).",
                presupposed.join(", ")
            ));
        }

        conditions.push(
            "The result arrives in the form the caller expects, so attention stays on the task rather than the tool."
                .to_string(),
        );

        conditions
    }

    /// Vorhandenheit: when the tool breaks down.
    fn breakdown_conditions(
        &self,
        name: &str,
        schema: &FunctionSchema,
        params: &[Parameter<'_>],
        assumptions: &[WorldAssumption],
    ) -> Vec<BreakdownCondition> {
        let mut conditions = Vec::new();

        if schema.has_required() {
            conditions.push(BreakdownCondition {
                trigger: format!(
                    "Missing required parameter(s): {}",
                    schema.required().join(", ")
                ),
                consequence: "The call is rejected before execution and the caller must repair the arguments.".to_string(),
                severity: Severity::Major,
            });
        }

        let enums: Vec<&Parameter<'_>> = params.iter().filter(|p| p.is_enum()).collect();
        if !enums.is_empty() {
            let names: Vec<&str> = enums.iter().map(|p| p.name).collect();
            conditions.push(BreakdownCondition {
                trigger: format!("Invalid enum value for: {}", names.join(", ")),
                consequence: "The argument falls outside the allowed set and the call fails validation.".to_string(),
                severity: Severity::Minor,
            });
        }

        for wa in assumptions {
            let (trigger, consequence, severity) = match wa.aspect {
                AssumptionAspect::CallableContext => continue,
                AssumptionAspect::GeographicReality => (
                    "The named location cannot be resolved".to_string(),
                    format!("{} has no place in the world to act upon.", name),
                    Severity::Minor,
                ),
                AssumptionAspect::EntityExistence => (
                    "The referenced entity does not exist".to_string(),
                    "The identifier points at nothing and the caller must locate the right entity.".to_string(),
                    Severity::Minor,
                ),
                AssumptionAspect::AuthState => (
                    "Credentials are rejected or expired".to_string(),
                    format!("The call is refused until the caller re-authenticates with {}.", name),
                    Severity::Major,
                ),
                AssumptionAspect::ServiceAvailability => (
                    "The backing service is unreachable".to_string(),
                    format!("{} cannot complete and the failure lies outside the caller's control.", name),
                    Severity::Major,
                ),
            };
            conditions.push(BreakdownCondition {
                trigger: format!("{} ({})", trigger, wa.derived_from),
                consequence,
                severity,
            });
        }

        conditions.push(BreakdownCondition {
            trigger: "Unexpected error during execution".to_string(),
            consequence: "The tool becomes present-at-hand: the caller must interpret the error before continuing.".to_string(),
            severity: Severity::Minor,
        });

        conditions
    }
}

impl Lens for ContextAnalyzer {
    type Finding = ContextResult;

    fn tradition(&self) -> Domain {
        Domain::Heideggerian
    }

    fn analyze(&self, schema: &FunctionSchema) -> Result<ContextResult> {
        let name = schema.require_name()?;
        let params = schema.parameters();

        tracing::debug!(function = name, tradition = %self.tradition(), "Running lens");

        let world_assumptions = self.world_assumptions(name, schema, &params);
        let transparency_conditions =
            self.transparency_conditions(name, schema, &params, &world_assumptions);
        let breakdown_conditions =
            self.breakdown_conditions(name, schema, &params, &world_assumptions);

        Ok(ContextResult {
            function_name: name.to_string(),
            world_assumptions,
            transparency_conditions,
            breakdown_conditions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;

    const WEATHER_SCHEMA: &str = r#"{
        "name": "get_weather",
        "description": "Get the current weather for a location",
        "parameters": {
            "type": "object",
            "properties": {
                "location": {"type": "string", "description": "City name"},
                "unit": {"type": "string", "enum": ["celsius", "fahrenheit"]}
            },
            "required": ["location"]
        }
    }"#;

    const AUTH_SCHEMA: &str = r#"{
        "name": "get_user_profile",
        "description": "Retrieve a user profile from the API server",
        "parameters": {
            "type": "object",
            "properties": {
                "user_id": {"type": "string", "description": "User identifier"},
                "api_key": {"type": "string", "description": "API authentication key"}
            },
            "required": ["user_id", "api_key"]
        }
    }"#;

    fn analyze(json: &str) -> ContextResult {
        let schema = FunctionSchema::from_json(json).unwrap();
        ContextAnalyzer::new().analyze(&schema).unwrap()
    }

    fn aspects(result: &ContextResult) -> Vec<AssumptionAspect> {
        result.world_assumptions.iter().map(|wa| wa.aspect).collect()
    }

    #[test]
    fn test_callable_context_always_present() {
        let result = analyze(r#"{"name": "ping"}"#);
        assert_eq!(aspects(&result), vec![AssumptionAspect::CallableContext]);
    }

    #[test]
    fn test_weather_assumes_geography() {
        let result = analyze(WEATHER_SCHEMA);
        assert_eq!(
            aspects(&result),
            vec![AssumptionAspect::CallableContext, AssumptionAspect::GeographicReality]
        );
        assert_eq!(result.world_assumptions[1].derived_from, "parameter 'location'");
    }

    #[test]
    fn test_auth_schema_aspects() {
        let result = analyze(AUTH_SCHEMA);
        assert!(result.assumes(AssumptionAspect::EntityExistence));
        assert!(result.assumes(AssumptionAspect::AuthState));
        assert!(result.assumes(AssumptionAspect::ServiceAvailability));
        assert!(!result.assumes(AssumptionAspect::GeographicReality));
    }

    #[test]
    fn test_derived_from_cites_element() {
        let result = analyze(AUTH_SCHEMA);
        let derived: Vec<&str> = result
            .world_assumptions
            .iter()
            .map(|wa| wa.derived_from.as_str())
            .collect();
        assert!(derived.contains(&"parameter 'user_id'"));
        assert!(derived.contains(&"parameter 'api_key'"));
        assert!(derived.contains(&"schema description"));
        for wa in &result.world_assumptions {
            assert!(!wa.derived_from.is_empty());
        }
    }

    #[test]
    fn test_camel_case_parameter_names_are_tokenized() {
        let result = analyze(
            r#"{"name": "get_order", "parameters": {"properties": {"orderId": {"type": "string"}}}}"#,
        );
        assert!(result.assumes(AssumptionAspect::EntityExistence));
    }

    #[test]
    fn test_plural_parameter_names_match() {
        let result = analyze(
            r#"{"name": "rotate", "parameters": {"properties": {"api_keys": {}, "user_ids": {}}}}"#,
        );
        assert!(result.assumes(AssumptionAspect::AuthState));
        assert!(result.assumes(AssumptionAspect::EntityExistence));

        let result = analyze(
            r#"{"name": "revoke", "parameters": {"properties": {"accessTokens": {}}}}"#,
        );
        assert!(result.assumes(AssumptionAspect::AuthState));

        // The stem must itself be a cue word
        let result = analyze(r#"{"name": "list", "parameters": {"properties": {"status": {}}}}"#);
        assert_eq!(aspects(&result), vec![AssumptionAspect::CallableContext]);
    }

    #[test]
    fn test_parameter_description_cue() {
        let result = analyze(
            r#"{"name": "get_forecast", "parameters": {"properties": {"q": {"description": "Postal code of the area"}}}}"#,
        );
        let geo = result
            .world_assumptions
            .iter()
            .find(|wa| wa.aspect == AssumptionAspect::GeographicReality)
            .unwrap();
        assert_eq!(geo.derived_from, "description of parameter 'q'");
    }

    #[test]
    fn test_cues_match_whole_words_only() {
        // "keyboard" and "valid" must not trigger auth or entity cues
        let result = analyze(r#"{"name": "press", "description": "Press a keyboard button if valid"}"#);
        assert_eq!(aspects(&result), vec![AssumptionAspect::CallableContext]);
    }

    #[test]
    fn test_service_cue_ignores_parameters() {
        let result = analyze(
            r#"{"name": "f", "parameters": {"properties": {"server": {"description": "API host"}}}}"#,
        );
        assert!(!result.assumes(AssumptionAspect::ServiceAvailability));
    }

    #[test]
    fn test_transparency_mentions_valid_required_and_enum() {
        let result = analyze(WEATHER_SCHEMA);
        let combined = result.transparency_conditions.join(" ");
        assert!(combined.contains("valid"));
        assert!(combined.contains("location"));
        assert!(combined.contains("unit"));
        assert!(combined.contains("celsius"));
    }

    #[test]
    fn test_transparency_for_minimal_schema() {
        let result = analyze(r#"{"name": "ping"}"#);
        assert!(!result.transparency_conditions.is_empty());
        assert!(result.transparency_conditions[0].contains("valid arguments"));
    }

    #[test]
    fn test_missing_required_is_major() {
        let result = analyze(WEATHER_SCHEMA);
        let first = &result.breakdown_conditions[0];
        assert_eq!(first.severity, Severity::Major);
        assert!(first.trigger.contains("Missing required"));
        assert!(first.trigger.contains("location"));
    }

    #[test]
    fn test_enum_breakdown_is_minor() {
        let result = analyze(WEATHER_SCHEMA);
        let enum_bc = result
            .breakdown_conditions
            .iter()
            .find(|bc| bc.trigger.to_lowercase().contains("enum"))
            .unwrap();
        assert_eq!(enum_bc.severity, Severity::Minor);
        assert!(enum_bc.trigger.contains("unit"));
    }

    #[test]
    fn test_unexpected_error_always_last() {
        for json in [WEATHER_SCHEMA, AUTH_SCHEMA, r#"{"name": "ping"}"#] {
            let result = analyze(json);
            let last = result.breakdown_conditions.last().unwrap();
            assert!(last.trigger.to_lowercase().contains("unexpected"));
            assert_eq!(last.severity, Severity::Minor);
        }
    }

    #[test]
    fn test_minimal_schema_has_only_generic_breakdown() {
        let result = analyze(r#"{"name": "ping"}"#);
        assert_eq!(result.breakdown_conditions.len(), 1);
    }

    #[test]
    fn test_assumption_breakdowns() {
        let result = analyze(AUTH_SCHEMA);
        let auth = result
            .breakdown_conditions
            .iter()
            .find(|bc| bc.trigger.contains("Credentials"))
            .unwrap();
        assert_eq!(auth.severity, Severity::Major);
        assert!(auth.trigger.contains("parameter 'api_key'"));

        let entity = result
            .breakdown_conditions
            .iter()
            .find(|bc| bc.trigger.contains("entity"))
            .unwrap();
        assert_eq!(entity.severity, Severity::Minor);
    }

    #[test]
    fn test_every_breakdown_has_consequence() {
        for json in [WEATHER_SCHEMA, AUTH_SCHEMA] {
            for bc in analyze(json).breakdown_conditions {
                assert!(!bc.consequence.is_empty());
            }
        }
    }

    #[test]
    fn test_missing_name_fails() {
        let schema = FunctionSchema::from_json(r#"{"description": "no name"}"#).unwrap();
        assert!(matches!(
            ContextAnalyzer::new().analyze(&schema),
            Err(AnalysisError::MissingName)
        ));
    }
}
