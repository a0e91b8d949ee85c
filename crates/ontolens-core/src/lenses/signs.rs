//! Peircean Semiotics Lens
//!
//! **Question**: What sign does it present, what does that sign refer to,
//! and what does the caller understand?
//!
//! ## Components
//!
//! | Component | Source |
//! |-----------|--------|
//! | **Representamen** | The identifier, its tokens, and the parameter names |
//! | **Object** | Noun from the name, else the description, else unspecified |
//! | **Interpretant** | The description, else the verb's action type plus noun |
//!
//! Enum-constrained parameters sharpen the interpretant: their allowed
//! values are named in both the summary and the evidence.

use crate::error::Result;
use crate::ontology::Domain;
use crate::schema::{FunctionSchema, Parameter, ParsedName};
use crate::types::{SignAnalysis, SignComponent, SignResult};

use super::{bracketed, excerpt, Lens};

/// Characters of description quoted when it stands in for the referent.
const REFERENT_EXCERPT_CHARS: usize = 80;

/// The Peircean semiotics lens.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignAnalyzer;

impl SignAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn representamen(
        &self,
        name: &str,
        parsed: &ParsedName,
        schema: &FunctionSchema,
    ) -> SignAnalysis {
        let param_names = schema.parameter_names();

        let noun_clause = if parsed.has_noun() {
            format!("and the target noun '{}'", parsed.noun)
        } else {
            "with no explicit target noun".to_string()
        };

        SignAnalysis {
            component: SignComponent::Representamen,
            summary: format!(
                "The representamen (sign) is the identifier '{}', composed of the action verb '{}' {}. \
                 Together with {} parameter name(s), this sign constitutes the syntactic surface the caller encounters.",
                name,
                parsed.verb,
                noun_clause,
                param_names.len()
            ),
            evidence: vec![
                format!("Function name: '{}'", name),
                format!("Name components: {}", bracketed(&parsed.tokens)),
                format!("Verb: '{}', Noun: '{}'", parsed.verb, parsed.noun),
                format!("Parameter names: {}", bracketed(&param_names)),
            ],
        }
    }

    fn object(
        &self,
        parsed: &ParsedName,
        schema: &FunctionSchema,
        params: &[Parameter<'_>],
    ) -> SignAnalysis {
        let description = schema.description();

        let referent = if parsed.has_noun() {
            parsed.noun_phrase()
        } else if let Some(desc) = description {
            format!(
                "the entity described as: {}",
                excerpt(desc, REFERENT_EXCERPT_CHARS)
            )
        } else {
            "an unspecified target".to_string()
        };

        let mut evidence = vec![
            format!("Target noun from name: '{}'", parsed.noun),
            format!("Description: '{}'", description.unwrap_or("")),
        ];

        let hints: Vec<String> = params
            .iter()
            .filter(|p| !p.description.is_empty())
            .map(|p| format!("'{}': {}", p.name, p.description))
            .collect();
        if !hints.is_empty() {
            evidence.push(format!("Referent hints: {}", hints.join("; ")));
        }

        let tail = if params.is_empty() {
            ".".to_string()
        } else {
            format!(
                ", parameterized by {} input(s) that further specify the target.",
                params.len()
            )
        };

        SignAnalysis {
            component: SignComponent::Object,
            summary: format!(
                "The object (referent) is {}. The function acts upon this entity in the world{}",
                referent, tail
            ),
            evidence,
        }
    }

    fn interpretant(
        &self,
        parsed: &ParsedName,
        schema: &FunctionSchema,
        params: &[Parameter<'_>],
    ) -> SignAnalysis {
        let action_type = parsed.action_type();
        let description = schema.description();

        let meaning = match description {
            Some(desc) => desc.to_string(),
            None if parsed.has_noun() => format!("{} {}", action_type, parsed.noun_phrase()),
            None => format!("{} an unspecified target", action_type),
        };

        let mut evidence = vec![
            format!("Verb '{}' maps to action type '{}'", parsed.verb, action_type),
            format!("Description: '{}'", description.unwrap_or("")),
        ];

        let enums: Vec<&Parameter<'_>> = params.iter().filter(|p| p.is_enum()).collect();
        if !enums.is_empty() {
            let constraints: Vec<String> = enums
                .iter()
                .map(|p| format!("'{}' can be {}", p.name, bracketed(p.allowed_values)))
                .collect();
            evidence.push(format!(
                "Enum constraints sharpen meaning: {}",
                constraints.join("; ")
            ));
        }

        let mut summary = format!(
            "The interpretant (meaning the caller derives) is: '{}'. \
             The caller understands this sign as an invitation to {}",
            meaning, action_type
        );
        if parsed.has_noun() {
            summary.push(' ');
            summary.push_str(&parsed.noun_phrase());
        }
        if !enums.is_empty() {
            let choices: Vec<String> = enums
                .iter()
                .map(|p| format!("{}: {}", p.name, p.allowed_values.join(", ")))
                .collect();
            summary.push_str(&format!(", with constrained choices ({})", choices.join("; ")));
        }
        summary.push('.');

        SignAnalysis {
            component: SignComponent::Interpretant,
            summary,
            evidence,
        }
    }
}

impl Lens for SignAnalyzer {
    type Finding = SignResult;

    fn tradition(&self) -> Domain {
        Domain::Peircean
    }

    fn analyze(&self, schema: &FunctionSchema) -> Result<SignResult> {
        let name = schema.require_name()?;
        let parsed = ParsedName::parse(name);
        let params = schema.parameters();

        tracing::debug!(function = name, tradition = %self.tradition(), "Running lens");

        Ok(SignResult {
            function_name: name.to_string(),
            representamen: self.representamen(name, &parsed, schema),
            object: self.object(&parsed, schema, &params),
            interpretant: self.interpretant(&parsed, schema, &params),
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

    fn analyze(json: &str) -> SignResult {
        let schema = FunctionSchema::from_json(json).unwrap();
        SignAnalyzer::new().analyze(&schema).unwrap()
    }

    #[test]
    fn test_representamen_evidence() {
        let result = analyze(WEATHER_SCHEMA);
        assert_eq!(
            result.representamen.evidence,
            vec![
                "Function name: 'get_weather'",
                "Name components: [get, weather]",
                "Verb: 'get', Noun: 'weather'",
                "Parameter names: [location, unit]",
            ]
        );
        assert!(result.representamen.summary.contains("target noun 'weather'"));
        assert!(result.representamen.summary.contains("2 parameter name(s)"));
    }

    #[test]
    fn test_representamen_without_noun() {
        let result = analyze(r#"{"name": "ping"}"#);
        assert!(result.representamen.summary.contains("no explicit target noun"));
        assert!(result.representamen.evidence.contains(&"Parameter names: []".to_string()));
    }

    #[test]
    fn test_representamen_camel_case() {
        let result = analyze(r#"{"name": "getUserProfile"}"#);
        assert_eq!(result.representamen.evidence[1], "Name components: [get, user, profile]");
        assert_eq!(result.representamen.evidence[2], "Verb: 'get', Noun: 'user_profile'");
    }

    #[test]
    fn test_object_from_noun() {
        let result = analyze(WEATHER_SCHEMA);
        assert!(result.object.summary.starts_with("The object (referent) is weather."));
        assert!(result.object.summary.contains("parameterized by 2 input(s)"));
        assert!(result
            .object
            .evidence
            .contains(&"Referent hints: 'location': City name".to_string()));
    }

    #[test]
    fn test_object_noun_phrase_uses_spaces() {
        let result = analyze(r#"{"name": "get_user_profile"}"#);
        assert!(result.object.summary.contains("is user profile."));
    }

    #[test]
    fn test_object_from_description() {
        let long = "x".repeat(100);
        let json = format!(r#"{{"name": "ping", "description": "{}"}}"#, long);
        let result = analyze(&json);
        let expected = format!("the entity described as: {}.", "x".repeat(80));
        assert!(result.object.summary.contains(&expected));
    }

    #[test]
    fn test_object_unspecified() {
        let result = analyze(r#"{"name": "ping"}"#);
        assert!(result.object.summary.contains("an unspecified target"));
        assert!(result.object.summary.ends_with("in the world."));
    }

    #[test]
    fn test_interpretant_uses_description() {
        let result = analyze(WEATHER_SCHEMA);
        assert!(result
            .interpretant
            .summary
            .starts_with("The interpretant (meaning the caller derives) is: 'Get the current weather for a location'."));
        assert!(result.interpretant.summary.contains("invitation to retrieve weather"));
    }

    #[test]
    fn test_interpretant_enum_evidence() {
        let result = analyze(WEATHER_SCHEMA);
        assert_eq!(
            result.interpretant.evidence[2],
            "Enum constraints sharpen meaning: 'unit' can be [celsius, fahrenheit]"
        );
        assert!(result
            .interpretant
            .summary
            .ends_with(", with constrained choices (unit: celsius, fahrenheit)."));
    }

    #[test]
    fn test_interpretant_from_action_type() {
        let result = analyze(r#"{"name": "delete_record"}"#);
        assert!(result.interpretant.summary.contains("'destroy record'"));
    }

    #[test]
    fn test_interpretant_unspecified_target() {
        let result = analyze(r#"{"name": "ping"}"#);
        assert!(result
            .interpretant
            .summary
            .contains("'perform an operation on an unspecified target'"));
    }

    #[test]
    fn test_all_components_in_order() {
        let result = analyze(WEATHER_SCHEMA);
        let components: Vec<SignComponent> =
            result.all_components().iter().map(|c| c.component).collect();
        assert_eq!(
            components,
            vec![SignComponent::Representamen, SignComponent::Object, SignComponent::Interpretant]
        );
    }

    #[test]
    fn test_missing_name_fails() {
        assert!(matches!(
            SignAnalyzer::new().analyze(&FunctionSchema::default()),
            Err(AnalysisError::MissingName)
        ));
    }
}
