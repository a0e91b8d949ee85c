//! Function schema parsing from JSON.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AnalysisError, Result};

/// Type label used when a parameter or the schema omits `type`.
pub const UNKNOWN_TYPE: &str = "unknown";

/// A single declared parameter property.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ParameterSpec {
    /// Declared JSON type (e.g., "string")
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,

    /// Free-text description of the parameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Allowed values, in declaration order
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,
}

/// The `parameters` section of a function schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ParametersSpec {
    /// Top-level schema type (usually "object")
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    /// Declared properties, kept in declaration order
    #[serde(default)]
    pub properties: IndexMap<String, ParameterSpec>,

    /// Names of required properties
    #[serde(default)]
    pub required: Vec<String>,
}

/// A function-calling schema.
///
/// The record is read-only for the whole analysis pipeline. `name` may be
/// empty after parsing; every analyzer rejects that case itself through
/// [`FunctionSchema::require_name`], so each one stays safe to call alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FunctionSchema {
    /// Function identifier
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    /// Human-written description of what the function does
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Parameter shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ParametersSpec>,
}

/// An explicit `null` reads as an absent string.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Borrowed view of one parameter with defaults filled in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameter<'a> {
    pub name: &'a str,
    pub param_type: &'a str,
    pub description: &'a str,
    pub required: bool,
    pub allowed_values: &'a [String],
}

impl Parameter<'_> {
    /// Check if the parameter is constrained to an enumerated set.
    pub fn is_enum(&self) -> bool {
        !self.allowed_values.is_empty()
    }
}

impl FunctionSchema {
    /// Create a schema with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parse a schema from a JSON string.
    ///
    /// Invalid JSON, or JSON whose fields have the wrong shape, fails with
    /// [`AnalysisError::MalformedInput`]. A missing `name` is *not* a parse
    /// failure; it is reported later as [`AnalysisError::MissingName`].
    pub fn from_json(json: &str) -> Result<Self> {
        let schema: FunctionSchema = serde_json::from_str(json)?;
        Ok(schema)
    }

    /// Parse a schema from an already-decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let schema: FunctionSchema = serde_json::from_value(value)?;
        Ok(schema)
    }

    /// Return the function name, or fail if it is empty.
    pub fn require_name(&self) -> Result<&str> {
        if self.name.is_empty() {
            tracing::warn!("Rejecting schema without a name");
            return Err(AnalysisError::MissingName);
        }
        Ok(&self.name)
    }

    /// The description, if it contains anything besides whitespace.
    ///
    /// The returned text is verbatim (untrimmed).
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
    }

    /// Check if a non-blank description exists.
    pub fn has_description(&self) -> bool {
        self.description().is_some()
    }

    /// Top-level `parameters.type`, or `"unknown"`.
    pub fn schema_type(&self) -> &str {
        self.parameters
            .as_ref()
            .and_then(|p| p.schema_type.as_deref())
            .unwrap_or(UNKNOWN_TYPE)
    }

    /// Names listed in `parameters.required`.
    pub fn required(&self) -> &[String] {
        self.parameters
            .as_ref()
            .map(|p| p.required.as_slice())
            .unwrap_or(&[])
    }

    /// All declared parameters in declaration order.
    pub fn parameters(&self) -> Vec<Parameter<'_>> {
        let Some(params) = &self.parameters else {
            return Vec::new();
        };

        params
            .properties
            .iter()
            .map(|(name, spec)| Parameter {
                name,
                param_type: spec.param_type.as_deref().unwrap_or(UNKNOWN_TYPE),
                description: spec.description.as_deref().unwrap_or(""),
                required: params.required.iter().any(|r| r == name),
                allowed_values: spec.allowed_values.as_deref().unwrap_or(&[]),
            })
            .collect()
    }

    /// Names of all declared parameters in declaration order.
    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters
            .as_ref()
            .map(|p| p.properties.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Check if any parameter properties are declared.
    pub fn has_properties(&self) -> bool {
        self.parameters
            .as_ref()
            .map(|p| !p.properties.is_empty())
            .unwrap_or(false)
    }

    /// Check if `parameters.required` is non-empty.
    pub fn has_required(&self) -> bool {
        !self.required().is_empty()
    }

    /// Check if any parameter declares a non-empty `enum`.
    pub fn has_enums(&self) -> bool {
        self.parameters().iter().any(Parameter::is_enum)
    }
}
