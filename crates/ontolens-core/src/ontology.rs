//! The twelve ontological concepts.
//!
//! Concepts are drawn from three traditions plus two synthetic bridges:
//!
//! | Domain | Concepts |
//! |--------|----------|
//! | Aristotelian | Material Cause, Formal Cause, Efficient Cause, Final Cause |
//! | Heideggerian | Dasein, Zuhandenheit, Vorhandenheit |
//! | Peircean | Representamen, Object, Interpretant |
//! | Synthetic | Grounding, Telos Bridge |
//!
//! The catalogue is a compile-time constant. [`ConceptRegistry`] is a cheap
//! `Copy` handle over it; there is no mutable global map.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// Tradition a concept belongs to.
///
/// Variant order is the canonical domain order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Aristotelian,
    Heideggerian,
    Peircean,
    Synthetic,
}

impl Domain {
    /// All domains in canonical order.
    pub const ALL: [Domain; 4] = [
        Domain::Aristotelian,
        Domain::Heideggerian,
        Domain::Peircean,
        Domain::Synthetic,
    ];

    /// Lowercase tag used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Aristotelian => "aristotelian",
            Domain::Heideggerian => "heideggerian",
            Domain::Peircean => "peircean",
            Domain::Synthetic => "synthetic",
        }
    }

    /// The question this tradition asks of a function.
    pub fn question(&self) -> &'static str {
        match self {
            Domain::Aristotelian => "What is it made of, what shape does it take, what sets it in motion, and what is it for?",
            Domain::Heideggerian => "What world does it assume, when does it withdraw into use, and when does it break down?",
            Domain::Peircean => "What sign does it present, what does that sign refer to, and what does the caller understand?",
            Domain::Synthetic => "How well do the traditions anchor this function to concrete schema evidence?",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ontological concept.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Concept {
    /// Human-readable label
    pub name: &'static str,

    /// Originating tradition
    pub domain: Domain,

    /// What the concept captures when applied to function calling
    pub description: &'static str,

    /// Stable snake_case identifier
    pub key: &'static str,
}

impl Concept {
    /// Check that every field is non-blank.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Concept name must be non-empty".to_string());
        }
        if self.description.trim().is_empty() {
            return Err(format!("Concept '{}' has an empty description", self.name));
        }
        if self.key.trim().is_empty() {
            return Err(format!("Concept '{}' has an empty key", self.name));
        }
        Ok(())
    }
}

/// Number of concepts in the catalogue.
pub const CONCEPT_COUNT: usize = 12;

/// The catalogue in canonical order.
static CONCEPTS: [Concept; CONCEPT_COUNT] = [
    // Aristotelian causes
    Concept {
        name: "Material Cause",
        domain: Domain::Aristotelian,
        description: "What a function is made of: its parameters, types, and data structures. \
                      The raw material that the function receives and transforms.",
        key: "material_cause",
    },
    Concept {
        name: "Formal Cause",
        domain: Domain::Aristotelian,
        description: "The shape, signature, and schema of a function. The formal specification \
                      that constrains how inputs relate to outputs.",
        key: "formal_cause",
    },
    Concept {
        name: "Efficient Cause",
        domain: Domain::Aristotelian,
        description: "What triggers the function: the caller, event, or agent that initiates \
                      execution and sets the function in motion.",
        key: "efficient_cause",
    },
    Concept {
        name: "Final Cause",
        domain: Domain::Aristotelian,
        description: "The purpose or telos of the function. Why it exists in the system and \
                      what end-state it aims to bring about.",
        key: "final_cause",
    },
    // Heideggerian phenomenology
    Concept {
        name: "Dasein",
        domain: Domain::Heideggerian,
        description: "The being-in-the-world context of the function: what must already be \
                      true of the world for this function to make sense.",
        key: "dasein",
    },
    Concept {
        name: "Zuhandenheit",
        domain: Domain::Heideggerian,
        description: "Ready-to-hand: the function experienced as a transparent tool that \
                      withdraws into the background of purposeful activity when it works.",
        key: "zuhandenheit",
    },
    Concept {
        name: "Vorhandenheit",
        domain: Domain::Heideggerian,
        description: "Present-at-hand: the function as an object of explicit attention, which \
                      it becomes when it breaks down or is inspected.",
        key: "vorhandenheit",
    },
    // Peircean semiotics
    Concept {
        name: "Representamen",
        domain: Domain::Peircean,
        description: "The sign: the function name or identifier that stands for the operation \
                      and by which the caller refers to it.",
        key: "representamen",
    },
    Concept {
        name: "Object",
        domain: Domain::Peircean,
        description: "The referent: the external entity, state, or resource that the function \
                      reads, writes, or transforms.",
        key: "object",
    },
    Concept {
        name: "Interpretant",
        domain: Domain::Peircean,
        description: "The meaning: the expectation the sign produces in the caller who invokes \
                      the function.",
        key: "interpretant",
    },
    // Synthetic bridges
    Concept {
        name: "Grounding",
        domain: Domain::Synthetic,
        description: "How the ontological categories anchor the function to concrete \
                      function-calling mechanics.",
        key: "grounding",
    },
    Concept {
        name: "Telos Bridge",
        domain: Domain::Synthetic,
        description: "The connection between a function's immediate purpose and the broader \
                      system-level purpose it serves.",
        key: "telos_bridge",
    },
];

/// Read-only handle over the concept catalogue.
#[derive(Debug, Clone, Copy)]
pub struct ConceptRegistry {
    concepts: &'static [Concept],
}

impl ConceptRegistry {
    /// The canonical twelve-concept registry.
    pub fn canonical() -> Self {
        Self {
            concepts: &CONCEPTS,
        }
    }

    /// All concepts in canonical order.
    pub fn all(&self) -> &'static [Concept] {
        self.concepts
    }

    /// Number of registered concepts.
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    /// Always false for the canonical registry.
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Look up a concept by its key.
    pub fn by_key(&self, key: &str) -> Result<&'static Concept> {
        self.concepts
            .iter()
            .find(|c| c.key == key)
            .ok_or_else(|| AnalysisError::UnknownConcept(key.to_string()))
    }

    /// Concepts of one domain, preserving canonical order.
    pub fn by_domain(&self, domain: Domain) -> Vec<&'static Concept> {
        self.concepts.iter().filter(|c| c.domain == domain).collect()
    }
}

impl Default for ConceptRegistry {
    fn default() -> Self {
        Self::canonical()
    }
}
