//! Lexical parsing of function identifiers.
//!
//! Splits an identifier into lower-cased tokens and extracts a leading verb
//! and a trailing noun phrase. Used by every lens that reasons about naming.
//!
//! ## Boundary Rules
//!
//! | Rule | Example |
//! |------|---------|
//! | `-` and `_` separate tokens | `get-user_profile` → `get`, `user`, `profile` |
//! | lowercase→uppercase starts a token | `getUserProfile` → `get`, `user`, `profile` |
//! | uppercase runs stay together | `getHTTPResponse` → `get`, `httpresponse` |
//! | digits never start a token | `get2Items` → `get2items` |
//! | empty segments are dropped | `get__x` → `get`, `x` |
//!
//! Two verb tables live here and are intentionally separate: the causal
//! *purpose* vocabulary (final cause) and the semiotic *action type*
//! vocabulary (interpretant) name the same verbs differently.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Purpose reported when the leading verb is not in the purpose table.
pub const DEFAULT_PURPOSE: &str = "general operation";

/// Action type reported when the leading verb is not in the action-type table.
pub const DEFAULT_ACTION_TYPE: &str = "perform an operation on";

lazy_static! {
    /// Verb → purpose category, for final-cause inference.
    static ref VERB_PURPOSES: HashMap<&'static str, &'static str> = {
        let entries = [
            ("get", "retrieval"),
            ("fetch", "retrieval"),
            ("read", "retrieval"),
            ("list", "enumeration"),
            ("search", "search"),
            ("find", "search"),
            ("create", "creation"),
            ("add", "creation"),
            ("insert", "creation"),
            ("update", "mutation"),
            ("set", "mutation"),
            ("modify", "mutation"),
            ("patch", "mutation"),
            ("delete", "destruction"),
            ("remove", "destruction"),
            ("send", "transmission"),
            ("post", "transmission"),
            ("notify", "notification"),
            ("validate", "validation"),
            ("check", "validation"),
            ("convert", "transformation"),
            ("transform", "transformation"),
            ("calculate", "computation"),
            ("compute", "computation"),
        ];
        entries.into_iter().collect()
    };

    /// Verb → action type, for interpretant inference.
    static ref ACTION_TYPES: HashMap<&'static str, &'static str> = {
        let entries = [
            ("get", "retrieve"),
            ("fetch", "retrieve"),
            ("read", "retrieve"),
            ("list", "enumerate"),
            ("search", "query"),
            ("find", "query"),
            ("create", "construct"),
            ("add", "construct"),
            ("insert", "construct"),
            ("update", "modify"),
            ("set", "modify"),
            ("modify", "modify"),
            ("patch", "modify"),
            ("delete", "destroy"),
            ("remove", "destroy"),
            ("send", "transmit"),
            ("post", "transmit"),
            ("notify", "signal"),
            ("validate", "verify"),
            ("check", "verify"),
            ("convert", "transform"),
            ("transform", "transform"),
            ("calculate", "compute"),
            ("compute", "compute"),
        ];
        entries.into_iter().collect()
    };
}

/// Split an identifier into lower-cased tokens.
///
/// # Examples
///
/// ```
/// use ontolens_core::schema::tokenize;
///
/// assert_eq!(tokenize("getUserProfile"), vec!["get", "user", "profile"]);
/// assert_eq!(tokenize("get-weather_now"), vec!["get", "weather", "now"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(name: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for segment in name.split(['-', '_']) {
        let mut current = String::new();
        let mut prev_lower = false;

        for c in segment.chars() {
            if c.is_uppercase() && prev_lower && !current.is_empty() {
                tokens.push(current.to_lowercase());
                current.clear();
            }
            current.push(c);
            prev_lower = c.is_lowercase();
        }

        if !current.is_empty() {
            tokens.push(current.to_lowercase());
        }
    }

    tokens
}

/// Extract the leading verb and trailing noun from an identifier.
///
/// The noun is the remaining tokens joined with `_`, or empty when the
/// identifier has fewer than two tokens.
pub fn verb_and_noun(name: &str) -> (String, String) {
    let parsed = ParsedName::parse(name);
    (parsed.verb, parsed.noun)
}

/// Look up the purpose category for a verb.
pub fn purpose_for(verb: &str) -> &'static str {
    VERB_PURPOSES.get(verb).copied().unwrap_or(DEFAULT_PURPOSE)
}

/// Look up the semiotic action type for a verb.
pub fn action_type_for(verb: &str) -> &'static str {
    ACTION_TYPES.get(verb).copied().unwrap_or(DEFAULT_ACTION_TYPE)
}

/// A tokenized identifier with its verb and noun.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub tokens: Vec<String>,
    pub verb: String,
    pub noun: String,
}

impl ParsedName {
    /// Tokenize `name` and split off the leading verb.
    pub fn parse(name: &str) -> Self {
        let tokens = tokenize(name);
        let verb = tokens.first().cloned().unwrap_or_default();
        let noun = if tokens.len() > 1 {
            tokens[1..].join("_")
        } else {
            String::new()
        };

        Self { tokens, verb, noun }
    }

    /// Check if a noun could be derived.
    pub fn has_noun(&self) -> bool {
        !self.noun.is_empty()
    }

    /// The noun with spaces in place of underscores.
    pub fn noun_phrase(&self) -> String {
        self.noun.replace('_', " ")
    }

    /// Purpose category of the leading verb.
    pub fn purpose(&self) -> &'static str {
        purpose_for(&self.verb)
    }

    /// Semiotic action type of the leading verb.
    pub fn action_type(&self) -> &'static str {
        action_type_for(&self.verb)
    }
}
