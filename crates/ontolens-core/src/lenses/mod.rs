//! The three interpretive lenses.
//!
//! Each lens reads a function schema through one tradition's vocabulary and
//! produces its own result record. Lenses never see one another's output.
//!
//! ## Lens Independence
//!
//! - Every lens validates the function name itself, so it is safe to call alone
//! - Lenses only read the schema; results are built fresh per call
//! - No shared mutable state, so the orchestrator may run them concurrently
//!
//! The fourth analyzer, grounding, lives in [`crate::grounding`] because it
//! scores the whole concept registry rather than one tradition.

mod causes;
mod context;
mod signs;

pub use causes::CausesAnalyzer;
pub use context::ContextAnalyzer;
pub use signs::SignAnalyzer;

use crate::error::Result;
use crate::ontology::Domain;
use crate::schema::FunctionSchema;

/// Trait implemented by all lenses.
pub trait Lens {
    /// The result record this lens produces.
    type Finding;

    /// The tradition this lens reads through.
    fn tradition(&self) -> Domain;

    /// The question this lens asks of a function.
    fn question(&self) -> &'static str {
        self.tradition().question()
    }

    /// Analyze a schema.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AnalysisError::MissingName`] if the schema has no name.
    fn analyze(&self, schema: &FunctionSchema) -> Result<Self::Finding>;
}

/// Quote the first `max` characters of `text`.
pub(crate) fn excerpt(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Render a list as `[a, b]`.
pub(crate) fn bracketed<S: AsRef<str>>(items: &[S]) -> String {
    let joined: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    format!("[{}]", joined.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_counts_chars() {
        assert_eq!(excerpt("héllo wörld", 7), "héllo w");
        assert_eq!(excerpt("short", 80), "short");
    }

    #[test]
    fn test_bracketed() {
        assert_eq!(bracketed(&["get", "weather"]), "[get, weather]");
        assert_eq!(bracketed::<&str>(&[]), "[]");
    }

    #[test]
    fn test_lens_questions_come_from_tradition() {
        assert_eq!(CausesAnalyzer::new().question(), Domain::Aristotelian.question());
        assert_eq!(ContextAnalyzer::new().question(), Domain::Heideggerian.question());
        assert_eq!(SignAnalyzer::new().question(), Domain::Peircean.question());
    }
}
