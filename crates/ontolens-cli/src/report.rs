//! Report rendering.
//!
//! Renderers only read a [`FullAnalysis`]; they never alter it.

use ontolens_core::{ConceptRegistry, Domain, FullAnalysis};

use crate::config::ReportConfig;

const RULE_WIDTH: usize = 60;

fn section_header(lines: &mut Vec<String>, title: &str) {
    lines.push(String::new());
    lines.push(title.to_string());
    lines.push("=".repeat(title.chars().count()));
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}

fn push_evidence(lines: &mut Vec<String>, evidence: &[String]) {
    if evidence.is_empty() {
        return;
    }
    lines.push("    Evidence:".to_string());
    for e in evidence {
        lines.push(format!("      - {}", e));
    }
}

/// Render the full sectioned text report.
pub fn format_text_report(analysis: &FullAnalysis) -> String {
    let name = &analysis.function_name;
    let title = format!("ONTOLOGICAL ANALYSIS: {}", name);

    let mut lines = vec![title.clone(), "=".repeat(title.chars().count())];

    section_header(&mut lines, "I. ARISTOTELIAN FOUR CAUSES");
    for cause in analysis.four_causes.all_causes() {
        lines.push(String::new());
        lines.push(format!(
            "  [{} CAUSE] ({} confidence)",
            cause.cause_type.as_str().to_uppercase(),
            cause.confidence.as_str()
        ));
        lines.push(format!("    {}", cause.summary));
        push_evidence(&mut lines, &cause.evidence);
    }

    section_header(&mut lines, "II. HEIDEGGERIAN PHENOMENOLOGY");
    let context = &analysis.context;

    lines.push(String::new());
    lines.push("  [DASEIN: World Assumptions]".to_string());
    for wa in &context.world_assumptions {
        lines.push(format!("    - [{}] {}", wa.aspect, wa.description));
        lines.push(format!("      (derived from: {})", wa.derived_from));
    }

    lines.push(String::new());
    lines.push("  [ZUHANDENHEIT: Transparency Conditions]".to_string());
    for tc in &context.transparency_conditions {
        lines.push(format!("    - {}", tc));
    }

    lines.push(String::new());
    lines.push("  [VORHANDENHEIT: Breakdown Conditions]".to_string());
    for bc in &context.breakdown_conditions {
        lines.push(format!(
            "    - [{}] {}",
            bc.severity.as_str().to_uppercase(),
            bc.trigger
        ));
        lines.push(format!("      -> {}", bc.consequence));
    }

    section_header(&mut lines, "III. PEIRCEAN SEMIOTICS");
    for sign in analysis.signs.all_components() {
        lines.push(String::new());
        lines.push(format!("  [{}]", sign.component.as_str().to_uppercase()));
        lines.push(format!("    {}", sign.summary));
        push_evidence(&mut lines, &sign.evidence);
    }

    section_header(&mut lines, "IV. SYNTHETIC GROUNDING");
    let grounding = &analysis.grounding;
    lines.push(String::new());
    lines.push(format!(
        "  Coverage: {}/{} concepts ({:.1}%)",
        grounding.applicable_count(),
        grounding.mappings.len(),
        grounding.coverage_ratio() * 100.0
    ));

    for domain in Domain::ALL {
        let mappings = grounding.mappings_by_domain(domain);
        if mappings.is_empty() {
            continue;
        }
        lines.push(String::new());
        lines.push(format!("  [{}]", domain.as_str().to_uppercase()));
        for m in mappings {
            let status = if m.applies { "APPLIES" } else { "N/A" };
            lines.push(format!("    [{}] {}", status, m.concept.name));
            lines.push(format!("      Anchor: {}", m.anchor));
            lines.push(format!("        {}", m.explanation));
        }
    }

    lines.push(String::new());
    lines.push("-".repeat(RULE_WIDTH));
    lines.push(format!("End of ontological analysis for '{}'.", name));
    lines.push(String::new());

    lines.join("\n")
}

/// Render a one-paragraph summary.
pub fn format_summary(analysis: &FullAnalysis, config: &ReportConfig) -> String {
    let grounding = &analysis.grounding;
    let causes = &analysis.four_causes;
    let excerpt: String = causes
        .final_cause
        .summary
        .chars()
        .take(config.summary_excerpt_chars)
        .collect();

    format!(
        "Ontological analysis of '{}': {}/{} concepts grounded ({:.0}% coverage). \
         Material: {} confidence. Final cause: {}... \
         World assumptions: {}. Breakdown conditions: {}.",
        analysis.function_name,
        grounding.applicable_count(),
        grounding.mappings.len(),
        grounding.coverage_ratio() * 100.0,
        causes.material.confidence.as_str(),
        excerpt,
        analysis.context.world_assumptions.len(),
        analysis.context.breakdown_conditions.len()
    )
}

/// Render the analysis as JSON.
pub fn format_json_report(analysis: &FullAnalysis, config: &ReportConfig) -> serde_json::Result<String> {
    if config.pretty {
        analysis.to_json_pretty()
    } else {
        analysis.to_json()
    }
}

/// Render the numbered concept table.
pub fn format_concepts(registry: &ConceptRegistry, config: &ReportConfig) -> String {
    let mut lines = vec![
        format!("{:<4} {:<20} {:<15} Description", "#", "Name", "Domain"),
        "-".repeat(78),
    ];

    for (i, concept) in registry.all().iter().enumerate() {
        lines.push(format!(
            "{:<4} {:<20} {:<15} {}",
            i + 1,
            concept.name,
            concept.domain.as_str(),
            truncate(concept.description, config.concept_description_width)
        ));
    }

    let populated: Vec<Domain> = Domain::ALL
        .into_iter()
        .filter(|d| !registry.by_domain(*d).is_empty())
        .collect();

    lines.push(String::new());
    lines.push(format!(
        "Total: {} concepts across {} domains.",
        registry.len(),
        populated.len()
    ));
    for domain in populated {
        let names: Vec<&str> = registry.by_domain(domain).iter().map(|c| c.name).collect();
        lines.push(format!("  {}: {}", domain.as_str(), names.join(", ")));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontolens_core::AnalysisOrchestrator;

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

    fn weather() -> FullAnalysis {
        AnalysisOrchestrator::new().analyze_json(WEATHER_SCHEMA).unwrap()
    }

    #[test]
    fn test_text_report_sections_in_order() {
        let report = format_text_report(&weather());
        let positions: Vec<usize> = [
            "ONTOLOGICAL ANALYSIS: get_weather",
            "I. ARISTOTELIAN FOUR CAUSES",
            "II. HEIDEGGERIAN PHENOMENOLOGY",
            "III. PEIRCEAN SEMIOTICS",
            "IV. SYNTHETIC GROUNDING",
            "End of ontological analysis for 'get_weather'.",
        ]
        .iter()
        .map(|s| report.find(s).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_text_report_content() {
        let report = format_text_report(&weather());
        assert!(report.contains("[MATERIAL CAUSE] (high confidence)"));
        assert!(report.contains("[EFFICIENT CAUSE] (medium confidence)"));
        assert!(report.contains("[DASEIN: World Assumptions]"));
        assert!(report.contains("[geographic reality]"));
        assert!(report.contains("[MAJOR] Missing required parameter(s): location"));
        assert!(report.contains("[REPRESENTAMEN]"));
        assert!(report.contains("Coverage: 12/12 concepts (100.0%)"));
        assert!(report.contains("[APPLIES] Telos Bridge"));
    }

    #[test]
    fn test_text_report_not_applicable() {
        let ping = AnalysisOrchestrator::new().analyze_json(r#"{"name": "ping"}"#).unwrap();
        let report = format_text_report(&ping);
        assert!(report.contains("[N/A] Material Cause"));
        assert!(report.contains("Coverage: 8/12 concepts (66.7%)"));
    }

    #[test]
    fn test_summary() {
        let summary = format_summary(&weather(), &ReportConfig::default());
        assert!(summary.starts_with("Ontological analysis of 'get_weather': 12/12 concepts grounded (100% coverage)."));
        assert!(summary.contains("Material: high confidence."));
        assert!(summary.contains("World assumptions: 2."));
        assert!(summary.ends_with("Breakdown conditions: 4."));
    }

    #[test]
    fn test_summary_excerpt_length() {
        let config = ReportConfig {
            summary_excerpt_chars: 10,
            ..ReportConfig::default()
        };
        let summary = format_summary(&weather(), &config);
        assert!(summary.contains("Final cause: The telos ..."));
    }

    #[test]
    fn test_json_report_compact_and_pretty() {
        let analysis = weather();
        let pretty = format_json_report(&analysis, &ReportConfig::default()).unwrap();
        let compact = format_json_report(
            &analysis,
            &ReportConfig {
                pretty: false,
                ..ReportConfig::default()
            },
        )
        .unwrap();
        assert!(pretty.contains('\n'));
        assert!(!compact.contains('\n'));
        let a: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        let b: serde_json::Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_concepts_listing() {
        let listing = format_concepts(&ConceptRegistry::canonical(), &ReportConfig::default());
        assert!(listing.contains("Total: 12 concepts across 4 domains."));
        assert!(listing.contains("  aristotelian: Material Cause, Formal Cause, Efficient Cause, Final Cause"));
        assert!(listing.contains("  synthetic: Grounding, Telos Bridge"));
        assert!(listing.lines().nth(2).unwrap().starts_with("1    Material Cause"));
        assert!(listing.contains("..."));
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("ééééé", 3), "ééé...");
        assert_eq!(truncate("short", 10), "short");
    }
}
