use crate::types::report::AssessmentReport;

const RULE_WIDTH: usize = 80;

/// Console layout: category breakdowns, then the overall recommendation and
/// numbered next steps.
pub fn to_text(report: &AssessmentReport) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let mut output = String::new();

    output.push_str(&format!("{heavy}\nDEPLOYMENT STRATEGY ASSESSMENT REPORT\n{heavy}\n"));
    output.push_str(&format!(
        "Assessment Date: {}\nFramework Version: {}\nAssessor: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S"),
        report.framework_version,
        report.assessor
    ));
    if let Some(organization) = &report.organization {
        output.push_str(&format!("Organization: {organization}\n"));
    }
    output.push('\n');

    output.push_str("ASSESSMENT RESULTS BY CATEGORY:\n");
    output.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH / 2)));
    for (category, result) in &report.categories {
        output.push_str(&format!(
            "\n{} ASSESSMENT:\n  Composite Score: {:.1}/10\n  Recommendation: {}\n  Factor Breakdown:\n",
            category.as_str().to_uppercase(),
            result.composite_score,
            result.recommendation
        ));
        for factor in &result.factors {
            output.push_str(&format!("    {}: {}/10\n", factor.name, factor.value));
        }
    }

    let overall = &report.overall;
    output.push_str(&format!("\n{heavy}\nOVERALL RECOMMENDATION:\n{heavy}\n"));
    output.push_str(&format!(
        "Weighted Score: {:.2}/10\nRecommendation: {}\nConfidence Level: {}\n",
        overall.weighted_score, overall.recommendation, overall.confidence
    ));
    output.push_str(&format!("\nRationale: {}\n", overall.rationale));

    output.push_str("\nRECOMMENDED NEXT STEPS:\n");
    for (index, step) in overall.next_steps.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", index + 1, step));
    }

    output.push_str(&format!("\n{heavy}\n"));
    if !report.references.is_empty() {
        output.push_str("For detailed implementation guidance, see:\n");
        for reference in &report.references {
            output.push_str(&format!("  - {reference}\n"));
        }
        output.push_str(&format!("{heavy}\n"));
    }

    output
}
