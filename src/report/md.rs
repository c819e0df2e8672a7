use crate::types::report::AssessmentReport;

pub fn to_markdown(report: &AssessmentReport) -> String {
    let mut output = String::new();
    output.push_str("# Deployment Strategy Assessment\n\n");
    output.push_str(&format!(
        "- generated: {}\n- framework version: {}\n- assessor: {}\n",
        report.generated_at.to_rfc3339(),
        report.framework_version,
        report.assessor
    ));
    if let Some(organization) = &report.organization {
        output.push_str(&format!("- organization: {organization}\n"));
    }
    output.push('\n');

    output.push_str("## Overall Recommendation\n\n");
    output.push_str(&format!(
        "**{}** (confidence {}, weighted score {:.2}/10)\n\n{}\n\n",
        report.overall.recommendation,
        report.overall.confidence,
        report.overall.weighted_score,
        report.overall.rationale
    ));

    output.push_str("## Category Scores\n\n");
    output.push_str("| category | composite | recommendation |\n");
    output.push_str("|---|---|---|\n");
    for (category, result) in &report.categories {
        output.push_str(&format!(
            "| {} | {:.2} | {} |\n",
            category, result.composite_score, result.recommendation
        ));
    }
    output.push('\n');

    output.push_str("## Factors\n\n");
    for (category, result) in &report.categories {
        output.push_str(&format!("### {category}\n\n"));
        for factor in &result.factors {
            output.push_str(&format!(
                "- {} (`{}`): {}\n",
                factor.name, factor.key, factor.value
            ));
        }
        output.push('\n');
    }

    output.push_str("## Next Steps\n\n");
    for (index, step) in report.overall.next_steps.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, step));
    }

    if !report.references.is_empty() {
        output.push_str("\n## References\n\n");
        for reference in &report.references {
            output.push_str(&format!("- {reference}\n"));
        }
    }

    output
}
