pub mod json;
pub mod md;
pub mod text;

use crate::error::AssessError;
use crate::types::report::AssessmentReport;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Md,
    Json,
}

pub fn render(report: &AssessmentReport, format: OutputFormat) -> Result<String, AssessError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(report)),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Json => json::to_json(report).map_err(AssessError::Json),
    }
}
