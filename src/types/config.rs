use crate::error::AssessError;
use crate::report::OutputFormat;
use serde::Deserialize;

pub const DEFAULT_ASSESSOR: &str = "Migration Assessment Framework";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssessConfig {
    pub assessment: AssessmentConfig,
    pub ratings: RatingsConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssessmentConfig {
    pub assessor: String,
    pub organization: Option<String>,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            assessor: DEFAULT_ASSESSOR.to_string(),
            organization: None,
        }
    }
}

/// How ratings outside 0-10 are treated when responses are loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    #[default]
    Reject,
    Clamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RatingsConfig {
    pub out_of_range: RangePolicy,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: Option<OutputFormat>,
    pub references: Vec<String>,
}

impl AssessConfig {
    pub fn range_policy(&self) -> RangePolicy {
        self.ratings.out_of_range
    }

    pub fn output_format(&self) -> OutputFormat {
        self.report.format.unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), AssessError> {
        if self.assessment.assessor.trim().is_empty() {
            return Err(AssessError::ConfigParse(
                "assessment.assessor must be non-empty".to_string(),
            ));
        }

        if let Some(organization) = &self.assessment.organization {
            if organization.trim().is_empty() {
                return Err(AssessError::ConfigParse(
                    "assessment.organization must be non-empty when set".to_string(),
                ));
            }
        }

        if let Some(index) = self
            .report
            .references
            .iter()
            .position(|reference| reference.trim().is_empty())
        {
            return Err(AssessError::ConfigParse(format!(
                "report.references[{index}] must be a non-empty path"
            )));
        }

        Ok(())
    }
}
