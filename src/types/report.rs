use crate::types::config::AssessConfig;
use crate::types::scoring::{Assessment, Category, CategoryResult, OverallResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub generated_at: DateTime<Utc>,
    pub framework_version: String,
    pub assessor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    pub categories: BTreeMap<Category, CategoryResult>,
    pub overall: OverallResult,
    pub references: Vec<String>,
}

impl AssessmentReport {
    pub fn new(assessment: Assessment, config: &AssessConfig) -> Self {
        Self::at(assessment, config, Utc::now())
    }

    pub fn at(assessment: Assessment, config: &AssessConfig, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            framework_version: env!("CARGO_PKG_VERSION").to_string(),
            assessor: config.assessment.assessor.clone(),
            organization: config.assessment.organization.clone(),
            categories: assessment.categories,
            overall: assessment.overall,
            references: config.report.references.clone(),
        }
    }
}
