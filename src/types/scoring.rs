use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

pub type Score = f64;

/// The five assessment dimensions, declared in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Organizational,
    Technical,
    Timeline,
    Resource,
    Risk,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Organizational,
        Category::Technical,
        Category::Timeline,
        Category::Resource,
        Category::Risk,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Organizational => "organizational",
            Category::Technical => "technical",
            Category::Timeline => "timeline",
            Category::Resource => "resource",
            Category::Risk => "risk",
        }
    }

    /// Name of the weight-table entry this category contributes through.
    pub const fn weight_name(self) -> &'static str {
        match self {
            Category::Organizational => "organizational_autonomy",
            Category::Technical => "technical_complexity",
            Category::Timeline => "timeline_criticality",
            Category::Resource => "resource_availability",
            Category::Risk => "risk_tolerance",
        }
    }

    const fn index(self) -> usize {
        match self {
            Category::Organizational => 0,
            Category::Technical => 1,
            Category::Timeline => 2,
            Category::Resource => 3,
            Category::Risk => 4,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ratings supplied for one category, keyed by input name.
///
/// Keys the engine does not recognize are carried but ignored when scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet(HashMap<String, Score>);

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: Score) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// Rating for `key`, or 0 when the key was not answered.
    pub fn rating(&self, key: &str) -> Score {
        self.0.get(key).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Score)> {
        self.0.iter().map(|(key, value)| (key.as_str(), *value))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Score)> {
        self.0.iter_mut().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K: Into<String>> FromIterator<(K, Score)> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = (K, Score)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(key, value)| (key.into(), value)).collect())
    }
}

/// One response set per category, as read from a responses document.
pub type Responses = BTreeMap<Category, ResponseSet>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Factor {
    pub name: &'static str,
    pub key: &'static str,
    pub value: Score,
}

pub type CategoryFactors = Vec<Factor>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResult {
    pub factors: CategoryFactors,
    pub composite_score: Score,
    pub recommendation: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    SeparateInstanceStronglyRecommended,
    SeparateInstanceRecommended,
    HybridEvaluationRequired,
    EnterpriseIntegrationRecommended,
}

impl Recommendation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Recommendation::SeparateInstanceStronglyRecommended => {
                "SEPARATE_INSTANCE_STRONGLY_RECOMMENDED"
            }
            Recommendation::SeparateInstanceRecommended => "SEPARATE_INSTANCE_RECOMMENDED",
            Recommendation::HybridEvaluationRequired => "HYBRID_EVALUATION_REQUIRED",
            Recommendation::EnterpriseIntegrationRecommended => {
                "ENTERPRISE_INTEGRATION_RECOMMENDED"
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    High,
    Medium,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Confidence::High => "HIGH",
            Confidence::Medium => "MEDIUM",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallResult {
    pub weighted_score: Score,
    pub recommendation: Recommendation,
    pub confidence: Confidence,
    pub rationale: &'static str,
    pub next_steps: Vec<&'static str>,
}

/// Per-category results plus the combined recommendation for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub categories: BTreeMap<Category, CategoryResult>,
    pub overall: OverallResult,
}

/// Fixed category weights. They sum to 1.0, so the weighted score is a
/// convex combination of the composites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightTable([Score; 5]);

impl WeightTable {
    pub const fn standard() -> Self {
        Self([0.25, 0.20, 0.20, 0.15, 0.20])
    }

    pub fn weight(&self, category: Category) -> Score {
        self.0[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, Score)> + '_ {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.weight(category)))
    }

    pub fn total(&self) -> Score {
        self.0.iter().sum()
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::standard()
    }
}
