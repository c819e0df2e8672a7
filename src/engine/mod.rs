pub mod tables;

use crate::error::{AssessError, Result};
use crate::types::scoring::{
    Assessment, Category, CategoryFactors, CategoryResult, Factor, OverallResult, ResponseSet,
    Responses, Score, WeightTable,
};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Scores category responses and combines them into a banded recommendation.
///
/// Holds only the fixed weight table, so one engine can be shared freely
/// across threads; every operation is a pure function of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoringEngine {
    weights: WeightTable,
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self {
            weights: WeightTable::standard(),
        }
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Reads the category's four recognized keys (0 when absent), averages
    /// them over all four slots and picks the matching narrative.
    pub fn score_category(&self, category: Category, responses: &ResponseSet) -> CategoryResult {
        let profile = tables::profile(category);
        let factors: CategoryFactors = profile
            .factors
            .iter()
            .map(|&(name, key)| Factor {
                name,
                key,
                value: responses.rating(key),
            })
            .collect();

        let composite_score =
            factors.iter().map(|factor| factor.value).sum::<Score>() / profile.factors.len() as Score;
        let recommendation = profile.narratives.select(composite_score);

        debug!(
            category = %category,
            composite_score,
            answered = profile
                .factors
                .iter()
                .filter(|(_, key)| responses.contains(key))
                .count(),
            "scored category"
        );

        CategoryResult {
            factors,
            composite_score,
            recommendation,
        }
    }

    pub fn organizational(&self, responses: &ResponseSet) -> CategoryResult {
        self.score_category(Category::Organizational, responses)
    }

    pub fn technical(&self, responses: &ResponseSet) -> CategoryResult {
        self.score_category(Category::Technical, responses)
    }

    pub fn timeline(&self, responses: &ResponseSet) -> CategoryResult {
        self.score_category(Category::Timeline, responses)
    }

    pub fn resource(&self, responses: &ResponseSet) -> CategoryResult {
        self.score_category(Category::Resource, responses)
    }

    pub fn risk(&self, responses: &ResponseSet) -> CategoryResult {
        self.score_category(Category::Risk, responses)
    }

    /// Weighted combination of all five category composites. Fails with
    /// [`AssessError::MissingCategory`] for the first absent category in
    /// canonical order.
    pub fn combine(&self, results: &BTreeMap<Category, CategoryResult>) -> Result<OverallResult> {
        let mut weighted_score: Score = 0.0;
        for (category, weight) in self.weights.iter() {
            let result = results
                .get(&category)
                .ok_or(AssessError::MissingCategory(category))?;
            weighted_score += result.composite_score * weight;
        }
        Ok(Self::recommend(weighted_score))
    }

    /// Maps a weighted score to its band's label, confidence, rationale and
    /// next steps.
    pub fn recommend(weighted_score: Score) -> OverallResult {
        let band = tables::classify(weighted_score);
        debug!(weighted_score, band = %band.label, "classified weighted score");
        OverallResult {
            weighted_score,
            recommendation: band.label,
            confidence: band.confidence,
            rationale: band.rationale,
            next_steps: tables::next_steps(band.label.as_str()),
        }
    }

    /// Scores every category present in `responses`. Absent categories are
    /// simply left out; [`ScoringEngine::combine`] reports them.
    pub fn score_all(&self, responses: &Responses) -> BTreeMap<Category, CategoryResult> {
        responses
            .iter()
            .map(|(&category, set)| (category, self.score_category(category, set)))
            .collect()
    }

    pub fn assess(&self, responses: &Responses) -> Result<Assessment> {
        let categories = self.score_all(responses);
        let overall = self.combine(&categories)?;
        info!(
            weighted_score = overall.weighted_score,
            recommendation = %overall.recommendation,
            confidence = %overall.confidence,
            "assessment complete"
        );
        Ok(Assessment {
            categories,
            overall,
        })
    }
}
