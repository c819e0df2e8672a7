use crate::types::scoring::{Category, ResponseSet, Responses};

/// Ratings for a municipal utility weighing an independent instance against
/// the city-wide enterprise deployment.
pub fn sample_responses() -> Responses {
    Responses::from([
        (
            Category::Organizational,
            ResponseSet::new()
                .with("independent_budget", 9.0)
                .with("decision_timeline", 8.0)
                .with("division_priorities", 9.0)
                .with("outcome_ownership", 8.0),
        ),
        (
            Category::Technical,
            ResponseSet::new()
                .with("integration_needs", 6.0)
                .with("data_control", 9.0)
                .with("security_complexity", 7.0)
                .with("custom_workflows", 8.0),
        ),
        (
            Category::Timeline,
            ResponseSet::new()
                .with("market_pressure", 7.0)
                .with("regulatory_timeline", 8.0)
                .with("strategic_timing", 9.0)
                .with("delay_sensitivity", 8.0),
        ),
        (
            Category::Resource,
            ResponseSet::new()
                .with("team_availability", 8.0)
                .with("budget_flexibility", 9.0)
                .with("vendor_access", 7.0)
                .with("internal_capability", 7.0),
        ),
        (
            Category::Risk,
            ResponseSet::new()
                .with("failure_tolerance", 9.0)
                .with("downtime_sensitivity", 8.0)
                .with("upgrade_flexibility", 7.0)
                .with("dependency_risk", 9.0),
        ),
    ])
}
