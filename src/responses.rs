use crate::engine::tables::recognized_keys;
use crate::error::{AssessError, Result};
use crate::types::config::RangePolicy;
use crate::types::scoring::{Category, ResponseSet, Responses, Score};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

pub const MIN_RATING: Score = 0.0;
pub const MAX_RATING: Score = 10.0;

/// On-disk shape of a responses file: one table per category.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ResponsesDocument {
    organizational: Option<ResponseSet>,
    technical: Option<ResponseSet>,
    timeline: Option<ResponseSet>,
    resource: Option<ResponseSet>,
    risk: Option<ResponseSet>,
}

impl From<ResponsesDocument> for Responses {
    fn from(doc: ResponsesDocument) -> Self {
        [
            (Category::Organizational, doc.organizational),
            (Category::Technical, doc.technical),
            (Category::Timeline, doc.timeline),
            (Category::Resource, doc.resource),
            (Category::Risk, doc.risk),
        ]
        .into_iter()
        .filter_map(|(category, set)| set.map(|set| (category, set)))
        .collect()
    }
}

/// Reads a TOML or JSON (by `.json` extension) responses document.
pub fn load_responses(path: &Path) -> Result<Responses> {
    if !path.exists() {
        return Err(AssessError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let parsed = if is_json {
        parse_json(&content).map_err(|e| e.to_string())
    } else {
        parse_toml(&content).map_err(|e| e.to_string())
    };
    let responses =
        parsed.map_err(|e| AssessError::ResponsesParse(format!("{}: {}", path.display(), e)))?;

    debug!(
        path = %path.display(),
        categories = responses.len(),
        "loaded responses"
    );
    Ok(responses)
}

pub fn parse_toml(content: &str) -> std::result::Result<Responses, toml::de::Error> {
    toml::from_str::<ResponsesDocument>(content).map(Responses::from)
}

pub fn parse_json(content: &str) -> std::result::Result<Responses, serde_json::Error> {
    serde_json::from_str::<ResponsesDocument>(content).map(Responses::from)
}

/// Applies the range policy to every recognized rating. Non-finite ratings
/// are always rejected; out-of-range ones are rejected or clamped to 0-10.
/// Keys the engine does not read are left untouched.
pub fn apply_range_policy(responses: &mut Responses, policy: RangePolicy) -> Result<()> {
    for (&category, set) in responses.iter_mut() {
        let recognized = recognized_keys(category);
        for (key, value) in set.iter_mut() {
            if !recognized.iter().any(|known| *known == key) {
                continue;
            }
            if !value.is_finite() {
                return Err(AssessError::InvalidRating {
                    category,
                    key: key.to_string(),
                });
            }
            if (MIN_RATING..=MAX_RATING).contains(&*value) {
                continue;
            }
            match policy {
                RangePolicy::Reject => {
                    return Err(AssessError::RatingOutOfRange {
                        category,
                        key: key.to_string(),
                        value: *value,
                    });
                }
                RangePolicy::Clamp => {
                    let clamped = (*value).clamp(MIN_RATING, MAX_RATING);
                    warn!(%category, key, original = *value, clamped, "clamped rating");
                    *value = clamped;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const PARTIAL_TOML: &str = r#"
[organizational]
independent_budget = 9
decision_timeline = 8

[risk]
failure_tolerance = 7.5
"#;

    #[test]
    fn parse_toml_keeps_only_present_categories() {
        let responses = parse_toml(PARTIAL_TOML).expect("responses should parse");
        assert_eq!(
            responses.keys().copied().collect::<Vec<_>>(),
            vec![Category::Organizational, Category::Risk]
        );
        assert_eq!(
            responses[&Category::Organizational].rating("independent_budget"),
            9.0
        );
        assert_eq!(responses[&Category::Risk].rating("failure_tolerance"), 7.5);
    }

    #[test]
    fn parse_toml_rejects_unknown_category() {
        let err = parse_toml("[finance]\nbudget = 3\n").expect_err("unknown category should fail");
        assert!(err.to_string().contains("finance"));
    }

    #[test]
    fn parse_json_accepts_the_same_shape() {
        let responses = parse_json(
            r#"{"technical": {"integration_needs": 6, "data_control": 9}, "timeline": {}}"#,
        )
        .expect("json should parse");
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[&Category::Technical].rating("data_control"), 9.0);
        assert!(responses[&Category::Timeline].is_empty());
    }

    #[test]
    fn load_responses_dispatches_on_extension() {
        let dir = TempDir::new().expect("temp dir should be created");
        let toml_path = dir.path().join("responses.toml");
        let json_path = dir.path().join("responses.JSON");
        fs::write(&toml_path, PARTIAL_TOML).expect("toml should write");
        fs::write(&json_path, r#"{"resource": {"vendor_access": 7}}"#).expect("json should write");

        assert_eq!(load_responses(&toml_path).expect("toml loads").len(), 2);
        let from_json = load_responses(&json_path).expect("json loads");
        assert_eq!(from_json[&Category::Resource].rating("vendor_access"), 7.0);
    }

    #[test]
    fn load_responses_reports_missing_path() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_responses(&dir.path().join("absent.toml")).expect_err("should fail");
        assert!(matches!(err, AssessError::PathNotFound(_)));
    }

    #[test]
    fn load_responses_wraps_parse_errors_with_path() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[technical]\ndata_control = \"high\"\n").expect("file should write");
        let err = load_responses(&path).expect_err("string rating should fail");
        assert!(matches!(err, AssessError::ResponsesParse(_)));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn reject_policy_names_the_offending_rating() {
        let mut responses = Responses::from([(
            Category::Timeline,
            ResponseSet::new()
                .with("market_pressure", 7.0)
                .with("strategic_timing", 12.0),
        )]);
        let err = apply_range_policy(&mut responses, RangePolicy::Reject)
            .expect_err("12 should be rejected");
        match err {
            AssessError::RatingOutOfRange {
                category,
                key,
                value,
            } => {
                assert_eq!(category, Category::Timeline);
                assert_eq!(key, "strategic_timing");
                assert_eq!(value, 12.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn clamp_policy_pulls_ratings_into_range() {
        let mut responses = Responses::from([(
            Category::Risk,
            ResponseSet::new()
                .with("failure_tolerance", 14.0)
                .with("dependency_risk", -2.0)
                .with("upgrade_flexibility", 6.0),
        )]);
        apply_range_policy(&mut responses, RangePolicy::Clamp).expect("clamp should succeed");
        let risk = &responses[&Category::Risk];
        assert_eq!(risk.rating("failure_tolerance"), 10.0);
        assert_eq!(risk.rating("dependency_risk"), 0.0);
        assert_eq!(risk.rating("upgrade_flexibility"), 6.0);
    }

    #[test]
    fn boundary_ratings_pass_either_policy() {
        for policy in [RangePolicy::Reject, RangePolicy::Clamp] {
            let mut responses = Responses::from([(
                Category::Resource,
                ResponseSet::new()
                    .with("team_availability", 0.0)
                    .with("vendor_access", 10.0),
            )]);
            apply_range_policy(&mut responses, policy).expect("boundaries are in range");
            assert_eq!(responses[&Category::Resource].rating("vendor_access"), 10.0);
        }
    }

    #[test]
    fn range_policy_skips_keys_the_engine_does_not_read() {
        let mut responses = parse_toml(
            r#"
[organizational]
independent_budget = 9
decision_timeline = 8
division_priorities = 9
outcome_ownership = 8
headcount = 42
notes_score = nan
"#,
        )
        .expect("responses should parse");
        apply_range_policy(&mut responses, RangePolicy::Reject)
            .expect("unrecognized keys should not be checked");
        let organizational = &responses[&Category::Organizational];
        assert_eq!(organizational.rating("headcount"), 42.0);

        apply_range_policy(&mut responses, RangePolicy::Clamp)
            .expect("unrecognized keys should not be clamped");
        assert_eq!(responses[&Category::Organizational].rating("headcount"), 42.0);
    }

    #[test]
    fn non_finite_ratings_are_rejected_even_when_clamping() {
        let mut responses = Responses::from([(
            Category::Technical,
            ResponseSet::new().with("data_control", Score::NAN),
        )]);
        let err = apply_range_policy(&mut responses, RangePolicy::Clamp)
            .expect_err("NaN should be rejected");
        assert!(matches!(err, AssessError::InvalidRating { .. }));
        assert!(err.is_input_error());
    }
}
