use crate::types::scoring::{Category, Confidence, Recommendation, Score};

pub const STRONG_THRESHOLD: Score = 7.5;
pub const MODERATE_THRESHOLD: Score = 6.0;
pub const HYBRID_THRESHOLD: Score = 4.0;

pub const FALLBACK_STEP: &str = "Seek further guidance from the migration practitioner community";

/// Narrative text for a category, one per threshold band.
#[derive(Debug, Clone, Copy)]
pub struct Narratives {
    pub strong: &'static str,
    pub moderate: &'static str,
    pub weak: &'static str,
}

impl Narratives {
    pub fn select(&self, composite: Score) -> &'static str {
        if composite >= STRONG_THRESHOLD {
            self.strong
        } else if composite >= MODERATE_THRESHOLD {
            self.moderate
        } else {
            self.weak
        }
    }
}

/// Factor names paired with the response key each one is read from.
#[derive(Debug, Clone, Copy)]
pub struct CategoryProfile {
    pub factors: [(&'static str, &'static str); 4],
    pub narratives: Narratives,
}

static ORGANIZATIONAL: CategoryProfile = CategoryProfile {
    factors: [
        ("budget_control", "independent_budget"),
        ("decision_speed", "decision_timeline"),
        ("strategic_alignment", "division_priorities"),
        ("performance_accountability", "outcome_ownership"),
    ],
    narratives: Narratives {
        strong: "High autonomy requirements strongly favor separate instance deployment",
        moderate: "Moderate autonomy needs support separate instance consideration",
        weak: "Current autonomy requirements may be met through enterprise integration",
    },
};

static TECHNICAL: CategoryProfile = CategoryProfile {
    factors: [
        ("integration_complexity", "integration_needs"),
        ("data_sovereignty", "data_control"),
        ("security_requirements", "security_complexity"),
        ("customization_level", "custom_workflows"),
    ],
    narratives: Narratives {
        strong: "Technical factors strongly support simplified separate instance architecture",
        moderate: "Technical complexity moderate - evaluate integration vs. independence trade-offs",
        weak: "Technical requirements may benefit from shared enterprise infrastructure",
    },
};

static TIMELINE: CategoryProfile = CategoryProfile {
    factors: [
        ("business_urgency", "market_pressure"),
        ("compliance_deadlines", "regulatory_timeline"),
        ("competitive_advantage", "strategic_timing"),
        ("disruption_tolerance", "delay_sensitivity"),
    ],
    narratives: Narratives {
        strong: "Critical timeline requirements strongly favor accelerated separate instance approach",
        moderate: "Timeline considerations support separate instance for faster delivery",
        weak: "Timeline flexibility allows for coordinated enterprise implementation",
    },
};

static RESOURCE: CategoryProfile = CategoryProfile {
    factors: [
        ("dedicated_team", "team_availability"),
        ("funding_model", "budget_flexibility"),
        ("vendor_relationship", "vendor_access"),
        ("expertise_level", "internal_capability"),
    ],
    narratives: Narratives {
        strong: "Strong resource availability enables dedicated separate instance implementation",
        moderate: "Adequate resources available for separate instance approach",
        weak: "Resource constraints may benefit from shared enterprise approach",
    },
};

static RISK: CategoryProfile = CategoryProfile {
    factors: [
        ("implementation_risk", "failure_tolerance"),
        ("operational_disruption", "downtime_sensitivity"),
        ("technology_obsolescence", "upgrade_flexibility"),
        ("coordination_complexity", "dependency_risk"),
    ],
    narratives: Narratives {
        strong: "Risk profile strongly supports independent implementation approach",
        moderate: "Risk considerations favor separate instance for reduced dependencies",
        weak: "Risk tolerance may accommodate enterprise coordination requirements",
    },
};

pub fn profile(category: Category) -> &'static CategoryProfile {
    match category {
        Category::Organizational => &ORGANIZATIONAL,
        Category::Technical => &TECHNICAL,
        Category::Timeline => &TIMELINE,
        Category::Resource => &RESOURCE,
        Category::Risk => &RISK,
    }
}

/// Recognized response keys for a category, in factor order.
pub fn recognized_keys(category: Category) -> [&'static str; 4] {
    profile(category).factors.map(|(_, key)| key)
}

#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub floor: Score,
    pub label: Recommendation,
    pub confidence: Confidence,
    pub rationale: &'static str,
}

/// Ordered highest floor first; floors are inclusive.
pub static BANDS: [Band; 4] = [
    Band {
        floor: STRONG_THRESHOLD,
        label: Recommendation::SeparateInstanceStronglyRecommended,
        confidence: Confidence::High,
        rationale: "Multiple factors strongly favor separate instance deployment for operational independence and accelerated delivery.",
    },
    Band {
        floor: MODERATE_THRESHOLD,
        label: Recommendation::SeparateInstanceRecommended,
        confidence: Confidence::Medium,
        rationale: "Several factors favor separate instance approach, though some considerations may benefit from additional evaluation.",
    },
    Band {
        floor: HYBRID_THRESHOLD,
        label: Recommendation::HybridEvaluationRequired,
        confidence: Confidence::Medium,
        rationale: "Mixed factors require detailed analysis of specific organizational priorities and constraints.",
    },
    Band {
        floor: Score::NEG_INFINITY,
        label: Recommendation::EnterpriseIntegrationRecommended,
        confidence: Confidence::Medium,
        rationale: "Current factors suggest enterprise integration approach may provide better alignment with organizational needs.",
    },
];

/// Selects the band for a weighted score. Total over all inputs: anything
/// below every floor (including NaN) lands in the last band.
pub fn classify(weighted_score: Score) -> &'static Band {
    let lowest = &BANDS[BANDS.len() - 1];
    BANDS
        .iter()
        .find(|band| weighted_score >= band.floor)
        .unwrap_or(lowest)
}

static NEXT_STEPS: [(&str, [&str; 4]); 4] = [
    (
        Recommendation::SeparateInstanceStronglyRecommended.as_str(),
        [
            "Proceed with separate instance architecture planning",
            "Develop SOW amendment for scope redefinition",
            "Create dedicated project timeline and resource plan",
            "Establish independent vendor relationship framework",
        ],
    ),
    (
        Recommendation::SeparateInstanceRecommended.as_str(),
        [
            "Conduct detailed cost-benefit analysis comparing approaches",
            "Validate resource availability and timeline requirements",
            "Develop risk mitigation strategies for independent implementation",
            "Engage stakeholders for deployment approach confirmation",
        ],
    ),
    (
        Recommendation::HybridEvaluationRequired.as_str(),
        [
            "Perform detailed stakeholder requirements analysis",
            "Conduct pilot evaluation of both approaches",
            "Develop comparative implementation scenarios",
            "Schedule decision workshop with key stakeholders",
        ],
    ),
    (
        Recommendation::EnterpriseIntegrationRecommended.as_str(),
        [
            "Develop enterprise integration timeline and coordination plan",
            "Establish shared governance and decision-making framework",
            "Create multi-divisional communication and change management strategy",
            "Define shared infrastructure requirements and dependencies",
        ],
    ),
];

/// Ordered next steps for a recommendation label. Unknown labels get the
/// single fallback step.
pub fn next_steps(label: &str) -> Vec<&'static str> {
    NEXT_STEPS
        .iter()
        .find(|(key, _)| *key == label)
        .map(|(_, steps)| steps.to_vec())
        .unwrap_or_else(|| vec![FALLBACK_STEP])
}
