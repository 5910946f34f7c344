use serde::{Deserialize, Serialize};

use crate::engines::scoring::TierTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
    VeryLow,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::VeryLow => "Very Low",
        }
    }

    pub const fn urgency(self) -> &'static str {
        match self {
            Self::Critical => "Immediate action required",
            Self::High => "Action needed within 2 weeks",
            Self::Medium => "Monitor closely, plan intervention",
            Self::Low => "Regular check-ins sufficient",
            Self::VeryLow => "No immediate concern",
        }
    }

    pub const fn time_to_departure(self) -> &'static str {
        match self {
            Self::Critical => "0-3 months",
            Self::High => "3-6 months",
            Self::Medium => "6-12 months",
            Self::Low => "12+ months",
            Self::VeryLow => "Not anticipated",
        }
    }

    /// Opening action when the overall level calls for a direct conversation.
    pub const fn stay_action(self) -> Option<&'static str> {
        match self {
            Self::Critical => Some("Schedule immediate stay interview"),
            Self::High => Some("Conduct stay conversation within 1 week"),
            Self::Medium | Self::Low | Self::VeryLow => None,
        }
    }
}

pub const RISK_TIERS: TierTable<RiskLevel> = TierTable::new(
    &[
        (80.0, RiskLevel::Critical),
        (60.0, RiskLevel::High),
        (40.0, RiskLevel::Medium),
        (20.0, RiskLevel::Low),
        (0.0, RiskLevel::VeryLow),
    ],
    RiskLevel::VeryLow,
);

/// Root cause an indicator is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    Compensation,
    CareerGrowth,
    ManagerRelationship,
    WorkEnvironment,
    JobFit,
    Tenure,
    Engagement,
    LifeEvents,
    MarketConditions,
}

impl RiskFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Compensation => "Compensation",
            Self::CareerGrowth => "Career Growth",
            Self::ManagerRelationship => "Manager Relationship",
            Self::WorkEnvironment => "Work Environment",
            Self::JobFit => "Job Fit",
            Self::Tenure => "Tenure",
            Self::Engagement => "Engagement",
            Self::LifeEvents => "Life Events",
            Self::MarketConditions => "Market Conditions",
        }
    }

    /// Retention actions for a factor scoring at or above 40.
    pub fn interventions(self, factor_score: f64) -> Vec<&'static str> {
        match self {
            Self::Compensation if factor_score >= 60.0 => vec![
                "Review compensation against market rates",
                "Consider retention bonus or salary adjustment",
            ],
            Self::Compensation => vec!["Review compensation against market rates"],
            Self::CareerGrowth => vec![
                "Discuss career development path and opportunities",
                "Identify stretch assignments or new responsibilities",
            ],
            Self::ManagerRelationship => vec![
                "Facilitate conversation between employee and manager",
                "Consider manager coaching or team reassignment",
            ],
            Self::WorkEnvironment => vec![
                "Address work environment concerns",
                "Explore flexible work arrangements",
            ],
            Self::JobFit => vec![
                "Evaluate role alignment with skills and interests",
                "Consider internal mobility options",
            ],
            Self::Engagement => vec![
                "Increase meaningful work and autonomy",
                "Strengthen team connections",
            ],
            Self::Tenure | Self::LifeEvents | Self::MarketConditions => Vec::new(),
        }
    }
}

/// Piecewise-linear mapping of a 0–100 risk score onto a departure probability, capped at 95%.
pub fn flight_probability(risk_score: f64) -> f64 {
    if risk_score <= 20.0 {
        risk_score * 0.5
    } else if risk_score <= 40.0 {
        10.0 + (risk_score - 20.0)
    } else if risk_score <= 60.0 {
        30.0 + (risk_score - 40.0) * 1.5
    } else if risk_score <= 80.0 {
        60.0 + (risk_score - 60.0) * 1.5
    } else {
        (90.0 + (risk_score - 80.0) * 0.25).min(95.0)
    }
}
