use serde::{Deserialize, Serialize};

use super::ComponentScore;

/// Nine-box placement derived from the performance and potential axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TalentCategory {
    Star,
    HighPerformer,
    HighPotential,
    CoreContributor,
    Developing,
    Underperformer,
}

impl TalentCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Star => "Star",
            Self::HighPerformer => "High Performer",
            Self::HighPotential => "High Potential",
            Self::CoreContributor => "Core Contributor",
            Self::Developing => "Developing",
            Self::Underperformer => "Underperformer",
        }
    }

    pub const fn development_actions(self) -> [&'static str; 3] {
        match self {
            Self::Star => [
                "Consider for leadership development program",
                "Assign high-visibility strategic projects",
                "Discuss career advancement opportunities",
            ],
            Self::HighPerformer => [
                "Provide stretch assignments to develop potential",
                "Consider mentoring or coaching program",
                "Recognize and reward contributions",
            ],
            Self::HighPotential => [
                "Focus on skill development and experience building",
                "Pair with high-performing mentor",
                "Provide performance coaching",
            ],
            Self::CoreContributor => [
                "Maintain engagement through meaningful work",
                "Offer professional development opportunities",
                "Regular feedback and recognition",
            ],
            Self::Developing => [
                "Create structured development plan",
                "Provide additional training and support",
                "Set clear expectations and milestones",
            ],
            Self::Underperformer => [
                "Conduct performance review discussion",
                "Create performance improvement plan",
                "Provide coaching and support resources",
            ],
        }
    }

    pub fn from_axes(performance: f64, potential: f64) -> Self {
        if performance >= 80.0 && potential >= 80.0 {
            Self::Star
        } else if performance >= 80.0 && potential >= 60.0 {
            Self::HighPerformer
        } else if performance >= 60.0 && potential >= 80.0 {
            Self::HighPotential
        } else if performance >= 60.0 && potential >= 60.0 {
            Self::CoreContributor
        } else if performance >= 40.0 || potential >= 40.0 {
            Self::Developing
        } else {
            Self::Underperformer
        }
    }
}

/// Axes come from components whose id mentions "performance" or "potential". When
/// several match, the last one scored supplies the axis; an axis with no such
/// component falls back to the overall score.
pub(super) fn classify(overall_score: f64, scores: &[ComponentScore]) -> TalentCategory {
    let mut performance = None;
    let mut potential = None;

    for score in scores {
        let id = score.component_id.to_lowercase();
        if id.contains("performance") {
            performance = Some(score.normalized_score);
        } else if id.contains("potential") {
            potential = Some(score.normalized_score);
        }
    }

    TalentCategory::from_axes(
        performance.unwrap_or(overall_score),
        potential.unwrap_or(overall_score),
    )
}
