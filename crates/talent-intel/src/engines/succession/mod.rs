//! Successor readiness and bench-strength analysis for critical roles.

mod plan;

#[cfg(test)]
mod tests;

pub use plan::{BenchStrength, CriticalRole, RoleCoverage, RoleRisk, SuccessionPlan, SuccessorCandidate};

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scoring::{validate_definitions, DefinitionError, Metadata, TierTable};

const ENGINE: &str = "succession";

pub const DEFAULT_REQUIRED_EXPERIENCE_YEARS: f64 = 5.0;
/// Competency average assumed when no usable competency scores are supplied.
const NEUTRAL_COMPETENCY: f64 = 50.0;
const COMPETENCY_WEIGHT: f64 = 0.7;
const EXPERIENCE_WEIGHT: f64 = 0.3;
/// Competencies below this score are treated as development gaps.
const COMPETENCY_GAP_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessLevel {
    ReadyNow,
    ReadyInOneYear,
    ReadyInTwoPlusYears,
    Developing,
    NotReady,
}

impl ReadinessLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ReadyNow => "Ready Now",
            Self::ReadyInOneYear => "Ready in 1 Year",
            Self::ReadyInTwoPlusYears => "Ready in 2+ Years",
            Self::Developing => "Developing",
            Self::NotReady => "Not Ready",
        }
    }

    pub const fn estimated_ready_date(self) -> &'static str {
        match self {
            Self::ReadyNow => "Now",
            Self::ReadyInOneYear => "Within 12 months",
            Self::ReadyInTwoPlusYears => "12-24 months",
            Self::Developing | Self::NotReady => "24+ months",
        }
    }

    /// Ready now or within a year.
    pub const fn is_near_term(self) -> bool {
        matches!(self, Self::ReadyNow | Self::ReadyInOneYear)
    }

    fn development_plan(self, low_competencies: &[&str]) -> Vec<String> {
        let mut plan: Vec<String> = Vec::new();
        match self {
            Self::ReadyNow => {
                plan.push("Provide stretch assignments to maintain engagement".to_string());
                plan.push("Include in leadership meetings and strategic discussions".to_string());
            }
            Self::ReadyInOneYear => {
                plan.push("Assign to high-visibility project".to_string());
                if !low_competencies.is_empty() {
                    let focus: Vec<&str> = low_competencies.iter().take(2).copied().collect();
                    plan.push(format!("Focus development on: {}", focus.join(", ")));
                }
            }
            Self::ReadyInTwoPlusYears => {
                plan.push("Create structured development plan".to_string());
                plan.push("Assign executive mentor".to_string());
                if !low_competencies.is_empty() {
                    let training: Vec<&str> = low_competencies.iter().take(3).copied().collect();
                    plan.push(format!("Training needed: {}", training.join(", ")));
                }
            }
            Self::Developing | Self::NotReady => {
                plan.push("Assess long-term potential".to_string());
                plan.push("Consider alternative career paths".to_string());
            }
        }
        plan.truncate(4);
        plan
    }
}

pub const READINESS_TIERS: TierTable<ReadinessLevel> = TierTable::new(
    &[
        (90.0, ReadinessLevel::ReadyNow),
        (75.0, ReadinessLevel::ReadyInOneYear),
        (60.0, ReadinessLevel::ReadyInTwoPlusYears),
        (40.0, ReadinessLevel::Developing),
        (0.0, ReadinessLevel::NotReady),
    ],
    ReadinessLevel::NotReady,
);

/// Competencies a critical role expects its successors to have been assessed on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRequirement {
    pub role_id: String,
    pub competencies: Vec<String>,
}

impl RoleRequirement {
    pub fn new<I, S>(role_id: impl Into<String>, competencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            role_id: role_id.into(),
            competencies: competencies.into_iter().map(Into::into).collect(),
        }
    }
}

/// What is known about a candidate going into a readiness assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub employee_id: String,
    pub employee_name: String,
    #[serde(default)]
    pub competency_scores: BTreeMap<String, f64>,
    pub experience_years: f64,
}

impl CandidateProfile {
    pub fn new(employee_id: impl Into<String>, employee_name: impl Into<String>, experience_years: f64) -> Self {
        Self {
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
            competency_scores: BTreeMap::new(),
            experience_years,
        }
    }

    pub fn with_competency(mut self, competency: impl Into<String>, score: f64) -> Self {
        self.competency_scores.insert(competency.into(), score);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadinessAssessment {
    pub employee_id: String,
    pub employee_name: String,
    pub target_role: String,
    pub overall_readiness: f64,
    pub readiness_level: ReadinessLevel,
    pub readiness_level_label: &'static str,
    /// Competencies that entered the average.
    pub competency_scores: BTreeMap<String, f64>,
    /// Competencies registered for the target role that the candidate has no score for.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unscored_competencies: Vec<String>,
    pub required_experience_years: f64,
    pub experience_gaps: Vec<String>,
    pub development_plan: Vec<String>,
    pub estimated_ready_date: &'static str,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Default)]
pub struct SuccessionAnalyzer {
    requirements: HashMap<String, RoleRequirement>,
}

impl SuccessionAnalyzer {
    pub fn new(requirements: Vec<RoleRequirement>) -> Result<Self, DefinitionError> {
        validate_definitions(
            ENGINE,
            requirements
                .iter()
                .map(|requirement| (requirement.role_id.as_str(), 1.0)),
        )?;
        debug!(roles = requirements.len(), "succession analyzer ready");

        Ok(Self {
            requirements: requirements
                .into_iter()
                .map(|requirement| (requirement.role_id.clone(), requirement))
                .collect(),
        })
    }

    pub fn requirement(&self, role_id: &str) -> Option<&RoleRequirement> {
        self.requirements.get(role_id)
    }

    /// Scores a candidate against `target_role`.
    ///
    /// Every finite competency score enters the average. `required_experience` defaults to
    /// five years. A registered role only adds the list of its competencies left unscored.
    pub fn assess_readiness(
        &self,
        candidate: &CandidateProfile,
        target_role: &str,
        required_experience: Option<f64>,
        metadata: Option<Metadata>,
    ) -> ReadinessAssessment {
        let competency_scores = &candidate.competency_scores;
        let experience_years = candidate.experience_years;
        let required_experience_years =
            required_experience.unwrap_or(DEFAULT_REQUIRED_EXPERIENCE_YEARS);

        let considered: Vec<(&str, f64)> = competency_scores
            .iter()
            .map(|(competency, score)| (competency.as_str(), *score))
            .filter(|(_, score)| score.is_finite())
            .collect();

        let unscored_competencies: Vec<String> = self
            .requirements
            .get(target_role)
            .map(|requirement| {
                requirement
                    .competencies
                    .iter()
                    .filter(|competency| {
                        !considered
                            .iter()
                            .any(|(scored, _)| *scored == competency.as_str())
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        let average_competency = if considered.is_empty() {
            NEUTRAL_COMPETENCY
        } else {
            considered.iter().map(|(_, score)| score).sum::<f64>() / considered.len() as f64
        };
        let experience_score = experience_score(experience_years, required_experience_years);
        let overall_readiness =
            average_competency * COMPETENCY_WEIGHT + experience_score * EXPERIENCE_WEIGHT;
        let readiness_level = READINESS_TIERS.classify(overall_readiness);

        let mut experience_gaps = Vec::new();
        if experience_years < required_experience_years {
            experience_gaps.push(format!(
                "Need {:.1} more years experience",
                required_experience_years - experience_years
            ));
        }

        let low_competencies: Vec<&str> = considered
            .iter()
            .filter(|(_, score)| *score < COMPETENCY_GAP_THRESHOLD)
            .map(|(competency, _)| *competency)
            .collect();
        experience_gaps.extend(
            low_competencies
                .iter()
                .take(3)
                .map(|competency| format!("Develop {competency}")),
        );

        let development_plan = readiness_level.development_plan(&low_competencies);

        debug!(
            employee_id = %candidate.employee_id,
            target_role,
            overall_readiness,
            level = readiness_level.label(),
            "readiness assessed"
        );

        ReadinessAssessment {
            employee_id: candidate.employee_id.clone(),
            employee_name: candidate.employee_name.clone(),
            target_role: target_role.to_string(),
            overall_readiness,
            readiness_level,
            readiness_level_label: readiness_level.label(),
            competency_scores: considered
                .iter()
                .map(|(competency, score)| (competency.to_string(), *score))
                .collect(),
            unscored_competencies,
            required_experience_years,
            experience_gaps,
            development_plan,
            estimated_ready_date: readiness_level.estimated_ready_date(),
            metadata: metadata.unwrap_or_default(),
        }
    }
}

/// Tenure relative to the requirement, capped at 100.
fn experience_score(experience_years: f64, required_years: f64) -> f64 {
    if required_years <= 0.0 {
        return 100.0;
    }
    (experience_years / required_years * 100.0).clamp(0.0, 100.0)
}
