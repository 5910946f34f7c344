//! Weighted component scoring for performance, potential and engagement reviews.

mod grid;
pub mod presets;


pub use grid::TalentCategory;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scoring::{
    present_value, validate_definitions, DefinitionError, Direction, Metadata, MetricSource,
    TierTable, WeightedMean, MAX_RECOMMENDATIONS,
};

const ENGINE: &str = "talent";

/// Score handed back when a component's declared range is degenerate.
const NEUTRAL_SCORE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceRating {
    Exceptional,
    ExceedsExpectations,
    MeetsExpectations,
    NeedsImprovement,
    BelowExpectations,
}

impl PerformanceRating {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exceptional => "Exceptional",
            Self::ExceedsExpectations => "Exceeds Expectations",
            Self::MeetsExpectations => "Meets Expectations",
            Self::NeedsImprovement => "Needs Improvement",
            Self::BelowExpectations => "Below Expectations",
        }
    }
}

pub const RATING_TIERS: TierTable<PerformanceRating> = TierTable::new(
    &[
        (90.0, PerformanceRating::Exceptional),
        (80.0, PerformanceRating::ExceedsExpectations),
        (70.0, PerformanceRating::MeetsExpectations),
        (60.0, PerformanceRating::NeedsImprovement),
        (0.0, PerformanceRating::BelowExpectations),
    ],
    PerformanceRating::BelowExpectations,
);

/// One weighted dimension of a review, normalised from `[min_value, max_value]` to 0–100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringComponent {
    pub id: String,
    pub name: String,
    pub weight: f64,
    pub direction: Direction,
    pub min_value: f64,
    pub max_value: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl ScoringComponent {
    pub fn new(id: impl Into<String>, name: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weight,
            direction: Direction::HigherIsBetter,
            min_value: 0.0,
            max_value: 100.0,
            description: String::new(),
        }
    }

    pub fn with_range(mut self, min_value: f64, max_value: f64) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Min–max scaling onto 0–100, mirrored for lower-is-better components.
    pub fn normalize(&self, value: f64) -> f64 {
        let range = self.max_value - self.min_value;
        if range == 0.0 {
            return NEUTRAL_SCORE;
        }

        let normalized = match self.direction {
            Direction::HigherIsBetter => (value - self.min_value) / range * 100.0,
            Direction::LowerIsBetter => (self.max_value - value) / range * 100.0,
        };

        normalized.clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentScore {
    pub component_id: String,
    pub component_name: String,
    pub raw_value: f64,
    pub normalized_score: f64,
    /// Points this component contributes out of the engine's full registered weight.
    pub weighted_score: f64,
    pub weight: f64,
    pub rating: PerformanceRating,
    pub rating_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TalentScore {
    pub entity_id: String,
    pub entity_name: String,
    pub overall_score: f64,
    pub overall_rating: PerformanceRating,
    pub overall_rating_label: &'static str,
    pub talent_category: TalentCategory,
    pub talent_category_label: &'static str,
    pub component_scores: Vec<ComponentScore>,
    pub strengths: Vec<String>,
    pub development_areas: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

/// Stateless scorer over a fixed, validated component set.
#[derive(Debug, Clone)]
pub struct TalentScoringEngine {
    components: Vec<ScoringComponent>,
    total_weight: f64,
}

impl TalentScoringEngine {
    pub fn new(components: Vec<ScoringComponent>) -> Result<Self, DefinitionError> {
        validate_definitions(
            ENGINE,
            components
                .iter()
                .map(|component| (component.id.as_str(), component.weight)),
        )?;

        let total_weight = components.iter().map(|component| component.weight).sum();
        debug!(components = components.len(), total_weight, "talent scoring engine ready");

        Ok(Self {
            components,
            total_weight,
        })
    }

    pub fn components(&self) -> &[ScoringComponent] {
        &self.components
    }

    pub fn score<M: MetricSource + ?Sized>(
        &self,
        entity_id: &str,
        entity_name: &str,
        values: &M,
        metadata: Option<Metadata>,
    ) -> TalentScore {
        let mut component_scores = Vec::new();
        let mut overall = WeightedMean::default();

        for component in &self.components {
            let Some(raw_value) = present_value(values, ENGINE, &component.id) else {
                continue;
            };

            let normalized = component.normalize(raw_value);
            let weighted_score = if self.total_weight > 0.0 {
                normalized * component.weight / self.total_weight
            } else {
                0.0
            };
            let rating = RATING_TIERS.classify(normalized);

            component_scores.push(ComponentScore {
                component_id: component.id.clone(),
                component_name: component.name.clone(),
                raw_value,
                normalized_score: normalized,
                weighted_score,
                weight: component.weight,
                rating,
                rating_label: rating.label(),
            });
            overall.add(normalized, component.weight);
        }

        let overall_score = overall.value();
        let overall_rating = RATING_TIERS.classify(overall_score);
        let talent_category = grid::classify(overall_score, &component_scores);

        let mut ranked: Vec<&ComponentScore> = component_scores.iter().collect();
        ranked.sort_by(|a, b| b.normalized_score.total_cmp(&a.normalized_score));

        let strengths = ranked
            .iter()
            .take(3)
            .filter(|score| score.normalized_score >= 70.0)
            .map(|score| score.component_name.clone())
            .collect();
        let development_areas = ranked
            .iter()
            .skip(ranked.len().saturating_sub(3))
            .filter(|score| score.normalized_score < 70.0)
            .map(|score| score.component_name.clone())
            .collect();

        let recommendations = recommendations(talent_category, &component_scores);

        debug!(
            entity_id,
            overall_score,
            category = talent_category.label(),
            components = component_scores.len(),
            "talent score computed"
        );

        TalentScore {
            entity_id: entity_id.to_string(),
            entity_name: entity_name.to_string(),
            overall_score,
            overall_rating,
            overall_rating_label: overall_rating.label(),
            talent_category,
            talent_category_label: talent_category.label(),
            component_scores,
            strengths,
            development_areas,
            recommendations,
            metadata: metadata.unwrap_or_default(),
        }
    }
}

fn recommendations(category: TalentCategory, scores: &[ComponentScore]) -> Vec<String> {
    let mut recommendations: Vec<String> = category
        .development_actions()
        .iter()
        .map(|action| action.to_string())
        .collect();

    recommendations.extend(
        scores
            .iter()
            .filter(|score| score.normalized_score < 60.0)
            .take(2)
            .map(|score| format!("Focus on improving {}", score.component_name)),
    );

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
