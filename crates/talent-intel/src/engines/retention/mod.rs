//! Flight-risk classification from pre-scaled risk indicators.

mod factor;
pub mod presets;


pub use factor::{flight_probability, RiskFactor, RiskLevel, RISK_TIERS};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scoring::{
    present_value, validate_definitions, DefinitionError, Metadata, MetricSource, WeightedMean,
    MAX_RECOMMENDATIONS,
};

const ENGINE: &str = "retention";

/// Contributions at or above this level are reported as risk drivers.
const DRIVER_THRESHOLD: f64 = 50.0;
/// Factors scoring below this level produce no interventions.
const FACTOR_ACTION_THRESHOLD: f64 = 40.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskIndicator {
    pub id: String,
    pub name: String,
    pub weight: f64,
    pub factor: RiskFactor,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl RiskIndicator {
    pub fn new(id: impl Into<String>, name: impl Into<String>, weight: f64, factor: RiskFactor) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weight,
            factor,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    fn explain(&self, level: RiskLevel) -> String {
        match level {
            RiskLevel::Critical | RiskLevel::High => {
                format!("Significant concern in {}", self.name.to_lowercase())
            }
            RiskLevel::Medium => format!("Moderate concern in {}", self.name.to_lowercase()),
            RiskLevel::Low | RiskLevel::VeryLow => {
                format!("{} is within acceptable range", self.name)
            }
        }
    }
}

/// How indicator contributions are combined into a per-factor score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorAggregation {
    /// Mean of `contribution × weight` across the factor's indicators. Scores scale with the
    /// indicator weights, so heavily weighted factors clear the action threshold sooner.
    #[default]
    WeightedContribution,
    /// `Σ(contribution × weight) / Σ(weight)`, which keeps factor scores on the 0–100 scale.
    WeightNormalized,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorAssessment {
    pub indicator_id: String,
    pub indicator_name: String,
    pub value: f64,
    pub risk_contribution: f64,
    pub risk_level: RiskLevel,
    pub risk_level_label: &'static str,
    pub factor: RiskFactor,
    pub factor_label: &'static str,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorScore {
    pub factor: RiskFactor,
    pub factor_label: &'static str,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetentionRiskAssessment {
    pub employee_id: String,
    pub employee_name: String,
    pub overall_risk_score: f64,
    pub risk_level: RiskLevel,
    pub risk_level_label: &'static str,
    pub flight_probability: f64,
    pub risk_factors: Vec<FactorScore>,
    pub indicator_assessments: Vec<IndicatorAssessment>,
    pub top_risk_drivers: Vec<String>,
    pub retention_recommendations: Vec<String>,
    pub urgency: &'static str,
    pub estimated_time_to_departure: &'static str,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

#[derive(Debug, Clone)]
pub struct RetentionRiskClassifier {
    indicators: Vec<RiskIndicator>,
    aggregation: FactorAggregation,
}

impl RetentionRiskClassifier {
    pub fn new(indicators: Vec<RiskIndicator>) -> Result<Self, DefinitionError> {
        validate_definitions(
            ENGINE,
            indicators
                .iter()
                .map(|indicator| (indicator.id.as_str(), indicator.weight)),
        )?;
        debug!(indicators = indicators.len(), "retention risk classifier ready");

        Ok(Self {
            indicators,
            aggregation: FactorAggregation::default(),
        })
    }

    pub fn with_factor_aggregation(mut self, aggregation: FactorAggregation) -> Self {
        self.aggregation = aggregation;
        self
    }

    pub fn indicators(&self) -> &[RiskIndicator] {
        &self.indicators
    }

    pub fn factor_aggregation(&self) -> FactorAggregation {
        self.aggregation
    }

    pub fn assess<M: MetricSource + ?Sized>(
        &self,
        employee_id: &str,
        employee_name: &str,
        indicator_values: &M,
        metadata: Option<Metadata>,
    ) -> RetentionRiskAssessment {
        let mut assessments = Vec::new();
        let mut factors: Vec<(RiskFactor, FactorAccumulator)> = Vec::new();
        let mut overall = WeightedMean::default();

        for indicator in &self.indicators {
            let Some(value) = present_value(indicator_values, ENGINE, &indicator.id) else {
                continue;
            };

            let contribution = value.clamp(0.0, 100.0);
            let level = RISK_TIERS.classify(contribution);

            match factors.iter_mut().find(|(factor, _)| *factor == indicator.factor) {
                Some((_, accumulator)) => accumulator.add(contribution, indicator.weight),
                None => {
                    let mut accumulator = FactorAccumulator::default();
                    accumulator.add(contribution, indicator.weight);
                    factors.push((indicator.factor, accumulator));
                }
            }
            overall.add(contribution, indicator.weight);

            assessments.push(IndicatorAssessment {
                indicator_id: indicator.id.clone(),
                indicator_name: indicator.name.clone(),
                value,
                risk_contribution: contribution,
                risk_level: level,
                risk_level_label: level.label(),
                factor: indicator.factor,
                factor_label: indicator.factor.label(),
                explanation: indicator.explain(level),
            });
        }

        let overall_risk_score = overall.value();
        let risk_level = RISK_TIERS.classify(overall_risk_score);
        let risk_factors: Vec<FactorScore> = factors
            .iter()
            .map(|(factor, accumulator)| FactorScore {
                factor: *factor,
                factor_label: factor.label(),
                score: accumulator.score(self.aggregation),
            })
            .collect();

        let mut ranked: Vec<&IndicatorAssessment> = assessments.iter().collect();
        ranked.sort_by(|a, b| b.risk_contribution.total_cmp(&a.risk_contribution));
        let top_risk_drivers = ranked
            .iter()
            .take(3)
            .filter(|assessment| assessment.risk_contribution >= DRIVER_THRESHOLD)
            .map(|assessment| format!("{}: {}", assessment.indicator_name, assessment.explanation))
            .collect();

        let retention_recommendations = recommendations(risk_level, &risk_factors);

        debug!(
            employee_id,
            overall_risk_score,
            level = risk_level.label(),
            indicators = assessments.len(),
            "retention risk assessed"
        );

        RetentionRiskAssessment {
            employee_id: employee_id.to_string(),
            employee_name: employee_name.to_string(),
            overall_risk_score,
            risk_level,
            risk_level_label: risk_level.label(),
            flight_probability: flight_probability(overall_risk_score),
            risk_factors,
            indicator_assessments: assessments,
            top_risk_drivers,
            retention_recommendations,
            urgency: risk_level.urgency(),
            estimated_time_to_departure: risk_level.time_to_departure(),
            metadata: metadata.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct FactorAccumulator {
    weighted_sum: f64,
    weight: f64,
    count: usize,
}

impl FactorAccumulator {
    fn add(&mut self, contribution: f64, weight: f64) {
        self.weighted_sum += contribution * weight;
        self.weight += weight;
        self.count += 1;
    }

    fn score(&self, aggregation: FactorAggregation) -> f64 {
        match aggregation {
            FactorAggregation::WeightedContribution if self.count > 0 => {
                self.weighted_sum / self.count as f64
            }
            FactorAggregation::WeightNormalized if self.weight > 0.0 => {
                self.weighted_sum / self.weight
            }
            _ => 0.0,
        }
    }
}

fn recommendations(level: RiskLevel, factors: &[FactorScore]) -> Vec<String> {
    let mut ranked: Vec<&FactorScore> = factors.iter().collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut recommendations: Vec<String> = level
        .stay_action()
        .into_iter()
        .map(str::to_string)
        .collect();

    for factor in ranked.into_iter().take(3) {
        if factor.score < FACTOR_ACTION_THRESHOLD {
            continue;
        }
        recommendations.extend(
            factor
                .factor
                .interventions(factor.score)
                .into_iter()
                .map(str::to_string),
        );
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
