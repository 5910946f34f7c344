//! KPI benchmarking against external industry standards.
//!
//! Each KPI is scored relative to its benchmark with asymmetric bonus/penalty rules,
//! rolled up per category (KPI-weighted) and then across categories (category-weighted).

mod kpi;
pub mod presets;

#[cfg(test)]
mod tests;

pub use kpi::{KpiCategory, KpiDefinition, KpiRating, KpiScore, MAX_KPI_SCORE, RATING_TIERS};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scoring::{
    present_value, validate_definitions, DefinitionError, Metadata, MetricSource, TierTable,
    WeightedMean, MAX_RECOMMENDATIONS,
};

const ENGINE: &str = "benchmark";
const DEFAULT_CATEGORY_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

pub const GRADE_TIERS: TierTable<Grade> = TierTable::new(
    &[
        (90.0, Grade::A),
        (80.0, Grade::B),
        (70.0, Grade::C),
        (60.0, Grade::D),
        (0.0, Grade::F),
    ],
    Grade::F,
);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: KpiCategory,
    pub category_label: &'static str,
    pub score: f64,
    pub kpi_count: usize,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    pub entity_id: String,
    pub overall_score: f64,
    pub overall_rating: KpiRating,
    pub overall_rating_label: &'static str,
    pub grade: Grade,
    pub category_scores: Vec<CategoryScore>,
    pub kpi_scores: Vec<KpiScore>,
    pub top_strengths: Vec<String>,
    pub top_improvements: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

#[derive(Debug, Clone)]
pub struct BenchmarkEngine {
    kpis: Vec<KpiDefinition>,
    category_weights: BTreeMap<KpiCategory, f64>,
}

impl BenchmarkEngine {
    pub fn new(kpis: Vec<KpiDefinition>) -> Result<Self, DefinitionError> {
        Self::with_category_weights(kpis, std::iter::empty())
    }

    /// Categories without an explicit weight count with weight 1.0 in the overall score.
    pub fn with_category_weights<I>(
        kpis: Vec<KpiDefinition>,
        category_weights: I,
    ) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = (KpiCategory, f64)>,
    {
        validate_definitions(ENGINE, kpis.iter().map(|kpi| (kpi.id.as_str(), kpi.weight)))?;

        let category_weights: BTreeMap<KpiCategory, f64> = category_weights.into_iter().collect();
        validate_definitions(
            ENGINE,
            category_weights
                .iter()
                .map(|(category, weight)| (category.label(), *weight)),
        )?;

        debug!(
            kpis = kpis.len(),
            weighted_categories = category_weights.len(),
            "benchmark engine ready"
        );

        Ok(Self {
            kpis,
            category_weights,
        })
    }

    pub fn kpis(&self) -> &[KpiDefinition] {
        &self.kpis
    }

    pub fn category_weight(&self, category: KpiCategory) -> f64 {
        self.category_weights
            .get(&category)
            .copied()
            .unwrap_or(DEFAULT_CATEGORY_WEIGHT)
    }

    pub fn analyze<M: MetricSource + ?Sized>(
        &self,
        entity_id: &str,
        actual_values: &M,
        metadata: Option<Metadata>,
    ) -> BenchmarkReport {
        let kpi_scores: Vec<KpiScore> = self
            .kpis
            .iter()
            .filter_map(|kpi| present_value(actual_values, ENGINE, &kpi.id).map(|v| kpi.score(v)))
            .collect();

        let category_scores = rollup_categories(&kpi_scores);

        let overall_score = category_scores
            .iter()
            .map(|category| (category.score, self.category_weight(category.category)))
            .collect::<WeightedMean>()
            .value();
        let overall_rating = RATING_TIERS.classify(overall_score);
        let grade = GRADE_TIERS.classify(overall_score);

        let mut ranked: Vec<&KpiScore> = kpi_scores.iter().collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        let top_strengths = ranked
            .iter()
            .take(3)
            .filter(|kpi| kpi.rating.is_strength())
            .map(|kpi| {
                format!(
                    "{}: {}{} ({})",
                    kpi.kpi_name,
                    kpi.actual_value,
                    kpi.unit,
                    kpi.rating.label()
                )
            })
            .collect();
        let top_improvements = ranked
            .iter()
            .skip(ranked.len().saturating_sub(3))
            .filter(|kpi| kpi.rating.needs_action())
            .map(|kpi| {
                format!(
                    "{}: {}{} vs benchmark {}{}",
                    kpi.kpi_name, kpi.actual_value, kpi.unit, kpi.benchmark_value, kpi.unit
                )
            })
            .collect();

        let recommendations = kpi_scores
            .iter()
            .filter(|kpi| kpi.rating.needs_action())
            .map(|kpi| kpi.recommendation.clone())
            .take(MAX_RECOMMENDATIONS)
            .collect();

        debug!(
            entity_id,
            overall_score,
            grade = grade.label(),
            kpis = kpi_scores.len(),
            "benchmark analysis complete"
        );

        BenchmarkReport {
            entity_id: entity_id.to_string(),
            overall_score,
            overall_rating,
            overall_rating_label: overall_rating.label(),
            grade,
            category_scores,
            kpi_scores,
            top_strengths,
            top_improvements,
            recommendations,
            metadata: metadata.unwrap_or_default(),
        }
    }
}

/// Groups KPI scores by category in order of first appearance.
fn rollup_categories(kpi_scores: &[KpiScore]) -> Vec<CategoryScore> {
    let mut order: Vec<KpiCategory> = Vec::new();
    for kpi in kpi_scores {
        if !order.contains(&kpi.category) {
            order.push(kpi.category);
        }
    }

    order
        .into_iter()
        .map(|category| {
            let members: Vec<&KpiScore> = kpi_scores
                .iter()
                .filter(|kpi| kpi.category == category)
                .collect();
            let score = members
                .iter()
                .map(|kpi| (kpi.score, kpi.weight))
                .collect::<WeightedMean>()
                .value();

            CategoryScore {
                category,
                category_label: category.label(),
                score,
                kpi_count: members.len(),
                strengths: members
                    .iter()
                    .filter(|kpi| kpi.rating.is_strength())
                    .map(|kpi| kpi.kpi_name.clone())
                    .collect(),
                improvements: members
                    .iter()
                    .filter(|kpi| kpi.rating.needs_action())
                    .map(|kpi| kpi.kpi_name.clone())
                    .collect(),
            }
        })
        .collect()
}
