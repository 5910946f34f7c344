use serde::{Deserialize, Serialize};

use crate::engines::scoring::{Direction, TierTable};

/// Upper bound for a KPI score: beating the benchmark earns at most 20 bonus points.
pub const MAX_KPI_SCORE: f64 = 120.0;
const MAX_BONUS: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KpiCategory {
    Retention,
    Recruitment,
    Engagement,
    Performance,
    Compensation,
    Development,
    Diversity,
    Productivity,
    Custom,
}

impl KpiCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Retention => "Retention",
            Self::Recruitment => "Recruitment",
            Self::Engagement => "Engagement",
            Self::Performance => "Performance",
            Self::Compensation => "Compensation",
            Self::Development => "Development",
            Self::Diversity => "Diversity",
            Self::Productivity => "Productivity",
            Self::Custom => "Custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KpiRating {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl KpiRating {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Critical => "Critical",
        }
    }

    pub const fn is_strength(self) -> bool {
        matches!(self, Self::Excellent | Self::Good)
    }

    pub const fn needs_action(self) -> bool {
        matches!(self, Self::Poor | Self::Critical)
    }
}

pub const RATING_TIERS: TierTable<KpiRating> = TierTable::new(
    &[
        (90.0, KpiRating::Excellent),
        (75.0, KpiRating::Good),
        (60.0, KpiRating::Fair),
        (40.0, KpiRating::Poor),
        (0.0, KpiRating::Critical),
    ],
    KpiRating::Critical,
);

/// A benchmarked organisational metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiDefinition {
    pub id: String,
    pub name: String,
    pub benchmark_value: f64,
    pub direction: Direction,
    pub category: KpiCategory,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub description: String,
    pub weight: f64,
}

impl KpiDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, benchmark_value: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            benchmark_value,
            direction: Direction::HigherIsBetter,
            category: KpiCategory::Custom,
            unit: String::new(),
            description: String::new(),
            weight: 1.0,
        }
    }

    pub fn lower_is_better(mut self) -> Self {
        self.direction = Direction::LowerIsBetter;
        self
    }

    pub fn in_category(mut self, category: KpiCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Benchmark-relative score in `[0, 120]`, negative benchmarks included.
    pub fn benchmark_score(&self, actual: f64) -> f64 {
        let benchmark = self.benchmark_value;
        if benchmark == 0.0 {
            return if actual >= 0.0 { 100.0 } else { 0.0 };
        }

        let raw = match self.direction {
            Direction::HigherIsBetter => {
                if actual >= benchmark {
                    100.0 + ((actual - benchmark) / benchmark * MAX_BONUS).min(MAX_BONUS)
                } else {
                    actual / benchmark * 100.0
                }
            }
            Direction::LowerIsBetter => {
                if actual == 0.0 && benchmark > 0.0 {
                    return MAX_KPI_SCORE;
                }
                if actual <= benchmark {
                    100.0 + ((benchmark - actual) / benchmark * MAX_BONUS).min(MAX_BONUS)
                } else {
                    100.0 - (actual / benchmark - 1.0) * 100.0
                }
            }
        };

        raw.clamp(0.0, MAX_KPI_SCORE)
    }

    pub fn score(&self, actual: f64) -> KpiScore {
        let benchmark = self.benchmark_value;
        let gap = actual - benchmark;
        let gap_percent = if benchmark != 0.0 {
            gap / benchmark.abs() * 100.0
        } else if actual > 0.0 {
            100.0
        } else {
            0.0
        };

        let score = self.benchmark_score(actual);
        let rating = RATING_TIERS.classify(score);

        KpiScore {
            kpi_id: self.id.clone(),
            kpi_name: self.name.clone(),
            category: self.category,
            actual_value: actual,
            benchmark_value: benchmark,
            score,
            gap,
            gap_percent,
            direction: self.direction,
            rating,
            rating_label: rating.label(),
            unit: self.unit.clone(),
            weight: self.weight,
            recommendation: self.recommendation(gap.abs(), rating),
        }
    }

    fn recommendation(&self, abs_gap: f64, rating: KpiRating) -> String {
        let verb = self.direction.improvement_verb();
        match rating {
            KpiRating::Excellent | KpiRating::Good => {
                format!("Maintain strong performance in {}", self.name)
            }
            KpiRating::Fair => format!(
                "Minor improvement needed: {verb} {} by {abs_gap:.1}{}",
                self.name, self.unit
            ),
            KpiRating::Poor => format!("Priority action: {verb} {} significantly", self.name),
            KpiRating::Critical => {
                format!("CRITICAL: Immediate intervention required for {}", self.name)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiScore {
    pub kpi_id: String,
    pub kpi_name: String,
    pub category: KpiCategory,
    pub actual_value: f64,
    pub benchmark_value: f64,
    pub score: f64,
    pub gap: f64,
    pub gap_percent: f64,
    pub direction: Direction,
    pub rating: KpiRating,
    pub rating_label: &'static str,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unit: String,
    pub weight: f64,
    pub recommendation: String,
}
