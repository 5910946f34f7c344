//! Building blocks shared by every engine: tier tables, partial-coverage
//! aggregation, definition validation and metric sources.

mod metrics;
mod tiers;
mod weighting;

pub use metrics::{Metadata, MetricSource};
pub use tiers::TierTable;
pub use weighting::{validate_definitions, DefinitionError, WeightedMean};

pub(crate) use metrics::present_value;

use serde::{Deserialize, Serialize};

/// Upper bound on recommendation lines in any report.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Whether larger raw values are favourable for an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    HigherIsBetter,
    LowerIsBetter,
}

impl Direction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::HigherIsBetter => "Higher is better",
            Self::LowerIsBetter => "Lower is better",
        }
    }

    /// Verb used in improvement advice for this direction.
    pub const fn improvement_verb(self) -> &'static str {
        match self {
            Self::HigherIsBetter => "increase",
            Self::LowerIsBetter => "reduce",
        }
    }
}
