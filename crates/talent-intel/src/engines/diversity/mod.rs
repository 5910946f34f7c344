//! Workforce representation against targets and pay-equity gap analysis.

mod report;


pub use report::{DemographicBreakdown, DiversityReport, DiversitySnapshot, GenderPay};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DiversityConfig;

/// A pay gap is significant once it exceeds this share of the reference group's pay.
pub const DEFAULT_SIGNIFICANCE_THRESHOLD: f64 = 0.03;
/// Target used for groups without a configured one.
pub const FALLBACK_TARGET: f64 = 30.0;
/// Share of the lower-paid group assumed to need an adjustment.
const AFFECTED_SHARE: f64 = 0.3;

const DEFAULT_TARGETS: [(&str, f64); 5] = [
    ("women", 50.0),
    ("underrepresented_minorities", 30.0),
    ("veterans", 5.0),
    ("disabilities", 7.0),
    ("lgbtq", 5.0),
];

const DEFAULT_LEADERSHIP_TARGETS: [(&str, f64); 2] =
    [("women_in_leadership", 40.0), ("minorities_in_leadership", 25.0)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepresentationStatus {
    ExceedsTarget,
    MeetsTarget,
    ApproachingTarget,
    BelowTarget,
    SignificantlyBelow,
}

impl RepresentationStatus {
    pub fn from_gap(gap: f64) -> Self {
        if gap >= 5.0 {
            Self::ExceedsTarget
        } else if gap >= 0.0 {
            Self::MeetsTarget
        } else if gap >= -5.0 {
            Self::ApproachingTarget
        } else if gap >= -15.0 {
            Self::BelowTarget
        } else {
            Self::SignificantlyBelow
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ExceedsTarget => "Exceeds Target",
            Self::MeetsTarget => "Meets Target",
            Self::ApproachingTarget => "Approaching Target",
            Self::BelowTarget => "Below Target",
            Self::SignificantlyBelow => "Significantly Below",
        }
    }

    /// Contribution of this status to the overall diversity score.
    pub const fn points(self) -> f64 {
        match self {
            Self::ExceedsTarget => 100.0,
            Self::MeetsTarget => 85.0,
            Self::ApproachingTarget => 70.0,
            Self::BelowTarget => 50.0,
            Self::SignificantlyBelow => 25.0,
        }
    }

    pub const fn is_on_target(self) -> bool {
        matches!(self, Self::ExceedsTarget | Self::MeetsTarget)
    }

    pub const fn is_under_represented(self) -> bool {
        matches!(self, Self::BelowTarget | Self::SignificantlyBelow)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
    Unknown,
}

impl Trend {
    fn from_change(change: Option<f64>) -> Self {
        match change {
            Some(change) if change > 1.0 => Self::Improving,
            Some(change) if change < -1.0 => Self::Declining,
            Some(_) => Self::Stable,
            None => Self::Unknown,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Improving => "Improving",
            Self::Stable => "Stable",
            Self::Declining => "Declining",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepresentationMetrics {
    pub group_name: String,
    pub current_percentage: f64,
    pub target_percentage: f64,
    pub gap: f64,
    pub status: RepresentationStatus,
    pub status_label: &'static str,
    pub trend: Trend,
    pub trend_label: &'static str,
    pub year_over_year_change: f64,
    pub recommendations: Vec<String>,
}

/// Average pay of a reference group (`group_a`) against a comparison group (`group_b`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayComparison {
    pub group_a: String,
    pub group_b: String,
    pub group_a_avg_pay: f64,
    pub group_b_avg_pay: f64,
    pub group_b_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayEquityAnalysis {
    pub group_comparison: String,
    pub avg_pay_gap: f64,
    pub gap_percentage: f64,
    pub statistical_significance: bool,
    pub affected_employees: u32,
    pub remediation_cost: f64,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DiversityAnalyzer {
    targets: BTreeMap<String, f64>,
    leadership_targets: Vec<(String, f64)>,
    significance_threshold: f64,
}

impl Default for DiversityAnalyzer {
    fn default() -> Self {
        Self {
            targets: DEFAULT_TARGETS
                .iter()
                .map(|(group, target)| (group.to_string(), *target))
                .collect(),
            leadership_targets: DEFAULT_LEADERSHIP_TARGETS
                .iter()
                .map(|(metric, target)| (metric.to_string(), *target))
                .collect(),
            significance_threshold: DEFAULT_SIGNIFICANCE_THRESHOLD,
        }
    }
}

impl DiversityAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &DiversityConfig) -> Self {
        Self::default().with_significance_threshold(config.significance_threshold)
    }

    /// Custom targets are merged over the defaults; group names are matched in snake_case.
    pub fn with_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        for (group, target) in targets {
            self.targets.insert(group_key(group.as_ref()), target);
        }
        self
    }

    pub fn with_significance_threshold(mut self, threshold: f64) -> Self {
        self.significance_threshold = threshold;
        self
    }

    pub fn target_for(&self, group_name: &str) -> f64 {
        self.targets
            .get(&group_key(group_name))
            .copied()
            .unwrap_or(FALLBACK_TARGET)
    }

    pub fn leadership_target(&self, metric: &str) -> f64 {
        self.leadership_targets
            .iter()
            .find(|(key, _)| key == metric)
            .map_or(FALLBACK_TARGET, |(_, target)| *target)
    }

    pub fn significance_threshold(&self) -> f64 {
        self.significance_threshold
    }

    pub fn analyze_representation(
        &self,
        group_name: &str,
        current_count: u32,
        total_count: u32,
        target_percentage: Option<f64>,
        previous_percentage: Option<f64>,
    ) -> RepresentationMetrics {
        let target = target_percentage.unwrap_or_else(|| self.target_for(group_name));

        if total_count == 0 {
            let status = RepresentationStatus::SignificantlyBelow;
            return RepresentationMetrics {
                group_name: group_name.to_string(),
                current_percentage: 0.0,
                target_percentage: target,
                gap: 0.0,
                status,
                status_label: status.label(),
                trend: Trend::Unknown,
                trend_label: Trend::Unknown.label(),
                year_over_year_change: 0.0,
                recommendations: vec!["Insufficient data for analysis".to_string()],
            };
        }

        let current = f64::from(current_count) / f64::from(total_count) * 100.0;
        let gap = current - target;
        let status = RepresentationStatus::from_gap(gap);
        let change = previous_percentage.map(|previous| current - previous);
        let trend = Trend::from_change(change);

        RepresentationMetrics {
            group_name: group_name.to_string(),
            current_percentage: current,
            target_percentage: target,
            gap,
            status,
            status_label: status.label(),
            trend,
            trend_label: trend.label(),
            year_over_year_change: change.unwrap_or(0.0),
            recommendations: representation_actions(group_name, status),
        }
    }

    pub fn analyze_pay_equity(&self, comparison: &PayComparison) -> PayEquityAnalysis {
        let group_comparison = format!("{} vs {}", comparison.group_b, comparison.group_a);

        if comparison.group_a_avg_pay == 0.0 {
            return PayEquityAnalysis {
                group_comparison,
                avg_pay_gap: 0.0,
                gap_percentage: 0.0,
                statistical_significance: false,
                affected_employees: 0,
                remediation_cost: 0.0,
                recommendations: vec!["Insufficient data".to_string()],
            };
        }

        let gap = comparison.group_a_avg_pay - comparison.group_b_avg_pay;
        let gap_percentage = gap / comparison.group_a_avg_pay * 100.0;
        let significant = (gap_percentage / 100.0).abs() > self.significance_threshold;
        let needs_remediation = significant && gap > 0.0;

        let (remediation_cost, affected_employees, recommendations) = if needs_remediation {
            (
                gap * f64::from(comparison.group_b_count),
                (f64::from(comparison.group_b_count) * AFFECTED_SHARE).floor() as u32,
                vec![
                    format!(
                        "Conduct detailed pay equity analysis for {}",
                        comparison.group_b
                    ),
                    "Review compensation policies and practices".to_string(),
                    "Consider pay adjustments for affected employees".to_string(),
                ],
            )
        } else {
            (
                0.0,
                0,
                vec!["Continue monitoring pay equity metrics".to_string()],
            )
        };

        debug!(
            comparison = %group_comparison,
            gap_percentage,
            significant,
            "pay equity analyzed"
        );

        PayEquityAnalysis {
            group_comparison,
            avg_pay_gap: gap,
            gap_percentage,
            statistical_significance: significant,
            affected_employees,
            remediation_cost,
            recommendations,
        }
    }
}

/// `"Underrepresented Minorities"` → `"underrepresented_minorities"`.
fn group_key(group_name: &str) -> String {
    group_name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

fn representation_actions(group: &str, status: RepresentationStatus) -> Vec<String> {
    if status.is_on_target() {
        return vec![
            format!("Maintain current {group} representation"),
            "Share best practices".to_string(),
        ];
    }

    let mut actions = Vec::new();
    if status == RepresentationStatus::SignificantlyBelow {
        actions.push(format!("Develop targeted {group} recruitment strategy"));
        actions.push(format!("Partner with {group}-focused organizations"));
    }
    actions.push(format!("Review hiring funnel for {group} candidates"));
    actions.push(format!("Establish {group} employee resource group"));
    actions.truncate(3);
    actions
}
