use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{DiversityAnalyzer, PayComparison, PayEquityAnalysis, RepresentationMetrics};
use crate::engines::scoring::{Metadata, MAX_RECOMMENDATIONS};

const WOMEN_LABELS: [&str; 2] = ["Female", "Woman"];
const MAJORITY_ETHNICITIES: [&str; 2] = ["white", "caucasian"];
const REPRESENTATION_SHARE: f64 = 0.7;
const LEADERSHIP_SHARE: f64 = 0.3;
/// Leadership figures under this fraction of target get a pipeline recommendation.
const PIPELINE_THRESHOLD: f64 = 0.7;
/// Pay gaps (in percent) above this are called out in the report recommendations.
const PAY_GAP_CALLOUT: f64 = 3.0;

/// Headcount split by demographic dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemographicBreakdown {
    pub total_count: u32,
    #[serde(default)]
    pub gender: BTreeMap<String, u32>,
    #[serde(default)]
    pub ethnicity: BTreeMap<String, u32>,
    #[serde(default)]
    pub age_groups: BTreeMap<String, u32>,
    #[serde(default)]
    pub tenure_groups: BTreeMap<String, u32>,
}

impl DemographicBreakdown {
    pub fn women(&self) -> u32 {
        WOMEN_LABELS
            .iter()
            .filter_map(|label| self.gender.get(*label))
            .sum()
    }

    pub fn minorities(&self) -> u32 {
        self.ethnicity
            .iter()
            .filter(|(ethnicity, _)| {
                !MAJORITY_ETHNICITIES.contains(&ethnicity.to_lowercase().as_str())
            })
            .map(|(_, count)| *count)
            .sum()
    }

    fn share(&self, count: u32) -> f64 {
        if self.total_count == 0 {
            0.0
        } else {
            f64::from(count) / f64::from(self.total_count) * 100.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenderPay {
    pub men_avg_pay: f64,
    pub women_avg_pay: f64,
}

/// Everything a diversity report is built from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiversitySnapshot {
    pub workforce: DemographicBreakdown,
    #[serde(default)]
    pub leadership: Option<DemographicBreakdown>,
    #[serde(default)]
    pub hiring: BTreeMap<String, f64>,
    #[serde(default)]
    pub pay: Option<GenderPay>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiversityReport {
    pub report_id: String,
    pub organization_id: String,
    pub overall_diversity_score: f64,
    pub representation_metrics: Vec<RepresentationMetrics>,
    pub leadership_diversity: BTreeMap<String, f64>,
    pub pay_equity: Vec<PayEquityAnalysis>,
    pub hiring_diversity: BTreeMap<String, f64>,
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl DiversityAnalyzer {
    pub fn create_diversity_report(
        &self,
        report_id: &str,
        organization_id: &str,
        snapshot: &DiversitySnapshot,
        metadata: Option<Metadata>,
    ) -> DiversityReport {
        let workforce = &snapshot.workforce;
        let representation_metrics = vec![
            self.analyze_representation(
                "Women",
                workforce.women(),
                workforce.total_count,
                None,
                None,
            ),
            self.analyze_representation(
                "Underrepresented Minorities",
                workforce.minorities(),
                workforce.total_count,
                None,
                None,
            ),
        ];

        let mut leadership_diversity = BTreeMap::new();
        if let Some(leaders) = &snapshot.leadership {
            leadership_diversity.insert(
                "women_in_leadership".to_string(),
                leaders.share(leaders.women()),
            );
            leadership_diversity.insert(
                "minorities_in_leadership".to_string(),
                leaders.share(leaders.minorities()),
            );
        }

        let pay_equity: Vec<PayEquityAnalysis> = snapshot
            .pay
            .filter(|pay| pay.men_avg_pay > 0.0 && pay.women_avg_pay > 0.0)
            .map(|pay| {
                self.analyze_pay_equity(&PayComparison {
                    group_a: "Men".to_string(),
                    group_b: "Women".to_string(),
                    group_a_avg_pay: pay.men_avg_pay,
                    group_b_avg_pay: pay.women_avg_pay,
                    group_b_count: workforce.women(),
                })
            })
            .into_iter()
            .collect();

        let overall_diversity_score =
            self.diversity_score(&representation_metrics, &leadership_diversity);

        let strengths = representation_metrics
            .iter()
            .filter(|metric| metric.status.is_on_target())
            .map(|metric| metric.group_name.clone())
            .collect();
        let improvement_areas = representation_metrics
            .iter()
            .filter(|metric| metric.status.is_under_represented())
            .map(|metric| metric.group_name.clone())
            .collect();

        let recommendations =
            self.report_recommendations(&representation_metrics, &leadership_diversity, &pay_equity);

        debug!(
            report_id,
            overall_diversity_score,
            workforce = workforce.total_count,
            "diversity report created"
        );

        DiversityReport {
            report_id: report_id.to_string(),
            organization_id: organization_id.to_string(),
            overall_diversity_score,
            representation_metrics,
            leadership_diversity,
            pay_equity,
            hiring_diversity: snapshot.hiring.clone(),
            strengths,
            improvement_areas,
            recommendations,
            metadata: metadata.unwrap_or_default(),
        }
    }

    fn diversity_score(
        &self,
        metrics: &[RepresentationMetrics],
        leadership: &BTreeMap<String, f64>,
    ) -> f64 {
        if metrics.is_empty() {
            return 0.0;
        }
        let representation = metrics
            .iter()
            .map(|metric| metric.status.points())
            .sum::<f64>()
            / metrics.len() as f64;

        if leadership.is_empty() {
            return representation;
        }

        let leadership_score = leadership
            .iter()
            .map(|(metric, actual)| (actual / self.leadership_target(metric) * 100.0).min(100.0))
            .sum::<f64>()
            / leadership.len() as f64;

        representation * REPRESENTATION_SHARE + leadership_score * LEADERSHIP_SHARE
    }

    fn report_recommendations(
        &self,
        metrics: &[RepresentationMetrics],
        leadership: &BTreeMap<String, f64>,
        pay_equity: &[PayEquityAnalysis],
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        let low: Vec<&str> = metrics
            .iter()
            .filter(|metric| metric.status.is_under_represented())
            .take(2)
            .map(|metric| metric.group_name.as_str())
            .collect();
        if !low.is_empty() {
            recommendations.push(format!(
                "Focus on improving representation: {}",
                low.join(", ")
            ));
        }

        for (metric, target) in &self.leadership_targets {
            let actual = leadership.get(metric).copied().unwrap_or(0.0);
            if actual < target * PIPELINE_THRESHOLD {
                recommendations.push(format!("Develop pipeline for {}", metric.replace('_', " ")));
            }
        }

        if pay_equity
            .iter()
            .any(|pay| pay.statistical_significance && pay.gap_percentage > PAY_GAP_CALLOUT)
        {
            recommendations.push("Address pay equity gaps identified in analysis".to_string());
        }

        recommendations.push("Implement inclusive hiring practices".to_string());
        recommendations.push("Conduct regular diversity training".to_string());
        recommendations.truncate(MAX_RECOMMENDATIONS);
        recommendations
    }
}
