use std::collections::BTreeMap;

use proptest::prelude::*;

use super::presets::{hr_benchmarks, recruitment_benchmarks};
use super::*;
use crate::engines::scoring::Direction;

fn values(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs
        .iter()
        .map(|(id, value)| (id.to_string(), *value))
        .collect()
}

fn turnover() -> KpiDefinition {
    KpiDefinition::new("turnover_rate", "Annual Turnover Rate", 15.0)
        .lower_is_better()
        .in_category(KpiCategory::Retention)
        .with_unit("%")
}

#[test]
fn beating_a_lower_is_better_benchmark_earns_bonus() {
    let score = turnover().score(10.0);

    assert_eq!(score.gap, -5.0);
    assert!((score.gap_percent + 33.333_333).abs() < 1e-4);
    assert!((score.score - 106.666_666).abs() < 1e-4);
    assert_eq!(score.rating, KpiRating::Excellent);
    assert_eq!(
        score.recommendation,
        "Maintain strong performance in Annual Turnover Rate"
    );
}

#[test]
fn missing_a_lower_is_better_benchmark_is_penalised() {
    let score = turnover().score(19.5);
    // 100 - (1.3 - 1) * 100
    assert!((score.score - 70.0).abs() < 1e-9);
    assert_eq!(score.rating, KpiRating::Fair);
    assert_eq!(
        score.recommendation,
        "Minor improvement needed: reduce Annual Turnover Rate by 4.5%"
    );

    let zero = turnover().score(0.0);
    assert_eq!(zero.score, MAX_KPI_SCORE);

    let far_off = turnover().score(40.0);
    assert_eq!(far_off.score, 0.0);
    assert_eq!(
        far_off.recommendation,
        "CRITICAL: Immediate intervention required for Annual Turnover Rate"
    );
}

#[test]
fn higher_is_better_scores_proportionally_below_benchmark() {
    let kpi = KpiDefinition::new("training_hours", "Training Hours", 40.0).with_unit("hrs");

    let below = kpi.score(20.0);
    assert_eq!(below.score, 50.0);
    assert_eq!(below.rating, KpiRating::Poor);
    assert_eq!(
        below.recommendation,
        "Priority action: increase Training Hours significantly"
    );

    let capped = kpi.score(400.0);
    assert_eq!(capped.score, MAX_KPI_SCORE);
}

#[test]
fn zero_benchmark_is_pass_fail() {
    let kpi = KpiDefinition::new("incidents", "Incidents", 0.0);
    let pass = kpi.score(3.0);
    assert_eq!(pass.score, 100.0);
    assert_eq!(pass.gap_percent, 100.0);

    let fail = kpi.score(-1.0);
    assert_eq!(fail.score, 0.0);
    assert_eq!(fail.gap_percent, 0.0);
}

#[test]
fn categories_roll_up_in_first_appearance_order() {
    let engine = hr_benchmarks().expect("preset is valid");
    let report = engine.analyze(
        "org-1",
        &values(&[
            ("time_to_fill", 45.0),
            ("turnover_rate", 10.0),
            ("voluntary_turnover", 10.0),
            ("engagement_score", 60.0),
        ]),
        None,
    );

    let order: Vec<KpiCategory> = report
        .category_scores
        .iter()
        .map(|category| category.category)
        .collect();
    assert_eq!(
        order,
        vec![
            KpiCategory::Retention,
            KpiCategory::Recruitment,
            KpiCategory::Engagement
        ]
    );

    let retention = &report.category_scores[0];
    assert_eq!(retention.kpi_count, 2);
    // (106.667 + 100) / 2
    assert!((retention.score - 103.333_333).abs() < 1e-4);
    assert_eq!(
        retention.strengths,
        vec!["Annual Turnover Rate", "Voluntary Turnover Rate"]
    );

    // KPI scores keep registration order, not input order.
    assert_eq!(report.kpi_scores[0].kpi_id, "turnover_rate");
    assert_eq!(report.kpi_scores[2].kpi_id, "time_to_fill");

    // (103.333 * 1.2 + 100 * 1.0 + 80 * 1.2) / 3.4
    let expected = (103.333_333_333 * 1.2 + 100.0 + 80.0 * 1.2) / 3.4;
    assert!((report.overall_score - expected).abs() < 1e-6);
    assert_eq!(report.grade, Grade::A);
}

#[test]
fn strengths_improvements_and_recommendations() {
    let engine = recruitment_benchmarks().expect("preset is valid");
    let report = engine.analyze(
        "org-2",
        &values(&[
            ("time_to_fill", 30.0),
            ("cost_per_hire", 9000.0),
            ("offer_acceptance", 30.0),
            ("quality_of_hire", 85.0),
        ]),
        None,
    );

    assert_eq!(
        report.top_strengths,
        vec![
            "Time to Fill: 30days (Excellent)",
            "Quality of Hire Score: 85% (Excellent)"
        ]
    );
    assert_eq!(
        report.top_improvements,
        vec![
            "Offer Acceptance Rate: 30% vs benchmark 85%",
            "Cost per Hire: 9000$ vs benchmark 4000$"
        ]
    );
    assert_eq!(
        report.recommendations,
        vec![
            "CRITICAL: Immediate intervention required for Cost per Hire",
            "CRITICAL: Immediate intervention required for Offer Acceptance Rate"
        ]
    );
}

#[test]
fn empty_input_yields_failing_grade_without_panicking() {
    let engine = hr_benchmarks().expect("preset is valid");
    let report = engine.analyze("org-3", &values(&[]), None);
    assert_eq!(report.overall_score, 0.0);
    assert_eq!(report.grade, Grade::F);
    assert!(report.category_scores.is_empty());
    assert!(report.recommendations.is_empty());
}

#[test]
fn recommendations_are_capped() {
    let kpis = (0..8)
        .map(|i| KpiDefinition::new(format!("kpi_{i}"), format!("KPI {i}"), 100.0))
        .collect();
    let engine = BenchmarkEngine::new(kpis).expect("valid kpis");
    let input: BTreeMap<String, f64> = (0..8).map(|i| (format!("kpi_{i}"), 10.0)).collect();

    let report = engine.analyze("org-4", &input, None);
    assert_eq!(report.recommendations.len(), 5);
}

#[test]
fn invalid_category_weight_is_rejected() {
    let err = BenchmarkEngine::with_category_weights(
        vec![turnover()],
        [(KpiCategory::Retention, -1.0)],
    )
    .expect_err("negative weight rejected");
    assert!(matches!(err, DefinitionError::InvalidWeight { .. }));
}

#[test]
fn direction_serializes_in_snake_case() {
    let score = turnover().score(12.0);
    let json = serde_json::to_value(&score).expect("serializes");
    assert_eq!(json["direction"], "lower_is_better");
    assert_eq!(json["category"], "retention");
    assert_eq!(score.direction, Direction::LowerIsBetter);
}

#[test]
fn negative_benchmarks_stay_on_the_score_scale() {
    let margin = KpiDefinition::new("net_margin", "Net Margin", -10.0);
    assert_eq!(margin.score(100.0).score, 0.0);
    assert_eq!(margin.score(-10.0).score, 100.0);

    let losses = KpiDefinition::new("operating_loss", "Operating Loss", -10.0).lower_is_better();
    for actual in [-1_000.0, -20.0, -10.0, 0.0, 50.0] {
        let score = losses.score(actual).score;
        assert!((0.0..=MAX_KPI_SCORE).contains(&score), "{actual} scored {score}");
    }
}

proptest! {
    #[test]
    fn kpi_scores_stay_within_bounds(
        actual in -5_000.0f64..5_000.0,
        benchmark in -1_000.0f64..1_000.0,
        lower in any::<bool>(),
    ) {
        let mut kpi = KpiDefinition::new("x", "X", benchmark);
        if lower {
            kpi = kpi.lower_is_better();
        }
        let score = kpi.benchmark_score(actual);
        prop_assert!((0.0..=MAX_KPI_SCORE).contains(&score));
    }

    #[test]
    fn kpi_scores_are_monotonic(a in 0.0f64..500.0, b in 0.0f64..500.0, benchmark in 1.0f64..200.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let higher = KpiDefinition::new("x", "X", benchmark);
        prop_assert!(higher.benchmark_score(lo) <= higher.benchmark_score(hi));

        let lower = higher.clone().lower_is_better();
        prop_assert!(lower.benchmark_score(lo) >= lower.benchmark_score(hi));
    }
}
