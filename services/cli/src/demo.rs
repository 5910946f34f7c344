use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, Local, NaiveDate};
use talent_intel::config::AppConfig;
use talent_intel::engines::benchmark::presets::hr_benchmarks;
use talent_intel::engines::diversity::{
    DemographicBreakdown, DiversityAnalyzer, DiversitySnapshot, GenderPay,
};
use talent_intel::engines::planning::{
    DepartmentProfile, PlanRequest, PlanningScenario, WorkforcePlanner,
};
use talent_intel::engines::retention::presets::standard_classifier;
use talent_intel::engines::succession::{
    CandidateProfile, CriticalRole, ReadinessLevel, RoleRequirement, SuccessionAnalyzer,
    SuccessorCandidate,
};
use talent_intel::engines::talent::presets::{performance_engine, potential_engine};
use talent_intel::engines::talent::TalentCategory;
use talent_intel::error::AppError;
use tracing::info;

fn metrics(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
    pairs
        .iter()
        .map(|(id, value)| (id.to_string(), *value))
        .collect()
}

fn counts(pairs: &[(&str, u32)]) -> BTreeMap<String, u32> {
    pairs
        .iter()
        .map(|(key, count)| (key.to_string(), *count))
        .collect()
}

fn performance_sample() -> HashMap<String, f64> {
    metrics(&[
        ("goal_achievement", 88.0),
        ("quality_of_work", 84.0),
        ("productivity", 91.0),
        ("collaboration", 90.0),
        ("communication", 78.0),
        ("initiative", 80.0),
        ("reliability", 95.0),
    ])
}

fn benchmark_sample() -> HashMap<String, f64> {
    metrics(&[
        ("turnover_rate", 18.0),
        ("voluntary_turnover", 9.0),
        ("time_to_fill", 52.0),
        ("cost_per_hire", 3900.0),
        ("offer_acceptance_rate", 88.0),
        ("engagement_score", 74.0),
        ("enps", 18.0),
        ("training_hours", 22.0),
        ("compa_ratio", 97.0),
        ("diversity_representation", 38.0),
    ])
}

pub(crate) fn run_demo(config: &AppConfig) -> Result<(), AppError> {
    info!("running engine demo over sample data");
    println!("Talent intelligence demo");

    demo_talent()?;
    demo_benchmark()?;
    demo_retention()?;
    demo_succession()?;
    demo_diversity(config);
    demo_planning(config);

    Ok(())
}

fn demo_talent() -> Result<(), AppError> {
    let performance = performance_engine()?.score(
        "emp-1001",
        "Avery Chen",
        &performance_sample(),
        None,
    );
    let potential = potential_engine()?.score(
        "emp-1001",
        "Avery Chen",
        &metrics(&[
            ("learning_agility", 88.0),
            ("leadership_capability", 76.0),
            ("strategic_thinking", 82.0),
            ("emotional_intelligence", 86.0),
        ]),
        None,
    );
    let category =
        TalentCategory::from_axes(performance.overall_score, potential.overall_score);

    println!("\nTalent scoring");
    println!(
        "- performance {:.1} ({}) | potential {:.1} ({})",
        performance.overall_score,
        performance.overall_rating_label,
        potential.overall_score,
        potential.overall_rating_label
    );
    println!("- 9-box placement: {}", category.label());
    for line in &performance.recommendations {
        println!("  * {line}");
    }
    Ok(())
}

fn demo_benchmark() -> Result<(), AppError> {
    let report = hr_benchmarks()?.analyze(
        "org-acme",
        &benchmark_sample(),
        None,
    );

    println!("\nKPI benchmark");
    println!(
        "- overall {:.1} ({}) | grade {}",
        report.overall_score,
        report.overall_rating_label,
        report.grade.label()
    );
    for category in &report.category_scores {
        println!(
            "  - {}: {:.1} across {} KPIs",
            category.category_label, category.score, category.kpi_count
        );
    }
    for line in &report.recommendations {
        println!("  * {line}");
    }
    Ok(())
}

fn demo_retention() -> Result<(), AppError> {
    let assessment = standard_classifier()?.assess(
        "emp-2040",
        "Jordan Patel",
        &metrics(&[
            ("compensation_gap", 72.0),
            ("time_since_raise", 65.0),
            ("promotion_timeline", 58.0),
            ("manager_rating", 30.0),
            ("engagement_score", 45.0),
            ("job_search_signals", 80.0),
        ]),
        None,
    );

    println!("\nRetention risk");
    println!(
        "- {} risk {:.1} | flight probability {:.1}% | {}",
        assessment.risk_level_label,
        assessment.overall_risk_score,
        assessment.flight_probability,
        assessment.urgency
    );
    for line in &assessment.retention_recommendations {
        println!("  * {line}");
    }
    Ok(())
}

fn demo_succession() -> Result<(), AppError> {
    let analyzer = SuccessionAnalyzer::new(vec![RoleRequirement::new(
        "vp-engineering",
        ["technical_leadership", "strategy", "people_management", "board_relations"],
    )])?;

    let candidate = CandidateProfile::new("emp-3100", "Sam Rivera", 6.0)
        .with_competency("technical_leadership", 88.0)
        .with_competency("strategy", 74.0)
        .with_competency("people_management", 81.0)
        .with_competency("public_speaking", 60.0);
    let readiness = analyzer.assess_readiness(&candidate, "vp-engineering", Some(8.0), None);

    println!("\nSuccession readiness");
    println!(
        "- {} for {}: {:.1} ({}, {})",
        readiness.employee_name,
        readiness.target_role,
        readiness.overall_readiness,
        readiness.readiness_level_label,
        readiness.estimated_ready_date
    );
    if !readiness.unscored_competencies.is_empty() {
        println!(
            "  - not yet assessed on: {}",
            readiness.unscored_competencies.join(", ")
        );
    }

    let roles = vec![
        CriticalRole::new("vp-engineering", "VP Engineering", "Engineering", 40.0)
            .with_incumbent("emp-0007", "Riley Morgan"),
        CriticalRole::new("cfo", "Chief Financial Officer", "Finance", 75.0),
        CriticalRole::new("head-sales", "Head of Sales", "Sales", 30.0),
    ];
    let successors = BTreeMap::from([
        (
            "vp-engineering".to_string(),
            vec![
                SuccessorCandidate::new("emp-3100", "Sam Rivera", readiness.readiness_level)
                    .in_role("Director of Platform", 30),
                SuccessorCandidate::new("emp-3120", "Kai Brooks", ReadinessLevel::ReadyNow),
            ],
        ),
        (
            "head-sales".to_string(),
            vec![SuccessorCandidate::new(
                "emp-4410",
                "Morgan Diaz",
                ReadinessLevel::Developing,
            )],
        ),
    ]);
    let plan = analyzer.create_succession_plan("sp-demo", "org-acme", roles, successors, None);

    println!(
        "- coverage {:.0}% | ready-now {:.0}% | bench: {}",
        plan.succession_coverage, plan.ready_now_coverage, plan.bench_strength_summary
    );
    for line in &plan.recommendations {
        println!("  * {line}");
    }
    Ok(())
}

fn demo_diversity(config: &AppConfig) {
    let snapshot = DiversitySnapshot {
        workforce: DemographicBreakdown {
            total_count: 240,
            gender: counts(&[("Female", 98), ("Male", 136), ("Non-binary", 6)]),
            ethnicity: counts(&[
                ("White", 150),
                ("Black", 30),
                ("Asian", 36),
                ("Hispanic", 24),
            ]),
            ..DemographicBreakdown::default()
        },
        leadership: Some(DemographicBreakdown {
            total_count: 24,
            gender: counts(&[("Female", 8), ("Male", 16)]),
            ethnicity: counts(&[("White", 19), ("Asian", 5)]),
            ..DemographicBreakdown::default()
        }),
        hiring: BTreeMap::from([("women_hired".to_string(), 46.0)]),
        pay: Some(GenderPay {
            men_avg_pay: 104_000.0,
            women_avg_pay: 97_500.0,
        }),
    };
    let report = DiversityAnalyzer::from_config(&config.diversity).create_diversity_report(
        "div-demo",
        "org-acme",
        &snapshot,
        None,
    );

    println!("\nDiversity & pay equity");
    println!("- overall diversity score {:.1}", report.overall_diversity_score);
    for metric in &report.representation_metrics {
        println!(
            "  - {}: {:.1}% vs target {:.0}% ({})",
            metric.group_name, metric.current_percentage, metric.target_percentage, metric.status_label
        );
    }
    for analysis in &report.pay_equity {
        println!(
            "  - {} gap {:.1}% | remediation ${:.0}",
            analysis.group_comparison, analysis.gap_percentage, analysis.remediation_cost
        );
    }
}

fn demo_planning(config: &AppConfig) {
    let today = Local::now().date_naive();
    let start = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);

    let request = PlanRequest::new("wp-demo", "org-acme", 240, 265)
        .with_scenario(PlanningScenario::Growth)
        .with_horizon(6)
        .with_growth_rate(0.5)
        .starting(start)
        .with_department(DepartmentProfile {
            department_id: "eng".to_string(),
            name: "Engineering".to_string(),
            current_headcount: 96,
            target_headcount: 118,
            avg_attrition_rate: 14.0,
            avg_time_to_fill: 52,
            avg_cost_per_hire: 6500.0,
            critical_roles: 6,
            contractors: 8,
            open_positions: 21,
        })
        .with_skill("Rust", 12, 5)
        .with_skill("Data Engineering", 8, 6);

    let planner = WorkforcePlanner::new(config.planning);
    let plan = planner.create_plan(&request, None);

    println!("\nWorkforce plan ({} scenario)", plan.scenario_label);
    for period in &plan.period_forecasts {
        println!(
            "  - {}: {} -> {} (target {}, {})",
            period.period,
            period.starting_headcount,
            period.ending_headcount,
            period.target_headcount,
            period.risk_level_label
        );
    }
    println!(
        "- hiring need {} | projected cost ${:.0}",
        plan.total_hiring_need, plan.total_cost_projection
    );
    println!("- {}", plan.risk_assessment);
    for line in &plan.recommendations {
        println!("  * {line}");
    }

    let impact = planner.attrition_impact(240, config.planning.default_attrition_rate, 12);
    println!(
        "- without backfill: {} departures in 12 months, replacement cost ${:.0}",
        impact.projected_departures, impact.replacement_cost
    );
}
