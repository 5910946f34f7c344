use chrono::NaiveDate;
use proptest::prelude::*;

use super::*;

fn planner_with_attrition(rate: f64) -> WorkforcePlanner {
    WorkforcePlanner::new(PlannerConfig {
        default_attrition_rate: rate,
        ..PlannerConfig::default()
    })
}

fn department(id: &str, name: &str, current: u32, target: u32) -> DepartmentProfile {
    DepartmentProfile {
        department_id: id.to_string(),
        name: name.to_string(),
        current_headcount: current,
        target_headcount: target,
        avg_attrition_rate: 12.0,
        avg_time_to_fill: 45,
        avg_cost_per_hire: 4000.0,
        critical_roles: 0,
        contractors: 0,
        open_positions: 0,
    }
}

#[test]
fn single_period_forecast_closes_part_of_the_gap() {
    let request = PlanRequest::new("plan-d", "org-1", 100, 110).with_horizon(1);
    let plan = planner_with_attrition(12.0).create_plan(&request, None);

    let period = &plan.period_forecasts[0];
    assert_eq!(period.period, "Month 1");
    assert_eq!(period.projected_attrition, 1);
    assert_eq!(period.target_headcount, 110);
    assert_eq!(period.hiring_need, 11);
    assert_eq!(period.projected_hires, 7);
    assert_eq!(period.ending_headcount, 106);
    assert_eq!(period.gap, -4);
    assert!((period.gap_percentage - (-4.0 / 110.0 * 100.0)).abs() < 1e-9);
    assert_eq!(period.risk_level, GapSeverity::Low);
    assert_eq!(period.cost_projection, 28_000.0);

    assert_eq!(plan.total_hiring_need, 11);
    assert_eq!(plan.risk_level, WorkforceRisk::Low);
    assert_eq!(plan.risk_assessment, "Low - Workforce planning on track");
    assert_eq!(
        plan.recommendations,
        vec!["Plan to hire 11 employees over planning horizon"]
    );
}

#[test]
fn attrition_is_at_least_one_and_never_exceeds_headcount() {
    let request = PlanRequest::new("p", "o", 1, 0).with_horizon(2);
    let plan = WorkforcePlanner::default().create_plan(&request, None);

    assert_eq!(plan.period_forecasts[0].projected_attrition, 1);
    assert_eq!(plan.period_forecasts[0].ending_headcount, 0);
    assert_eq!(plan.period_forecasts[1].projected_attrition, 0);
    assert_eq!(plan.period_forecasts[1].gap_percentage, 0.0);
    assert_eq!(plan.period_forecasts[1].risk_level, GapSeverity::None);
}

#[test]
fn scenarios_scale_growth_and_attrition() {
    assert_eq!(PlanningScenario::Growth.growth_modifier(), 1.2);
    assert_eq!(PlanningScenario::Recession.attrition_modifier(), 1.3);
    assert_eq!(PlanningScenario::Aggressive.attrition_modifier(), 0.85);

    // 10% monthly growth halved by the recession modifier
    let request = PlanRequest::new("p", "o", 100, 100)
        .with_horizon(1)
        .with_growth_rate(10.0)
        .with_scenario(PlanningScenario::Recession);
    let plan = planner_with_attrition(12.0).create_plan(&request, None);

    assert_eq!(plan.scenario_label, "Recession");
    assert_eq!(plan.period_forecasts[0].target_headcount, 105);
    assert!(plan
        .recommendations
        .contains(&"Focus on retaining key talent during uncertainty".to_string()));

    let growth = planner_with_attrition(12.0).create_plan(
        &PlanRequest::new("p", "o", 100, 100).with_scenario(PlanningScenario::Growth),
        None,
    );
    assert!(growth
        .recommendations
        .contains(&"Build recruiting capacity for growth phase".to_string()));
}

#[test]
fn scenario_names_parse_case_insensitively() {
    assert_eq!("growth".parse::<PlanningScenario>(), Ok(PlanningScenario::Growth));
    assert_eq!(
        " Recession ".parse::<PlanningScenario>(),
        Ok(PlanningScenario::Recession)
    );
    assert_eq!("boom".parse::<PlanningScenario>(), Err(UnknownScenario));
}

#[test]
fn skill_gaps_are_ordered_by_severity() {
    let mut request = PlanRequest::new("p", "o", 100, 100)
        .with_skill("Cloud", 10, 6)
        .with_skill("Go", 10, 8)
        .with_skill("Rust", 10, 4)
        .with_skill("SQL", 5, 6);
    request.skill_requirements.insert("ML".to_string(), 10);

    let plan = planner_with_attrition(12.0).create_plan(&request, None);

    let names: Vec<&str> = plan
        .skill_gaps
        .iter()
        .map(|gap| gap.skill_name.as_str())
        .collect();
    assert_eq!(names, vec!["ML", "Rust", "Cloud", "Go"]);

    let ml = &plan.skill_gaps[0];
    assert_eq!(ml.current_capacity, 0);
    assert_eq!(ml.gap, 10);
    assert_eq!(ml.gap_severity_label, "Critical");
    assert_eq!(ml.impact_areas, vec!["Projects requiring ML"]);
    assert_eq!(
        ml.recommendations,
        vec![
            "Prioritize hiring for ML (10 positions)",
            "Consider contractors or consultants for immediate ML needs",
            "Develop internal training program for ML",
        ]
    );

    let go = &plan.skill_gaps[3];
    assert_eq!(go.gap_severity, GapSeverity::Medium);
    assert_eq!(go.recommendations, vec!["Develop internal training program for Go"]);

    assert_eq!(plan.risk_level, WorkforceRisk::Medium);
    assert_eq!(plan.risk_assessment, "Medium - Monitor: 2 critical skill gaps");
    assert_eq!(
        plan.recommendations,
        vec![
            "Plan to hire 12 employees over planning horizon",
            "Address critical skill gaps: ML, Rust",
        ]
    );
}

#[test]
fn compounding_risks_escalate_the_plan() {
    let mut sales = department("sales", "Sales", 50, 100);
    sales.avg_attrition_rate = 24.0;
    sales.avg_cost_per_hire = 5000.0;
    sales.open_positions = 15;

    let request = PlanRequest::new("p", "o", 50, 100)
        .with_horizon(1)
        .with_department(sales)
        .with_department(department("ops", "Operations", 80, 100))
        .with_skill("Rust", 10, 2);

    let plan = planner_with_attrition(12.0).create_plan(&request, None);

    assert_eq!(plan.period_forecasts[0].ending_headcount, 84);
    assert_eq!(plan.period_forecasts[0].risk_level, GapSeverity::Critical);
    assert_eq!(plan.risk_level, WorkforceRisk::Critical);
    assert_eq!(
        plan.risk_assessment,
        "Critical - Multiple workforce risks: 1 critical staffing gaps; \
         1 critical skill gaps; 2 understaffed departments"
    );
    assert_eq!(
        plan.recommendations,
        vec![
            "Plan to hire 51 employees over planning horizon",
            "Address critical skill gaps: Rust",
            "Accelerate hiring in Sales",
            "Budget $140,000 for recruiting costs",
        ]
    );

    let sales_plan = &plan.department_plans["sales"];
    assert_eq!(sales_plan[0].projected_hires, 35);
    assert_eq!(sales_plan[0].cost_projection, 175_000.0);
    assert_eq!(plan.department_plans["ops"].len(), 1);
}

#[test]
fn duplicate_department_ids_keep_the_later_profile() {
    let request = PlanRequest::new("p", "o", 100, 100)
        .with_horizon(1)
        .with_department(department("eng", "Engineering", 40, 40))
        .with_department(department("eng", "Engineering", 90, 90));

    let plan = WorkforcePlanner::default().create_plan(&request, None);

    assert_eq!(plan.department_plans.len(), 1);
    assert_eq!(plan.department_plans["eng"][0].starting_headcount, 90);
}

#[test]
fn periods_carry_calendar_months_when_a_start_is_given() {
    let start = NaiveDate::from_ymd_opt(2026, 1, 31).expect("valid date");
    let request = PlanRequest::new("p", "o", 100, 100)
        .with_horizon(3)
        .starting(start);

    let plan = WorkforcePlanner::default().create_plan(&request, None);
    let starts: Vec<Option<NaiveDate>> = plan
        .period_forecasts
        .iter()
        .map(|period| period.period_start)
        .collect();

    assert_eq!(
        starts,
        vec![
            NaiveDate::from_ymd_opt(2026, 1, 31),
            NaiveDate::from_ymd_opt(2026, 2, 28),
            NaiveDate::from_ymd_opt(2026, 3, 31),
        ]
    );

    let undated = WorkforcePlanner::default().create_plan(&PlanRequest::new("p", "o", 10, 10), None);
    assert_eq!(undated.period_forecasts.len(), DEFAULT_PLANNING_HORIZON as usize);
    assert!(undated.period_forecasts.iter().all(|p| p.period_start.is_none()));
}

#[test]
fn zero_horizon_plan_is_empty_and_low_risk() {
    let request = PlanRequest::new("p", "o", 100, 150).with_horizon(0);
    let plan = WorkforcePlanner::default().create_plan(&request, None);

    assert!(plan.period_forecasts.is_empty());
    assert_eq!(plan.total_hiring_need, 0);
    assert_eq!(plan.total_cost_projection, 0.0);
    assert_eq!(plan.risk_level, WorkforceRisk::Low);
    assert!(plan.recommendations.is_empty());
}

#[test]
fn horizons_are_capped_and_totals_do_not_wrap() {
    assert_eq!(
        PlanRequest::new("p", "o", 10, 10).with_horizon(500).planning_horizon,
        MAX_PLANNING_HORIZON
    );

    let mut request = PlanRequest::new("p", "o", 0, u32::MAX);
    request.planning_horizon = 10_000;
    let plan = WorkforcePlanner::default().create_plan(&request, None);

    assert_eq!(plan.planning_horizon, MAX_PLANNING_HORIZON);
    assert_eq!(plan.period_forecasts.len(), MAX_PLANNING_HORIZON as usize);
    assert!(plan.total_hiring_need > u64::from(u32::MAX));
}

#[test]
fn attrition_impact_compounds_monthly() {
    let impact = WorkforcePlanner::default().attrition_impact(1000, 24.0, 3);

    assert_eq!(impact.monthly_losses, vec![20, 19, 19]);
    assert_eq!(impact.projected_departures, 58);
    assert_eq!(impact.ending_headcount, 942);
    assert_eq!(impact.replacement_cost, 232_000.0);
    assert!((impact.productivity_loss_estimate - 43.5).abs() < 1e-9);
}

#[test]
fn budget_amounts_are_grouped_by_thousands() {
    assert_eq!(with_thousands_separators(999.0), "999");
    assert_eq!(with_thousands_separators(1000.0), "1,000");
    assert_eq!(with_thousands_separators(152_000.0), "152,000");
    assert_eq!(with_thousands_separators(1_234_567.6), "1,234,568");
}

#[test]
fn plan_serializes_with_snake_case_tags() {
    let request = PlanRequest::new("p", "o", 100, 110)
        .with_horizon(1)
        .with_scenario(PlanningScenario::Conservative);
    let plan = WorkforcePlanner::default().create_plan(&request, None);
    let json = serde_json::to_value(&plan).expect("plan serializes");

    assert_eq!(json["scenario"], "conservative");
    assert_eq!(json["risk_level"], "low");
    assert_eq!(json["period_forecasts"][0]["risk_level"], "low");
    assert!(json.get("metadata").is_none());
    assert!(json["period_forecasts"][0].get("period_start").is_none());
}

proptest! {
    #[test]
    fn forecast_periods_balance(
        current in 0u32..5_000,
        target in 0u32..5_000,
        attrition in 0.0f64..60.0,
        growth in 0.0f64..5.0,
    ) {
        let request = PlanRequest::new("p", "o", current, target)
            .with_horizon(6)
            .with_growth_rate(growth);
        let plan = planner_with_attrition(attrition).create_plan(&request, None);

        let mut headcount = current;
        for period in &plan.period_forecasts {
            prop_assert_eq!(period.starting_headcount, headcount);
            prop_assert!(period.projected_attrition <= period.starting_headcount);
            prop_assert!(period.projected_hires <= period.hiring_need);
            prop_assert_eq!(
                period.ending_headcount,
                period.starting_headcount - period.projected_attrition + period.projected_hires
            );
            headcount = period.ending_headcount;
        }
    }
}
