//! Headcount forecasting under named scenarios, department roll-downs and skill-gap analysis.

mod forecast;
mod skills;

#[cfg(test)]
mod tests;

pub use forecast::{AttritionImpact, GapSeverity, HeadcountForecast};
pub use skills::SkillGap;

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::scoring::{Metadata, MAX_RECOMMENDATIONS};
use forecast::ForecastInputs;

pub const DEFAULT_PLANNING_HORIZON: u32 = 12;
/// Longest horizon simulated; longer requests are cut to this many months.
pub const MAX_PLANNING_HORIZON: u32 = 120;
/// Departments below this share of their target headcount count as understaffed.
const UNDERSTAFFED_RATIO: f64 = 0.85;
/// Open requisitions above this share of headcount call for faster hiring.
const OPEN_POSITION_RATIO: f64 = 0.2;
/// Recruiting spend above this is surfaced as a budget line.
const BUDGET_CALLOUT: f64 = 100_000.0;

/// Organisation-wide planning defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Annual attrition, in percent.
    pub default_attrition_rate: f64,
    /// Days.
    pub default_time_to_fill: u32,
    pub default_cost_per_hire: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_attrition_rate: 15.0,
            default_time_to_fill: 45,
            default_cost_per_hire: 4000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanningScenario {
    #[default]
    Baseline,
    Growth,
    Conservative,
    Aggressive,
    Recession,
}

impl PlanningScenario {
    pub const ALL: [Self; 5] = [
        Self::Baseline,
        Self::Growth,
        Self::Conservative,
        Self::Aggressive,
        Self::Recession,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Baseline => "Baseline",
            Self::Growth => "Growth",
            Self::Conservative => "Conservative",
            Self::Aggressive => "Aggressive",
            Self::Recession => "Recession",
        }
    }

    pub const fn growth_modifier(self) -> f64 {
        match self {
            Self::Baseline => 1.0,
            Self::Growth => 1.2,
            Self::Conservative => 0.8,
            Self::Aggressive => 1.5,
            Self::Recession => 0.5,
        }
    }

    pub const fn attrition_modifier(self) -> f64 {
        match self {
            Self::Baseline => 1.0,
            Self::Growth => 0.9,
            Self::Conservative => 1.1,
            Self::Aggressive => 0.85,
            Self::Recession => 1.3,
        }
    }

    const fn focus(self) -> Option<&'static str> {
        match self {
            Self::Recession => Some("Focus on retaining key talent during uncertainty"),
            Self::Growth => Some("Build recruiting capacity for growth phase"),
            Self::Baseline | Self::Conservative | Self::Aggressive => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownScenario;

impl fmt::Display for UnknownScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of: baseline, growth, conservative, aggressive, recession")
    }
}

impl std::error::Error for UnknownScenario {}

impl std::str::FromStr for PlanningScenario {
    type Err = UnknownScenario;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scenario| scenario.label().eq_ignore_ascii_case(value.trim()))
            .ok_or(UnknownScenario)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentProfile {
    pub department_id: String,
    pub name: String,
    pub current_headcount: u32,
    pub target_headcount: u32,
    /// Annual, in percent.
    pub avg_attrition_rate: f64,
    /// Days.
    pub avg_time_to_fill: u32,
    pub avg_cost_per_hire: f64,
    #[serde(default)]
    pub critical_roles: u32,
    #[serde(default)]
    pub contractors: u32,
    #[serde(default)]
    pub open_positions: u32,
}

impl DepartmentProfile {
    fn is_understaffed(&self) -> bool {
        f64::from(self.current_headcount) < f64::from(self.target_headcount) * UNDERSTAFFED_RATIO
    }

    fn has_hiring_backlog(&self) -> bool {
        f64::from(self.open_positions) > f64::from(self.current_headcount) * OPEN_POSITION_RATIO
    }
}

/// Parameters of one planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub plan_id: String,
    pub organization_id: String,
    pub current_headcount: u32,
    pub target_headcount: u32,
    #[serde(default)]
    pub departments: Vec<DepartmentProfile>,
    #[serde(default)]
    pub skill_requirements: BTreeMap<String, u32>,
    #[serde(default)]
    pub current_skills: BTreeMap<String, u32>,
    #[serde(default)]
    pub scenario: PlanningScenario,
    /// Months.
    pub planning_horizon: u32,
    /// Monthly target growth, in percent.
    #[serde(default)]
    pub growth_rate: f64,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

impl PlanRequest {
    pub fn new(
        plan_id: impl Into<String>,
        organization_id: impl Into<String>,
        current_headcount: u32,
        target_headcount: u32,
    ) -> Self {
        Self {
            plan_id: plan_id.into(),
            organization_id: organization_id.into(),
            current_headcount,
            target_headcount,
            departments: Vec::new(),
            skill_requirements: BTreeMap::new(),
            current_skills: BTreeMap::new(),
            scenario: PlanningScenario::Baseline,
            planning_horizon: DEFAULT_PLANNING_HORIZON,
            growth_rate: 0.0,
            start_date: None,
        }
    }

    pub fn with_scenario(mut self, scenario: PlanningScenario) -> Self {
        self.scenario = scenario;
        self
    }

    pub fn with_horizon(mut self, months: u32) -> Self {
        self.planning_horizon = months.min(MAX_PLANNING_HORIZON);
        self
    }

    pub fn with_growth_rate(mut self, monthly_percent: f64) -> Self {
        self.growth_rate = monthly_percent;
        self
    }

    pub fn starting(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn with_department(mut self, department: DepartmentProfile) -> Self {
        self.departments.push(department);
        self
    }

    pub fn with_skill(mut self, skill: impl Into<String>, required: u32, current: u32) -> Self {
        let skill = skill.into();
        self.current_skills.insert(skill.clone(), current);
        self.skill_requirements.insert(skill, required);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkforceRisk {
    Critical,
    High,
    Medium,
    Low,
}

impl WorkforceRisk {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    fn from_factor_count(count: usize) -> Self {
        match count {
            0 => Self::Low,
            1 => Self::Medium,
            2 => Self::High,
            _ => Self::Critical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkforcePlan {
    pub plan_id: String,
    pub organization_id: String,
    pub scenario: PlanningScenario,
    pub scenario_label: &'static str,
    pub planning_horizon: u32,
    pub period_forecasts: Vec<HeadcountForecast>,
    pub department_plans: BTreeMap<String, Vec<HeadcountForecast>>,
    pub total_hiring_need: u64,
    pub total_cost_projection: f64,
    pub skill_gaps: Vec<SkillGap>,
    pub risk_level: WorkforceRisk,
    pub risk_assessment: String,
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Default)]
pub struct WorkforcePlanner {
    config: PlannerConfig,
}

impl WorkforcePlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn create_plan(&self, request: &PlanRequest, metadata: Option<Metadata>) -> WorkforcePlan {
        let scenario = request.scenario;
        let growth_rate = request.growth_rate * scenario.growth_modifier();
        let horizon = request.planning_horizon.min(MAX_PLANNING_HORIZON);
        if horizon < request.planning_horizon {
            warn!(
                plan_id = %request.plan_id,
                requested = request.planning_horizon,
                horizon,
                "planning horizon capped"
            );
        }

        let period_forecasts = forecast::forecast(ForecastInputs {
            current_headcount: request.current_headcount,
            target_headcount: request.target_headcount,
            attrition_rate: self.config.default_attrition_rate * scenario.attrition_modifier(),
            growth_rate,
            cost_per_hire: self.config.default_cost_per_hire,
            periods: horizon,
            start_date: request.start_date,
        });

        let mut seen = HashSet::new();
        for department in &request.departments {
            if !seen.insert(department.department_id.as_str()) {
                warn!(
                    department_id = %department.department_id,
                    "duplicate department profile, later entry wins"
                );
            }
        }

        let department_plans: BTreeMap<String, Vec<HeadcountForecast>> = request
            .departments
            .par_iter()
            .map(|department| {
                let plan = forecast::forecast(ForecastInputs {
                    current_headcount: department.current_headcount,
                    target_headcount: department.target_headcount,
                    attrition_rate: department.avg_attrition_rate * scenario.attrition_modifier(),
                    growth_rate,
                    cost_per_hire: department.avg_cost_per_hire,
                    periods: horizon,
                    start_date: request.start_date,
                });
                (department.department_id.clone(), plan)
            })
            .collect();

        let total_hiring_need = period_forecasts
            .iter()
            .map(|period| u64::from(period.hiring_need))
            .sum();
        let total_cost_projection = period_forecasts
            .iter()
            .fold(0.0, |total, period| total + period.cost_projection);

        let skill_gaps = skills::skill_gaps(&request.skill_requirements, &request.current_skills);

        let risk_factors = risk_factors(&period_forecasts, &skill_gaps, &request.departments);
        let risk_level = WorkforceRisk::from_factor_count(risk_factors.len());
        let risk_assessment = risk_narrative(risk_level, &risk_factors);

        let recommendations = recommendations(
            total_hiring_need,
            total_cost_projection,
            &skill_gaps,
            scenario,
            &request.departments,
        );

        debug!(
            plan_id = %request.plan_id,
            scenario = scenario.label(),
            periods = period_forecasts.len(),
            departments = department_plans.len(),
            total_hiring_need,
            risk = risk_level.label(),
            "workforce plan created"
        );

        WorkforcePlan {
            plan_id: request.plan_id.clone(),
            organization_id: request.organization_id.clone(),
            scenario,
            scenario_label: scenario.label(),
            planning_horizon: horizon,
            period_forecasts,
            department_plans,
            total_hiring_need,
            total_cost_projection,
            skill_gaps,
            risk_level,
            risk_assessment,
            recommendations,
            metadata: metadata.unwrap_or_default(),
        }
    }

    /// Month-by-month compounding loss with no backfill, costed at the default cost per hire.
    pub fn attrition_impact(&self, current_headcount: u32, annual_rate: f64, months: u32) -> AttritionImpact {
        forecast::attrition_impact(
            current_headcount,
            annual_rate,
            months,
            self.config.default_cost_per_hire,
        )
    }
}

fn risk_factors(
    forecasts: &[HeadcountForecast],
    skill_gaps: &[SkillGap],
    departments: &[DepartmentProfile],
) -> Vec<String> {
    let mut factors = Vec::new();

    let critical_periods = forecasts
        .iter()
        .filter(|period| period.risk_level == GapSeverity::Critical)
        .count();
    if critical_periods > 0 {
        factors.push(format!("{critical_periods} critical staffing gaps"));
    }

    let high_periods = forecasts
        .iter()
        .filter(|period| period.risk_level == GapSeverity::High)
        .count();
    if high_periods > 0 {
        factors.push(format!("{high_periods} high-risk periods"));
    }

    let critical_skills = skill_gaps
        .iter()
        .filter(|gap| gap.gap_severity == GapSeverity::Critical)
        .count();
    if critical_skills > 0 {
        factors.push(format!("{critical_skills} critical skill gaps"));
    }

    let understaffed = departments
        .iter()
        .filter(|department| department.is_understaffed())
        .count();
    if understaffed > 0 {
        factors.push(format!("{understaffed} understaffed departments"));
    }

    factors
}

fn risk_narrative(level: WorkforceRisk, factors: &[String]) -> String {
    let joined = factors.join("; ");
    match level {
        WorkforceRisk::Critical => format!("Critical - Multiple workforce risks: {joined}"),
        WorkforceRisk::High => format!("High - Significant risks: {joined}"),
        WorkforceRisk::Medium => format!("Medium - Monitor: {joined}"),
        WorkforceRisk::Low => "Low - Workforce planning on track".to_string(),
    }
}

fn recommendations(
    total_hiring_need: u64,
    total_cost: f64,
    skill_gaps: &[SkillGap],
    scenario: PlanningScenario,
    departments: &[DepartmentProfile],
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if total_hiring_need > 0 {
        recommendations.push(format!(
            "Plan to hire {total_hiring_need} employees over planning horizon"
        ));
    }

    let critical: Vec<&str> = skill_gaps
        .iter()
        .filter(|gap| gap.gap_severity == GapSeverity::Critical)
        .take(3)
        .map(|gap| gap.skill_name.as_str())
        .collect();
    if !critical.is_empty() {
        recommendations.push(format!(
            "Address critical skill gaps: {}",
            critical.join(", ")
        ));
    }

    if let Some(focus) = scenario.focus() {
        recommendations.push(focus.to_string());
    }

    recommendations.extend(
        departments
            .iter()
            .filter(|department| department.has_hiring_backlog())
            .map(|department| format!("Accelerate hiring in {}", department.name)),
    );

    if total_cost > BUDGET_CALLOUT {
        recommendations.push(format!(
            "Budget ${} for recruiting costs",
            with_thousands_separators(total_cost)
        ));
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

/// Whole-unit amount with comma grouping, e.g. `152000.0` → `"152,000"`.
fn with_thousands_separators(amount: f64) -> String {
    let rounded = format!("{:.0}", amount.abs());
    let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);
    for (i, digit) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if amount < 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}
