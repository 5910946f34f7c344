use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ReadinessLevel, SuccessionAnalyzer};
use crate::engines::scoring::{Metadata, MAX_RECOMMENDATIONS};

/// Roles with a vacancy risk above this are high-risk regardless of bench depth.
const VACANCY_RISK_THRESHOLD: f64 = 70.0;
const MAX_HIGH_RISK_ROLES: usize = 10;
/// Coverage below this percentage asks for more candidates.
const TARGET_COVERAGE: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleRisk {
    Critical,
    High,
    Medium,
    Low,
}

impl RoleRisk {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchStrength {
    Strong,
    Good,
    Moderate,
    Weak,
}

impl BenchStrength {
    pub fn from_coverage(coverage: f64, ready_now_coverage: f64) -> Self {
        if coverage >= 90.0 && ready_now_coverage >= 70.0 {
            Self::Strong
        } else if coverage >= 75.0 && ready_now_coverage >= 50.0 {
            Self::Good
        } else if coverage >= 50.0 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Weak => "Weak",
        }
    }

    pub const fn narrative(self) -> &'static str {
        match self {
            Self::Strong => "Strong - Well-prepared succession pipeline",
            Self::Good => "Good - Most roles covered, some development needed",
            Self::Moderate => "Moderate - Gaps exist, accelerate development",
            Self::Weak => "Weak - Significant succession risk, immediate action needed",
        }
    }
}

/// A role whose vacancy would materially hurt the business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalRole {
    pub role_id: String,
    pub title: String,
    pub department: String,
    #[serde(default)]
    pub incumbent_id: Option<String>,
    #[serde(default)]
    pub incumbent_name: Option<String>,
    /// 0–100 likelihood that the seat opens up.
    pub vacancy_risk: f64,
    #[serde(default)]
    pub business_impact: String,
}

impl CriticalRole {
    pub fn new(
        role_id: impl Into<String>,
        title: impl Into<String>,
        department: impl Into<String>,
        vacancy_risk: f64,
    ) -> Self {
        Self {
            role_id: role_id.into(),
            title: title.into(),
            department: department.into(),
            incumbent_id: None,
            incumbent_name: None,
            vacancy_risk,
            business_impact: String::new(),
        }
    }

    pub fn with_incumbent(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.incumbent_id = Some(id.into());
        self.incumbent_name = Some(name.into());
        self
    }

    pub fn with_business_impact(mut self, impact: impl Into<String>) -> Self {
        self.business_impact = impact.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessorCandidate {
    pub employee_id: String,
    pub employee_name: String,
    #[serde(default)]
    pub current_role: String,
    pub readiness_level: ReadinessLevel,
    #[serde(default)]
    pub performance_rating: String,
    #[serde(default)]
    pub potential_rating: String,
    #[serde(default)]
    pub development_gaps: Vec<String>,
    #[serde(default)]
    pub development_actions: Vec<String>,
    #[serde(default)]
    pub time_in_role_months: u32,
    #[serde(default)]
    pub flight_risk: String,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl SuccessorCandidate {
    pub fn new(
        employee_id: impl Into<String>,
        employee_name: impl Into<String>,
        readiness_level: ReadinessLevel,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
            current_role: String::new(),
            readiness_level,
            performance_rating: String::new(),
            potential_rating: String::new(),
            development_gaps: Vec::new(),
            development_actions: Vec::new(),
            time_in_role_months: 0,
            flight_risk: String::new(),
            metadata: Metadata::new(),
        }
    }

    pub fn in_role(mut self, current_role: impl Into<String>, months: u32) -> Self {
        self.current_role = current_role.into();
        self.time_in_role_months = months;
        self
    }
}

/// Bench depth for one critical role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleCoverage {
    pub role_id: String,
    pub title: String,
    pub successor_count: usize,
    pub ready_now_count: usize,
    pub risk: RoleRisk,
    pub risk_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuccessionPlan {
    pub plan_id: String,
    pub organization_id: String,
    pub critical_roles: Vec<CriticalRole>,
    pub succession_coverage: f64,
    pub ready_now_coverage: f64,
    pub role_coverage: Vec<RoleCoverage>,
    pub role_assessments: BTreeMap<String, Vec<SuccessorCandidate>>,
    pub high_risk_roles: Vec<String>,
    pub bench_strength: BenchStrength,
    pub bench_strength_summary: &'static str,
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl SuccessionAnalyzer {
    pub fn create_succession_plan(
        &self,
        plan_id: &str,
        organization_id: &str,
        critical_roles: Vec<CriticalRole>,
        role_successors: BTreeMap<String, Vec<SuccessorCandidate>>,
        metadata: Option<Metadata>,
    ) -> SuccessionPlan {
        let no_successors: &[SuccessorCandidate] = &[];
        let role_coverage: Vec<RoleCoverage> = critical_roles
            .iter()
            .map(|role| {
                let successors = role_successors
                    .get(&role.role_id)
                    .map_or(no_successors, Vec::as_slice);
                let risk = role_risk(role, successors);
                RoleCoverage {
                    role_id: role.role_id.clone(),
                    title: role.title.clone(),
                    successor_count: successors.len(),
                    ready_now_count: successors
                        .iter()
                        .filter(|candidate| candidate.readiness_level == ReadinessLevel::ReadyNow)
                        .count(),
                    risk,
                    risk_label: risk.label(),
                }
            })
            .collect();

        let succession_coverage =
            share_of_roles(&role_coverage, |coverage| coverage.successor_count > 0);
        let ready_now_coverage =
            share_of_roles(&role_coverage, |coverage| coverage.ready_now_count > 0);

        let all_high_risk: Vec<&str> = role_coverage
            .iter()
            .filter(|coverage| matches!(coverage.risk, RoleRisk::Critical | RoleRisk::High))
            .map(|coverage| coverage.title.as_str())
            .collect();

        let bench_strength = BenchStrength::from_coverage(succession_coverage, ready_now_coverage);
        let recommendations = recommendations(&role_coverage, &all_high_risk, succession_coverage);

        debug!(
            plan_id,
            roles = critical_roles.len(),
            succession_coverage,
            ready_now_coverage,
            bench = bench_strength.label(),
            "succession plan created"
        );

        SuccessionPlan {
            plan_id: plan_id.to_string(),
            organization_id: organization_id.to_string(),
            succession_coverage,
            ready_now_coverage,
            high_risk_roles: all_high_risk
                .iter()
                .take(MAX_HIGH_RISK_ROLES)
                .map(|title| title.to_string())
                .collect(),
            role_coverage,
            critical_roles,
            role_assessments: role_successors,
            bench_strength,
            bench_strength_summary: bench_strength.narrative(),
            recommendations,
            metadata: metadata.unwrap_or_default(),
        }
    }
}

/// Critical and High mark the role as high-risk for the plan.
fn role_risk(role: &CriticalRole, successors: &[SuccessorCandidate]) -> RoleRisk {
    if successors.is_empty() {
        RoleRisk::Critical
    } else if role.vacancy_risk > VACANCY_RISK_THRESHOLD
        || !successors
            .iter()
            .any(|candidate| candidate.readiness_level.is_near_term())
    {
        RoleRisk::High
    } else if successors.len() == 1 {
        RoleRisk::Medium
    } else {
        RoleRisk::Low
    }
}

fn share_of_roles(coverage: &[RoleCoverage], predicate: impl Fn(&RoleCoverage) -> bool) -> f64 {
    if coverage.is_empty() {
        return 0.0;
    }
    let matching = coverage.iter().filter(|role| predicate(role)).count();
    matching as f64 * 100.0 / coverage.len() as f64
}

fn recommendations(coverage: &[RoleCoverage], high_risk: &[&str], succession_coverage: f64) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !high_risk.is_empty() {
        let named: Vec<&str> = high_risk.iter().take(3).copied().collect();
        recommendations.push(format!(
            "Address {} high-risk roles: {}",
            high_risk.len(),
            named.join(", ")
        ));
    }

    if succession_coverage < TARGET_COVERAGE {
        recommendations.push("Identify additional succession candidates for coverage".to_string());
    }

    let single_successor = coverage
        .iter()
        .filter(|role| role.successor_count == 1)
        .count();
    if single_successor > 0 {
        recommendations.push(format!(
            "Develop backup successors for {single_successor} roles"
        ));
    }

    recommendations.push("Conduct annual succession review with leadership".to_string());
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
