//! Industry benchmark catalogues.

use super::{BenchmarkEngine, KpiCategory as Cat, KpiDefinition as Kpi};
use crate::engines::scoring::DefinitionError;

pub fn hr_benchmarks() -> Result<BenchmarkEngine, DefinitionError> {
    let kpis = vec![
        Kpi::new("turnover_rate", "Annual Turnover Rate", 15.0)
            .lower_is_better()
            .in_category(Cat::Retention)
            .with_unit("%")
            .with_description("Total employee turnover"),
        Kpi::new("voluntary_turnover", "Voluntary Turnover Rate", 10.0)
            .lower_is_better()
            .in_category(Cat::Retention)
            .with_unit("%")
            .with_description("Employee-initiated departures"),
        Kpi::new("high_performer_retention", "High Performer Retention", 90.0)
            .in_category(Cat::Retention)
            .with_unit("%")
            .with_description("Retention of top performers"),
        Kpi::new("first_year_turnover", "First Year Turnover", 20.0)
            .lower_is_better()
            .in_category(Cat::Retention)
            .with_unit("%")
            .with_description("New hire turnover in first year"),
        Kpi::new("time_to_fill", "Time to Fill", 45.0)
            .lower_is_better()
            .in_category(Cat::Recruitment)
            .with_unit("days")
            .with_description("Average days to fill position"),
        Kpi::new("cost_per_hire", "Cost per Hire", 4000.0)
            .lower_is_better()
            .in_category(Cat::Recruitment)
            .with_unit("$")
            .with_description("Average recruiting cost"),
        Kpi::new("offer_acceptance_rate", "Offer Acceptance Rate", 85.0)
            .in_category(Cat::Recruitment)
            .with_unit("%")
            .with_description("Accepted offers / total offers"),
        Kpi::new("quality_of_hire", "Quality of Hire", 80.0)
            .in_category(Cat::Recruitment)
            .with_unit("%")
            .with_description("New hire performance rating"),
        Kpi::new("engagement_score", "Employee Engagement Score", 75.0)
            .in_category(Cat::Engagement)
            .with_unit("%")
            .with_description("Overall engagement"),
        Kpi::new("enps", "Employee Net Promoter Score", 30.0)
            .in_category(Cat::Engagement)
            .with_description("eNPS score"),
        Kpi::new("survey_participation", "Survey Participation Rate", 80.0)
            .in_category(Cat::Engagement)
            .with_unit("%")
            .with_description("Engagement survey response rate"),
        Kpi::new("performance_review_completion", "Review Completion Rate", 95.0)
            .in_category(Cat::Performance)
            .with_unit("%")
            .with_description("On-time review completion"),
        Kpi::new("goal_achievement", "Goal Achievement Rate", 80.0)
            .in_category(Cat::Performance)
            .with_unit("%")
            .with_description("Goals met or exceeded"),
        Kpi::new("pip_success_rate", "PIP Success Rate", 50.0)
            .in_category(Cat::Performance)
            .with_unit("%")
            .with_description("PIP employees improved"),
        Kpi::new("compa_ratio", "Compa-Ratio", 100.0)
            .in_category(Cat::Compensation)
            .with_unit("%")
            .with_description("Salary vs. market midpoint"),
        Kpi::new("pay_equity_gap", "Pay Equity Gap", 3.0)
            .lower_is_better()
            .in_category(Cat::Compensation)
            .with_unit("%")
            .with_description("Gender/race pay gap"),
        Kpi::new("training_hours", "Training Hours per Employee", 40.0)
            .in_category(Cat::Development)
            .with_unit("hrs")
            .with_description("Annual training hours"),
        Kpi::new("internal_promotion_rate", "Internal Promotion Rate", 60.0)
            .in_category(Cat::Development)
            .with_unit("%")
            .with_description("Positions filled internally"),
        Kpi::new("succession_coverage", "Succession Coverage", 80.0)
            .in_category(Cat::Development)
            .with_unit("%")
            .with_description("Critical roles with successors"),
        Kpi::new("diversity_representation", "Diversity Representation", 40.0)
            .in_category(Cat::Diversity)
            .with_unit("%")
            .with_description("Underrepresented groups"),
        Kpi::new("diversity_leadership", "Diversity in Leadership", 30.0)
            .in_category(Cat::Diversity)
            .with_unit("%")
            .with_description("Diverse leaders"),
    ];

    BenchmarkEngine::with_category_weights(
        kpis,
        [
            (Cat::Retention, 1.2),
            (Cat::Engagement, 1.2),
            (Cat::Recruitment, 1.0),
            (Cat::Performance, 1.0),
            (Cat::Development, 1.0),
            (Cat::Compensation, 0.9),
            (Cat::Diversity, 0.9),
        ],
    )
}

pub fn engagement_benchmarks() -> Result<BenchmarkEngine, DefinitionError> {
    let engagement = |id: &str, name: &str, benchmark: f64| {
        Kpi::new(id, name, benchmark)
            .in_category(Cat::Engagement)
            .with_unit("%")
    };

    BenchmarkEngine::new(vec![
        engagement("overall_engagement", "Overall Engagement", 75.0),
        engagement("job_satisfaction", "Job Satisfaction", 80.0),
        engagement("manager_effectiveness", "Manager Effectiveness", 75.0),
        Kpi::new("career_development", "Career Development Satisfaction", 70.0)
            .in_category(Cat::Development)
            .with_unit("%"),
        engagement("work_life_balance", "Work-Life Balance", 70.0),
        engagement("recognition", "Recognition & Appreciation", 75.0),
        engagement("company_confidence", "Confidence in Company", 80.0),
        engagement("team_collaboration", "Team Collaboration", 80.0),
        engagement("communication", "Communication Effectiveness", 70.0),
        Kpi::new("resources_tools", "Resources & Tools", 75.0)
            .in_category(Cat::Productivity)
            .with_unit("%"),
    ])
}

pub fn recruitment_benchmarks() -> Result<BenchmarkEngine, DefinitionError> {
    let recruitment = |id: &str, name: &str, benchmark: f64, unit: &str| {
        Kpi::new(id, name, benchmark)
            .in_category(Cat::Recruitment)
            .with_unit(unit)
    };

    BenchmarkEngine::new(vec![
        recruitment("time_to_fill", "Time to Fill", 45.0, "days").lower_is_better(),
        recruitment("time_to_hire", "Time to Hire", 30.0, "days").lower_is_better(),
        recruitment("cost_per_hire", "Cost per Hire", 4000.0, "$").lower_is_better(),
        recruitment("source_of_hire", "Internal Source Rate", 30.0, "%"),
        recruitment("applicants_per_opening", "Applicants per Opening", 50.0, ""),
        recruitment("offer_acceptance", "Offer Acceptance Rate", 85.0, "%"),
        recruitment("quality_of_hire", "Quality of Hire Score", 80.0, "%"),
        recruitment(
            "hiring_manager_satisfaction",
            "Hiring Manager Satisfaction",
            85.0,
            "%",
        ),
        recruitment("candidate_experience", "Candidate Experience Score", 80.0, "%"),
        Kpi::new("diversity_of_hires", "Diversity of Hires", 40.0)
            .in_category(Cat::Diversity)
            .with_unit("%"),
    ])
}
