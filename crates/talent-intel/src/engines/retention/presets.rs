use super::{RetentionRiskClassifier, RiskFactor, RiskIndicator};
use crate::engines::scoring::DefinitionError;

/// General-population indicator set.
pub fn standard_classifier() -> Result<RetentionRiskClassifier, DefinitionError> {
    RetentionRiskClassifier::new(vec![
        RiskIndicator::new("compensation_gap", "Compensation Gap", 15.0, RiskFactor::Compensation)
            .with_description("Gap between current and market compensation"),
        RiskIndicator::new("time_since_raise", "Time Since Last Raise", 10.0, RiskFactor::Compensation)
            .with_description("Months since last compensation increase"),
        RiskIndicator::new("promotion_timeline", "Promotion Timeline", 12.0, RiskFactor::CareerGrowth)
            .with_description("Time since last promotion vs. typical timeline"),
        RiskIndicator::new("skill_utilization", "Skill Utilization Gap", 10.0, RiskFactor::JobFit)
            .with_description("Gap between skills and role requirements"),
        RiskIndicator::new(
            "manager_rating",
            "Manager Relationship Score",
            15.0,
            RiskFactor::ManagerRelationship,
        )
        .with_description("Inverted score: low rating means high risk"),
        RiskIndicator::new("engagement_score", "Engagement Level", 12.0, RiskFactor::Engagement)
            .with_description("Inverted engagement: low engagement means high risk"),
        RiskIndicator::new(
            "work_life_balance",
            "Work-Life Balance Risk",
            8.0,
            RiskFactor::WorkEnvironment,
        )
        .with_description("Overtime hours and stress indicators"),
        RiskIndicator::new("tenure_risk", "Tenure Risk Window", 8.0, RiskFactor::Tenure)
            .with_description("Risk based on typical departure timelines"),
        RiskIndicator::new(
            "job_search_signals",
            "Job Search Signals",
            10.0,
            RiskFactor::MarketConditions,
        )
        .with_description("Professional network activity and recruiter contacts"),
    ])
}

/// Indicators that matter most for retaining top performers.
pub fn high_performer_classifier() -> Result<RetentionRiskClassifier, DefinitionError> {
    RetentionRiskClassifier::new(vec![
        RiskIndicator::new("recognition_gap", "Recognition Gap", 15.0, RiskFactor::Engagement)
            .with_description("Gap between contribution and recognition"),
        RiskIndicator::new(
            "growth_opportunity",
            "Growth Opportunity Gap",
            18.0,
            RiskFactor::CareerGrowth,
        )
        .with_description("Perceived lack of advancement opportunities"),
        RiskIndicator::new("challenge_level", "Challenge Level", 12.0, RiskFactor::JobFit)
            .with_description("Lack of challenging work"),
        RiskIndicator::new(
            "compensation_percentile",
            "Compensation Percentile",
            15.0,
            RiskFactor::Compensation,
        )
        .with_description("Position in compensation band"),
        RiskIndicator::new("project_visibility", "Project Visibility", 10.0, RiskFactor::CareerGrowth)
            .with_description("Visibility of current assignments"),
        RiskIndicator::new("leadership_access", "Leadership Access", 10.0, RiskFactor::CareerGrowth)
            .with_description("Access to senior leadership"),
        RiskIndicator::new("autonomy_level", "Autonomy Level", 10.0, RiskFactor::WorkEnvironment)
            .with_description("Decision-making authority"),
        RiskIndicator::new("market_demand", "Market Demand", 10.0, RiskFactor::MarketConditions)
            .with_description("External demand for skills"),
    ])
}
