//! Standard component sets used by HR review cycles.

use super::{ScoringComponent, TalentScoringEngine};
use crate::engines::scoring::DefinitionError;

pub fn performance_engine() -> Result<TalentScoringEngine, DefinitionError> {
    TalentScoringEngine::new(vec![
        ScoringComponent::new("goal_achievement", "Goal Achievement", 25.0)
            .with_description("Achievement of assigned goals and objectives"),
        ScoringComponent::new("quality_of_work", "Quality of Work", 20.0)
            .with_description("Accuracy, thoroughness, and excellence of deliverables"),
        ScoringComponent::new("productivity", "Productivity", 15.0)
            .with_description("Volume and efficiency of work output"),
        ScoringComponent::new("collaboration", "Collaboration", 15.0)
            .with_description("Teamwork and cross-functional cooperation"),
        ScoringComponent::new("communication", "Communication", 10.0)
            .with_description("Clarity and effectiveness of communication"),
        ScoringComponent::new("initiative", "Initiative", 10.0)
            .with_description("Proactive problem-solving and improvement"),
        ScoringComponent::new("reliability", "Reliability", 5.0)
            .with_description("Dependability and consistency"),
    ])
}

pub fn potential_engine() -> Result<TalentScoringEngine, DefinitionError> {
    TalentScoringEngine::new(vec![
        ScoringComponent::new("learning_agility", "Learning Agility", 25.0)
            .with_description("Ability to learn quickly and adapt"),
        ScoringComponent::new("leadership_capability", "Leadership Capability", 20.0)
            .with_description("Ability to lead and influence others"),
        ScoringComponent::new("strategic_thinking", "Strategic Thinking", 20.0)
            .with_description("Big-picture perspective and planning ability"),
        ScoringComponent::new("emotional_intelligence", "Emotional Intelligence", 15.0)
            .with_description("Self-awareness and relationship management"),
        ScoringComponent::new("drive_ambition", "Drive & Ambition", 10.0)
            .with_description("Motivation and career aspiration"),
        ScoringComponent::new("adaptability", "Adaptability", 10.0)
            .with_description("Flexibility in changing environments"),
    ])
}

pub fn engagement_engine() -> Result<TalentScoringEngine, DefinitionError> {
    TalentScoringEngine::new(vec![
        ScoringComponent::new("job_satisfaction", "Job Satisfaction", 20.0)
            .with_description("Satisfaction with role and responsibilities"),
        ScoringComponent::new("manager_relationship", "Manager Relationship", 20.0)
            .with_description("Quality of relationship with direct manager"),
        ScoringComponent::new("growth_opportunity", "Growth Opportunity", 15.0)
            .with_description("Perceived career growth opportunities"),
        ScoringComponent::new("work_life_balance", "Work-Life Balance", 15.0)
            .with_description("Balance between work and personal life"),
        ScoringComponent::new("recognition", "Recognition", 10.0)
            .with_description("Feeling valued and recognized"),
        ScoringComponent::new("company_alignment", "Company Alignment", 10.0)
            .with_description("Alignment with company mission and values"),
        ScoringComponent::new("team_connection", "Team Connection", 10.0)
            .with_description("Connection with colleagues and team"),
    ])
}
