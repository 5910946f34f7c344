use std::collections::BTreeMap;

use serde::Serialize;

use super::GapSeverity;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGap {
    pub skill_name: String,
    pub current_capacity: u32,
    pub required_capacity: u32,
    pub gap: u32,
    pub gap_severity: GapSeverity,
    pub gap_severity_label: &'static str,
    pub impact_areas: Vec<String>,
    pub recommendations: Vec<String>,
}

fn severity(gap: u32, required: u32) -> GapSeverity {
    let ratio = f64::from(gap) / f64::from(required);
    if ratio >= 0.5 {
        GapSeverity::Critical
    } else if ratio >= 0.3 {
        GapSeverity::High
    } else if ratio >= 0.15 {
        GapSeverity::Medium
    } else {
        GapSeverity::Low
    }
}

/// Shortfalls between required and available skill capacity, most severe first.
pub(super) fn skill_gaps(
    required: &BTreeMap<String, u32>,
    current: &BTreeMap<String, u32>,
) -> Vec<SkillGap> {
    let mut gaps: Vec<SkillGap> = required
        .iter()
        .filter_map(|(skill, &required_capacity)| {
            let current_capacity = current.get(skill).copied().unwrap_or(0);
            let gap = required_capacity.checked_sub(current_capacity).filter(|gap| *gap > 0)?;
            let gap_severity = severity(gap, required_capacity);

            Some(SkillGap {
                skill_name: skill.clone(),
                current_capacity,
                required_capacity,
                gap,
                gap_severity,
                gap_severity_label: gap_severity.label(),
                impact_areas: vec![format!("Projects requiring {skill}")],
                recommendations: skill_actions(skill, gap, gap_severity),
            })
        })
        .collect();

    gaps.sort_by_key(|gap| gap.gap_severity);
    gaps
}

fn skill_actions(skill: &str, gap: u32, severity: GapSeverity) -> Vec<String> {
    let mut actions = Vec::new();
    if matches!(severity, GapSeverity::Critical | GapSeverity::High) {
        actions.push(format!("Prioritize hiring for {skill} ({gap} positions)"));
        actions.push(format!(
            "Consider contractors or consultants for immediate {skill} needs"
        ));
    }
    actions.push(format!("Develop internal training program for {skill}"));
    if gap > 3 {
        actions.push(format!("Create {skill} career path to attract talent"));
    }
    actions.truncate(3);
    actions
}
