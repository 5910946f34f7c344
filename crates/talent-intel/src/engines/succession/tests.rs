use std::collections::BTreeMap;

use proptest::prelude::*;

use super::*;

fn analyzer() -> SuccessionAnalyzer {
    SuccessionAnalyzer::new(vec![RoleRequirement::new("cfo", ["finance", "strategy"])])
    .expect("valid requirements")
}

fn successors(levels: &[ReadinessLevel]) -> Vec<SuccessorCandidate> {
    levels
        .iter()
        .enumerate()
        .map(|(i, level)| SuccessorCandidate::new(format!("emp-{i}"), format!("Candidate {i}"), *level))
        .collect()
}

#[test]
fn near_ready_candidate_gets_focused_plan() {
    let candidate = CandidateProfile::new("emp-1", "Ada", 6.0)
        .with_competency("leadership", 80.0)
        .with_competency("strategy", 90.0)
        .with_competency("finance", 60.0);

    let assessment = SuccessionAnalyzer::default().assess_readiness(&candidate, "vp_ops", None, None);

    // 0.7 * 76.67 + 0.3 * 100
    assert!((assessment.overall_readiness - 83.666_666).abs() < 1e-4);
    assert_eq!(assessment.readiness_level, ReadinessLevel::ReadyInOneYear);
    assert_eq!(assessment.experience_gaps, vec!["Develop finance"]);
    assert_eq!(
        assessment.development_plan,
        vec!["Assign to high-visibility project", "Focus development on: finance"]
    );
    assert_eq!(assessment.estimated_ready_date, "Within 12 months");
    assert_eq!(assessment.required_experience_years, DEFAULT_REQUIRED_EXPERIENCE_YEARS);
}

#[test]
fn missing_competencies_default_to_neutral() {
    let candidate = CandidateProfile::new("emp-2", "Grace", 2.5);
    let assessment = SuccessionAnalyzer::default().assess_readiness(&candidate, "vp_ops", None, None);

    assert_eq!(assessment.overall_readiness, 50.0);
    assert_eq!(assessment.readiness_level, ReadinessLevel::Developing);
    assert_eq!(
        assessment.experience_gaps,
        vec!["Need 2.5 more years experience"]
    );
    assert_eq!(
        assessment.development_plan,
        vec!["Assess long-term potential", "Consider alternative career paths"]
    );
    assert_eq!(assessment.estimated_ready_date, "24+ months");
}

#[test]
fn registered_role_reports_unscored_competencies_without_filtering() {
    let candidate = CandidateProfile::new("emp-3", "Linus", 5.0)
        .with_competency("finance", 90.0)
        .with_competency("people", 30.0);

    let assessment = analyzer().assess_readiness(&candidate, "cfo", None, None);
    // 0.7 * 60 + 0.3 * 100
    assert!((assessment.overall_readiness - 72.0).abs() < 1e-9);
    assert_eq!(assessment.readiness_level, ReadinessLevel::ReadyInTwoPlusYears);
    assert_eq!(assessment.competency_scores.len(), 2);
    assert_eq!(assessment.unscored_competencies, vec!["strategy"]);
    assert_eq!(assessment.required_experience_years, DEFAULT_REQUIRED_EXPERIENCE_YEARS);
    assert_eq!(assessment.experience_gaps, vec!["Develop people"]);

    let unregistered = SuccessionAnalyzer::default().assess_readiness(&candidate, "cfo", None, None);
    assert_eq!(unregistered.overall_readiness, assessment.overall_readiness);
    assert!(unregistered.unscored_competencies.is_empty());
}

#[test]
fn explicit_required_experience_stretches_the_bar() {
    let candidate = CandidateProfile::new("emp-3", "Linus", 10.0)
        .with_competency("finance", 95.0)
        .with_competency("strategy", 85.0);

    let assessment = analyzer().assess_readiness(&candidate, "cfo", None, None);
    assert!((assessment.overall_readiness - 93.0).abs() < 1e-9);
    assert_eq!(assessment.readiness_level, ReadinessLevel::ReadyNow);
    assert!(assessment.experience_gaps.is_empty());
    assert!(assessment.unscored_competencies.is_empty());

    let stretched = analyzer().assess_readiness(&candidate, "cfo", Some(20.0), None);
    assert_eq!(stretched.required_experience_years, 20.0);
    assert_eq!(stretched.readiness_level, ReadinessLevel::ReadyInOneYear);
    assert_eq!(
        stretched.experience_gaps,
        vec!["Need 10.0 more years experience"]
    );
}

#[test]
fn longer_horizon_candidates_get_training_list() {
    let candidate = CandidateProfile::new("emp-4", "Barbara", 5.0)
        .with_competency("budgeting", 50.0)
        .with_competency("coaching", 55.0)
        .with_competency("delegation", 65.0)
        .with_competency("negotiation", 60.0);

    let assessment = SuccessionAnalyzer::default().assess_readiness(&candidate, "director", None, None);
    assert_eq!(assessment.readiness_level, ReadinessLevel::ReadyInTwoPlusYears);
    assert_eq!(
        assessment.experience_gaps,
        vec!["Develop budgeting", "Develop coaching", "Develop delegation"]
    );
    assert_eq!(
        assessment.development_plan,
        vec![
            "Create structured development plan",
            "Assign executive mentor",
            "Training needed: budgeting, coaching, delegation",
        ]
    );
}

#[test]
fn duplicate_role_requirements_fail_construction() {
    let err = SuccessionAnalyzer::new(vec![
        RoleRequirement::new("cfo", ["finance"]),
        RoleRequirement::new("cfo", ["strategy"]),
    ])
    .expect_err("duplicate rejected");
    assert!(matches!(err, DefinitionError::DuplicateIdentifier { .. }));
}

#[test]
fn plan_rolls_up_coverage_and_role_risk() {
    use ReadinessLevel::*;

    let roles = vec![
        CriticalRole::new("ceo", "Chief Executive Officer", "Executive", 40.0),
        CriticalRole::new("cfo", "Chief Financial Officer", "Finance", 80.0),
        CriticalRole::new("cto", "Chief Technology Officer", "Engineering", 30.0),
        CriticalRole::new("coo", "Chief Operating Officer", "Operations", 20.0),
        CriticalRole::new("chro", "Chief People Officer", "People", 10.0),
    ];
    let mut bench = BTreeMap::new();
    bench.insert("ceo".to_string(), successors(&[ReadyNow, ReadyInTwoPlusYears]));
    bench.insert("cfo".to_string(), successors(&[ReadyNow]));
    bench.insert("cto".to_string(), successors(&[Developing]));
    bench.insert("chro".to_string(), successors(&[ReadyInOneYear]));

    let plan = analyzer().create_succession_plan("plan-1", "org-1", roles, bench, None);

    assert_eq!(plan.succession_coverage, 80.0);
    assert_eq!(plan.ready_now_coverage, 40.0);
    assert_eq!(plan.bench_strength, BenchStrength::Moderate);
    assert_eq!(
        plan.bench_strength_summary,
        "Moderate - Gaps exist, accelerate development"
    );
    assert_eq!(
        plan.high_risk_roles,
        vec![
            "Chief Financial Officer",
            "Chief Technology Officer",
            "Chief Operating Officer"
        ]
    );

    let risks: Vec<RoleRisk> = plan.role_coverage.iter().map(|role| role.risk).collect();
    assert_eq!(
        risks,
        vec![
            RoleRisk::Low,
            RoleRisk::High,
            RoleRisk::High,
            RoleRisk::Critical,
            RoleRisk::Medium
        ]
    );
    assert_eq!(plan.role_coverage[0].successor_count, 2);
    assert_eq!(plan.role_coverage[0].ready_now_count, 1);

    assert_eq!(
        plan.recommendations,
        vec![
            "Address 3 high-risk roles: Chief Financial Officer, Chief Technology Officer, Chief Operating Officer",
            "Develop backup successors for 3 roles",
            "Conduct annual succession review with leadership",
        ]
    );
}

#[test]
fn well_covered_bench_is_strong() {
    use ReadinessLevel::*;

    let roles = vec![CriticalRole::new("ceo", "Chief Executive Officer", "Executive", 20.0)
        .with_incumbent("emp-100", "Incumbent")];
    let mut bench = BTreeMap::new();
    bench.insert("ceo".to_string(), successors(&[ReadyNow, ReadyInOneYear]));

    let plan = analyzer().create_succession_plan("plan-2", "org-1", roles, bench, None);
    assert_eq!(plan.bench_strength, BenchStrength::Strong);
    assert!(plan.high_risk_roles.is_empty());
    assert_eq!(
        plan.recommendations,
        vec!["Conduct annual succession review with leadership"]
    );
}

#[test]
fn empty_plan_is_weak_without_dividing_by_zero() {
    let plan = analyzer().create_succession_plan("plan-3", "org-1", Vec::new(), BTreeMap::new(), None);
    assert_eq!(plan.succession_coverage, 0.0);
    assert_eq!(plan.ready_now_coverage, 0.0);
    assert_eq!(plan.bench_strength, BenchStrength::Weak);
    assert_eq!(
        plan.recommendations,
        vec![
            "Identify additional succession candidates for coverage",
            "Conduct annual succession review with leadership",
        ]
    );
}

#[test]
fn high_risk_titles_are_capped_but_counted() {
    let roles = (0..12)
        .map(|i| CriticalRole::new(format!("role-{i}"), format!("Role {i}"), "Ops", 10.0))
        .collect();
    let plan = analyzer().create_succession_plan("plan-4", "org-1", roles, BTreeMap::new(), None);

    assert_eq!(plan.high_risk_roles.len(), 10);
    assert_eq!(
        plan.recommendations[0],
        "Address 12 high-risk roles: Role 0, Role 1, Role 2"
    );
}

proptest! {
    #[test]
    fn readiness_stays_in_range(a in 0.0f64..100.0, b in 0.0f64..100.0, years in 0.0f64..40.0) {
        let candidate = CandidateProfile::new("p", "P", years)
            .with_competency("a", a)
            .with_competency("b", b);
        let assessment = SuccessionAnalyzer::default().assess_readiness(&candidate, "any", None, None);
        prop_assert!((0.0..=100.0).contains(&assessment.overall_readiness));
    }
}
