use std::collections::HashMap;
use std::thread;

use talent_intel::engines::benchmark::presets::hr_benchmarks;
use talent_intel::engines::planning::{PlanRequest, PlanningScenario, WorkforcePlanner};
use talent_intel::engines::retention::presets::standard_classifier;

fn assert_send_sync<T: Send + Sync>(_: &T) {}

#[test]
fn one_classifier_serves_many_threads() {
    let classifier = standard_classifier().expect("preset is valid");
    assert_send_sync(&classifier);

    let scores: Vec<f64> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let classifier = &classifier;
                scope.spawn(move || {
                    let values: HashMap<String, f64> = [
                        ("compensation_gap".to_string(), 10.0 * f64::from(worker)),
                        ("job_search_signals".to_string(), 50.0),
                    ]
                    .into_iter()
                    .collect();
                    classifier
                        .assess(&format!("emp-{worker}"), "Worker", &values, None)
                        .overall_risk_score
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("worker finished"))
            .collect()
    });

    let sequential: Vec<f64> = (0..8)
        .map(|worker| {
            let values: HashMap<String, f64> = [
                ("compensation_gap".to_string(), 10.0 * f64::from(worker)),
                ("job_search_signals".to_string(), 50.0),
            ]
            .into_iter()
            .collect();
            classifier.assess("emp", "Worker", &values, None).overall_risk_score
        })
        .collect();

    assert_eq!(scores, sequential);
}

#[test]
fn engines_are_shareable() {
    let benchmarks = hr_benchmarks().expect("preset is valid");
    let planner = WorkforcePlanner::default();
    assert_send_sync(&benchmarks);
    assert_send_sync(&planner);

    let plans = thread::scope(|scope| {
        let handles: Vec<_> = PlanningScenario::ALL
            .into_iter()
            .map(|scenario| {
                let planner = &planner;
                scope.spawn(move || {
                    let request = PlanRequest::new("p", "o", 200, 220)
                        .with_scenario(scenario)
                        .with_horizon(6);
                    planner.create_plan(&request, None)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("planner finished"))
            .collect::<Vec<_>>()
    });

    for (plan, scenario) in plans.iter().zip(PlanningScenario::ALL) {
        assert_eq!(plan.scenario, scenario);
        assert_eq!(plan.period_forecasts.len(), 6);
    }
}
