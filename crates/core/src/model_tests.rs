use super::*;
use serde_json::json;

fn sample_run() -> Run {
    Run {
        id: 4,
        name: "Sprint 5".to_string(),
        is_completed: false,
        passed_count: 0,
        failed_count: 0,
        blocked_count: 0,
    }
}

#[test]
fn run_decodes_from_full_api_payload() {
    // Real responses carry far more fields than the client models.
    let value = json!({
        "id": 81,
        "suite_id": 4,
        "name": "Regression 2.1",
        "description": null,
        "milestone_id": 7,
        "is_completed": true,
        "completed_on": 1389968184,
        "passed_count": 28,
        "failed_count": 2,
        "blocked_count": 1,
        "untested_count": 6,
        "retest_count": 0,
        "url": "http://rail.example/index.php?/runs/view/81"
    });

    let run: Run = serde_json::from_value(value).unwrap();
    assert_eq!(run.id, 81);
    assert_eq!(run.name, "Regression 2.1");
    assert!(run.is_completed);
    assert_eq!(run.passed_count, 28);
    assert_eq!(run.failed_count, 2);
    assert_eq!(run.blocked_count, 1);
}

#[test]
fn project_decode_fails_without_id() {
    let value = json!({"name": "Widgets"});
    assert!(serde_json::from_value::<Project>(value).is_err());
}

#[test]
fn selector_matches_by_name_only() {
    let run = sample_run();
    assert!(RunSelector::Name("Sprint 5".to_string()).matches(&run));
    assert!(!RunSelector::Name("sprint 5".to_string()).matches(&run));
    assert!(!RunSelector::Name("Sprint".to_string()).matches(&run));
}

#[test]
fn selector_matches_by_id_only() {
    let run = sample_run();
    assert!(RunSelector::Id(4).matches(&run));
    assert!(!RunSelector::Id(5).matches(&run));
}

#[test]
fn selector_display_marks_numeric_ids() {
    assert_eq!(RunSelector::Name("R1".to_string()).to_string(), "R1");
    assert_eq!(RunSelector::Id(42).to_string(), "#42");
}
