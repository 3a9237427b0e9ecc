//! End-to-end tests for the playground session.

use playground::{PlaygroundConfig, PlaygroundError, run};
use rstest::rstest;

fn config_with_json(json: &str) -> PlaygroundConfig {
    PlaygroundConfig {
        json: json.to_string(),
        ..PlaygroundConfig::default()
    }
}

#[rstest]
fn default_session_applies_four_increments() {
    let report = run(&PlaygroundConfig::default()).unwrap();

    let expected: Vec<Option<i32>> = [4, 5, 6, 7].repeat(4).into_iter().map(Some).collect();
    assert_eq!(report.applied.len(), 16);
    assert_eq!(report.applied, expected);
}

#[rstest]
fn default_session_binds_constant_none_to_empty() {
    let report = run(&PlaygroundConfig::default()).unwrap();

    assert_eq!(report.mapped_to_none, vec![None; 4]);
    assert!(report.bound_to_none.is_empty());
    assert_eq!(report.numbers, vec![3, 4, 5, 6]);
}

#[rstest]
fn no_functions_yields_no_applications() {
    let config = PlaygroundConfig {
        functions: 0,
        ..PlaygroundConfig::default()
    };

    assert!(run(&config).unwrap().applied.is_empty());
}

#[rstest]
#[case("[1, 2", "invalid JSON")]
#[case("{\"a\": 1}", "expected a JSON array")]
#[case("[1, 2.5, 3]", "element 1 is not a number")]
fn malformed_json_is_reported(#[case] json: &str, #[case] message: &str) {
    let error: PlaygroundError = run(&config_with_json(json)).unwrap_err();
    assert!(error.to_string().starts_with(message), "{error}");
}

#[rstest]
fn report_serializes_to_json() {
    let report = run(&config_with_json("[]")).unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["bound_to_none"], serde_json::json!([]));
    assert_eq!(value["numbers"], serde_json::json!([]));
}
