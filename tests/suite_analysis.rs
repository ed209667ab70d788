//! End-to-end offline flow: discover suite files, load one, and grade a
//! recorded response against its assertions.

use std::fs;

use apicheck::config::Config;
use apicheck::discovery::discover_suites;
use apicheck::response::load_recorded_response;
use apicheck::yaml::{load_suite, run_request_assertions, summarize};

const SUITE: &str = r#"
name: "User API"
description: "Smoke checks for the user endpoints"
requests:
  - name: "fetch user"
    url: "https://api.example.com/users/1"
    assertions:
      - kind: status_code
        operator: equals
        expected_value: "200"
      - kind: response_time
        operator: less_than
        expected_value: "500"
      - kind: json_schema
        operator: equals
        expected_value: '{"user": {"id": "number", "email": "string"}}'
      - kind: regex
        operator: matches
        expected_value: "@example\\.com$"
        field_path: user.email
      - kind: contains
        operator: contains
        expected_value: "ok"
        field_path: message
"#;

const RECORDED: &str = r#"{
    "status_code": 200,
    "response_time_ms": 123.4,
    "body": {
        "user": {"id": 1, "email": "ada@example.com"},
        "message": "ok"
    },
    "recorded_at": "2024-06-01T12:00:00Z"
}"#;

#[test]
fn discovers_loads_and_grades_a_suite() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("target")).unwrap();
    fs::write(dir.path().join("users.apicheck.yaml"), SUITE).unwrap();
    fs::write(dir.path().join("target/stale.apicheck.yaml"), SUITE).unwrap();

    let response_path = dir.path().join("recorded.json");
    fs::write(&response_path, RECORDED).unwrap();

    let found = discover_suites(dir.path(), &Config::default()).unwrap();
    assert_eq!(found.len(), 1);

    let suite = load_suite(&found[0]).unwrap();
    assert_eq!(suite.name, "User API");
    assert_eq!(suite.requests.len(), 1);

    let recorded = load_recorded_response(&response_path).unwrap();
    assert!(recorded.recorded_at.is_some());

    let results = run_request_assertions(&suite.requests[0].assertions, &recorded.response);
    let summary = summarize(&results);
    assert_eq!(summary.passed, 5);
    assert_eq!(summary.failed, 0);
    assert!(summary.all_passed());
}

#[test]
fn failed_assertions_carry_diagnostics_through_the_whole_flow() {
    let dir = tempfile::tempdir().unwrap();
    let suite_path = dir.path().join("users.apicheck.yaml");
    fs::write(&suite_path, SUITE).unwrap();

    let response_path = dir.path().join("recorded.json");
    fs::write(
        &response_path,
        r#"{
            "status_code": 500,
            "response_time_ms": 4000.0,
            "body": {"error": "boom"}
        }"#,
    )
    .unwrap();

    let suite = load_suite(&suite_path).unwrap();
    let recorded = load_recorded_response(&response_path).unwrap();

    let results = run_request_assertions(&suite.requests[0].assertions, &recorded.response);
    let summary = summarize(&results);
    assert_eq!(summary.failed, 5);

    assert_eq!(
        results[0].1.error_message.as_deref(),
        Some("Expected status equals 200, got 500")
    );
    assert_eq!(
        results[1].1.error_message.as_deref(),
        Some("Expected response time less_than 500ms, got 4000ms")
    );
    assert_eq!(
        results[2].1.error_message.as_deref(),
        Some("Response does not match expected schema")
    );
}
