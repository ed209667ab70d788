use proptest::prelude::*;
use serde_json::{json, Value};
use std::sync::Arc;
use std::thread;

use super::*;
use crate::response::ObservedResponse;

fn response(status_code: u16, response_time_ms: f64, body: Value) -> ObservedResponse {
    ObservedResponse {
        status_code,
        response_time_ms,
        body,
    }
}

fn spec(kind: AssertionKind, operator: AssertionOperator, expected: &str) -> AssertionSpec {
    AssertionSpec::new(kind, operator, expected)
}

#[test]
fn test_status_equals_pass() {
    let spec = spec(AssertionKind::StatusCode, AssertionOperator::Equals, "200");
    let result = evaluate(&spec, &response(200, 100.0, json!({})));
    assert!(result.passed);
    assert_eq!(result.actual_value, Some(json!(200)));
    assert!(result.error_message.is_none());
}

#[test]
fn test_status_equals_fail_names_both_codes() {
    let spec = spec(AssertionKind::StatusCode, AssertionOperator::Equals, "200");
    let result = evaluate(&spec, &response(404, 100.0, json!({})));
    assert!(!result.passed);
    let message = result.error_message.unwrap();
    assert!(message.contains("200"));
    assert!(message.contains("404"));
    assert!(message.contains("Expected status"));
}

#[test]
fn test_status_not_equals() {
    let spec = spec(AssertionKind::StatusCode, AssertionOperator::NotEquals, "500");
    assert!(evaluate(&spec, &response(200, 100.0, json!({}))).passed);
    assert!(!evaluate(&spec, &response(500, 100.0, json!({}))).passed);
}

#[test]
fn test_status_ordering_operators() {
    let gt = spec(
        AssertionKind::StatusCode,
        AssertionOperator::GreaterThan,
        "200",
    );
    assert!(evaluate(&gt, &response(404, 100.0, json!({}))).passed);

    let lt = spec(AssertionKind::StatusCode, AssertionOperator::LessThan, "400");
    assert!(evaluate(&lt, &response(200, 100.0, json!({}))).passed);
}

#[test]
fn test_status_invalid_operator() {
    let spec = spec(AssertionKind::StatusCode, AssertionOperator::Matches, "200");
    let result = evaluate(&spec, &response(200, 100.0, json!({})));
    assert!(!result.passed);
    let message = result.error_message.unwrap();
    assert!(message.contains("Invalid operator for status_code"));
    assert!(message.contains("matches"));
}

#[test]
fn test_status_unparsable_expected_value() {
    let spec = spec(AssertionKind::StatusCode, AssertionOperator::Equals, "abc");
    let result = evaluate(&spec, &response(200, 100.0, json!({})));
    assert!(!result.passed);
    assert!(result
        .error_message
        .unwrap()
        .contains("Invalid numeric expected value"));
}

#[test]
fn test_response_time_less_than() {
    let spec = spec(
        AssertionKind::ResponseTime,
        AssertionOperator::LessThan,
        "200",
    );
    assert!(evaluate(&spec, &response(200, 100.0, json!({}))).passed);
    assert!(!evaluate(&spec, &response(200, 300.0, json!({}))).passed);
}

#[test]
fn test_response_time_greater_than() {
    let spec = spec(
        AssertionKind::ResponseTime,
        AssertionOperator::GreaterThan,
        "50",
    );
    assert!(evaluate(&spec, &response(200, 100.0, json!({}))).passed);
}

#[test]
fn test_response_time_equals_has_tolerance_band() {
    let spec = spec(AssertionKind::ResponseTime, AssertionOperator::Equals, "100");
    assert!(evaluate(&spec, &response(200, 105.0, json!({}))).passed);
    assert!(evaluate(&spec, &response(200, 95.0, json!({}))).passed);
    assert!(!evaluate(&spec, &response(200, 115.0, json!({}))).passed);
}

#[test]
fn test_response_time_failure_message_units() {
    let spec = spec(
        AssertionKind::ResponseTime,
        AssertionOperator::LessThan,
        "100",
    );
    let result = evaluate(&spec, &response(200, 200.0, json!({})));
    let message = result.error_message.unwrap();
    assert!(message.contains("Expected response time less_than 100ms"));
    assert!(message.contains("200ms"));
}

#[test]
fn test_response_time_invalid_operator() {
    let spec = spec(
        AssertionKind::ResponseTime,
        AssertionOperator::Contains,
        "100",
    );
    let result = evaluate(&spec, &response(200, 100.0, json!({})));
    assert!(!result.passed);
    assert!(result
        .error_message
        .unwrap()
        .contains("Invalid operator for response_time"));
}

#[test]
fn test_json_schema_match() {
    let spec = spec(
        AssertionKind::JsonSchema,
        AssertionOperator::Equals,
        r#"{"name": "string", "age": "number"}"#,
    );
    let result = evaluate(&spec, &response(200, 100.0, json!({"name": "John", "age": 30})));
    assert!(result.passed);
}

#[test]
fn test_json_schema_missing_key_fails() {
    let spec = spec(
        AssertionKind::JsonSchema,
        AssertionOperator::Equals,
        r#"{"name": "string", "age": "number"}"#,
    );
    let result = evaluate(&spec, &response(200, 100.0, json!({"name": "John"})));
    assert!(!result.passed);
    assert_eq!(
        result.error_message.as_deref(),
        Some("Response does not match expected schema")
    );
}

#[test]
fn test_json_schema_wrong_type_fails() {
    let spec = spec(
        AssertionKind::JsonSchema,
        AssertionOperator::Equals,
        r#"{"name": "string", "age": "number"}"#,
    );
    let result = evaluate(&spec, &response(200, 100.0, json!({"name": 42, "age": 30})));
    assert!(!result.passed);
}

#[test]
fn test_json_schema_extra_fields_never_fail() {
    let spec = spec(
        AssertionKind::JsonSchema,
        AssertionOperator::Equals,
        r#"{"name": "string"}"#,
    );
    let body = json!({"name": "John", "age": 30, "tags": ["a"], "meta": {"x": 1}});
    assert!(evaluate(&spec, &response(200, 100.0, body)).passed);
}

#[test]
fn test_json_schema_malformed_expected_value() {
    let spec = spec(AssertionKind::JsonSchema, AssertionOperator::Equals, "not json");
    let result = evaluate(&spec, &response(200, 100.0, json!({})));
    assert!(!result.passed);
    assert!(result.error_message.unwrap().contains("Invalid JSON schema"));
}

#[test]
fn test_json_schema_invalid_operator() {
    let spec = spec(AssertionKind::JsonSchema, AssertionOperator::Contains, "{}");
    let result = evaluate(&spec, &response(200, 100.0, json!({})));
    assert!(!result.passed);
    assert!(result
        .error_message
        .unwrap()
        .contains("Invalid operator for json_schema"));
}

#[test]
fn test_regex_with_field_path() {
    let spec = spec(AssertionKind::Regex, AssertionOperator::Matches, r"@example\.com$")
        .at_path("user.email");
    let pass = evaluate(
        &spec,
        &response(200, 100.0, json!({"user": {"email": "a@example.com"}})),
    );
    assert!(pass.passed);
    assert_eq!(pass.actual_value, Some(json!("a@example.com")));

    let fail = evaluate(
        &spec,
        &response(200, 100.0, json!({"user": {"email": "a@other.com"}})),
    );
    assert!(!fail.passed);
    assert!(fail.error_message.unwrap().contains("does not match regex"));
}

#[test]
fn test_regex_whole_body_fallback_is_json_text() {
    // Without a field path the subject is the serialized body, so the
    // pattern can match across keys and quotes.
    let spec = spec(
        AssertionKind::Regex,
        AssertionOperator::Matches,
        r#""id":"12345""#,
    );
    let result = evaluate(&spec, &response(200, 100.0, json!({"id": "12345"})));
    assert!(result.passed);
}

#[test]
fn test_regex_coerces_numbers_to_text() {
    let spec =
        spec(AssertionKind::Regex, AssertionOperator::Matches, r"^\d+$").at_path("id");
    assert!(evaluate(&spec, &response(200, 100.0, json!({"id": 12345}))).passed);
}

#[test]
fn test_regex_invalid_pattern() {
    let spec = spec(
        AssertionKind::Regex,
        AssertionOperator::Matches,
        "[invalid(regex",
    );
    let result = evaluate(&spec, &response(200, 100.0, json!({})));
    assert!(!result.passed);
    assert_eq!(result.error_message.as_deref(), Some("Invalid regex pattern"));
}

#[test]
fn test_regex_missing_path_does_not_error() {
    let spec = spec(AssertionKind::Regex, AssertionOperator::Matches, "^real-value$")
        .at_path("missing.path");
    let result = evaluate(&spec, &response(200, 100.0, json!({"other": 1})));
    assert!(!result.passed);
    assert_eq!(result.actual_value, None);
}

#[test]
fn test_regex_invalid_operator() {
    let spec = spec(AssertionKind::Regex, AssertionOperator::Equals, ".*");
    let result = evaluate(&spec, &response(200, 100.0, json!({})));
    assert!(result
        .error_message
        .unwrap()
        .contains("Invalid operator for regex"));
}

#[test]
fn test_contains_whole_body_substring() {
    let spec = spec(AssertionKind::Contains, AssertionOperator::Contains, "success");
    let body = json!({"message": "Operation was successful"});
    assert!(evaluate(&spec, &response(200, 100.0, body)).passed);
}

#[test]
fn test_contains_is_case_sensitive() {
    let spec = spec(AssertionKind::Contains, AssertionOperator::Contains, "Success");
    let body = json!({"message": "Operation was successful"});
    assert!(!evaluate(&spec, &response(200, 100.0, body)).passed);
}

#[test]
fn test_contains_with_field_path() {
    let spec = spec(AssertionKind::Contains, AssertionOperator::Contains, "error")
        .at_path("message");
    let fail = evaluate(
        &spec,
        &response(200, 100.0, json!({"message": "all good here"})),
    );
    assert!(!fail.passed);
    assert!(fail.error_message.unwrap().contains("does not contain"));
}

#[test]
fn test_contains_missing_path_fails_naturally() {
    let spec = spec(AssertionKind::Contains, AssertionOperator::Contains, "anything")
        .at_path("no.such.key");
    let result = evaluate(&spec, &response(200, 100.0, json!({"a": 1})));
    assert!(!result.passed);
    assert_eq!(result.actual_value, None);
}

#[test]
fn test_unknown_kind() {
    let spec = spec(AssertionKind::Unknown, AssertionOperator::Equals, "whatever");
    let result = evaluate(&spec, &response(200, 100.0, json!({})));
    assert!(!result.passed);
    assert!(result
        .error_message
        .unwrap()
        .contains("Unknown assertion type"));
}

#[test]
fn test_result_echoes_spec() {
    let spec = spec(AssertionKind::StatusCode, AssertionOperator::Equals, "200");
    let result = evaluate(&spec, &response(200, 100.0, json!({})));
    assert_eq!(result.spec, spec);
}

#[test]
fn test_allowed_operators_table() {
    assert!(allowed_operators(AssertionKind::StatusCode).contains(&AssertionOperator::NotEquals));
    assert!(!allowed_operators(AssertionKind::StatusCode).contains(&AssertionOperator::Matches));
    assert_eq!(
        allowed_operators(AssertionKind::JsonSchema),
        &[AssertionOperator::Equals]
    );
    assert!(allowed_operators(AssertionKind::Unknown).is_empty());
}

#[test]
fn test_describe_spec() {
    let textual = spec(AssertionKind::Contains, AssertionOperator::Contains, "success")
        .at_path("message");
    assert_eq!(textual.describe(), "contains contains 'success' at message");

    let numeric = spec(AssertionKind::StatusCode, AssertionOperator::Equals, "200");
    assert_eq!(numeric.describe(), "status_code equals 200");
}

#[test]
fn test_concurrent_evaluation_matches_sequential() {
    let kinds = [
        AssertionKind::StatusCode,
        AssertionKind::ResponseTime,
        AssertionKind::JsonSchema,
        AssertionKind::Regex,
        AssertionKind::Contains,
    ];
    let cases: Vec<(AssertionSpec, ObservedResponse)> = (0..1000)
        .map(|i| {
            let kind = kinds[i % kinds.len()];
            let spec = match kind {
                AssertionKind::StatusCode => {
                    spec(kind, AssertionOperator::Equals, &format!("{}", 200 + i % 3))
                }
                AssertionKind::ResponseTime => {
                    spec(kind, AssertionOperator::LessThan, &format!("{}", i))
                }
                AssertionKind::JsonSchema => {
                    spec(kind, AssertionOperator::Equals, r#"{"n": "number"}"#)
                }
                AssertionKind::Regex => spec(kind, AssertionOperator::Matches, r"\d+").at_path("n"),
                _ => spec(kind, AssertionOperator::Contains, "7").at_path("n"),
            };
            let resp = response((200 + i % 3) as u16, (i % 500) as f64, json!({"n": i}));
            (spec, resp)
        })
        .collect();

    let sequential: Vec<AssertionResult> =
        cases.iter().map(|(s, r)| evaluate(s, r)).collect();

    let shared = Arc::new(cases);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cases = Arc::clone(&shared);
            thread::spawn(move || {
                cases
                    .iter()
                    .map(|(s, r)| evaluate(s, r))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        let parallel = handle.join().unwrap();
        assert_eq!(parallel, sequential);
    }
}

fn kind_strategy() -> impl Strategy<Value = AssertionKind> {
    prop_oneof![
        Just(AssertionKind::StatusCode),
        Just(AssertionKind::ResponseTime),
        Just(AssertionKind::JsonSchema),
        Just(AssertionKind::Regex),
        Just(AssertionKind::Contains),
        Just(AssertionKind::Unknown),
    ]
}

fn operator_strategy() -> impl Strategy<Value = AssertionOperator> {
    prop_oneof![
        Just(AssertionOperator::Equals),
        Just(AssertionOperator::NotEquals),
        Just(AssertionOperator::GreaterThan),
        Just(AssertionOperator::LessThan),
        Just(AssertionOperator::Contains),
        Just(AssertionOperator::Matches),
    ]
}

fn expected_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("200".to_string()),
        Just("100".to_string()),
        Just("not a number".to_string()),
        Just(r#"{"name": "string"}"#.to_string()),
        Just("[broken(".to_string()),
        "[a-z]{0,8}",
    ]
}

fn body_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!({"message": "Operation was successful"})),
        Just(json!({"user": {"email": "a@example.com"}})),
        Just(json!({"name": "John", "age": 30})),
        Just(json!([1, 2, 3])),
        Just(Value::Null),
    ]
}

fn spec_strategy() -> impl Strategy<Value = AssertionSpec> {
    (
        kind_strategy(),
        operator_strategy(),
        expected_strategy(),
        proptest::option::of(prop_oneof![
            Just("message".to_string()),
            Just("user.email".to_string()),
            Just("no.such.path".to_string()),
        ]),
    )
        .prop_map(|(kind, operator, expected_value, field_path)| AssertionSpec {
            kind,
            operator,
            expected_value,
            field_path,
        })
}

fn response_strategy() -> impl Strategy<Value = ObservedResponse> {
    (100u16..600u16, 0.0f64..5000.0f64, body_strategy()).prop_map(
        |(status_code, response_time_ms, body)| ObservedResponse {
            status_code,
            response_time_ms,
            body,
        },
    )
}

proptest! {
    // Pure-function property: re-evaluating identical inputs yields a
    // structurally identical result.
    #[test]
    fn evaluate_is_idempotent(spec in spec_strategy(), response in response_strategy()) {
        let first = evaluate(&spec, &response);
        let second = evaluate(&spec, &response);
        prop_assert_eq!(first, second);
    }

    // A result is either a clean pass or a failure with a message, never a
    // mix of the two.
    #[test]
    fn failed_results_always_carry_a_message(
        spec in spec_strategy(),
        response in response_strategy(),
    ) {
        let result = evaluate(&spec, &response);
        prop_assert_eq!(result.passed, result.error_message.is_none());
    }
}
