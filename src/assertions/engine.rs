//! The assertion evaluator: dispatch by kind, one sub-check per kind.

use regex::Regex;
use serde_json::{json, Value};

use crate::response::ObservedResponse;

use super::path::{coerce_to_string, lookup_path};
use super::schema::matches_schema;
use super::{allowed_operators, AssertionKind, AssertionOperator, AssertionResult, AssertionSpec};

/// Half-width of the acceptance band for `response_time equals`, in
/// milliseconds. Wall-clock timings are never exactly reproducible, so
/// equality is a band rather than an exact comparison.
const RESPONSE_TIME_TOLERANCE_MS: f64 = 10.0;

/// Evaluate one assertion against one observed response.
///
/// Pure and total: the same inputs always produce the same result, and every
/// failure mode (unknown kind, operator not valid for the kind, malformed
/// expected value, plain mismatch) is returned as a failed
/// [`AssertionResult`] rather than an error.
pub fn evaluate(spec: &AssertionSpec, response: &ObservedResponse) -> AssertionResult {
    if spec.kind == AssertionKind::Unknown {
        return AssertionResult::fail(spec, None, "Unknown assertion type");
    }
    if !allowed_operators(spec.kind).contains(&spec.operator) {
        return AssertionResult::fail(
            spec,
            None,
            format!("Invalid operator for {}: {}", spec.kind, spec.operator),
        );
    }

    match spec.kind {
        AssertionKind::StatusCode => check_status(spec, response.status_code),
        AssertionKind::ResponseTime => check_response_time(spec, response.response_time_ms),
        AssertionKind::JsonSchema => check_schema(spec, &response.body),
        AssertionKind::Regex => check_regex(spec, &response.body),
        AssertionKind::Contains => check_contains(spec, &response.body),
        AssertionKind::Unknown => AssertionResult::fail(spec, None, "Unknown assertion type"),
    }
}

fn check_status(spec: &AssertionSpec, status_code: u16) -> AssertionResult {
    let actual = Some(json!(status_code));
    let expected = match spec.expected_value.trim().parse::<i64>() {
        Ok(n) => n,
        Err(_) => {
            return AssertionResult::fail(
                spec,
                actual,
                format!("Invalid numeric expected value: '{}'", spec.expected_value),
            )
        }
    };

    let status = i64::from(status_code);
    let passed = match spec.operator {
        AssertionOperator::Equals => status == expected,
        AssertionOperator::NotEquals => status != expected,
        AssertionOperator::GreaterThan => status > expected,
        AssertionOperator::LessThan => status < expected,
        other => {
            return AssertionResult::fail(
                spec,
                actual,
                format!("Invalid operator for {}: {}", spec.kind, other),
            )
        }
    };

    if passed {
        AssertionResult::pass(spec, actual)
    } else {
        AssertionResult::fail(
            spec,
            actual,
            format!(
                "Expected status {} {}, got {}",
                spec.operator, expected, status
            ),
        )
    }
}

fn check_response_time(spec: &AssertionSpec, response_time_ms: f64) -> AssertionResult {
    let actual = Some(json!(response_time_ms));
    let expected = match spec.expected_value.trim().parse::<f64>() {
        Ok(n) => n,
        Err(_) => {
            return AssertionResult::fail(
                spec,
                actual,
                format!("Invalid numeric expected value: '{}'", spec.expected_value),
            )
        }
    };

    let passed = match spec.operator {
        AssertionOperator::LessThan => response_time_ms < expected,
        AssertionOperator::GreaterThan => response_time_ms > expected,
        AssertionOperator::Equals => (response_time_ms - expected).abs() < RESPONSE_TIME_TOLERANCE_MS,
        other => {
            return AssertionResult::fail(
                spec,
                actual,
                format!("Invalid operator for {}: {}", spec.kind, other),
            )
        }
    };

    if passed {
        AssertionResult::pass(spec, actual)
    } else {
        AssertionResult::fail(
            spec,
            actual,
            format!(
                "Expected response time {} {}ms, got {}ms",
                spec.operator, expected, response_time_ms
            ),
        )
    }
}

fn check_schema(spec: &AssertionSpec, body: &Value) -> AssertionResult {
    let schema: Value = match serde_json::from_str(&spec.expected_value) {
        Ok(v) => v,
        Err(_) => return AssertionResult::fail(spec, None, "Invalid JSON schema format"),
    };

    if matches_schema(body, &schema) {
        AssertionResult::pass(spec, Some(body.clone()))
    } else {
        AssertionResult::fail(
            spec,
            Some(body.clone()),
            "Response does not match expected schema",
        )
    }
}

fn check_regex(spec: &AssertionSpec, body: &Value) -> AssertionResult {
    let re = match Regex::new(&spec.expected_value) {
        Ok(re) => re,
        Err(_) => return AssertionResult::fail(spec, None, "Invalid regex pattern"),
    };

    let (actual, subject) = resolve_subject(spec.field_path.as_deref(), body);
    if re.is_match(&subject) {
        AssertionResult::pass(spec, actual)
    } else {
        AssertionResult::fail(
            spec,
            actual,
            format!(
                "Value does not match regex pattern: {}",
                spec.expected_value
            ),
        )
    }
}

fn check_contains(spec: &AssertionSpec, body: &Value) -> AssertionResult {
    let (actual, subject) = resolve_subject(spec.field_path.as_deref(), body);
    if subject.contains(&spec.expected_value) {
        AssertionResult::pass(spec, actual)
    } else {
        AssertionResult::fail(
            spec,
            actual,
            format!("Value does not contain: {}", spec.expected_value),
        )
    }
}

/// Resolve the value a regex/contains check runs against.
///
/// With a field path the subject is the looked-up value coerced to a string
/// (a missing path reads as `undefined` and simply fails to match). Without
/// one, the subject is the JSON serialization of the whole body.
fn resolve_subject(field_path: Option<&str>, body: &Value) -> (Option<Value>, String) {
    match field_path {
        Some(path) => {
            let value = lookup_path(body, path);
            let subject = coerce_to_string(value);
            (value.cloned(), subject)
        }
        None => {
            let text = body.to_string();
            (Some(Value::String(text.clone())), text)
        }
    }
}
