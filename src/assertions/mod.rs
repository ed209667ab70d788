//! Declarative assertions over observed HTTP responses.
//!
//! An [`AssertionSpec`] describes one check (status code, latency, body
//! shape, ...) and [`evaluate`] grades it against an
//! [`ObservedResponse`](crate::response::ObservedResponse). Evaluation is
//! pure and total: a malformed spec comes back as a failed result carrying a
//! diagnostic message, never as an `Err` or a panic, so a batch of checks can
//! always be evaluated to the end.

mod engine;
mod path;
mod schema;

pub use engine::evaluate;
pub use path::lookup_path;
pub use schema::matches_schema;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The aspect of a response an assertion inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssertionKind {
    /// Compare the HTTP status code numerically.
    StatusCode,
    /// Compare the observed latency in milliseconds.
    ResponseTime,
    /// Shallow structural match of the body against a JSON template.
    JsonSchema,
    /// Regular expression match against a body field or the whole body.
    Regex,
    /// Literal substring search in a body field or the whole body.
    Contains,
    /// Any unrecognized kind. Kept as a variant so a suite with a bad kind
    /// still loads and reports a failed assertion instead of a parse error.
    #[serde(other)]
    Unknown,
}

impl AssertionKind {
    /// The snake_case name used in suite files and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssertionKind::StatusCode => "status_code",
            AssertionKind::ResponseTime => "response_time",
            AssertionKind::JsonSchema => "json_schema",
            AssertionKind::Regex => "regex",
            AssertionKind::Contains => "contains",
            AssertionKind::Unknown => "unknown",
        }
    }

    /// All recognized kinds, in evaluation-table order.
    pub fn known() -> &'static [AssertionKind] {
        &[
            AssertionKind::StatusCode,
            AssertionKind::ResponseTime,
            AssertionKind::JsonSchema,
            AssertionKind::Regex,
            AssertionKind::Contains,
        ]
    }
}

impl std::fmt::Display for AssertionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The comparison relation an assertion applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssertionOperator {
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    Contains,
    Matches,
}

impl AssertionOperator {
    /// The snake_case name used in suite files and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssertionOperator::Equals => "equals",
            AssertionOperator::NotEquals => "not_equals",
            AssertionOperator::GreaterThan => "greater_than",
            AssertionOperator::LessThan => "less_than",
            AssertionOperator::Contains => "contains",
            AssertionOperator::Matches => "matches",
        }
    }
}

impl std::fmt::Display for AssertionOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operators each kind accepts. Adding a kind/operator combination is a data
/// change here, not a new branch in the evaluator.
pub fn allowed_operators(kind: AssertionKind) -> &'static [AssertionOperator] {
    use AssertionOperator::*;
    match kind {
        AssertionKind::StatusCode => &[Equals, NotEquals, GreaterThan, LessThan],
        AssertionKind::ResponseTime => &[LessThan, GreaterThan, Equals],
        AssertionKind::JsonSchema => &[Equals],
        AssertionKind::Regex => &[Matches],
        AssertionKind::Contains => &[Contains],
        AssertionKind::Unknown => &[],
    }
}

/// A single declarative check to run against a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssertionSpec {
    pub kind: AssertionKind,
    pub operator: AssertionOperator,
    /// Numeric kinds parse this; `json_schema` parses it as JSON; `regex`
    /// compiles it; `contains` uses it literally.
    pub expected_value: String,
    /// Dotted path into the response body (e.g. `user.email`). When absent,
    /// regex/contains checks run against the JSON-serialized whole body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_path: Option<String>,
}

impl AssertionSpec {
    pub fn new(
        kind: AssertionKind,
        operator: AssertionOperator,
        expected_value: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            operator,
            expected_value: expected_value.into(),
            field_path: None,
        }
    }

    /// Scope the check to a dotted path into the body.
    pub fn at_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    /// Human-readable one-line description, e.g. `contains 'success' at message`.
    pub fn describe(&self) -> String {
        let expected = match self.kind {
            AssertionKind::Contains | AssertionKind::Regex => {
                format!("'{}'", truncate(&self.expected_value, 60))
            }
            _ => truncate(&self.expected_value, 60),
        };
        let mut desc = format!("{} {} {}", self.kind, self.operator, expected);
        if let Some(path) = &self.field_path {
            desc.push_str(&format!(" at {}", path));
        }
        desc
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        s.to_string()
    }
}

/// Outcome of evaluating one assertion against one response.
///
/// `error_message` is present exactly when `passed` is false, whether the
/// spec was well-formed and mismatched or the spec itself was invalid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssertionResult {
    /// The spec that was evaluated, echoed back.
    pub spec: AssertionSpec,
    pub passed: bool,
    /// The value that was compared, when one could be resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl AssertionResult {
    pub(crate) fn pass(spec: &AssertionSpec, actual_value: Option<Value>) -> Self {
        Self {
            spec: spec.clone(),
            passed: true,
            actual_value,
            error_message: None,
        }
    }

    pub(crate) fn fail(
        spec: &AssertionSpec,
        actual_value: Option<Value>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            spec: spec.clone(),
            passed: false,
            actual_value,
            error_message: Some(message.into()),
        }
    }

    pub fn is_pass(&self) -> bool {
        self.passed
    }
}

#[cfg(test)]
mod tests;
