//! Fluent assertion builders.
//!
//! - [`expect`] - entry point, wraps an `ObservedResponse`
//! - [`ResponseExpectation`] - picks the aspect under test
//! - [`NumericAssertion`] / [`BodyAssertion`] - choose operator and expected value
//! - [`SpecAssertion`] - terminal step: panic (`to_pass`) or inspect (`evaluate`)

use std::fmt::Display;

use crate::assertions::{
    evaluate, AssertionKind, AssertionOperator, AssertionResult, AssertionSpec,
};
use crate::response::ObservedResponse;

/// Create an expectation on an observed response.
///
/// # Example
///
/// ```rust,ignore
/// expect(&response).status().equals(200).to_pass();
/// expect(&response).response_time().less_than(250).to_pass();
/// ```
pub fn expect(response: &ObservedResponse) -> ResponseExpectation {
    ResponseExpectation {
        response: response.clone(),
    }
}

/// Holds the response and creates aspect-specific builders.
#[derive(Debug, Clone)]
pub struct ResponseExpectation {
    response: ObservedResponse,
}

impl ResponseExpectation {
    /// Assert on the HTTP status code.
    pub fn status(&self) -> NumericAssertion {
        NumericAssertion {
            response: self.response.clone(),
            kind: AssertionKind::StatusCode,
        }
    }

    /// Assert on the observed latency in milliseconds.
    pub fn response_time(&self) -> NumericAssertion {
        NumericAssertion {
            response: self.response.clone(),
            kind: AssertionKind::ResponseTime,
        }
    }

    /// Assert on the whole response body.
    pub fn body(&self) -> BodyAssertion {
        BodyAssertion {
            response: self.response.clone(),
            field_path: None,
        }
    }

    /// Assert on the value at a dotted path into the body.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// expect(&response).field("user.email").contains("@example.com").to_pass();
    /// ```
    pub fn field(&self, path: impl Into<String>) -> BodyAssertion {
        BodyAssertion {
            response: self.response.clone(),
            field_path: Some(path.into()),
        }
    }
}

/// Builder for status-code and response-time comparisons.
#[derive(Debug, Clone)]
pub struct NumericAssertion {
    response: ObservedResponse,
    kind: AssertionKind,
}

impl NumericAssertion {
    pub fn equals(self, expected: impl Display) -> SpecAssertion {
        self.finish(AssertionOperator::Equals, expected)
    }

    pub fn not_equals(self, expected: impl Display) -> SpecAssertion {
        self.finish(AssertionOperator::NotEquals, expected)
    }

    pub fn greater_than(self, expected: impl Display) -> SpecAssertion {
        self.finish(AssertionOperator::GreaterThan, expected)
    }

    pub fn less_than(self, expected: impl Display) -> SpecAssertion {
        self.finish(AssertionOperator::LessThan, expected)
    }

    fn finish(self, operator: AssertionOperator, expected: impl Display) -> SpecAssertion {
        SpecAssertion {
            response: self.response,
            spec: AssertionSpec::new(self.kind, operator, expected.to_string()),
        }
    }
}

/// Builder for body-oriented checks (contains, regex, schema).
#[derive(Debug, Clone)]
pub struct BodyAssertion {
    response: ObservedResponse,
    field_path: Option<String>,
}

impl BodyAssertion {
    /// Literal, case-sensitive substring check.
    pub fn contains(self, expected: impl Into<String>) -> SpecAssertion {
        self.finish(
            AssertionKind::Contains,
            AssertionOperator::Contains,
            expected.into(),
        )
    }

    /// Regular expression match (unanchored unless the pattern anchors).
    pub fn matches(self, pattern: impl Into<String>) -> SpecAssertion {
        self.finish(
            AssertionKind::Regex,
            AssertionOperator::Matches,
            pattern.into(),
        )
    }

    /// Shallow structural match against a JSON template. Schema checks
    /// always run against the whole body; any field path set earlier in the
    /// chain is ignored by the evaluator.
    pub fn matches_schema(self, schema_json: impl Into<String>) -> SpecAssertion {
        self.finish(
            AssertionKind::JsonSchema,
            AssertionOperator::Equals,
            schema_json.into(),
        )
    }

    fn finish(
        self,
        kind: AssertionKind,
        operator: AssertionOperator,
        expected: String,
    ) -> SpecAssertion {
        let mut spec = AssertionSpec::new(kind, operator, expected);
        if let Some(path) = self.field_path {
            spec = spec.at_path(path);
        }
        SpecAssertion {
            response: self.response,
            spec,
        }
    }
}

/// A fully built assertion ready to run.
#[derive(Debug, Clone)]
pub struct SpecAssertion {
    response: ObservedResponse,
    spec: AssertionSpec,
}

impl SpecAssertion {
    /// Evaluate without panicking.
    pub fn evaluate(&self) -> AssertionResult {
        evaluate(&self.spec, &self.response)
    }

    /// Assert the check passes.
    ///
    /// # Panics
    ///
    /// Panics with the diagnostic message and a response summary if the
    /// check fails.
    pub fn to_pass(&self) {
        let result = self.evaluate();
        if !result.passed {
            panic!(
                "assertion failed: expected {}\n\n  reason: {}\n{}",
                self.spec.describe(),
                result
                    .error_message
                    .as_deref()
                    .unwrap_or("unknown reason"),
                self.format_response(),
            );
        }
    }

    /// Assert the check fails (useful for negative expectations).
    ///
    /// # Panics
    ///
    /// Panics if the check unexpectedly passes.
    pub fn to_fail(&self) {
        let result = self.evaluate();
        if result.passed {
            panic!(
                "assertion failed: expected {} to fail, but it passed\n{}",
                self.spec.describe(),
                self.format_response(),
            );
        }
    }

    fn format_response(&self) -> String {
        let body = self.response.body.to_string();
        let preview: String = if body.chars().count() > 200 {
            format!("{}...", body.chars().take(197).collect::<String>())
        } else {
            body
        };
        format!(
            "  response: status {} in {}ms\n  body: {}\n",
            self.response.status_code, self.response.response_time_ms, preview
        )
    }
}
