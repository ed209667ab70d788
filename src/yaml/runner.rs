//! Evaluate a request's assertion list against an observed response.
//!
//! Thin plumbing over [`evaluate`]: every assertion is graded, malformed or
//! not, so one bad spec never prevents the rest of a suite from running.

use crate::assertions::{evaluate, AssertionResult, AssertionSpec};
use crate::response::ObservedResponse;

/// Grade every assertion against the response, pairing each result with a
/// display description.
pub fn run_request_assertions(
    specs: &[AssertionSpec],
    response: &ObservedResponse,
) -> Vec<(String, AssertionResult)> {
    specs
        .iter()
        .map(|spec| (spec.describe(), evaluate(spec, response)))
        .collect()
}

/// Pass/fail counts across a set of results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuiteSummary {
    pub passed: usize,
    pub failed: usize,
}

impl SuiteSummary {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn record(&mut self, result: &AssertionResult) {
        if result.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Fold another summary into this one.
    pub fn merge(&mut self, other: SuiteSummary) {
        self.passed += other.passed;
        self.failed += other.failed;
    }
}

/// Count passes and failures over described results.
pub fn summarize<'a, I>(results: I) -> SuiteSummary
where
    I: IntoIterator<Item = &'a (String, AssertionResult)>,
{
    let mut summary = SuiteSummary::default();
    for (_, result) in results {
        summary.record(result);
    }
    summary
}
