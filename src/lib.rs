//! # apicheck
//!
//! A test harness for validating HTTP API responses against declarative
//! assertions.
//!
//! Suites of requests live in YAML files; each request carries a list of
//! assertions (status code, response time, JSON schema, regex, substring)
//! that are graded against the observed response. A fluent Jest-like API is
//! also available for use inside Rust's native `#[test]` framework.
//!
//! ## Quick Start
//!
//! ```rust
//! use apicheck::{evaluate, AssertionKind, AssertionOperator, AssertionSpec, ObservedResponse};
//! use serde_json::json;
//!
//! let response = ObservedResponse::new(200, 85.0, json!({"message": "success"}));
//!
//! let spec = AssertionSpec::new(AssertionKind::StatusCode, AssertionOperator::Equals, "200");
//! let result = evaluate(&spec, &response);
//! assert!(result.passed);
//! ```
//!
//! ## Fluent API
//!
//! ```rust
//! use apicheck::{expect, ObservedResponse};
//! use serde_json::json;
//!
//! let response = ObservedResponse::new(200, 85.0, json!({"message": "success"}));
//!
//! expect(&response).status().equals(200).to_pass();
//! expect(&response).field("message").contains("success").to_pass();
//! ```
//!
//! ## YAML Suites
//!
//! ```yaml
//! name: "User API"
//! requests:
//!   - name: "fetch user"
//!     url: "https://api.example.com/users/1"
//!     assertions:
//!       - kind: status_code
//!         operator: equals
//!         expected_value: "200"
//!       - kind: regex
//!         operator: matches
//!         expected_value: "@example\\.com$"
//!         field_path: user.email
//! ```
//!
//! Evaluation never aborts a batch: a malformed assertion (unknown kind,
//! wrong operator, unparsable expected value) comes back as a failed result
//! with a diagnostic message.

pub mod assertions;
#[cfg(feature = "yaml")]
pub mod config;
#[cfg(feature = "yaml")]
pub mod discovery;
pub mod fluent;
pub mod humor;
pub mod output;
pub mod response;
#[cfg(feature = "http")]
pub mod runner;
#[cfg(feature = "yaml")]
pub mod yaml;

pub use assertions::{
    allowed_operators, evaluate, AssertionKind, AssertionOperator, AssertionResult, AssertionSpec,
};
pub use fluent::expect;
pub use humor::{humorous_message, status_comment};
pub use output::{OutputConfig, OutputFormatter, OutputMode};
pub use response::{load_recorded_response, ObservedResponse, RecordedResponse};

#[cfg(feature = "yaml")]
pub use config::Config;
#[cfg(feature = "yaml")]
pub use discovery::discover_suites;
#[cfg(feature = "http")]
pub use runner::HttpRunner;
#[cfg(feature = "yaml")]
pub use yaml::{load_suite, run_request_assertions, summarize, RequestDef, Suite, SuiteSummary};
