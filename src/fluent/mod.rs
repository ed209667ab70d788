//! Fluent assertion API over observed responses.
//!
//! A Jest-like surface for use inside Rust `#[test]` functions. Builders
//! construct an assertion spec, then either panic on failure
//! (`to_pass()`) or hand back the raw result (`evaluate()`).
//!
//! # Example
//!
//! ```rust,ignore
//! use apicheck::{expect, ObservedResponse};
//!
//! let response = client.get("/users/1")?;
//!
//! expect(&response).status().equals(200).to_pass();
//! expect(&response).field("user.email").matches(r"@example\.com$").to_pass();
//! expect(&response).body().contains("success").to_pass();
//! ```

mod builder;

pub use builder::{expect, BodyAssertion, NumericAssertion, ResponseExpectation, SpecAssertion};
