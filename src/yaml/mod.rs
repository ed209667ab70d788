//! YAML suite files: request definitions with their assertion lists.
//!
//! A suite file names a set of HTTP requests, each carrying the declarative
//! assertions to grade its response with. Loading lives in [`parser`],
//! evaluation plumbing in [`runner`].

mod parser;
mod runner;

pub use parser::{load_suite, RequestDef, Suite, SuiteError};
pub use runner::{run_request_assertions, summarize, SuiteSummary};
