//! YAML deserialization for suite files.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assertions::AssertionSpec;

/// Error type for suite loading issues.
#[derive(Debug, thiserror::Error)]
pub enum SuiteError {
    #[error("Failed to read suite file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse suite file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Suite '{0}' defines no requests")]
    Empty(String),
}

/// A suite loaded from YAML.
#[derive(Debug, Deserialize)]
pub struct Suite {
    /// Human-readable name for this suite.
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Requests to execute, in order.
    pub requests: Vec<RequestDef>,
}

/// One HTTP request definition with its assertions.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestDef {
    /// Display name (defaults to "METHOD url").
    #[serde(default)]
    pub name: Option<String>,
    pub url: String,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Raw request body, sent as-is.
    #[serde(default)]
    pub body: Option<String>,
    /// Assertions graded against the observed response.
    #[serde(default)]
    pub assertions: Vec<AssertionSpec>,
}

fn default_method() -> String {
    "GET".to_string()
}

impl RequestDef {
    /// Display label for reports.
    pub fn label(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("{} {}", self.method, self.url))
    }
}

/// Load a suite from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the YAML is malformed, or
/// the suite lists no requests. A request with an unrecognized assertion
/// kind still loads; that assertion evaluates to a failure at run time.
pub fn load_suite(path: &Path) -> Result<Suite, SuiteError> {
    let content = fs::read_to_string(path).map_err(|source| SuiteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let suite: Suite = serde_yaml::from_str(&content).map_err(|source| SuiteError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if suite.requests.is_empty() {
        return Err(SuiteError::Empty(suite.name));
    }
    Ok(suite)
}
