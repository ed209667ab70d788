//! Observed responses and recorded-response files.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// The response triple an assertion is graded against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservedResponse {
    /// HTTP status code.
    pub status_code: u16,
    /// Wall-clock latency of the call, in milliseconds.
    #[serde(default)]
    pub response_time_ms: f64,
    /// Decoded response body. Non-JSON bodies are carried as a JSON string.
    #[serde(default)]
    pub body: Value,
}

impl ObservedResponse {
    pub fn new(status_code: u16, response_time_ms: f64, body: Value) -> Self {
        Self {
            status_code,
            response_time_ms,
            body,
        }
    }
}

/// A response captured to disk for offline analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedResponse {
    #[serde(flatten)]
    pub response: ObservedResponse,
    /// When the response was captured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

/// Load a recorded response from a JSON file.
pub fn load_recorded_response(path: &Path) -> Result<RecordedResponse> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read response file: {:?}", path))?;
    let recorded: RecordedResponse = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse response file: {:?}", path))?;
    Ok(recorded)
}
