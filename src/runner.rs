//! HTTP execution of suite requests.
//!
//! Performs the actual call, measures wall-clock latency, and decodes the
//! body into the JSON value the assertion evaluator consumes. Retry and
//! backoff policy is deliberately left to callers.

use anyhow::{anyhow, Context, Result};
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::{Duration, Instant};

use crate::response::ObservedResponse;
use crate::yaml::RequestDef;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Executes request definitions and captures observed responses.
pub struct HttpRunner {
    client: Client,
}

impl HttpRunner {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("apicheck/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// Execute one request and capture the response triple.
    ///
    /// Any HTTP status is a successful observation; only transport-level
    /// problems (DNS, connect, timeout) surface as errors.
    pub async fn execute(&self, request: &RequestDef) -> Result<ObservedResponse> {
        let method = parse_method(&request.method)?;

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let started = Instant::now();
        let response = builder
            .send()
            .await
            .with_context(|| format!("Request to {} failed", request.url))?;
        let status_code = response.status().as_u16();
        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", request.url))?;
        let response_time_ms = started.elapsed().as_secs_f64() * 1000.0;

        // Non-JSON bodies are still assertable as plain strings.
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));

        Ok(ObservedResponse {
            status_code,
            response_time_ms,
            body,
        })
    }
}

fn parse_method(method: &str) -> Result<Method> {
    Method::from_bytes(method.to_uppercase().as_bytes())
        .map_err(|_| anyhow!("Unknown HTTP method: '{}'", method))
}
