//! Formatting for assertion results and response previews.

use crate::assertions::AssertionResult;
use crate::humor::{humorous_message, status_comment};
use crate::output::config::{OutputConfig, OutputMode};
use crate::response::ObservedResponse;

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Formatter for per-assertion lines, summaries, and response previews.
pub struct OutputFormatter {
    config: OutputConfig,
}

impl OutputFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(OutputConfig::new())
    }

    fn should_show(&self, mode: OutputMode, all_passed: bool) -> bool {
        match mode {
            OutputMode::Always => true,
            OutputMode::OnFailure => !all_passed,
            OutputMode::Never => false,
        }
    }

    /// Format one result line: `✓ description` or `✗ description` plus the
    /// failure reason on its own line.
    pub fn format_result_line(&self, description: &str, result: &AssertionResult) -> String {
        if result.passed {
            if self.config.colors_enabled {
                format!("  {}✓{} {}", GREEN, RESET, description)
            } else {
                format!("  ✓ {}", description)
            }
        } else {
            let reason = result
                .error_message
                .as_deref()
                .unwrap_or("unknown reason");
            if self.config.colors_enabled {
                format!("  {}✗{} {}\n    └─ {}", RED, RESET, description, reason)
            } else {
                format!("  ✗ {}\n    └─ {}", description, reason)
            }
        }
    }

    /// Print one line per result, with an optional humor tail per failure.
    pub fn print_results(&self, results: &[(String, AssertionResult)]) {
        for (description, result) in results {
            println!("{}", self.format_result_line(description, result));
            if self.should_show(self.config.humor, result.passed) {
                let remark = humorous_message(result);
                if self.config.colors_enabled {
                    println!("    {}{}{}", DIM, remark, RESET);
                } else {
                    println!("    {}", remark);
                }
            }
        }
    }

    /// Print the `Results: passed/total` summary line.
    pub fn print_summary(&self, passed: usize, failed: usize) {
        let total = passed + failed;
        println!();
        if self.config.colors_enabled {
            let color = if failed == 0 { GREEN } else { RED };
            println!("{}Results: {}/{} passed{}", color, passed, total, RESET);
        } else {
            println!("Results: {}/{} passed", passed, total);
        }
    }

    /// Print the status line for an observed response, with commentary.
    pub fn print_response_status(&self, response: &ObservedResponse) {
        println!(
            "  status {} in {:.0}ms",
            response.status_code, response.response_time_ms
        );
        if self.config.humor != OutputMode::Never {
            let comment = status_comment(response.status_code, response.response_time_ms);
            if self.config.colors_enabled {
                println!("  {}{}{}", DIM, comment, RESET);
            } else {
                println!("  {}", comment);
            }
        }
    }

    /// Print a truncated body preview if the output mode allows it.
    pub fn print_response_body(&self, response: &ObservedResponse, all_passed: bool) {
        if !self.should_show(self.config.response, all_passed) {
            return;
        }

        let body = response.body.to_string();
        let preview = self.truncate(&body);
        println!();
        if self.config.colors_enabled {
            println!("{}Response body:{}", YELLOW, RESET);
        } else {
            println!("Response body:");
        }
        println!("  {}", preview);
    }

    fn truncate(&self, s: &str) -> String {
        if s.chars().count() > self.config.truncate_length {
            let cut: String = s
                .chars()
                .take(self.config.truncate_length.saturating_sub(3))
                .collect();
            format!("{}...", cut)
        } else {
            s.to_string()
        }
    }
}
