//! Suite file discovery using glob patterns and walkdir.

use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;

/// A suite-file name pattern, compiled once per discovery run.
///
/// `glob::Pattern` has no brace support, so `*.{yaml,yml}` is expanded into
/// one pattern per alternative up front.
struct SuitePattern {
    patterns: Vec<glob::Pattern>,
}

impl SuitePattern {
    fn compile(raw: &str) -> Self {
        let patterns = expand_braces(raw)
            .iter()
            .filter_map(|p| glob::Pattern::new(p).ok())
            .collect();
        Self { patterns }
    }

    fn matches(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.patterns.iter().any(|p| p.matches(file_name))
    }
}

/// Discover suite files in a directory according to config.
pub fn discover_suites(dir: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let pattern = SuitePattern::compile(&config.suite_pattern);
    let mut suites = Vec::new();

    let walker = if config.recursive {
        WalkDir::new(dir)
    } else {
        WalkDir::new(dir).max_depth(1)
    };

    for entry in walker
        .into_iter()
        .filter_entry(|e| !is_excluded(e.path(), &config.exclude))
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && pattern.matches(path) {
            suites.push(path.to_path_buf());
        }
    }

    suites.sort();
    Ok(suites)
}

/// Expand brace expressions: "*.{yaml,yml}" -> ["*.yaml", "*.yml"]
fn expand_braces(pattern: &str) -> Vec<String> {
    let Some(start) = pattern.find('{') else {
        return vec![pattern.to_string()];
    };
    let Some(end) = pattern[start..].find('}') else {
        return vec![pattern.to_string()];
    };

    let prefix = &pattern[..start];
    let suffix = &pattern[start + end + 1..];
    let alternatives = &pattern[start + 1..start + end];

    alternatives
        .split(',')
        .flat_map(|alt| expand_braces(&format!("{prefix}{alt}{suffix}")))
        .collect()
}

/// Check if a path contains an excluded directory.
fn is_excluded(path: &Path, excludes: &[String]) -> bool {
    path.components().any(|c| {
        matches!(c, std::path::Component::Normal(name)
            if name.to_str().map_or(false, |s| excludes.iter().any(|e| e == s)))
    })
}
