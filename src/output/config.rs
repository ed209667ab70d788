//! Output configuration.

/// When a section of output is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Always,
    OnFailure,
    Never,
}

/// Controls what the formatter prints.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// When to print the response body preview.
    pub response: OutputMode,
    /// When to print flavor commentary.
    pub humor: OutputMode,
    pub colors_enabled: bool,
    /// Maximum characters of body preview before truncation.
    pub truncate_length: usize,
}

impl OutputConfig {
    /// Default: body only on failure, humor always, colors on.
    pub fn new() -> Self {
        Self {
            response: OutputMode::OnFailure,
            humor: OutputMode::Always,
            colors_enabled: true,
            truncate_length: 200,
        }
    }

    /// Verbose: always show the body.
    pub fn verbose() -> Self {
        Self {
            response: OutputMode::Always,
            ..Self::new()
        }
    }

    /// Suppress flavor commentary.
    pub fn without_humor(mut self) -> Self {
        self.humor = OutputMode::Never;
        self
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OutputConfig::new();
        assert_eq!(config.response, OutputMode::OnFailure);
        assert_eq!(config.humor, OutputMode::Always);
        assert!(config.colors_enabled);
    }

    #[test]
    fn test_verbose_shows_response() {
        assert_eq!(OutputConfig::verbose().response, OutputMode::Always);
    }

    #[test]
    fn test_without_humor() {
        assert_eq!(
            OutputConfig::new().without_humor().humor,
            OutputMode::Never
        );
    }
}
