//! Parser configuration

use crate::error::{ParseError, Result};
use serde::{Deserialize, Serialize};

/// Default configuration constants
pub mod defaults {
    /// Longest line the segmenter will scan, in bytes (64KB)
    pub const MAX_LINE_LENGTH: usize = 64 * 1024;
}

/// Limits applied while parsing a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Lines strictly longer than this many bytes fail the parse
    pub max_line_length: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_line_length: defaults::MAX_LINE_LENGTH,
        }
    }
}

impl ParserConfig {
    /// Create a configuration builder
    #[must_use]
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_line_length == 0 {
            return Err(ParseError::Configuration(
                "max_line_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for [`ParserConfig`]
#[derive(Debug, Default)]
pub struct ParserConfigBuilder {
    max_line_length: Option<usize>,
}

impl ParserConfigBuilder {
    /// Set the maximum scanned line length in bytes
    #[must_use]
    pub const fn max_line_length(mut self, max: usize) -> Self {
        self.max_line_length = Some(max);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ParserConfig> {
        let config = ParserConfig {
            max_line_length: self
                .max_line_length
                .unwrap_or(defaults::MAX_LINE_LENGTH),
        };
        config.validate()?;
        Ok(config)
    }
}
