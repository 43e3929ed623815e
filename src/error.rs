//! Error types for reply parsing

use thiserror::Error;

/// Errors that can occur while extracting a reply
#[derive(Error, Debug)]
pub enum ParseError {
    /// A single line is longer than the configured scan limit
    #[error("line {line} is too long: {length} bytes (maximum is {max})")]
    LineTooLong {
        /// 1-based line number in the normalized body
        line: usize,
        length: usize,
        max: usize,
    },

    /// Failed to read the body from its source
    #[error("Failed to read email body: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid parser configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Result type for reply parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;
