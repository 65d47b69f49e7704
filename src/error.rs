//! Error types for the stylint core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LintError {
    #[error("Configuration error for option '{option}': {message}")]
    Config { option: String, message: String },

    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },
}

pub type Result<T> = std::result::Result<T, LintError>;

impl LintError {
    pub fn config(option: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            option: option.into(),
            message: message.into(),
        }
    }

    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }
}
