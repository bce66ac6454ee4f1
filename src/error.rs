//! Error types for BACPAC transfers.
//!
//! This module defines all error types using `thiserror`. Only failures that
//! must be surfaced to the user become errors; a cancelled dialog or an
//! inapplicable selection is a normal abort, not an error, and is modeled as
//! `Ok(None)` / `Ok(false)` by the callers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Malformed connection URL '{url}': {message}")]
    MalformedUrl { url: String, message: String },

    #[error("Failed to launch '{tool}': {message}")]
    LaunchFailure { tool: String, message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl TransferError {
    /// Create a malformed-URL error.
    pub fn malformed_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a launch-failure error for the external tool.
    pub fn launch_failure(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::LaunchFailure {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

/// Result type alias for transfer operations.
pub type TransferResult<T> = Result<T, TransferError>;
