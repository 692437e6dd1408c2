//! Error types for the nextgencal crates.

use thiserror::Error;

/// Errors that can occur in nextgencal operations.
#[derive(Error, Debug)]
pub enum NextgencalError {
    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for nextgencal operations.
pub type NextgencalResult<T> = Result<T, NextgencalError>;
