//! Error types for the fixture loader
//!
//! The loader performs no local recovery and no retries; every error is
//! surfaced to the caller unchanged.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the fixture loader
#[derive(Error, Debug)]
pub enum Error {
    // === Resource Errors ===
    #[error("Failed to read fixture file '{path}': {error}")]
    FileRead { path: String, error: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Dispatch Errors ===
    #[error("Command '{command}' failed: {message}")]
    Dispatch { command: String, message: String },
}

impl Error {
    /// Create a dispatch error for a command the backend rejected
    pub fn dispatch(command: &str, message: &str) -> Self {
        Self::Dispatch {
            command: command.to_string(),
            message: message.to_string(),
        }
    }
}
