//! Error types for the orchestration layer.
//!
//! Provides a single error type using `thiserror` for ergonomic error handling.

use std::io;
use thiserror::Error;
use serde::Serialize;

/// Main error type for the studio pipeline.
///
/// All errors in the pipeline are converted to this type before being
/// returned to the caller.
#[derive(Error, Debug, Serialize)]
pub enum StudioError {
    /// Dispatch was triggered before any operation mode was armed
    #[error("No operation mode is armed")]
    NoModeArmed,

    /// Dispatch was triggered before a source image was selected
    #[error("No source image has been selected")]
    NoSourceImage,

    /// A dispatch is already in flight; the trigger was rejected
    #[error("A dispatch is already in flight")]
    Busy,

    /// Reading or encoding the source image failed
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Backend command invocation failed
    #[error("Backend error: {0}")]
    Backend(String),

    /// File IO error
    #[error("IO error: {0}")]
    IO(String),
}

/// Convenience result type for pipeline operations.
pub type StudioResult<T> = Result<T, StudioError>;

// Helper methods for error creation
impl StudioError {
    pub fn encoding<T: Into<String>>(msg: T) -> Self {
        Self::Encoding(msg.into())
    }

    pub fn backend<T: Into<String>>(msg: T) -> Self {
        Self::Backend(msg.into())
    }
}

// Convert std::io::Error to StudioError
impl From<io::Error> for StudioError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}
