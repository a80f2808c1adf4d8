//! Error types.
//!
//! `BuildError` display strings are user-facing copy: the form shows them in
//! place of a password, so the wording must not change.

use thiserror::Error;

/// Reasons the password builder could not produce a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Password length must be a number greater than 0.")]
    InvalidLength,

    #[error("Password length must be at most {}.", crate::pass::MAX_LENGTH)]
    TooLong,

    #[error(
        "No characters available after exclusion. Please check your exclusion list or include more character types."
    )]
    EmptyPool,
}

/// Clipboard write failures.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write failed: {0}")]
    Write(String),
}

/// Logger setup failures.
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to create log file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to initialize logger: {0}")]
    Dispatch(#[from] log::SetLoggerError),
}

/// Command-line flag errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}
