//! Error handling module for the ternt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the ternt CLI application.
///
/// Lexical errors themselves are rendered as diagnostics where they occur;
/// the [`Lex`](TerntError::Lex) variant only marks that a source failed.
#[derive(Error, Debug)]
pub enum TerntError {
    /// Error when the configuration cannot be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be used.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a source could not be tokenized.
    #[error("Lexing failed: {0}")]
    Lex(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using TerntError.
pub type Result<T> = std::result::Result<T, TerntError>;
