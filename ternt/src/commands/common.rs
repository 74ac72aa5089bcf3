//! Common types and utilities for ternt commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use ternc_lex::{LexError, Token, TokenKind};

use crate::error::{Result, TerntError};

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

// ============================================================================
// Output Format
// ============================================================================

/// Supported token output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line
    #[default]
    Text,
    /// A JSON array of token objects
    Json,
}

// ============================================================================
// Source Input
// ============================================================================

/// A source buffer and the name it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Display name: the path as given, or `<stdin>`.
    pub name: String,
    /// Full text of the source.
    pub text: String,
}

impl SourceFile {
    /// Creates a source from an in-memory buffer.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Name a source path is reported under.
pub fn display_name(path: &Path) -> String {
    if path == Path::new(STDIN_PATH) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Reads a source file, or standard input when `path` is `-`.
///
/// # Errors
///
/// [`TerntError::FileOperation`] if the path does not exist or is not a
/// file, [`TerntError::Io`] if it cannot be read as UTF-8.
pub fn read_source(path: &Path) -> Result<SourceFile> {
    if path == Path::new(STDIN_PATH) {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(SourceFile::new(display_name(path), text));
    }

    if !path.exists() {
        return Err(TerntError::FileOperation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(TerntError::FileOperation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    let text = std::fs::read_to_string(path)?;
    Ok(SourceFile::new(display_name(path), text))
}

// ============================================================================
// Token Rendering
// ============================================================================

/// Flat, serializable view of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenRecord<'a> {
    /// Token kind, e.g. `LEFT_ARROW`.
    pub kind: TokenKind,
    /// The exact lexeme.
    pub text: &'a str,
    /// Zero-based line, when positions are shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// Zero-based column, when positions are shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

impl<'a> TokenRecord<'a> {
    /// Builds a record, dropping the position unless `show_positions`.
    pub fn from_token(token: &Token<'a>, show_positions: bool) -> Self {
        let position = token.position.filter(|_| show_positions);
        Self {
            kind: token.kind,
            text: token.text,
            line: position.map(|p| p.line),
            column: position.map(|p| p.column),
        }
    }

    /// Formats the record as one line of text output.
    ///
    /// The lexeme is quoted and escaped so that newline tokens stay on one
    /// line.
    pub fn to_text_line(&self) -> String {
        let text = format!("\"{}\"", self.text.escape_debug());
        match (self.line, self.column) {
            (Some(line), Some(column)) => {
                let position = format!("{}:{}", line, column);
                format!("{:<8} {:<16} {}", position, self.kind.name(), text)
            },
            _ => format!("{:<16} {}", self.kind.name(), text),
        }
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Renders a lexical error against its source.
///
/// The location line and gutter use one-based line and column numbers. The
/// caret run covers the offending lexeme, clipped to the end of its line.
///
/// ```text
/// error: invalid numeric literal '3..4' at 1:8
///  --> main.tern:2:9
///   |
/// 2 |    x <- 3..4
///   |         ^^^^
/// ```
pub fn render_diagnostic(source: &SourceFile, err: &LexError) -> String {
    let position = err.position();
    let line_number = position.line as usize + 1;
    let column = position.column as usize;
    let line_text = source
        .text
        .split('\n')
        .nth(position.line as usize)
        .unwrap_or("");

    let available = line_text.chars().count().saturating_sub(column);
    let width = err.lexeme_len().min(available).max(1);
    let pad = " ".repeat(line_number.to_string().len());

    format!(
        "error: {err}\n{pad}--> {name}:{line}:{col}\n{pad} |\n{line} | {text}\n{pad} | {indent}{carets}\n",
        err = err,
        pad = pad,
        name = source.name,
        line = line_number,
        col = column + 1,
        text = line_text,
        indent = " ".repeat(column),
        carets = "^".repeat(width),
    )
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file";

    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when target path is not a directory.
    pub const TARGET_NOT_DIR: &str = "Target path is not a directory";

    /// Error when a configuration file would be overwritten.
    pub const CONFIG_EXISTS: &str = "Configuration file already exists";
}
