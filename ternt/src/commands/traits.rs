//! Command trait and common types for the ternt CLI.
//!
//! This module defines the standard command trait that all commands
//! implement to ensure consistency across the application.

use crate::error::Result;

/// Standard command trait that all ternt commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Command execution result with counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Number of items processed (tokens or files).
    pub items_processed: usize,

    /// Number of items that failed (lexical errors or files).
    pub items_failed: usize,
}

impl CommandResult {
    /// Returns true if nothing failed.
    pub fn success(&self) -> bool {
        self.items_failed == 0
    }

    /// Set the number of items processed.
    pub fn with_items_processed(mut self, count: usize) -> Self {
        self.items_processed = count;
        self
    }

    /// Set the number of items failed.
    pub fn with_items_failed(mut self, count: usize) -> Self {
        self.items_failed = count;
        self
    }
}
