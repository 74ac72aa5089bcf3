//! Check command implementation.
//!
//! Lexes each input file and reports whether it tokenizes cleanly. The first
//! lexical error of a failing file is rendered as a diagnostic.

use std::io::{self, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::commands::common::{display_name, error_messages, read_source, render_diagnostic};
use crate::commands::traits::{Command, CommandResult};
use crate::error::{Result, TerntError};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files to check.
    pub files: Vec<PathBuf>,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Checks every file, writing one status line per file to `out` and
    /// diagnostics to `diagnostics`.
    ///
    /// A file that cannot be read counts as failed; checking continues with
    /// the next one.
    pub fn check_to(
        &self,
        out: &mut impl Write,
        diagnostics: &mut impl Write,
    ) -> Result<CommandResult> {
        if self.args.files.is_empty() {
            return Err(TerntError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }

        let mut failed = 0;
        for path in &self.args.files {
            let source = match read_source(path) {
                Ok(source) => source,
                Err(err) => {
                    writeln!(out, "{}: failed", display_name(path))?;
                    writeln!(diagnostics, "error: {}", err)?;
                    failed += 1;
                    continue;
                },
            };

            match ternc_lex::tokenize(&source.text) {
                Ok(tokens) => {
                    writeln!(out, "{}: ok ({} tokens)", source.name, tokens.len())?;
                },
                Err(err) => {
                    let err = err.into_error();
                    debug!(file = %source.name, code = err.code(), "check failed");
                    writeln!(out, "{}: failed", source.name)?;
                    diagnostics.write_all(render_diagnostic(&source, &err).as_bytes())?;
                    failed += 1;
                },
            }
        }

        debug!(checked = self.args.files.len(), failed, "check finished");
        Ok(CommandResult::default()
            .with_items_processed(self.args.files.len())
            .with_items_failed(failed))
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CommandResult;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        debug!(command = Self::name(), files = self.args.files.len(), "running");
        let mut out = io::stdout().lock();
        let mut diagnostics = io::stderr().lock();
        let result = self.check_to(&mut out, &mut diagnostics)?;
        out.flush()?;
        Ok(result)
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command.
///
/// # Errors
///
/// [`TerntError::Validation`] naming how many files failed.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let result = CheckCommand::new(args).execute()?;
    debug!(
        files = result.items_processed,
        failed = result.items_failed,
        "check complete"
    );
    if result.success() {
        Ok(())
    } else {
        Err(TerntError::Validation(format!(
            "{} file(s) failed to lex",
            result.items_failed
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn check(files: Vec<PathBuf>) -> (Result<CommandResult>, String, String) {
        let mut out = Vec::new();
        let mut diagnostics = Vec::new();
        let result = CheckCommand::new(CheckArgs { files }).check_to(&mut out, &mut diagnostics);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(diagnostics).unwrap(),
        )
    }

    #[test]
    fn test_all_files_clean() {
        let dir = TempDir::new().unwrap();
        let a = write_file(&dir, "a.tern", "let a = 1");
        let b = write_file(&dir, "b.tern", "func f() = {\n}");

        let (result, out, diagnostics) = check(vec![a, b]);
        let result = result.unwrap();
        assert!(result.success());
        assert_eq!(result.items_processed, 2);
        assert!(out.contains("a.tern: ok (4 tokens)"));
        assert!(out.contains("b.tern: ok (8 tokens)"));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_failing_file_does_not_stop_others() {
        let dir = TempDir::new().unwrap();
        let bad = write_file(&dir, "bad.tern", "x = 1.");
        let good = write_file(&dir, "good.tern", "x = 1.5");

        let (result, out, diagnostics) = check(vec![bad, good]);
        let result = result.unwrap();
        assert_eq!(result.items_failed, 1);
        assert!(out.contains("bad.tern: failed"));
        assert!(out.contains("good.tern: ok"));
        assert!(diagnostics.contains("invalid numeric literal '1.'"));
    }

    #[test]
    fn test_missing_file_counts_as_failed() {
        let (result, out, diagnostics) = check(vec![PathBuf::from("/nonexistent/x.tern")]);
        assert_eq!(result.unwrap().items_failed, 1);
        assert!(out.contains("failed"));
        assert!(diagnostics.contains(error_messages::INPUT_PATH_NOT_EXIST));
    }

    #[test]
    fn test_no_files() {
        let (result, _, _) = check(Vec::new());
        assert!(matches!(result, Err(TerntError::Validation(_))));
    }
}
