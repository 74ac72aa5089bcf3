//! Tokens command implementation.
//!
//! This module lexes one source (a file or standard input) and prints its
//! tokens as text or JSON. Lexical errors are rendered as diagnostics on
//! stderr.

use std::io::{self, Write};
use std::path::PathBuf;

use ternc_lex::{LexError, Lexer, Token};
use tracing::debug;

use crate::commands::common::{
    display_name, read_source, render_diagnostic, OutputFormat, SourceFile, TokenRecord,
};
use crate::commands::traits::{Command, CommandResult};
use crate::error::{Result, TerntError};

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Source file path, or `-` for standard input.
    pub input: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// Continue past lexical errors.
    pub keep_going: bool,
    /// Print token positions.
    pub show_positions: bool,
    /// Print the end-of-input sentinel.
    pub include_eof: bool,
}

impl Default for TokensArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("-"),
            format: OutputFormat::Text,
            keep_going: false,
            show_positions: true,
            include_eof: false,
        }
    }
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Lexes `source`, writing tokens to `out` and diagnostics to `diagnostics`.
    ///
    /// Without `keep_going` nothing is written to `out` when lexing fails.
    pub fn tokenize_to(
        &self,
        source: &SourceFile,
        out: &mut impl Write,
        diagnostics: &mut impl Write,
    ) -> Result<CommandResult> {
        let (mut tokens, errors) = self.lex(&source.text);

        if errors.is_empty() || self.args.keep_going {
            if self.args.include_eof {
                tokens.push(Token::end_of_input());
            }
            self.write_tokens(&tokens, out)?;
        }
        for err in &errors {
            diagnostics.write_all(render_diagnostic(source, err).as_bytes())?;
        }

        debug!(
            source = %source.name,
            tokens = tokens.len(),
            errors = errors.len(),
            "tokenized"
        );
        Ok(CommandResult::default()
            .with_items_processed(tokens.len())
            .with_items_failed(errors.len()))
    }

    fn lex<'a>(&self, text: &'a str) -> (Vec<Token<'a>>, Vec<LexError>) {
        let mut lexer = Lexer::new(text);
        if self.args.keep_going {
            let recovered = lexer.tokenize_recovering();
            return (recovered.tokens, recovered.errors);
        }
        match lexer.tokenize() {
            Ok(tokens) => (tokens, Vec::new()),
            Err(err) => (Vec::new(), vec![err.into_error()]),
        }
    }

    fn write_tokens(&self, tokens: &[Token<'_>], out: &mut impl Write) -> Result<()> {
        let records: Vec<TokenRecord<'_>> = tokens
            .iter()
            .map(|token| TokenRecord::from_token(token, self.args.show_positions))
            .collect();

        match self.args.format {
            OutputFormat::Text => {
                for record in &records {
                    writeln!(out, "{}", record.to_text_line())?;
                }
            },
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &records)?;
                writeln!(out)?;
            },
        }
        Ok(())
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = CommandResult;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        debug!(command = Self::name(), input = %self.args.input.display(), "running");
        let source = read_source(&self.args.input)?;
        let mut out = io::stdout().lock();
        let mut diagnostics = io::stderr().lock();
        let result = self.tokenize_to(&source, &mut out, &mut diagnostics)?;
        out.flush()?;
        Ok(result)
    }

    fn name() -> &'static str {
        "tokens"
    }
}

/// Run the tokens command.
///
/// # Errors
///
/// [`TerntError::Lex`] if the source had lexical errors, after their
/// diagnostics have been printed.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let name = display_name(&args.input);
    let result = TokensCommand::new(args).execute()?;
    debug!(
        tokens = result.items_processed,
        errors = result.items_failed,
        "tokens complete"
    );
    if result.success() {
        Ok(())
    } else {
        Err(TerntError::Lex(name))
    }
}
