//! Ternt CLI - A command-line front end for the Tern lexer.
//!
//! This is the main entry point for the ternt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::{run_check, run_init, run_tokens, CheckArgs, InitArgs, TokensArgs};
use config::Config;
use error::{Result, TerntError};

/// Ternt - Tokenize and check Tern source files
///
/// Ternt runs the Tern lexer over source files, printing their tokens or
/// reporting lexical errors with their positions.
#[derive(Parser, Debug)]
#[command(name = "ternt")]
#[command(author = "Tern Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize and check Tern source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "TERNT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TERNT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "TERNT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the ternt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a source file
    ///
    /// Lexes a file, or standard input when the path is `-`, and prints one
    /// token per line or a JSON array.
    Tokens(TokensCommand),

    /// Check that source files tokenize cleanly
    ///
    /// Lexes every file and reports the first lexical error of each
    /// failing one. Exits with status 1 if any file fails.
    Check(CheckCommand),

    /// Write a default configuration file
    ///
    /// Creates `ternt.toml` with every setting at its default value in the
    /// specified or current directory.
    Init(InitCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file, or `-` for standard input
    input: PathBuf,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Keep going after lexical errors, reporting all of them
    #[arg(short, long)]
    keep_going: bool,

    /// Omit token positions
    #[arg(long)]
    no_positions: bool,

    /// Print the end-of-input token
    #[arg(long)]
    include_eof: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to write the configuration into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing configuration file
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the ternt CLI.
///
/// Exits with status 1 after printing the error if the command fails.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}

/// Loads configuration, initializes logging, and runs the selected command.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that token output on stdout stays machine-readable.
/// `RUST_LOG` is honoured unless verbose output is requested.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| TerntError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => run_tokens(tokens_args(args, &config)),
        Commands::Check(args) => run_check(CheckArgs { files: args.files }),
        Commands::Init(args) => run_init(InitArgs {
            force: args.force,
            path: args.path,
        }),
    }
}

/// Merge tokens arguments with the configuration; flags win.
fn tokens_args(args: TokensCommand, config: &Config) -> TokensArgs {
    TokensArgs {
        input: args.input,
        format: args.format.unwrap_or(config.output.format),
        keep_going: args.keep_going || config.lex.keep_going,
        show_positions: config.output.show_positions && !args.no_positions,
        include_eof: args.include_eof || config.output.include_eof,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::parse_from(["ternt", "tokens", "main.tern"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.input, PathBuf::from("main.tern"));
            assert_eq!(args.format, None);
            assert!(!args.keep_going);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_stdin() {
        let cli = Cli::parse_from(["ternt", "tokens", "-"]);
        assert!(matches!(cli.command, Commands::Tokens(ref args) if args.input == PathBuf::from("-")));
    }

    #[test]
    fn test_cli_parse_tokens_with_format() {
        let cli = Cli::parse_from(["ternt", "tokens", "main.tern", "--format", "json"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.format, Some(OutputFormat::Json));
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_rejects_unknown_format() {
        let result = Cli::try_parse_from(["ternt", "tokens", "main.tern", "-F", "yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_tokens_flags() {
        let cli = Cli::parse_from([
            "ternt",
            "tokens",
            "main.tern",
            "-k",
            "--no-positions",
            "--include-eof",
        ]);
        if let Commands::Tokens(args) = cli.command {
            assert!(args.keep_going);
            assert!(args.no_positions);
            assert!(args.include_eof);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["ternt", "check", "a.tern", "b.tern"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.files, [PathBuf::from("a.tern"), PathBuf::from("b.tern")]);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_check_requires_files() {
        assert!(Cli::try_parse_from(["ternt", "check"]).is_err());
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["ternt", "init", "--path", "/tmp/project", "--force"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.path, Some(PathBuf::from("/tmp/project")));
            assert!(args.force);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_cli_parse_global_verbose() {
        let cli = Cli::parse_from(["ternt", "--verbose", "check", "a.tern"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_global_config() {
        let cli = Cli::parse_from(["ternt", "--config", "/path/to/ternt.toml", "check", "a.tern"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/ternt.toml")));
    }

    #[test]
    fn test_cli_parse_global_no_color() {
        let cli = Cli::parse_from(["ternt", "check", "a.tern", "--no-color"]);
        assert!(cli.no_color);
    }

    #[test]
    fn test_tokens_args_use_config_defaults() {
        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config.output.show_positions = false;
        config.lex.keep_going = true;

        let cli = Cli::parse_from(["ternt", "tokens", "main.tern"]);
        let Commands::Tokens(command) = cli.command else {
            panic!("Expected Tokens command");
        };
        let args = tokens_args(command, &config);

        assert_eq!(args.format, OutputFormat::Json);
        assert!(!args.show_positions);
        assert!(args.keep_going);
        assert!(!args.include_eof);
    }

    #[test]
    fn test_tokens_args_flags_override_config() {
        let mut config = Config::default();
        config.output.format = OutputFormat::Json;

        let cli = Cli::parse_from(["ternt", "tokens", "main.tern", "-F", "text", "--no-positions"]);
        let Commands::Tokens(command) = cli.command else {
            panic!("Expected Tokens command");
        };
        let args = tokens_args(command, &config);

        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.show_positions);
    }
}
