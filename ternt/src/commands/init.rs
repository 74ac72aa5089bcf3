//! Init command implementation.
//!
//! Writes a `ternt.toml` holding the default configuration, so that the
//! available settings are discoverable and easy to edit.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::commands::common::error_messages;
use crate::commands::traits::{Command, CommandResult};
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{Result, TerntError};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// Directory to write the configuration into (default: current directory).
    pub path: Option<PathBuf>,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Writes the configuration file and returns its path.
    pub fn write_config(&self) -> Result<PathBuf> {
        let target = self.target_dir();
        Self::validate_directory(&target)?;

        let config_path = target.join(CONFIG_FILE_NAME);
        if config_path.exists() && !self.args.force {
            return Err(TerntError::Validation(format!(
                "{}: {}",
                error_messages::CONFIG_EXISTS,
                config_path.display()
            )));
        }

        Config::default().save_to_path(&config_path)?;
        debug!(path = %config_path.display(), "wrote configuration");
        Ok(config_path)
    }

    fn target_dir(&self) -> PathBuf {
        self.args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn validate_directory(path: &Path) -> Result<()> {
        if path.exists() && !path.is_dir() {
            return Err(TerntError::Validation(format!(
                "{}: {}",
                error_messages::TARGET_NOT_DIR,
                path.display()
            )));
        }
        Ok(())
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    type Output = CommandResult;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        debug!(command = Self::name(), "running");
        let config_path = self.write_config()?;
        writeln!(io::stdout(), "created {}", config_path.display())?;
        Ok(CommandResult::default().with_items_processed(1))
    }

    fn name() -> &'static str {
        "init"
    }
}

/// Run the init command.
pub fn run_init(args: InitArgs) -> Result<()> {
    InitCommand::new(args).execute().map(|_| ())
}
