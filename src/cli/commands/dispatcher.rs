//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::config::load_config;
use crate::error::Result;
use crate::ui::PreflightTheme;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing its report to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Create a result from a process exit code.
    pub fn from_exit_code(exit_code: i32) -> Self {
        if exit_code == 0 {
            Self::success()
        } else {
            Self::failure(exit_code)
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    theme: PreflightTheme,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf, theme: PreflightTheme) -> Self {
        Self {
            project_root,
            theme,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Loads configuration, then routes the CLI subcommand to the
    /// appropriate command implementation.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        let config = load_config(cli.config.as_deref(), &self.project_root)?;

        match &cli.command {
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(config, args.clone(), self.theme.clone());
                cmd.execute(out)
            }
            Some(Commands::Quick(args)) => {
                let cmd = super::quick::QuickCommand::new(config, args.clone(), self.theme.clone());
                cmd.execute(out)
            }
            Some(Commands::Deps(args)) => {
                let cmd = super::deps::DepsCommand::new(config, args.clone());
                cmd.execute(out)
            }
            None => {
                let cmd = super::check::CheckCommand::new(
                    config,
                    CheckArgs::default(),
                    self.theme.clone(),
                );
                cmd.execute(out)
            }
        }
    }
}
