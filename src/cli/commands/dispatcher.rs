//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::config::ConfigPaths;
use crate::error::Result;
use crate::registry::TemplateManager;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
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
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    paths: ConfigPaths,
}

impl CommandDispatcher {
    /// Create a new dispatcher for a project root and tool home.
    pub fn new(project_root: PathBuf, paths: ConfigPaths) -> Self {
        Self {
            project_root,
            paths,
        }
    }

    /// Dispatch and execute a command.
    ///
    /// The templates file is brought up to date first. Failing to do so
    /// only produces a warning.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match TemplateManager::new(&self.paths).merge() {
            Ok(true) => tracing::debug!("Updated {}", self.paths.templates_file().display()),
            Ok(false) => {}
            Err(e) => tracing::warn!("Failed to update template configuration: {}", e),
        }

        match &cli.command {
            Commands::Init(args) => {
                let cmd =
                    super::init::InitCommand::new(&self.project_root, &self.paths, args.clone());
                cmd.execute(ui)
            }
            Commands::Template(args) => {
                let cmd = super::template::TemplateCommand::new(&self.paths, args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
