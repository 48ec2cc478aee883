//! Template command implementation.
//!
//! `specrig template` lists, reads and sets template locations.

use crate::cli::args::{TemplateArgs, TemplateSubcommand};
use crate::config::ConfigPaths;
use crate::error::Result;
use crate::registry::TemplateManager;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The template command implementation.
pub struct TemplateCommand {
    templates: TemplateManager,
    args: TemplateArgs,
}

impl TemplateCommand {
    /// Create a new template command.
    pub fn new(paths: &ConfigPaths, args: TemplateArgs) -> Self {
        Self {
            templates: TemplateManager::new(paths),
            args,
        }
    }
}

impl Command for TemplateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.args.command {
            TemplateSubcommand::List { machine_readable } => {
                ui.message(&self.templates.list(*machine_readable)?);
            }
            TemplateSubcommand::Get { name } => {
                ui.message(&self.templates.get(name)?);
            }
            TemplateSubcommand::Set { name, location } => {
                self.templates.update(name, location)?;
                ui.success(&format!("Template '{}' set to {}", name, location));
            }
        }

        Ok(CommandResult::success())
    }
}
