//! Language runner plugins.
//!
//! A project needs the runner plugin for its manifest language. Project
//! initialization only asks two things of the plugin subsystem: is the
//! runner present, and install it if not.

use anyhow::anyhow;
use std::path::PathBuf;

use crate::config::{ConfigPaths, Settings};
use crate::error::{Result, SpecrigError};
use crate::shell::{execute, CommandOptions};

/// Placeholder replaced with the plugin name in install commands.
pub const PLUGIN_PLACEHOLDER: &str = "{plugin}";

/// Checks for and installs language runner plugins.
pub trait PluginInstaller {
    /// Whether a runner for `language` is installed.
    fn is_installed(&self, language: &str) -> bool;

    /// Install the runner for `language`.
    ///
    /// `silent` suppresses the installer's own output.
    fn install(&self, language: &str, silent: bool) -> Result<()>;
}

/// Plugins installed as directories under `<home>/plugins`.
#[derive(Debug, Clone)]
pub struct LocalPluginInstaller {
    plugins_dir: PathBuf,
    install_command: Option<String>,
}

impl LocalPluginInstaller {
    pub fn new(plugins_dir: impl Into<PathBuf>, install_command: Option<String>) -> Self {
        Self {
            plugins_dir: plugins_dir.into(),
            install_command,
        }
    }

    /// Installer for the tool home and settings.
    pub fn from_settings(paths: &ConfigPaths, settings: &Settings) -> Self {
        Self::new(paths.plugins_dir(), settings.plugin_install_command.clone())
    }

    /// The command that installs `language`, if one is configured.
    pub fn install_command_for(&self, language: &str) -> Option<String> {
        self.install_command
            .as_ref()
            .map(|cmd| cmd.replace(PLUGIN_PLACEHOLDER, language))
    }
}

impl PluginInstaller for LocalPluginInstaller {
    fn is_installed(&self, language: &str) -> bool {
        self.plugins_dir.join(language).is_dir()
    }

    fn install(&self, language: &str, silent: bool) -> Result<()> {
        let command = self.install_command_for(language).ok_or_else(|| {
            anyhow!(
                "No plugin_install_command configured; install the '{}' runner manually",
                language
            )
        })?;

        tracing::info!("Installing plugin {}", language);
        let options = CommandOptions {
            capture_stdout: silent,
            capture_stderr: silent,
            ..Default::default()
        };

        let result = execute(&command, &options)?;
        if !result.success {
            if silent && !result.stderr.is_empty() {
                tracing::debug!("{}", result.stderr.trim_end());
            }
            return Err(SpecrigError::CommandFailed {
                command,
                code: result.exit_code,
            });
        }

        Ok(())
    }
}
