//! User settings loaded from `config.yml`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{Result, SpecrigError};

use super::ConfigPaths;

/// Environment variable that overrides `allow_insecure_download`.
pub const ALLOW_INSECURE_ENV_VAR: &str = "SPECRIG_ALLOW_INSECURE_DOWNLOAD";

/// Tool settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Permit template downloads over non-https URLs.
    pub allow_insecure_download: bool,

    /// Command used to install a missing language runner.
    ///
    /// `{plugin}` is replaced with the runner name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_install_command: Option<String>,

    /// Download timeout in seconds.
    pub download_timeout: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            allow_insecure_download: false,
            plugin_install_command: None,
            download_timeout: 300,
        }
    }
}

impl Settings {
    /// Load settings from the tool home, then apply environment overrides.
    pub fn load(paths: &ConfigPaths) -> Result<Self> {
        let mut settings = Self::load_file(&paths.settings_file())?;
        let env: HashMap<String, String> = std::env::vars().collect();
        settings.apply_env(&env);
        Ok(settings)
    }

    /// Load settings from a file. A missing file yields the defaults.
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).map_err(|e| SpecrigError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Apply overrides from environment variables.
    pub fn apply_env(&mut self, env: &HashMap<String, String>) {
        if let Some(value) = env.get(ALLOW_INSECURE_ENV_VAR) {
            match parse_bool(value) {
                Some(allow) => self.allow_insecure_download = allow,
                None => tracing::warn!(
                    "Ignoring {}={:?}: expected true or false",
                    ALLOW_INSECURE_ENV_VAR,
                    value
                ),
            }
        }
    }

    /// Download timeout as a duration.
    pub fn download_timeout(&self) -> Duration {
        Duration::from_secs(self.download_timeout)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
