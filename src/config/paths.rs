//! Tool home discovery.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the tool home directory.
pub const HOME_ENV_VAR: &str = "SPECRIG_HOME";

/// Locations of specrig's configuration files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    home: PathBuf,
}

impl ConfigPaths {
    /// Use an explicit tool home.
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Discover the tool home.
    ///
    /// Resolution order:
    /// 1. `explicit` (from `--home`)
    /// 2. `$SPECRIG_HOME`
    /// 3. `~/.specrig`
    pub fn discover(explicit: Option<&Path>) -> Self {
        if let Some(home) = explicit {
            return Self::new(home);
        }

        if let Some(home) = std::env::var_os(HOME_ENV_VAR).filter(|v| !v.is_empty()) {
            return Self::new(home);
        }

        let home = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".specrig");
        Self::new(home)
    }

    /// The tool home directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Settings file: `<home>/config.yml`.
    pub fn settings_file(&self) -> PathBuf {
        self.home.join("config.yml")
    }

    /// Template overrides: `<home>/template.properties`.
    pub fn templates_file(&self) -> PathBuf {
        self.home.join("template.properties")
    }

    /// Installed plugins: `<home>/plugins`.
    pub fn plugins_dir(&self) -> PathBuf {
        self.home.join("plugins")
    }
}
