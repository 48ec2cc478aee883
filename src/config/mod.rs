//! Tool configuration for specrig.
//!
//! This module handles all aspects of configuration:
//! - Tool home discovery in [`paths`]
//! - User settings (`config.yml`) in [`settings`]
//! - The `key = value` property file format in [`properties`]
//!
//! # Example
//!
//! ```
//! use specrig::config::{ConfigPaths, Settings};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("config.yml"), "allow_insecure_download: true").unwrap();
//!
//! let paths = ConfigPaths::new(temp.path());
//! let settings = Settings::load_file(&paths.settings_file()).unwrap();
//! assert!(settings.allow_insecure_download);
//! ```
//!
//! # File Locations
//!
//! Everything lives under the tool home (`$SPECRIG_HOME`, or `~/.specrig`):
//! - `config.yml` - settings
//! - `template.properties` - user template overrides
//! - `plugins/` - installed language runners

pub mod paths;
pub mod properties;
pub mod settings;

pub use paths::{ConfigPaths, HOME_ENV_VAR};
pub use properties::{parse_properties, Property, PropertyStore};
pub use settings::{Settings, ALLOW_INSECURE_ENV_VAR};
