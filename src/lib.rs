//! specrig - project scaffolding for test automation suites.
//!
//! specrig keeps a registry of named project templates (zip archives) and
//! initializes new projects from them.
//!
//! # Modules
//!
//! - [`archive`] - Zip extraction and directory mirroring
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Tool home, settings and the `template.properties` store
//! - [`error`] - Error types and result aliases
//! - [`plugin`] - Language runner plugin installation
//! - [`project`] - Project manifests and initialization from templates
//! - [`registry`] - Template registry, suggestions and downloads
//! - [`shell`] - Subprocess execution
//! - [`ui`] - Terminal output, spinners and tables
//! - [`version`] - Tool version parsing and ordering
//!
//! # Example
//!
//! ```
//! use specrig::config::PropertyStore;
//! use specrig::registry::TemplateManager;
//! use specrig::version::Version;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let store = PropertyStore::new(dir.path().join("template.properties"));
//! let templates = TemplateManager::with_store(store, Version::current());
//!
//! templates.update("internal", "https://templates.example.com/internal.zip").unwrap();
//! assert_eq!(
//!     templates.get("internal").unwrap(),
//!     "https://templates.example.com/internal.zip"
//! );
//! ```

pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod plugin;
pub mod project;
pub mod registry;
pub mod shell;
pub mod ui;
pub mod version;

pub use error::{Result, SpecrigError};
