//! Project directories and their initialization from templates.
//!
//! - [`manifest`] - the `manifest.json` marking a project
//! - [`metadata`] - the `metadata.json` shipped inside a template
//! - [`init`] - [`ProjectInitializer`], which copies a template into a project

pub mod init;
pub mod manifest;
pub mod metadata;

pub use init::{find_template_root, ProjectInitializer};
pub use manifest::{is_project, Manifest, MANIFEST_FILE};
pub use metadata::{TemplateMetadata, METADATA_FILE};
