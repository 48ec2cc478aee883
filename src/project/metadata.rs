//! Template metadata shipped as `metadata.json`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, SpecrigError};

/// File name of the template metadata.
pub const METADATA_FILE: &str = "metadata.json";

/// Describes a template and its post install hook.
///
/// Every field is optional and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TemplateMetadata {
    pub name: String,
    pub description: String,
    pub version: String,
    /// Command run in the new project after the files are copied.
    pub post_install_cmd: String,
    /// Message shown once initialization succeeds.
    pub post_install_msg: String,
}

impl TemplateMetadata {
    /// Read and decode a metadata file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| SpecrigError::MetadataParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| SpecrigError::MetadataParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Whether the template has a post install command.
    pub fn has_post_install(&self) -> bool {
        !self.post_install_cmd.trim().is_empty()
    }
}
