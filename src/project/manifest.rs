//! Project manifest (`manifest.json`).
//!
//! A directory whose manifest names a language is a project. Templates
//! ship a manifest at their root, which is how the root is found inside
//! an extracted archive.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, SpecrigError};

/// File name of the project manifest.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Contents of `manifest.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Manifest {
    /// Language runner the project uses.
    pub language: String,

    /// Additional plugins the project uses.
    pub plugins: Vec<String>,
}

impl Manifest {
    /// Read the manifest in `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILE);
        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|e| SpecrigError::ConfigParseError {
            path,
            message: e.to_string(),
        })
    }
}

/// Whether `dir` already holds a project.
///
/// True only when the manifest parses and names a language.
pub fn is_project(dir: &Path) -> bool {
    match Manifest::load(dir) {
        Ok(manifest) => !manifest.language.is_empty(),
        Err(_) => false,
    }
}

/// Whether `dir` directly contains a manifest file.
pub fn has_manifest(dir: &Path) -> bool {
    dir.join(MANIFEST_FILE).is_file()
}
