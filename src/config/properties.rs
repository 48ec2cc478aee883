//! Persisted `key = value` property files.
//!
//! The format is line based:
//!
//! ```text
//! # Version 1.4.0
//! # This file contains specrig template configurations. Do not delete
//!
//! # Template download information for specrig java projects
//! java = https://github.com/specrig/template-java/releases/latest/download/java.zip
//! ```
//!
//! Lines starting with `#` or `!` are comments. The first `# Version <v>`
//! comment records the tool version that last wrote the file.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::error::Result;
use crate::version::Version;

/// Comment written below the version header.
const HEADER_COMMENT: &str = "This file contains specrig template configurations. Do not delete";

/// A single persisted setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub key: String,
    pub value: String,
    pub description: String,
}

impl Property {
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            description: description.into(),
        }
    }
}

/// Render properties in the persisted text format.
///
/// Output is deterministic: properties are written in the order given.
pub fn serialize<'a>(version: &Version, properties: impl IntoIterator<Item = &'a Property>) -> String {
    let mut out = format!("# Version {}\n# {}\n", version, HEADER_COMMENT);
    for prop in properties {
        out.push_str(&format!(
            "\n# {}\n{} = {}\n",
            prop.description, prop.key, prop.value
        ));
    }
    out
}

/// Parse `key = value` pairs, skipping comments and malformed lines.
///
/// Later duplicates win.
pub fn parse_properties(content: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let Some((key, value)) = line.split_once('=').or_else(|| line.split_once(':')) else {
            tracing::debug!("Skipping property line without separator: {}", line);
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        values.insert(key.to_string(), value.trim().to_string());
    }

    values
}

static VERSION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#\s*Version\s+(\S+)\s*$").unwrap());

/// Extract the version recorded in a `# Version <v>` header line.
pub fn parse_recorded_version(content: &str) -> Option<Version> {
    VERSION_LINE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// A property file on disk.
#[derive(Debug, Clone)]
pub struct PropertyStore {
    path: PathBuf,
}

impl PropertyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted pairs.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load(&self) -> Result<Option<HashMap<String, String>>> {
        Ok(self.read()?.map(|content| parse_properties(&content)))
    }

    /// The version recorded in the file header.
    ///
    /// `None` if the file is missing, unreadable, or has no parseable header.
    pub fn recorded_version(&self) -> Option<Version> {
        match self.read() {
            Ok(content) => content.as_deref().and_then(parse_recorded_version),
            Err(e) => {
                tracing::debug!("Cannot read {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Raw file text. Invalid UTF-8 is replaced rather than rejected.
    fn read(&self) -> Result<Option<String>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write `content` to the backing file, creating parent directories.
    ///
    /// Uses the write-to-temp-then-rename pattern to prevent corruption.
    pub fn persist(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("properties.tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Wrote {}", self.path.display());
        Ok(())
    }
}
