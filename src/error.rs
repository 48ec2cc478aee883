//! Error types for specrig operations.
//!
//! This module defines [`SpecrigError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `SpecrigError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `SpecrigError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for specrig operations.
#[derive(Debug, Error)]
pub enum SpecrigError {
    /// A template location given to a validated update is not an absolute URI.
    #[error("Failed to add template '{name}'. The template location must be a valid (https) URI")]
    InvalidTemplateLocation { name: String },

    /// A template name cannot be stored as a property key.
    #[error("Failed to add template '{name}'. Template names must be non-empty and cannot contain whitespace, '=' or ':', or start with '#' or '!'")]
    InvalidTemplateName { name: String },

    /// No template is registered under the requested name.
    #[error("cannot find a template '{name}'{}", format_suggestions(.suggestions))]
    TemplateNotFound {
        name: String,
        suggestions: Vec<String>,
    },

    /// The target directory is already a project.
    #[error("{} is already a specrig project. Please try to initialize a project in a different location", .path.display())]
    AlreadyAProject { path: PathBuf },

    /// A template URL could not be parsed.
    #[error("Failed to parse template URL '{url}'. The template location must be a valid (https) URI")]
    InvalidTemplateUrl { url: String },

    /// A template URL uses an insecure scheme and insecure downloads are disabled.
    #[error("The url '{url}' is not secure and 'allow_insecure_download' is set to false")]
    InsecureDownloadRejected { url: String },

    /// Fetching or unpacking a template archive failed.
    #[error("Failed to download or extract template from {location}: {message}")]
    DownloadOrExtractFailed { location: String, message: String },

    /// The extracted archive has no directory containing a project manifest.
    #[error("The dir {} does not contain required files", .path.display())]
    MalformedTemplate { path: PathBuf },

    /// Template metadata could not be read or decoded.
    #[error("Failed to read template metadata at {}: {message}", .path.display())]
    MetadataParseError { path: PathBuf, message: String },

    /// The template's post install command failed.
    #[error("Failed to run post install command '{command}': {message}")]
    PostInstallFailed { command: String, message: String },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {}: {message}", .path.display())]
    ConfigParseError { path: PathBuf, message: String },

    /// Shell command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(
            ".\nThe most similar template names are\n\n\t{}",
            suggestions.join("\n\t")
        )
    }
}

/// Result type alias for specrig operations.
pub type Result<T> = std::result::Result<T, SpecrigError>;
