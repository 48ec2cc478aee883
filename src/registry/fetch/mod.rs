//! Template archive fetching.
//!
//! [`TemplateDownloader`] is the seam project initialization uses to turn a
//! template URL into an extracted directory. [`HttpDownloader`] is the
//! production implementation.

pub mod http;

pub use http::HttpDownloader;

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Downloads a template archive and extracts it.
pub trait TemplateDownloader {
    /// Fetch the archive at `url` into `dest_dir` and unpack it.
    ///
    /// Returns the directory the archive was extracted into.
    fn download(&self, url: &str, dest_dir: &Path) -> Result<PathBuf>;
}
