//! Filesystem helpers for template archives.
//!
//! - [`unzip_archive`] unpacks a zip file
//! - [`mirror_dir`] copies a directory tree into another
//! - [`append_file`] concatenates one file onto another

use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::ZipArchive;

use crate::error::{Result, SpecrigError};

/// Extract a zip archive into `dest_dir/<archive stem>`.
///
/// Entries whose paths would escape the destination are rejected. Unix
/// permission bits stored in the archive are restored.
pub fn unzip_archive(archive: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let failed = |message: String| SpecrigError::DownloadOrExtractFailed {
        location: archive.display().to_string(),
        message,
    };

    let stem = archive
        .file_stem()
        .map(|s| s.to_os_string())
        .ok_or_else(|| failed("archive path has no file name".to_string()))?;
    let target = dest_dir.join(stem);

    let file = File::open(archive).map_err(|e| failed(e.to_string()))?;
    let mut zip = ZipArchive::new(file).map_err(|e| failed(e.to_string()))?;
    fs::create_dir_all(&target)?;

    for i in 0..zip.len() {
        let mut entry = zip.by_index(i).map_err(|e| failed(e.to_string()))?;
        let Some(relative) = entry.enclosed_name() else {
            return Err(failed(format!("unsafe entry path '{}'", entry.name())));
        };
        let out_path = target.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&out_path)?;
        io::copy(&mut entry, &mut out)?;
        restore_mode(&out_path, entry.unix_mode())?;
    }

    tracing::debug!("Extracted {} to {}", archive.display(), target.display());
    Ok(target)
}

#[cfg(unix)]
fn restore_mode(path: &Path, mode: Option<u32>) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    match mode {
        Some(mode) if mode & 0o777 != 0 => {
            fs::set_permissions(path, fs::Permissions::from_mode(mode & 0o777))
        }
        _ => Ok(()),
    }
}

#[cfg(not(unix))]
fn restore_mode(_path: &Path, _mode: Option<u32>) -> io::Result<()> {
    Ok(())
}

/// Paths written by [`mirror_dir`], relative to its destination.
#[derive(Debug, Default)]
pub struct MirrorLog {
    /// Every file copied, in walk order.
    pub copied: Vec<PathBuf>,
    /// Files and directories that did not exist before, in creation order.
    pub created: Vec<PathBuf>,
}

/// Copy every file under `src` to the same relative path under `dst`.
///
/// Relative paths listed in `skip` are not copied.
pub fn mirror_dir(src: &Path, dst: &Path, skip: &[&Path]) -> Result<MirrorLog> {
    let skip: HashSet<&Path> = skip.iter().copied().collect();
    let mut log = MirrorLog::default();
    fs::create_dir_all(dst)?;

    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry.map_err(|e| anyhow::anyhow!("Failed to walk {}: {}", src.display(), e))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| anyhow::anyhow!("{}", e))?
            .to_path_buf();
        if skip.contains(relative.as_path()) {
            continue;
        }

        create_parents(dst, &relative, &mut log.created)?;
        let target = dst.join(&relative);
        let existed = target.exists();
        fs::copy(entry.path(), &target)?;
        if !existed {
            log.created.push(relative.clone());
        }
        log.copied.push(relative);
    }

    Ok(log)
}

/// Create the missing parent directories of `relative` under `dst`.
fn create_parents(dst: &Path, relative: &Path, created: &mut Vec<PathBuf>) -> io::Result<()> {
    let Some(parent) = relative.parent() else {
        return Ok(());
    };

    let mut current = PathBuf::new();
    for component in parent.components() {
        current.push(component);
        let path = dst.join(&current);
        if !path.is_dir() {
            fs::create_dir(&path)?;
            created.push(current.clone());
        }
    }
    Ok(())
}

/// Append the contents of `src` to `dst`, separated by a newline if needed.
pub fn append_file(dst: &Path, src: &Path) -> Result<()> {
    let addition = fs::read_to_string(src)?;
    let existing = fs::read_to_string(dst)?;

    let mut out = OpenOptions::new().append(true).open(dst)?;
    if !existing.is_empty() && !existing.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.write_all(addition.as_bytes())?;
    Ok(())
}
