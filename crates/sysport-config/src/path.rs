//! Path resolution for working, source and output directories.
//!
//! Catalog directories in the config are relative to the working directory,
//! which itself may be relative to where `sysport` was started.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Resolve an existing directory to an absolute, symlink-free path.
pub fn resolve_dir(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let resolved = path
        .canonicalize()
        .with_context(|| format!("Failed to resolve directory: {}", path.display()))?;
    if !resolved.is_dir() {
        anyhow::bail!("Not a directory: {}", path.display());
    }
    Ok(resolved)
}

/// Normalize path, falling back to the original if canonicalization fails.
///
/// Used for display; the path might not exist yet.
pub fn normalize_or_original(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Join `path` onto `base` unless it is already absolute.
pub fn resolve_against(base: impl AsRef<Path>, path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.as_ref().join(path)
    }
}

/// Switch the process working directory, once, at start-up.
///
/// Returns the absolute directory now in effect. The previous directory is
/// not remembered.
pub fn enter_workdir(dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = resolve_dir(dir)?;
    std::env::set_current_dir(&dir)
        .with_context(|| format!("Failed to enter working directory: {}", dir.display()))?;
    Ok(dir)
}
