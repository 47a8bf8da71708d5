//! Filesystem helpers for exact-path removal and directory sweeps.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Remove a file, treating "already gone" as success.
///
/// Returns whether the file was actually removed.
pub fn remove_file_if_present(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("remove {}", path.display())),
    }
}

/// True if `path` is a regular file with any execute bit set.
pub fn is_executable(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    #[cfg(unix)]
    {
        if let Ok(meta) = fs::metadata(path) {
            return (meta.permissions().mode() & 0o111) != 0;
        }
    }
    #[cfg(not(unix))]
    {
        return true;
    }
    false
}

/// True if the directory holds no entries at all.
pub fn dir_is_empty(dir: &Path) -> Result<bool> {
    let mut entries = fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))?;
    Ok(entries.next().is_none())
}

/// Remove empty subdirectories of `dir`, deepest first. A directory whose
/// only contents were empty directories is itself removed. `dir` itself is
/// left in place. Returns the removed directories.
pub fn prune_empty_dirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    prune(dir, &mut removed)?;
    Ok(removed)
}

// Returns whether `dir` is empty once its children have been pruned.
fn prune(dir: &Path, removed: &mut Vec<PathBuf>) -> Result<bool> {
    let mut empty = true;
    for entry in fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))? {
        let entry = entry.with_context(|| format!("read entry in {}", dir.display()))?;
        let path = entry.path();
        let is_dir = entry
            .file_type()
            .with_context(|| format!("stat {}", path.display()))?
            .is_dir();
        if is_dir && prune(&path, removed)? {
            fs::remove_dir(&path).with_context(|| format!("remove {}", path.display()))?;
            removed.push(path);
        } else {
            empty = false;
        }
    }
    Ok(empty)
}
