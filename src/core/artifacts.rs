//! Steps 2-4 and 6: removal of the agent binary, config/credential files,
//! log files, and residual empty directories.
//!
//! Only the exact known paths are ever deleted. Anything else found next to
//! them survives and keeps its directory alive.

use crate::core::paths::AgentPaths;
use crate::core::sequencer::Mode;
use crate::util::fs as agent_fs;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Step 2: remove the binary if it sits at the exact known path and is
/// executable.
pub fn remove_binary(mode: Mode, paths: &AgentPaths) -> Result<bool> {
    if !agent_fs::is_executable(&paths.binary) {
        return Ok(false);
    }
    remove_one(mode, &paths.binary, "agent binary");
    Ok(true)
}

/// Step 3: remove the exact config/credential files. The config directory
/// itself is left alone here; step 6 deals with it.
pub fn remove_config_files(mode: Mode, paths: &AgentPaths) -> Result<bool> {
    let mut found = false;
    for file in paths.config_files() {
        if !file.is_file() {
            continue;
        }
        found = true;
        remove_one(mode, file, "config file");
    }
    Ok(found)
}

/// Step 4: remove the exact log files, then the log directory once no
/// files remain in it (subdirectories are ignored for that check).
pub fn remove_logs(mode: Mode, paths: &AgentPaths) -> Result<bool> {
    let mut found = false;
    for file in &paths.log_files {
        if !file.is_file() {
            continue;
        }
        found = true;
        remove_one(mode, file, "log file");
    }

    if found && paths.log_dir.is_dir() && count_foreign_files(&paths.log_dir, &paths.log_files)? == 0 {
        if mode.is_apply() {
            println!("removing empty log directory {}", paths.log_dir.display());
            if let Err(e) = fs::remove_dir(&paths.log_dir) {
                eprintln!("warning: remove {}: {}", paths.log_dir.display(), e);
            }
        } else {
            println!("would remove log directory {} (no other files)", paths.log_dir.display());
        }
    }

    Ok(found)
}

/// Step 6: prune empty subdirectories under the config directory, then
/// remove the directory itself if nothing is left in it.
pub fn remove_residual_dirs(mode: Mode, paths: &AgentPaths) -> Result<()> {
    if !paths.config_dir.is_dir() {
        return Ok(());
    }

    if !mode.is_apply() {
        println!(
            "would prune empty directories under {} and remove it if empty",
            paths.config_dir.display()
        );
        return Ok(());
    }

    for dir in agent_fs::prune_empty_dirs(&paths.config_dir)? {
        println!("removed empty directory {}", dir.display());
    }

    if agent_fs::dir_is_empty(&paths.config_dir)? {
        fs::remove_dir(&paths.config_dir)
            .with_context(|| format!("remove {}", paths.config_dir.display()))?;
        println!("removed empty config directory {}", paths.config_dir.display());
    }

    Ok(())
}

fn remove_one(mode: Mode, path: &Path, what: &str) {
    if mode.is_apply() {
        println!("removing {} {}", what, path.display());
        if let Err(e) = agent_fs::remove_file_if_present(path) {
            eprintln!("warning: {}", e);
        }
    } else {
        println!("would remove {} {}", what, path.display());
    }
}

// Files in `dir` other than the listed ones. Subdirectories do not count.
fn count_foreign_files(dir: &Path, ours: &[std::path::PathBuf]) -> Result<usize> {
    let mut count = 0;
    for entry in fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))? {
        let entry = entry.with_context(|| format!("read entry in {}", dir.display()))?;
        let path = entry.path();
        let is_dir = entry
            .file_type()
            .with_context(|| format!("stat {}", path.display()))?
            .is_dir();
        if !is_dir && !ours.contains(&path) {
            count += 1;
        }
    }
    Ok(count)
}
