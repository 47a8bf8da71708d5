//! The uninstall sequencer: a fixed, ordered list of cleanup steps run
//! against the known agent paths.

use crate::core::paths::AgentPaths;
use crate::core::{artifacts, crontab, service};
use crate::util::exec::CommandRunner;
use crate::util::journald;
use anyhow::Result;

/// Execution mode, set once at startup and read-only thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Describe the removals without performing them (the default).
    DryRun,
    /// Perform the removals.
    Apply,
}

impl Mode {
    pub fn is_apply(self) -> bool {
        matches!(self, Mode::Apply)
    }
}

/// Run the full uninstall sequence and print the summary.
///
/// Steps are independent; order only matters so that dependent directories
/// are already empty when their turn comes. Targets that are absent are
/// skipped silently, actions that fail against a present target are
/// reported as warnings and do not stop the run.
pub fn run(mode: Mode, paths: &AgentPaths, runner: &dyn CommandRunner) -> Result<()> {
    match mode {
        Mode::DryRun => println!("PatchMon agent uninstall (dry-run)"),
        Mode::Apply => println!("PatchMon agent uninstall (apply)"),
    }

    let mut found = false;
    found |= service::teardown(mode, paths, runner)?;
    found |= artifacts::remove_binary(mode, paths)?;
    found |= artifacts::remove_config_files(mode, paths)?;
    found |= artifacts::remove_logs(mode, paths)?;
    found |= crontab::scrub(mode, runner)?;
    artifacts::remove_residual_dirs(mode, paths)?;

    println!();
    match (mode, found) {
        (_, false) => println!("Nothing to do: no PatchMon agent artifacts were found."),
        (Mode::DryRun, true) => {
            println!("Dry-run complete. No changes were made.");
            println!("Run 'patchmon-uninstall apply' to remove the artifacts above.");
        }
        (Mode::Apply, true) => {
            println!("PatchMon agent removed.");
            journald::forward_line("patchmon-uninstall", "patchmon agent artifacts removed");
        }
    }

    Ok(())
}
