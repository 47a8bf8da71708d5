//! Step 1: systemd unit teardown and stray process termination.
//!
//! Every action here is independently best-effort: a failed stop or disable
//! is reported as a warning and does not stop later actions.

use crate::constants::{PROCESS_PATTERN, UNIT_NAME};
use crate::core::paths::AgentPaths;
use crate::core::sequencer::Mode;
use crate::util::exec::{argv, CommandRunner};
use crate::util::fs as agent_fs;
use anyhow::Result;

/// Tear down the agent's systemd unit and kill any stray agent process.
///
/// Returns whether any service artifact was found.
pub fn teardown(mode: Mode, paths: &AgentPaths, runner: &dyn CommandRunner) -> Result<bool> {
    let mut found = false;

    if unit_installed(runner)? {
        found = true;
        println!("Found systemd unit {}", UNIT_NAME);

        if unit_active(runner)? {
            if mode.is_apply() {
                println!("  stopping {}", UNIT_NAME);
                best_effort(runner, "systemctl", &["stop", UNIT_NAME])?;
            } else {
                println!("  would stop {}", UNIT_NAME);
            }
        }

        if mode.is_apply() {
            println!("  disabling {}", UNIT_NAME);
            best_effort(runner, "systemctl", &["disable", UNIT_NAME])?;
        } else {
            println!("  would disable {}", UNIT_NAME);
        }

        for unit_file in &paths.unit_files {
            if !unit_file.is_file() {
                continue;
            }
            if mode.is_apply() {
                println!("  removing {}", unit_file.display());
                if let Err(e) = agent_fs::remove_file_if_present(unit_file) {
                    eprintln!("warning: {}", e);
                }
            } else {
                println!("  would remove {}", unit_file.display());
            }
        }

        if mode.is_apply() {
            println!("  reloading systemd unit files");
            best_effort(runner, "systemctl", &["daemon-reload"])?;
        } else {
            println!("  would reload systemd unit files");
        }
    }

    if process_running(runner)? {
        found = true;
        println!("Found running agent process ({})", PROCESS_PATTERN);
        if mode.is_apply() {
            println!("  terminating it");
            best_effort(runner, "pkill", &["-f", PROCESS_PATTERN])?;
        } else {
            println!("  would terminate it");
        }
    }

    Ok(found)
}

fn unit_installed(runner: &dyn CommandRunner) -> Result<bool> {
    let out = runner.run(
        "systemctl",
        &argv(&["list-unit-files", "--no-legend", UNIT_NAME]),
    )?;
    Ok(out.success && !out.stdout.trim().is_empty())
}

fn unit_active(runner: &dyn CommandRunner) -> Result<bool> {
    let out = runner.run("systemctl", &argv(&["is-active", "--quiet", UNIT_NAME]))?;
    Ok(out.success)
}

fn process_running(runner: &dyn CommandRunner) -> Result<bool> {
    // pgrep exits non-zero when nothing matches; that is "not present".
    let out = runner.run("pgrep", &argv(&["-f", PROCESS_PATTERN]))?;
    Ok(out.success)
}

// Non-zero exit becomes a warning; only a spawn failure propagates.
fn best_effort(runner: &dyn CommandRunner, program: &str, args: &[&str]) -> Result<()> {
    let out = runner.run(program, &argv(args))?;
    if !out.success {
        eprintln!(
            "warning: {} {} failed: {}",
            program,
            args.join(" "),
            out.stderr.trim()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::exec::{CommandOutput, MockCommandRunner};
    use std::path::Path;

    fn ok(stdout: &str) -> CommandOutput {
        CommandOutput {
            success: true,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    fn failed() -> CommandOutput {
        CommandOutput {
            success: false,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    fn expect_run(mock: &mut MockCommandRunner, program: &'static str, args: &[&str], out: CommandOutput) {
        let args = argv(args);
        mock.expect_run()
            .withf(move |p, a| p == program && a == args)
            .times(1)
            .returning(move |_, _| Ok(out.clone()));
    }

    #[test]
    fn test_nothing_installed_nothing_running() {
        let paths = AgentPaths::from_root(Path::new("/nonexistent-fixture"));
        let mut mock = MockCommandRunner::new();
        expect_run(
            &mut mock,
            "systemctl",
            &["list-unit-files", "--no-legend", UNIT_NAME],
            ok(""),
        );
        expect_run(&mut mock, "pgrep", &["-f", PROCESS_PATTERN], failed());

        let found = teardown(Mode::Apply, &paths, &mock).unwrap();
        assert!(!found);
    }

    #[test]
    fn test_dry_run_only_queries() {
        let paths = AgentPaths::from_root(Path::new("/nonexistent-fixture"));
        let mut mock = MockCommandRunner::new();
        expect_run(
            &mut mock,
            "systemctl",
            &["list-unit-files", "--no-legend", UNIT_NAME],
            ok("patchmon-agent.service enabled enabled\n"),
        );
        expect_run(&mut mock, "systemctl", &["is-active", "--quiet", UNIT_NAME], ok(""));
        expect_run(&mut mock, "pgrep", &["-f", PROCESS_PATTERN], ok("4242\n"));

        // No stop/disable/daemon-reload/pkill expectations: the mock panics
        // if dry-run issues any mutating call.
        let found = teardown(Mode::DryRun, &paths, &mock).unwrap();
        assert!(found);
    }

    #[test]
    fn test_apply_tears_down_installed_active_unit() {
        let paths = AgentPaths::from_root(Path::new("/nonexistent-fixture"));
        let mut mock = MockCommandRunner::new();
        expect_run(
            &mut mock,
            "systemctl",
            &["list-unit-files", "--no-legend", UNIT_NAME],
            ok("patchmon-agent.service enabled enabled\n"),
        );
        expect_run(&mut mock, "systemctl", &["is-active", "--quiet", UNIT_NAME], ok(""));
        expect_run(&mut mock, "systemctl", &["stop", UNIT_NAME], ok(""));
        expect_run(&mut mock, "systemctl", &["disable", UNIT_NAME], ok(""));
        expect_run(&mut mock, "systemctl", &["daemon-reload"], ok(""));
        expect_run(&mut mock, "pgrep", &["-f", PROCESS_PATTERN], failed());

        let found = teardown(Mode::Apply, &paths, &mock).unwrap();
        assert!(found);
    }

    #[test]
    fn test_apply_continues_past_failed_disable() {
        let paths = AgentPaths::from_root(Path::new("/nonexistent-fixture"));
        let mut mock = MockCommandRunner::new();
        expect_run(
            &mut mock,
            "systemctl",
            &["list-unit-files", "--no-legend", UNIT_NAME],
            ok("patchmon-agent.service static -\n"),
        );
        expect_run(&mut mock, "systemctl", &["is-active", "--quiet", UNIT_NAME], failed());
        expect_run(&mut mock, "systemctl", &["disable", UNIT_NAME], failed());
        // daemon-reload still runs after the failed disable
        expect_run(&mut mock, "systemctl", &["daemon-reload"], ok(""));
        expect_run(&mut mock, "pgrep", &["-f", PROCESS_PATTERN], failed());

        assert!(teardown(Mode::Apply, &paths, &mock).unwrap());
    }

    #[test]
    fn test_apply_kills_stray_process() {
        let paths = AgentPaths::from_root(Path::new("/nonexistent-fixture"));
        let mut mock = MockCommandRunner::new();
        expect_run(
            &mut mock,
            "systemctl",
            &["list-unit-files", "--no-legend", UNIT_NAME],
            ok(""),
        );
        expect_run(&mut mock, "pgrep", &["-f", PROCESS_PATTERN], ok("911\n"));
        expect_run(&mut mock, "pkill", &["-f", PROCESS_PATTERN], ok(""));

        assert!(teardown(Mode::Apply, &paths, &mock).unwrap());
    }
}
