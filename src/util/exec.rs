//! Command execution behind a trait so the steps that talk to systemctl,
//! pgrep/pkill, and crontab can be exercised in tests without touching the
//! host.

use anyhow::{Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};

#[cfg(test)]
use mockall::automock;

/// Captured result of a collaborator invocation.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Runs external commands.
///
/// A spawn failure (collaborator missing, fork error) is an `Err` and
/// aborts the run; a command that runs but exits non-zero comes back as
/// `success: false` and is handled best-effort by the caller.
#[cfg_attr(test, automock)]
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput>;

    fn run_with_stdin(&self, program: &str, args: &[String], input: &str) -> Result<CommandOutput>;
}

/// `CommandRunner` backed by real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("run {}", program))?;
        Ok(capture(output))
    }

    fn run_with_stdin(&self, program: &str, args: &[String], input: &str) -> Result<CommandOutput> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("run {}", program))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(input.as_bytes())
                .with_context(|| format!("write stdin of {}", program))?;
        }

        let output = child
            .wait_with_output()
            .with_context(|| format!("wait for {}", program))?;
        Ok(capture(output))
    }
}

fn capture(output: std::process::Output) -> CommandOutput {
    CommandOutput {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Convert a literal argument list to the owned form the trait takes.
// mockall cannot express the lifetimes of `&[&str]`, hence `&[String]`.
pub fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}
