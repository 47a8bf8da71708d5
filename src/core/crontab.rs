//! Step 5: strip agent entries from the invoking user's crontab.
//!
//! The filter is line-granular: a line is dropped only when it contains the
//! literal agent token, everything else is written back verbatim and in its
//! original order. A crontab emptied by the filter is cleared with
//! `crontab -r` rather than rewritten as an empty file.

use crate::constants::CRON_TOKEN;
use crate::core::sequencer::Mode;
use crate::util::exec::{argv, CommandRunner};
use anyhow::Result;

/// Remove agent lines from the user's crontab.
///
/// Returns whether any matching line was found. A missing crontab
/// (`crontab -l` exiting non-zero) is not an error.
pub fn scrub(mode: Mode, runner: &dyn CommandRunner) -> Result<bool> {
    let listing = runner.run("crontab", &argv(&["-l"]))?;
    if !listing.success {
        return Ok(false);
    }

    let (kept, dropped) = filter_lines(&listing.stdout, CRON_TOKEN);
    if dropped == 0 {
        return Ok(false);
    }

    println!(
        "Found {} crontab line(s) referencing {}",
        dropped, CRON_TOKEN
    );

    let emptied = kept.iter().all(|line| line.trim().is_empty());
    match (mode, emptied) {
        (Mode::DryRun, true) => println!("  would clear the crontab (no other entries remain)"),
        (Mode::DryRun, false) => println!("  would rewrite the crontab without them"),
        (Mode::Apply, true) => {
            println!("  clearing the crontab (no other entries remain)");
            let out = runner.run("crontab", &argv(&["-r"]))?;
            if !out.success {
                eprintln!("warning: crontab -r failed: {}", out.stderr.trim());
            }
        }
        (Mode::Apply, false) => {
            println!("  rewriting the crontab without them");
            let mut content = kept.join("\n");
            content.push('\n');
            let out = runner.run_with_stdin("crontab", &argv(&["-"]), &content)?;
            if !out.success {
                eprintln!("warning: crontab rewrite failed: {}", out.stderr.trim());
            }
        }
    }

    Ok(true)
}

/// Split `content` into the lines to keep and the number dropped.
/// Kept lines are returned untouched.
fn filter_lines<'a>(content: &'a str, token: &str) -> (Vec<&'a str>, usize) {
    let mut kept = Vec::new();
    let mut dropped = 0;
    for line in content.lines() {
        if line.contains(token) {
            dropped += 1;
        } else {
            kept.push(line);
        }
    }
    (kept, dropped)
}
