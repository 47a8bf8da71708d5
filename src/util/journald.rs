//! Best-effort forwarding of the apply summary to journald via
//! `systemd-cat`. Failure to forward must never affect the run.

use std::io::Write;
use std::process::{Command, Stdio};

/// Send one line to journald tagged with `tag`. Silently a no-op when
/// `systemd-cat` is unavailable or fails.
pub fn forward_line(tag: &str, line: &str) {
    let spawned = Command::new("systemd-cat")
        .arg("-t")
        .arg(tag)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    let mut child = match spawned {
        Ok(c) => c,
        Err(_) => return,
    };

    if let Some(mut stdin) = child.stdin.take() {
        let _ = stdin.write_all(line.as_bytes());
        let _ = stdin.write_all(b"\n");
    }
    let _ = child.wait();
}
