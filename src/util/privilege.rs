//! Root check for apply mode. The known paths live under /etc, /usr, and
//! /var/log, so performing removals needs euid 0; describing them does not.

use anyhow::{bail, Result};

pub fn is_root() -> bool {
    nix::unistd::geteuid().is_root()
}

pub fn require_root() -> Result<()> {
    if !is_root() {
        bail!("apply mode needs root privileges; re-run with sudo");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_root_matches_is_root() {
        // Value depends on the test runner; only the mapping is asserted.
        assert_eq!(require_root().is_ok(), is_root());
    }
}
