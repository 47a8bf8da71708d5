//! Uninstall helper for the PatchMon agent.
//!
//! Detects and optionally removes the agent's systemd unit, binary,
//! configuration and credential files, log files, and crontab entries.
//! Dry-run by default; pass `apply` to perform the removals.
//!
//! ## Modules
//! - `cli` — Command-line entry point
//! - `core` — The uninstall sequencer and its steps
//! - `util` — System utilities (exec, fs, privilege, journald)

pub mod cli;
pub mod constants;
pub mod core;
pub mod util;
