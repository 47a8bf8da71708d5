//! Centralized constants for the known agent paths and names.
//!
//! Path constants are root-relative so the whole tool can be pointed at a
//! different filesystem root (the tests use temporary directories). On a
//! real host the root is `/` and they resolve to the usual locations.

/// Systemd unit name.
pub const UNIT_NAME: &str = "patchmon-agent.service";

/// Literal invocation string matched against the process table.
pub const PROCESS_PATTERN: &str = "patchmon-agent serve";

/// Literal token that marks agent lines in the user's crontab.
pub const CRON_TOKEN: &str = "patchmon-agent";

/// Agent binary, relative to the filesystem root.
pub const BINARY: &str = "usr/local/bin/patchmon-agent";

/// Possible unit file locations (exact paths, never globbed).
pub const UNIT_FILES: &[&str] = &[
    "etc/systemd/system/patchmon-agent.service",
    "usr/lib/systemd/system/patchmon-agent.service",
];

/// Directory holding agent configuration and credentials.
pub const CONFIG_DIR: &str = "etc/patchmon-agent";

/// Agent configuration file.
pub const CONFIG_FILE: &str = "etc/patchmon-agent/config.yml";

/// Agent API credentials.
pub const CREDENTIALS_FILE: &str = "etc/patchmon-agent/credentials.yml";

/// Credentials location used by pre-YAML agent releases.
pub const LEGACY_CREDENTIALS_FILE: &str = "etc/patchmon-agent/credentials";

/// Directory holding agent logs.
pub const LOG_DIR: &str = "var/log/patchmon-agent";

/// Agent log files.
pub const LOG_FILES: &[&str] = &[
    "var/log/patchmon-agent/patchmon-agent.log",
    "var/log/patchmon-agent/patchmon-agent.err",
];
