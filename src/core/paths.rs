//! Resolution of the known agent paths against a filesystem root.

use crate::constants;
use std::path::{Path, PathBuf};

/// The fixed set of filesystem locations the tool is scoped to act on.
///
/// Everything is resolved once from a root directory; nothing is derived
/// dynamically or globbed afterwards.
#[derive(Debug, Clone)]
pub struct AgentPaths {
    pub binary: PathBuf,
    pub unit_files: Vec<PathBuf>,
    pub config_dir: PathBuf,
    pub config_file: PathBuf,
    pub credentials_file: PathBuf,
    pub legacy_credentials_file: PathBuf,
    pub log_dir: PathBuf,
    pub log_files: Vec<PathBuf>,
}

impl AgentPaths {
    /// Paths on the running host (root `/`).
    pub fn system() -> Self {
        Self::from_root(Path::new("/"))
    }

    /// Resolve all known paths relative to `root`.
    pub fn from_root(root: &Path) -> Self {
        Self {
            binary: root.join(constants::BINARY),
            unit_files: constants::UNIT_FILES.iter().map(|p| root.join(p)).collect(),
            config_dir: root.join(constants::CONFIG_DIR),
            config_file: root.join(constants::CONFIG_FILE),
            credentials_file: root.join(constants::CREDENTIALS_FILE),
            legacy_credentials_file: root.join(constants::LEGACY_CREDENTIALS_FILE),
            log_dir: root.join(constants::LOG_DIR),
            log_files: constants::LOG_FILES.iter().map(|p| root.join(p)).collect(),
        }
    }

    /// The exact config/credential files subject to removal.
    pub fn config_files(&self) -> [&Path; 3] {
        [
            &self.config_file,
            &self.credentials_file,
            &self.legacy_credentials_file,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_paths_are_absolute() {
        let paths = AgentPaths::system();
        assert_eq!(paths.binary, PathBuf::from("/usr/local/bin/patchmon-agent"));
        assert_eq!(paths.config_dir, PathBuf::from("/etc/patchmon-agent"));
        assert_eq!(
            paths.unit_files[0],
            PathBuf::from("/etc/systemd/system/patchmon-agent.service")
        );
        assert_eq!(paths.log_dir, PathBuf::from("/var/log/patchmon-agent"));
    }

    #[test]
    fn test_from_root_rebases_everything() {
        let paths = AgentPaths::from_root(Path::new("/tmp/fixture"));
        assert_eq!(
            paths.credentials_file,
            PathBuf::from("/tmp/fixture/etc/patchmon-agent/credentials.yml")
        );
        assert!(paths
            .log_files
            .iter()
            .all(|p| p.starts_with("/tmp/fixture/var/log/patchmon-agent")));
    }

    #[test]
    fn test_config_files_live_in_config_dir() {
        let paths = AgentPaths::from_root(Path::new("/x"));
        for file in paths.config_files() {
            assert!(file.starts_with(&paths.config_dir));
        }
    }
}
