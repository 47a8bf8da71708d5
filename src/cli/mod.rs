//! Command-line entry point.

use crate::core::paths::AgentPaths;
use crate::core::sequencer::{self, Mode};
use crate::util::exec::SystemRunner;
use crate::util::privilege;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "patchmon-uninstall",
    version,
    about = "Remove the PatchMon agent from this host (dry-run by default)"
)]
pub struct Cli {
    /// Pass the literal word 'apply' to perform the removals; omit it to
    /// only report what would be removed
    #[arg(value_name = "MODE", value_parser = PossibleValuesParser::new(["apply"]))]
    pub mode: Option<String>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mode = match self.mode {
            Some(_) => Mode::Apply,
            None => Mode::DryRun,
        };

        if mode.is_apply() {
            privilege::require_root()?;
        }

        let paths = AgentPaths::system();
        sequencer::run(mode, &paths, &SystemRunner)
    }
}
