use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = patchmon_uninstall::cli::Cli::parse();
    cli.run()
}
