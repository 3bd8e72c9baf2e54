use crate::cli::app::InstallArgs;
use crate::config::Config;
use anyhow::Result;

/// Pre-download only; no pin is written and no project link is touched.
pub fn run(config: &Config, args: InstallArgs) -> Result<()> {
    let fvm = config.fvm()?;
    fvm.install(&args.version)?;
    Ok(())
}
