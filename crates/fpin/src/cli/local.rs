use crate::cli::app::LocalArgs;
use crate::config::{Config, SyncPolicy};
use anyhow::Result;
use fpin_fvm::Fvm;
use fpin_version::{find_project_root, read_version, write_version};
use std::path::Path;

pub fn run(config: &Config, args: LocalArgs) -> Result<()> {
    // fvm availability is checked before any pin write so a missing
    // manager doesn't leave a pin the shims can't honor.
    let fvm = match config.sync {
        SyncPolicy::Auto => Some(config.fvm()?),
        SyncPolicy::Off => None,
    };

    match args.version {
        Some(version) => {
            write_version(&config.cwd, &version)?;
            materialize(config, fvm.as_ref(), &version, &config.cwd)?;
            println!("{version}");
        }
        None => {
            let root = find_project_root(&config.cwd)?;
            let pin = read_version(&root)?;
            materialize(config, fvm.as_ref(), &pin.version, &root)?;
            println!("{} (set by {})", pin.version, pin.source.display());
        }
    }
    Ok(())
}

/// Delegate preparation, or in filesystem-only mode verify the SDK is
/// already resolvable.
fn materialize(
    config: &Config,
    fvm: Option<&Fvm>,
    version: &str,
    project_root: &Path,
) -> Result<()> {
    match fvm {
        Some(fvm) => fvm.prepare(version, project_root)?,
        None => {
            config.resolver(project_root).resolve(version, "flutter")?;
        }
    }
    Ok(())
}
