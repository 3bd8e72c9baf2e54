use crate::config::Config;
use anyhow::Result;
use fpin_version::{find_project_root, read_version};

pub fn run(config: &Config) -> Result<()> {
    let root = find_project_root(&config.cwd)?;
    let pin = read_version(&root)?;
    println!("{} (set by {})", pin.version, pin.source.display());
    Ok(())
}
