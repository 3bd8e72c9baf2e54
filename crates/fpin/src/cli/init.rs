use crate::config::Config;
use anyhow::{Context, Result};
use fpin_platform::shell::{self, Shell};

pub fn run(config: &Config) -> Result<()> {
    let exe = std::env::current_exe().context("failed to locate the fpin executable")?;

    let root = config.shim_root()?;
    root.install_shims(&exe)?;

    // Emitted to stdout so the user can `eval "$(fpin init)"`.
    let shell = shell::detect().unwrap_or(Shell::Unknown);
    print!("{}", root.activation_snippet(shell));
    Ok(())
}
