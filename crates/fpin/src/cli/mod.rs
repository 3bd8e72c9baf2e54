mod app;
mod init;
mod install;
mod local;
mod version;

pub use app::{App, Commands};

use crate::config::Config;
use anyhow::Result;
use clap::Parser;

pub fn run(config: &Config) -> Result<()> {
    let app = App::parse();
    match app.cmd {
        Commands::Init => init::run(config),
        Commands::Local(args) => local::run(config, args),
        Commands::Install(args) => install::run(config, args),
        Commands::Version => version::run(config),
    }
}
