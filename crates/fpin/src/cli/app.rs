use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "fpin",
    version = env!("CARGO_PKG_VERSION"),
    about = "Per-project Flutter version pinning over fvm",
    long_about = None
)]
pub struct App {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Create shims and print shell activation")]
    Init,
    #[command(about = "Set or show the project's pinned Flutter version")]
    Local(LocalArgs),
    #[command(about = "Pre-download a Flutter version via fvm")]
    Install(InstallArgs),
    #[command(about = "Show the pinned Flutter version and its source")]
    Version,
}

#[derive(Debug, Args)]
pub struct LocalArgs {
    #[arg(help = "Version to pin in the current directory")]
    pub version: Option<String>,
}

#[derive(Debug, Args)]
pub struct InstallArgs {
    #[arg(help = "Version to pre-download")]
    pub version: String,
}
