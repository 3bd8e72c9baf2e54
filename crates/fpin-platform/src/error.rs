use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("command failed: {cmd}, source: {source}")]
    CommandFailed { cmd: String, source: std::io::Error },

    #[error("failed to exec {}: {source}", bin.display())]
    ExecFailed { bin: PathBuf, source: std::io::Error },

    #[error("operation failed")]
    Failed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
