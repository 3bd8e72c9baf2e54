use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot determine home directory")]
    NoHomeDir,

    #[error("failed to initialize shims directory {}: {source}", dir.display())]
    Init {
        dir: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create shim '{name}': {source}")]
    Link {
        name: String,
        source: std::io::Error,
    },

    #[error("project SDK link missing ({}); run `fpin local` to set it up", link.display())]
    SdkNotLinked { link: PathBuf },

    #[error("Flutter '{version}' is not installed; run `fpin install {version}`")]
    SdkNotInstalled { version: String },

    #[error("resolved Flutter SDK is incomplete (missing bin/{binary})")]
    SdkIncomplete { binary: String },

    #[error("no fvm cache directory found (set FVM_CACHE_PATH or install fvm)")]
    NoCacheDir,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
