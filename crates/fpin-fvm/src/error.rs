use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("fvm not found in PATH (see https://fvm.app for installation)")]
    NotFound,

    #[error("failed to install Flutter '{version}' via fvm")]
    Install { version: String },

    #[error("failed to prepare Flutter '{version}' via fvm")]
    Use { version: String },

    #[error(transparent)]
    Platform(#[from] fpin_platform::Error),
}
