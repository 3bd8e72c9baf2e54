use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no Flutter version configured (.flutter-version not found above {})", start.display())]
    NoProjectRoot { start: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no version in {} (first line is empty)", path.display())]
    EmptyPin { path: PathBuf },

    #[error("failed to write {}: {source}", path.display())]
    Unwritable {
        path: PathBuf,
        source: std::io::Error,
    },
}
