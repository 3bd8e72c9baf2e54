//! Version pin discovery and pin-file I/O.
//!
//! A project pins its Flutter version in a `.flutter-version` file; the
//! nearest ancestor of the working directory carrying that file is the
//! project root. Version strings are opaque to this crate: a semver and a
//! channel name like `stable` are treated alike.
//!
//! Nothing here is cached or locked. Every call re-reads the filesystem,
//! and concurrent pin writes are last-writer-wins.

pub use error::{Error, Result};

mod error;

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Name of the per-project pin file.
pub const PIN_FILE: &str = ".flutter-version";

/// A pinned version together with the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pin {
    pub version: String,
    pub source: PathBuf,
}

/// Walk upward from `start` to the nearest directory containing [`PIN_FILE`].
///
/// `start` is made absolute first; the search is strictly bottom-up and
/// stops at the first match, so the returned root is always the nearest
/// ancestor (including `start` itself).
pub fn find_project_root(start: &Path) -> Result<PathBuf> {
    let start = std::path::absolute(start).map_err(|source| Error::Unreadable {
        path: start.to_path_buf(),
        source,
    })?;

    let mut dir = start.as_path();
    loop {
        if dir.join(PIN_FILE).exists() {
            return Ok(dir.to_path_buf());
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => return Err(Error::NoProjectRoot { start }),
        }
    }
}

/// Read the pinned version from `root`'s pin file.
///
/// Only the first line counts; it is trimmed, and further lines are
/// ignored. An unreadable file or an empty first line is an error.
pub fn read_version(root: &Path) -> Result<Pin> {
    let path = root.join(PIN_FILE);

    let file = File::open(&path).map_err(|source| Error::Unreadable {
        path: path.clone(),
        source,
    })?;

    let mut first_line = String::new();
    BufReader::new(file)
        .read_line(&mut first_line)
        .map_err(|source| Error::Unreadable {
            path: path.clone(),
            source,
        })?;

    let version = first_line.trim();
    if version.is_empty() {
        return Err(Error::EmptyPin { path });
    }

    Ok(Pin {
        version: version.to_string(),
        source: path,
    })
}

/// Write `version` to the pin file in `dir`, creating or truncating it.
///
/// Last writer wins; there is no locking against concurrent writers.
pub fn write_version(dir: &Path, version: &str) -> Result<()> {
    let path = dir.join(PIN_FILE);
    fs::write(&path, format!("{version}\n")).map_err(|source| Error::Unwritable { path, source })
}
