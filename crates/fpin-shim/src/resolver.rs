//! SDK binary resolution strategies.
//!
//! fvm materializes an SDK in one of two places: a per-project
//! `.fvm/flutter_sdk` symlink tree, or its global version cache. Both
//! implement [`SdkResolver`]; the dispatcher selects one at startup.
//!
//! Errors distinguish "not installed" from "installed but incomplete":
//! the former has a mechanical fix the user can run, the latter signals a
//! corrupt SDK tree.

use crate::error::{Error, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Maps a (version, binary name) pair to the absolute path of the real
/// SDK binary. The returned path is canonical.
pub trait SdkResolver {
    fn resolve(&self, version: &str, binary: &str) -> Result<PathBuf>;
}

/// The per-project symlink tree fvm leaves at `<root>/.fvm/flutter_sdk`.
pub fn project_sdk_link(project_root: &Path) -> PathBuf {
    project_root.join(".fvm").join("flutter_sdk")
}

/// Project-relative layout: the SDK is reached through the project's
/// `.fvm/flutter_sdk` link, so the pinned version never appears in the
/// path; `fvm use` keeps the link pointing at it.
#[derive(Debug, Clone)]
pub struct ProjectSdk {
    project_root: PathBuf,
}

impl ProjectSdk {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }
}

impl SdkResolver for ProjectSdk {
    fn resolve(&self, _version: &str, binary: &str) -> Result<PathBuf> {
        let link = project_sdk_link(&self.project_root);
        if !link.exists() {
            return Err(Error::SdkNotLinked { link });
        }

        let bin = link.join("bin").join(binary);
        if !bin.exists() {
            return Err(Error::SdkIncomplete {
                binary: binary.to_string(),
            });
        }

        let resolved = fs::canonicalize(&bin)?;
        debug!(binary, path = %resolved.display(), "resolved via project SDK link");
        Ok(resolved)
    }
}

/// Cache-relative layout: `<cache>/<version>/bin/<binary>` against fvm's
/// global version cache.
#[derive(Debug, Clone)]
pub struct CacheSdk {
    candidates: Vec<PathBuf>,
}

impl CacheSdk {
    /// Candidate cache directories in precedence order: the
    /// `FVM_CACHE_PATH` override, then `~/fvm/versions`, then
    /// `~/.fvm/versions`.
    pub fn discover(env_override: Option<OsString>, home: Option<PathBuf>) -> Self {
        let mut candidates = Vec::new();
        if let Some(value) = env_override
            && !value.is_empty()
        {
            candidates.push(PathBuf::from(value).join("versions"));
        }
        if let Some(home) = home {
            candidates.push(home.join("fvm").join("versions"));
            candidates.push(home.join(".fvm").join("versions"));
        }
        Self { candidates }
    }

    /// Explicit candidate list, for tests and unusual setups.
    pub fn with_candidates(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    fn cache_dir(&self) -> Result<&Path> {
        self.candidates
            .iter()
            .map(PathBuf::as_path)
            .find(|p| p.is_dir())
            .ok_or(Error::NoCacheDir)
    }
}

impl SdkResolver for CacheSdk {
    fn resolve(&self, version: &str, binary: &str) -> Result<PathBuf> {
        let cache = self.cache_dir()?;

        let sdk = cache.join(version);
        if !sdk.is_dir() {
            return Err(Error::SdkNotInstalled {
                version: version.to_string(),
            });
        }

        let bin = sdk.join("bin").join(binary);
        if !bin.exists() {
            return Err(Error::SdkIncomplete {
                binary: binary.to_string(),
            });
        }

        let resolved = fs::canonicalize(&bin)?;
        debug!(version, binary, path = %resolved.display(), "resolved via version cache");
        Ok(resolved)
    }
}
