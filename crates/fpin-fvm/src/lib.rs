//! Delegation bridge to the external `fvm` CLI.
//!
//! fvm owns SDK download, caching, and linking; this crate only invokes it
//! as a subordinate process with the caller's streams passed through.
//!
//! # Shim recursion
//!
//! fvm's own subcommands run `flutter`/`dart` internally. If the shims
//! directory were still on the child's PATH, those would land back in our
//! shim, which would invoke fvm again, forever. Every delegate call
//! therefore runs with a PATH whose shims entry has been removed.
//! Removal is entry-exact, so an unrelated directory that merely contains
//! the shims path as a substring survives. The caller's own environment,
//! and the environment of the finally exec'd SDK binary, are never
//! touched.

pub use error::{Error, Result};

mod error;

use fpin_platform::command::Command;
use fpin_platform::env::PathModifier;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Strip `shims_dir` from a PATH value for the delegate child process.
///
/// Comparison is per-entry and exact; on failure to rejoin (an entry
/// containing the separator), the original value is kept unchanged.
pub fn sanitized_path(current: Option<&OsStr>, shims_dir: &Path) -> OsString {
    let current = current.unwrap_or_default();
    PathModifier::from_value(current)
        .remove(shims_dir)
        .build()
        .unwrap_or_else(|_| current.to_os_string())
}

/// A located fvm executable plus the sanitized PATH its children run with.
#[derive(Debug, Clone)]
pub struct Fvm {
    exe: PathBuf,
    path_value: OsString,
}

impl Fvm {
    /// Find `fvm` on the (already sanitized) search path.
    ///
    /// Absence is terminal for the invocation; nothing is retried.
    pub fn locate(sanitized_path: &OsStr, cwd: &Path) -> Result<Self> {
        let exe =
            which::which_in("fvm", Some(sanitized_path), cwd).map_err(|_| Error::NotFound)?;
        debug!(exe = %exe.display(), "located fvm");
        Ok(Self {
            exe,
            path_value: sanitized_path.to_os_string(),
        })
    }

    /// `fvm install <version>`: download/cache only, no activation.
    pub fn install(&self, version: &str) -> Result<()> {
        debug!(version, "delegating install to fvm");
        let status = Command::new("fvm")
            .executable(self.exe.clone())
            .args(["install", version])
            .env("PATH", &self.path_value)
            .status()?;

        if !status.success() {
            return Err(Error::Install {
                version: version.to_string(),
            });
        }
        Ok(())
    }

    /// `fvm use <version>` in `project_root`: refresh the project's
    /// `.fvm/flutter_sdk` link.
    pub fn use_version(&self, version: &str, project_root: &Path) -> Result<()> {
        debug!(version, root = %project_root.display(), "delegating use to fvm");
        let status = Command::new("fvm")
            .executable(self.exe.clone())
            .args(["use", version])
            .current_dir(project_root)
            .env("PATH", &self.path_value)
            .status()?;

        if !status.success() {
            return Err(Error::Use {
                version: version.to_string(),
            });
        }
        Ok(())
    }

    /// Install then activate, fail-fast.
    pub fn prepare(&self, version: &str, project_root: &Path) -> Result<()> {
        self.install(version)?;
        self.use_version(version, project_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    #[test]
    fn test_sanitized_path_drops_shims_entry() {
        let shims = Path::new("/home/u/.fpin/shims");
        let value = env::join_paths(
            ["/usr/local/bin", "/home/u/.fpin/shims", "/usr/bin"].map(PathBuf::from),
        )
        .unwrap();

        let sanitized = sanitized_path(Some(value.as_os_str()), shims);
        let entries: Vec<PathBuf> = env::split_paths(&sanitized).collect();
        assert_eq!(
            entries,
            ["/usr/local/bin", "/usr/bin"].map(PathBuf::from).to_vec()
        );
    }

    #[test]
    fn test_sanitized_path_keeps_substring_entries() {
        let shims = Path::new("/home/u/.fpin/shims");
        let value = env::join_paths(
            [
                "/home/u/.fpin/shims",
                "/home/u/.fpin/shims.d",
                "/opt/mirror/home/u/.fpin/shims",
            ]
            .map(PathBuf::from),
        )
        .unwrap();

        let sanitized = sanitized_path(Some(value.as_os_str()), shims);
        let entries: Vec<PathBuf> = env::split_paths(&sanitized).collect();
        assert_eq!(
            entries,
            ["/home/u/.fpin/shims.d", "/opt/mirror/home/u/.fpin/shims"]
                .map(PathBuf::from)
                .to_vec()
        );
    }

    #[test]
    fn test_sanitized_path_empty_input() {
        let sanitized = sanitized_path(None, Path::new("/home/u/.fpin/shims"));
        assert!(sanitized.is_empty());
    }

    #[test]
    fn test_locate_fails_on_empty_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = Fvm::locate(OsStr::new(""), dir.path());
        assert!(matches!(result, Err(Error::NotFound)));
    }

    #[cfg(unix)]
    #[test]
    fn test_locate_finds_fvm_on_sanitized_path() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let fake = dir.path().join("fvm");
        std::fs::write(&fake, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&fake, std::fs::Permissions::from_mode(0o755)).unwrap();

        let fvm = Fvm::locate(dir.path().as_os_str(), dir.path()).unwrap();
        assert_eq!(fvm.exe, fake);
    }
}
