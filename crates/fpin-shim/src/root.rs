//! Shim root resolution, shim creation, and shell activation.

use crate::error::{Error, Result};
use crate::{DEFAULT_ROOT_DIR, INTERCEPTED, ROOT_ENV, SHIMS_DIR};
use fpin_platform::shell::Shell;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The directory anchoring the shims subdirectory.
///
/// Resolved once at startup from explicit inputs (the `FPIN_ROOT` override
/// and the home directory), never from ambient process state, so tests can
/// substitute fixed values.
#[derive(Debug, Clone)]
pub struct ShimRoot {
    root: PathBuf,
}

impl ShimRoot {
    /// Resolve from an env override value, else `<home>/.fpin`.
    pub fn resolve(env_override: Option<OsString>, home: Option<PathBuf>) -> Result<Self> {
        if let Some(value) = env_override
            && !value.is_empty()
        {
            return Ok(Self {
                root: PathBuf::from(value),
            });
        }
        let home = home.ok_or(Error::NoHomeDir)?;
        Ok(Self {
            root: home.join(DEFAULT_ROOT_DIR),
        })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn shims_dir(&self) -> PathBuf {
        self.root.join(SHIMS_DIR)
    }

    /// Create or refresh the shim symlinks pointing at `executable`.
    ///
    /// Each step is fail-fast, and a partial failure leaves earlier links
    /// in place; re-running is corrective. Stale entries at a shim path
    /// are removed first, whatever they are.
    pub fn install_shims(&self, executable: &Path) -> Result<()> {
        let shims = self.shims_dir();
        fs::create_dir_all(&shims).map_err(|source| Error::Init {
            dir: shims.clone(),
            source,
        })?;

        let target = fs::canonicalize(executable).map_err(|source| Error::Init {
            dir: shims.clone(),
            source,
        })?;

        for name in INTERCEPTED {
            let link = shims.join(name);
            match fs::remove_file(&link) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(source) => {
                    return Err(Error::Link {
                        name: name.to_string(),
                        source,
                    });
                }
            }
            symlink(&target, &link).map_err(|source| Error::Link {
                name: name.to_string(),
                source,
            })?;
            debug!(shim = name, target = %target.display(), "shim linked");
        }

        Ok(())
    }

    /// The two statements a shell must evaluate to activate the shims,
    /// in the syntax of `shell`.
    pub fn activation_snippet(&self, shell: Shell) -> String {
        let root = self.root.display().to_string();
        let shims = self.shims_dir().display().to_string();
        format!(
            "{}\n{}\n",
            shell.export_line(ROOT_ENV, &root),
            shell.prepend_path_line(&shims),
        )
    }
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}
