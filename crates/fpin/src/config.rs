//! Startup configuration.
//!
//! Every ambient input (working directory, home, env overrides, policies)
//! is read exactly once here and threaded into components as values, so
//! tests construct a `Config` with fixed fields instead of mutating
//! process state.

use anyhow::{Context, Result};
use fpin_fvm::Fvm;
use fpin_shim::{CacheSdk, ProjectSdk, SdkResolver, ShimRoot, project_sdk_link};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Override for the external manager's cache directory; versions live
/// under `<value>/versions`.
pub const CACHE_ENV: &str = "FVM_CACHE_PATH";

/// Shim-mode delegation policy: `auto` (default) or `off`.
pub const SYNC_ENV: &str = "FPIN_SYNC";

/// SDK layout selection: `auto` (default), `project`, or `cache`.
pub const LAYOUT_ENV: &str = "FPIN_LAYOUT";

/// Whether shim-mode invocations proactively run `fvm install`/`fvm use`
/// before resolving, or trust the SDK was materialized out-of-band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPolicy {
    Auto,
    Off,
}

impl SyncPolicy {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("off") | Some("0") | Some("false") => SyncPolicy::Off,
            _ => SyncPolicy::Auto,
        }
    }
}

/// Which on-disk SDK layout the resolver targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPolicy {
    Auto,
    Project,
    Cache,
}

impl LayoutPolicy {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("project") => LayoutPolicy::Project,
            Some("cache") => LayoutPolicy::Cache,
            _ => LayoutPolicy::Auto,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub cwd: PathBuf,
    pub home: Option<PathBuf>,
    pub shim_root_override: Option<OsString>,
    pub cache_override: Option<OsString>,
    pub path: Option<OsString>,
    pub sync: SyncPolicy,
    pub layout: LayoutPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let cwd = env::current_dir().context("failed to get current directory")?;
        Ok(Self {
            cwd,
            home: fpin_platform::dir::user_home(),
            shim_root_override: env::var_os(fpin_shim::ROOT_ENV),
            cache_override: env::var_os(CACHE_ENV),
            path: env::var_os("PATH"),
            sync: SyncPolicy::parse(env::var(SYNC_ENV).ok().as_deref()),
            layout: LayoutPolicy::parse(env::var(LAYOUT_ENV).ok().as_deref()),
        })
    }

    pub fn shim_root(&self) -> fpin_shim::Result<ShimRoot> {
        ShimRoot::resolve(self.shim_root_override.clone(), self.home.clone())
    }

    /// Select the SDK layout strategy for `project_root`.
    pub fn resolver(&self, project_root: &Path) -> Box<dyn SdkResolver> {
        let use_project = match self.layout {
            LayoutPolicy::Project => true,
            LayoutPolicy::Cache => false,
            LayoutPolicy::Auto => project_sdk_link(project_root).exists(),
        };

        if use_project {
            debug!(root = %project_root.display(), "using project SDK layout");
            Box::new(ProjectSdk::new(project_root))
        } else {
            debug!("using cache SDK layout");
            Box::new(CacheSdk::discover(
                self.cache_override.clone(),
                self.home.clone(),
            ))
        }
    }

    /// Locate fvm against a PATH with the shims directory stripped out.
    pub fn fvm(&self) -> Result<Fvm> {
        let shims = self.shim_root()?.shims_dir();
        let path = fpin_fvm::sanitized_path(self.path.as_deref(), &shims);
        Ok(Fvm::locate(&path, &self.cwd)?)
    }
}
