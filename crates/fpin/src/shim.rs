//! Shim-mode pipeline.
//!
//! Strictly ordered: locate the project root, read the pin, optionally
//! synchronize through fvm, resolve the real binary, then replace this
//! process with it. The exec'd binary receives the original arguments
//! (argv[0] set to the intercepted name) and the full, unmodified
//! environment. PATH sanitization applies only to the delegate call.

use crate::config::{Config, SyncPolicy};
use anyhow::{Context, Result};
use fpin_platform::exec;
use fpin_version::{find_project_root, read_version};
use std::env;
use std::ffi::OsString;
use tracing::debug;

pub fn run(config: &Config, binary: &str) -> Result<()> {
    let root = find_project_root(&config.cwd)?;
    let pin = read_version(&root)?;
    debug!(version = %pin.version, root = %root.display(), "pin resolved");

    if config.sync == SyncPolicy::Auto {
        config.fvm()?.prepare(&pin.version, &root)?;
    }

    let target = config.resolver(&root).resolve(&pin.version, binary)?;
    let args = forwarded_args(env::args_os());
    debug!(target = %target.display(), "handing off");

    // Only returns on failure; on success the SDK binary takes over.
    let err = exec::replace_process(&target, binary, &args);
    Err(err).context("failed to exec resolved Flutter SDK binary")
}

/// Everything after argv[0], verbatim. Shims never interpret flags.
fn forwarded_args(argv: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    argv.into_iter().skip(1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forwarded_args_skips_only_argv0() {
        let argv = ["flutter", "run", "--release", "-d", "macos"].map(OsString::from);
        assert_eq!(
            forwarded_args(argv),
            ["run", "--release", "-d", "macos"].map(OsString::from)
        );
    }

    #[test]
    fn test_forwarded_args_empty_invocation() {
        assert_eq!(forwarded_args([OsString::from("dart")]), Vec::<OsString>::new());
        assert_eq!(forwarded_args(Vec::<OsString>::new()), Vec::<OsString>::new());
    }

    #[test]
    fn test_forwarded_args_preserves_non_utf8_safe_content() {
        let argv = ["flutter", "--dart-define=K=V", "path with spaces"].map(OsString::from);
        assert_eq!(
            forwarded_args(argv),
            ["--dart-define=K=V", "path with spaces"].map(OsString::from)
        );
    }
}
