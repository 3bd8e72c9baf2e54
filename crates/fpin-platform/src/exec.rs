//! Terminal hand-off to a resolved binary.
//!
//! On Unix the current process image is replaced in place; the call only
//! returns on failure. Elsewhere the binary runs as a child with inherited
//! streams and this process exits with the child's code, which is
//! indistinguishable from the caller's side except for process identity.

use crate::error::Error;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

#[cfg(unix)]
pub fn replace_process(binary: &Path, argv0: &str, args: &[OsString]) -> Error {
    use std::os::unix::process::CommandExt;

    let mut cmd = Command::new(binary);
    cmd.arg0(argv0).args(args);
    let source = cmd.exec();
    Error::ExecFailed {
        bin: binary.to_path_buf(),
        source,
    }
}

#[cfg(not(unix))]
pub fn replace_process(binary: &Path, _argv0: &str, args: &[OsString]) -> Error {
    match Command::new(binary).args(args).status() {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(source) => Error::ExecFailed {
            bin: binary.to_path_buf(),
            source,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_replace_process_missing_binary_returns_error() {
        let err = replace_process(Path::new("/nonexistent/binary"), "binary", &[]);
        assert!(matches!(err, Error::ExecFailed { .. }));
    }
}
