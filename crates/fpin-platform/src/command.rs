use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command as StdCommand, ExitStatus, Output};

/// Builder over [`std::process::Command`] that keeps the program name for
/// error reporting. Standard streams are inherited unless captured.
#[derive(Debug)]
pub struct Command {
    inner: StdCommand,
    program: String,
}

impl Command {
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        Self {
            inner: StdCommand::new(&program),
            program,
        }
    }

    /// Run a specific executable while keeping `program` as the display name.
    pub fn executable(mut self, path: PathBuf) -> Self {
        let mut inner = StdCommand::new(path);
        for arg in self.inner.get_args() {
            inner.arg(arg);
        }
        self.inner = inner;
        self
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.inner.arg(arg);
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.inner.args(args);
        self
    }

    pub fn env<K, V>(mut self, key: K, val: V) -> Self
    where
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        self.inner.env(key, val);
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.inner.current_dir(dir);
        self
    }

    pub fn status(&mut self) -> Result<ExitStatus> {
        self.inner.status().map_err(|e| Error::CommandFailed {
            cmd: self.program.clone(),
            source: e,
        })
    }

    pub fn output(&mut self) -> Result<Output> {
        self.inner.output().map_err(|e| Error::CommandFailed {
            cmd: self.program.clone(),
            source: e,
        })
    }
}
