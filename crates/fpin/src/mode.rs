use fpin_shim::INTERCEPTED;
use std::ffi::OsStr;
use std::path::Path;

/// Execution mode, decided once at process start from the invoked
/// program's base name and never re-evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Invoked under our own name: parse subcommands.
    Cli,
    /// Invoked through a shim: dispatch to the named SDK binary.
    Shim(String),
}

impl Mode {
    pub fn detect(argv0: &OsStr) -> Option<Mode> {
        let name = Path::new(argv0).file_stem()?.to_str()?;
        if name == "fpin" {
            return Some(Mode::Cli);
        }
        if INTERCEPTED.contains(&name) {
            return Some(Mode::Shim(name.to_string()));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn test_detect_cli_mode() {
        assert_eq!(Mode::detect(OsStr::new("fpin")), Some(Mode::Cli));
        assert_eq!(Mode::detect(OsStr::new("/usr/local/bin/fpin")), Some(Mode::Cli));
        assert_eq!(Mode::detect(OsStr::new("fpin.exe")), Some(Mode::Cli));
    }

    #[test]
    fn test_detect_shim_mode() {
        assert_eq!(
            Mode::detect(OsStr::new("flutter")),
            Some(Mode::Shim("flutter".to_string()))
        );
        assert_eq!(
            Mode::detect(OsStr::new("/home/u/.fpin/shims/dart")),
            Some(Mode::Shim("dart".to_string()))
        );
    }

    #[test]
    fn test_detect_unexpected_name() {
        assert_eq!(Mode::detect(OsStr::new("python")), None);
        assert_eq!(Mode::detect(&OsString::new()), None);
    }
}
