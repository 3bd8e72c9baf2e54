//! Shell detection and environment-export syntax.

pub use query_shell::Shell as QueryShell;

/// Shell families that differ in how an environment variable is exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
    Nushell,
    Unknown,
}

fn from_query_shell(qs: QueryShell) -> Shell {
    match qs {
        QueryShell::Bash => Shell::Bash,
        QueryShell::Zsh => Shell::Zsh,
        QueryShell::Fish => Shell::Fish,
        QueryShell::Powershell => Shell::Powershell,
        QueryShell::Nushell => Shell::Nushell,
        _ => Shell::Unknown,
    }
}

/// Detect the invoking shell. `None` when detection fails.
pub fn detect() -> Option<Shell> {
    query_shell::get_shell().ok().map(from_query_shell)
}

impl Shell {
    /// One `eval`-able statement exporting `key=value` in this shell's syntax.
    ///
    /// Unknown shells get POSIX syntax, which every supported default shell
    /// other than fish and PowerShell accepts.
    pub fn export_line(self, key: &str, value: &str) -> String {
        match self {
            Shell::Fish => format!("set -gx {key} \"{value}\""),
            Shell::Powershell => format!("$env:{key} = \"{value}\""),
            _ => format!("export {key}=\"{value}\""),
        }
    }

    /// One statement prepending `dir` to PATH in this shell's syntax.
    pub fn prepend_path_line(self, dir: &str) -> String {
        match self {
            Shell::Fish => format!("set -gx PATH \"{dir}\" $PATH"),
            Shell::Powershell => format!("$env:Path = \"{dir};\" + $env:Path"),
            _ => format!("export PATH=\"{dir}:$PATH\""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_line_posix() {
        assert_eq!(
            Shell::Bash.export_line("FPIN_ROOT", "/home/u/.fpin"),
            "export FPIN_ROOT=\"/home/u/.fpin\""
        );
        assert_eq!(
            Shell::Unknown.export_line("A", "b"),
            "export A=\"b\""
        );
    }

    #[test]
    fn test_export_line_fish() {
        assert_eq!(
            Shell::Fish.export_line("FPIN_ROOT", "/home/u/.fpin"),
            "set -gx FPIN_ROOT \"/home/u/.fpin\""
        );
    }

    #[test]
    fn test_prepend_path_line() {
        assert_eq!(
            Shell::Zsh.prepend_path_line("/home/u/.fpin/shims"),
            "export PATH=\"/home/u/.fpin/shims:$PATH\""
        );
        assert_eq!(
            Shell::Fish.prepend_path_line("/s"),
            "set -gx PATH \"/s\" $PATH"
        );
    }

    #[test]
    fn test_detect_does_not_panic() {
        let _ = detect();
    }
}
