//! PATH editing over an explicit value, so callers can sanitize a child
//! environment without mutating their own.

use crate::error::Result;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Entry-exact comparison of two PATH entries.
///
/// Trailing separators are ignored; case is significant except on Windows.
/// A directory that merely contains the other as a substring never matches.
pub fn entries_equal(p1: &Path, p2: &Path) -> bool {
    fn normalize(p: &Path) -> String {
        let s = p.to_string_lossy();
        let s = s.trim_end_matches(['/', '\\']);
        if cfg!(windows) {
            s.to_lowercase()
        } else {
            s.to_string()
        }
    }
    normalize(p1) == normalize(p2)
}

#[derive(Debug, Clone)]
pub struct PathModifier {
    paths: Vec<PathBuf>,
}

impl PathModifier {
    /// Start from the current process's PATH.
    pub fn from_current() -> Self {
        Self {
            paths: path_env().unwrap_or_default(),
        }
    }

    /// Start from an explicit PATH value.
    pub fn from_value(value: &OsStr) -> Self {
        Self {
            paths: env::split_paths(value).collect(),
        }
    }

    pub fn prepend(mut self, path: PathBuf) -> Self {
        if !self.paths.iter().any(|p| entries_equal(p, &path)) {
            self.paths.insert(0, path);
        }
        self
    }

    pub fn remove(mut self, path: &Path) -> Self {
        self.paths.retain(|p| !entries_equal(p, path));
        self
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| entries_equal(p, path))
    }

    pub fn build(self) -> Result<OsString> {
        env::join_paths(self.paths).map_err(|_| crate::error::Error::Failed)
    }
}

pub fn path_env() -> Option<Vec<PathBuf>> {
    env::var_os("PATH").map(|val| env::split_paths(&val).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_equal_trailing_separator() {
        assert!(entries_equal(Path::new("/path"), Path::new("/path/")));
        assert!(!entries_equal(Path::new("/path1"), Path::new("/path2")));
    }

    #[test]
    fn test_entries_equal_rejects_substring() {
        assert!(!entries_equal(
            Path::new("/home/u/.fpin/shims"),
            Path::new("/home/u/.fpin/shims-backup")
        ));
        assert!(!entries_equal(
            Path::new("/opt/prefix/home/u/.fpin/shims"),
            Path::new("/home/u/.fpin/shims")
        ));
    }

    #[test]
    fn test_from_value_splits_entries() {
        let value = env::join_paths(["/a", "/b"].map(PathBuf::from)).unwrap();
        let modifier = PathModifier::from_value(&value);
        assert!(modifier.contains(Path::new("/a")));
        assert!(modifier.contains(Path::new("/b")));
    }

    #[test]
    fn test_prepend_no_duplicates() {
        let modifier = PathModifier::from_value(OsStr::new(""))
            .prepend(PathBuf::from("/path"))
            .prepend(PathBuf::from("/path"));
        let count = modifier
            .paths
            .iter()
            .filter(|p| p.to_string_lossy() == "/path")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_remove_exact_entry_only() {
        let value = env::join_paths(
            ["/home/u/.fpin/shims", "/home/u/.fpin/shims-extra", "/usr/bin"].map(PathBuf::from),
        )
        .unwrap();
        let modifier = PathModifier::from_value(&value).remove(Path::new("/home/u/.fpin/shims"));
        assert!(!modifier.contains(Path::new("/home/u/.fpin/shims")));
        assert!(modifier.contains(Path::new("/home/u/.fpin/shims-extra")));
        assert!(modifier.contains(Path::new("/usr/bin")));
    }

    #[test]
    fn test_build_round_trip() {
        let value = env::join_paths(["/a", "/b"].map(PathBuf::from)).unwrap();
        let rebuilt = PathModifier::from_value(&value).build().unwrap();
        assert_eq!(rebuilt, value);
    }

    #[test]
    fn test_from_current_does_not_panic() {
        let modifier = PathModifier::from_current();
        let _ = modifier.build();
    }
}
