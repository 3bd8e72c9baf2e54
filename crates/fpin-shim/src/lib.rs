//! Shim installation and SDK binary resolution.
//!
//! # Architecture
//!
//! A shim is a symlink named after an intercepted binary (`flutter`,
//! `dart`) that points back at the fpin executable. Which physical binary
//! an invocation ends up in is decided at runtime from `argv[0]`, so one
//! executable serves every shim name.
//!
//! Resolution is mechanism, not policy. [`SdkResolver`] is the contract; the
//! two layouts fvm materializes on disk ([`ProjectSdk`], [`CacheSdk`]) are
//! the policies, and the caller picks one at startup.

pub use error::{Error, Result};
pub use resolver::{CacheSdk, ProjectSdk, SdkResolver, project_sdk_link};
pub use root::ShimRoot;

mod error;
mod resolver;
mod root;

/// Binary names intercepted by shims.
pub const INTERCEPTED: [&str; 2] = ["flutter", "dart"];

/// Environment variable overriding the shim root directory.
pub const ROOT_ENV: &str = "FPIN_ROOT";

/// Default shim root directory name under the user's home.
pub const DEFAULT_ROOT_DIR: &str = ".fpin";

/// Subdirectory of the shim root holding the shim symlinks.
pub const SHIMS_DIR: &str = "shims";
