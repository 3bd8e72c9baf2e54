use std::env;
use std::path::PathBuf;

pub fn user_home() -> Option<PathBuf> {
    home::home_dir()
}

pub fn user_temp() -> PathBuf {
    env::temp_dir()
}
