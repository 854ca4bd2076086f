pub mod build;
pub mod list;
pub mod notes;

use crate::Result;
use std::env;
use std::path::PathBuf;

/// Project root from `--project-root`, or the current directory
pub fn project_root(path: Option<&str>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(PathBuf::from(path)),
        None => Ok(env::current_dir()?),
    }
}
