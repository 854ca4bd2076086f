//! Release note assembler
//!
//! Discovers per-version message fragments, puts them in release order,
//! appends the shared global message to the first and last fragment, and
//! writes the built set together with `VERSION`, `PRE_RELEASE` and a JSON
//! manifest.

pub mod build;
pub mod discover;
pub mod notes;

pub use build::{with_global_message, Assembler, BuildReport};
pub use discover::discover_fragments;
pub use notes::release_body;

use std::path::{Path, PathBuf};

/// File holding the version string of the last fragment
pub const VERSION_FILE: &str = "VERSION";

/// File holding "true"/"false" for the last fragment
pub const PRE_RELEASE_FILE: &str = "PRE_RELEASE";

/// Result type for assembler operations
pub type AssemblyResult<T> = Result<T, AssemblyError>;

/// Errors that abort an assembly run
#[derive(Debug, thiserror::Error)]
pub enum AssemblyError {
    #[error("Missing file '{}': {source}", path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {source}", path.display())]
    IoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid fragment pattern: {0}")]
    InvalidPattern(String),

    #[error("Fragment file name is not valid UTF-8: {}", .0.display())]
    InvalidFragmentName(PathBuf),

    #[error("Failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl AssemblyError {
    pub(crate) fn missing(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AssemblyError::MissingFile {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AssemblyError::IoWrite {
            path: path.into(),
            source,
        }
    }
}

/// Render a relative path with `/` separators, as stored in the manifest
pub fn to_slash(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
