// relnotes - Release note assembler
// Builds the per-version message set, VERSION markers and messages.json manifest

pub mod assembler;
pub mod cli;
pub mod models;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use assembler::{Assembler, AssemblyError, BuildReport};
pub use models::{Fragment, Manifest, RelnotesConfig, SortKey, VersionMarker};
