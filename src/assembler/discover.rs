use super::{AssemblyError, AssemblyResult};
use crate::models::Fragment;
use glob::{MatchOptions, Pattern};
use std::fs;
use std::io;
use std::path::Path;

/// Find every `*.<extension>` file in `messages_dir`, in release order.
///
/// Hidden files (leading dot) never match. Matches are collected in path
/// order first so that fragments with equal keys keep a stable, reproducible
/// position.
pub fn discover_fragments(messages_dir: &Path, extension: &str) -> AssemblyResult<Vec<Fragment>> {
    if !messages_dir.is_dir() {
        return Err(AssemblyError::missing(
            messages_dir,
            io::Error::new(io::ErrorKind::NotFound, "fragment directory does not exist"),
        ));
    }

    let pattern = Pattern::new(&format!("*.{}", Pattern::escape(extension)))
        .map_err(|e| AssemblyError::InvalidPattern(e.to_string()))?;
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let entries = fs::read_dir(messages_dir).map_err(|e| AssemblyError::missing(messages_dir, e))?;

    let mut fragments = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| AssemblyError::missing(messages_dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        if !pattern.matches_with(&file_name.to_string_lossy(), options) {
            continue;
        }

        match Fragment::from_path(&path) {
            Some(fragment) => fragments.push(fragment),
            None => return Err(AssemblyError::InvalidFragmentName(path)),
        }
    }

    fragments.sort_by(|a, b| a.path.cmp(&b.path));
    fragments.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(fragments)
}
