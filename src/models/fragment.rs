use super::SortKey;
use std::path::{Path, PathBuf};

/// A release-note message file contributed for one version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// File stem, e.g. "1.2.0" or "install"
    pub name: String,

    /// Source file the fragment was discovered at
    pub path: PathBuf,

    /// Ordering key derived from `name`
    pub key: SortKey,
}

impl Fragment {
    /// Build a fragment from a discovered path. Returns `None` when the path
    /// has no usable file stem.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let name = path.file_stem()?.to_str()?.to_string();
        Some(Self {
            key: SortKey::from_name(&name),
            name,
            path,
        })
    }

    /// File name including extension, reused for the built copy
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.name)
    }

    /// Destination of this fragment inside an output directory
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.file_name())
    }

    pub fn is_pre_release(&self) -> bool {
        match &self.key {
            SortKey::Version { kind, .. } => kind.is_pre_release(),
            SortKey::Install => false,
        }
    }
}
