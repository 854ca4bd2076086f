pub mod config;
pub mod fragment;
pub mod manifest;
pub mod sort_key;
pub mod version;

pub use config::{RelnotesConfig, CONFIG_FILE};
pub use fragment::Fragment;
pub use manifest::Manifest;
pub use sort_key::{ReleaseKind, SortKey, INSTALL_FRAGMENT};
pub use version::VersionMarker;
