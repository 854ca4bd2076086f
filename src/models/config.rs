//! relnotes configuration (relnotes.toml)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional config file at the project root
pub const CONFIG_FILE: &str = "relnotes.toml";

fn default_messages_dir() -> PathBuf {
    PathBuf::from("release_messages/src/messages")
}

fn default_global_message() -> PathBuf {
    PathBuf::from("release_messages/src/global_message.txt")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("release_messages/dest")
}

fn default_manifest() -> PathBuf {
    PathBuf::from("messages.json")
}

fn default_extension() -> String {
    "txt".to_string()
}

/// Input and output locations, relative to the project root
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RelnotesConfig {
    /// Directory holding one message file per version
    #[serde(default = "default_messages_dir")]
    pub messages_dir: PathBuf,

    /// Shared message appended to the first and last fragments
    #[serde(default = "default_global_message")]
    pub global_message: PathBuf,

    /// Build directory, deleted and recreated on every run
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Manifest file mapping fragment names to built paths
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// Extension of fragment files (without the dot)
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for RelnotesConfig {
    fn default() -> Self {
        Self {
            messages_dir: default_messages_dir(),
            global_message: default_global_message(),
            output_dir: default_output_dir(),
            manifest: default_manifest(),
            extension: default_extension(),
        }
    }
}

impl RelnotesConfig {
    /// Load config from relnotes.toml, falling back to defaults when absent
    pub fn load(project_root: &Path) -> anyhow::Result<Self> {
        let config_path = project_root.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: RelnotesConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = RelnotesConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, RelnotesConfig::default());
        assert_eq!(config.output_dir, PathBuf::from("release_messages/dest"));
    }

    #[test]
    fn test_load_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "messages_dir = \"notes\"\nextension = \"md\"\n",
        )
        .unwrap();

        let config = RelnotesConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.messages_dir, PathBuf::from("notes"));
        assert_eq!(config.extension, "md");
        assert_eq!(config.manifest, PathBuf::from("messages.json"));
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "output = \"x\"\n").unwrap();
        assert!(RelnotesConfig::load(temp_dir.path()).is_err());
    }
}
