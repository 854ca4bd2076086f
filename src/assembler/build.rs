use super::{
    discover_fragments, to_slash, AssemblyError, AssemblyResult, PRE_RELEASE_FILE, VERSION_FILE,
};
use crate::models::{Fragment, Manifest, RelnotesConfig, VersionMarker};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Append the global message to a fragment's content.
///
/// Works on raw bytes: fragments are copied as-is, whatever their encoding.
/// A non-empty fragment is separated from the message by a blank line. An
/// empty global message leaves the content untouched.
pub fn with_global_message(content: &[u8], global_message: &[u8]) -> Vec<u8> {
    if global_message.is_empty() {
        return content.to_vec();
    }

    let mut result = Vec::with_capacity(content.len() + global_message.len() + 2);
    result.extend_from_slice(content);
    if !content.is_empty() {
        result.extend_from_slice(b"\n\n");
    }
    result.extend_from_slice(global_message);
    result
}

/// Outcome of a successful build
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Fragment names in release order
    pub order: Vec<String>,

    /// Name to built path mapping, as written to the manifest file
    pub manifest: Manifest,

    /// `None` when no fragments were found
    pub marker: Option<VersionMarker>,
}

/// Builds the release message set for one project
pub struct Assembler {
    project_root: PathBuf,
    config: RelnotesConfig,
    quiet: bool,
}

impl Assembler {
    pub fn new(project_root: impl Into<PathBuf>, config: RelnotesConfig) -> Self {
        Self {
            project_root: project_root.into(),
            config,
            quiet: false,
        }
    }

    /// Suppress progress output
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn config(&self) -> &RelnotesConfig {
        &self.config
    }

    fn resolve(&self, relative: &Path) -> PathBuf {
        self.project_root.join(relative)
    }

    /// Fragments in release order, without touching the output directory
    pub fn fragments(&self) -> AssemblyResult<Vec<Fragment>> {
        discover_fragments(&self.resolve(&self.config.messages_dir), &self.config.extension)
    }

    /// Read the shared global message
    pub fn global_message(&self) -> AssemblyResult<Vec<u8>> {
        let path = self.resolve(&self.config.global_message);
        fs::read(&path).map_err(|e| AssemblyError::missing(path, e))
    }

    /// Run the full pipeline: recreate the output directory, write every
    /// fragment, the version markers and the manifest.
    pub fn build(&self) -> AssemblyResult<BuildReport> {
        let fragments = self.fragments()?;
        let global_message = self.global_message()?;

        self.recreate_output_dir()?;

        let mut manifest = Manifest::new();
        let mut marker = None;
        let last_index = fragments.len().saturating_sub(1);

        for (index, fragment) in fragments.iter().enumerate() {
            let content = fs::read(&fragment.path)
                .map_err(|e| AssemblyError::missing(&fragment.path, e))?;

            let relative = self.config.output_dir.join(fragment.file_name());
            manifest.insert(fragment.name.as_str(), to_slash(&relative));

            // first and last coincide for a single fragment; append once
            let boundary = index == 0 || index == last_index;
            let content = if boundary {
                with_global_message(&content, &global_message)
            } else {
                content
            };

            if index == last_index {
                let version = VersionMarker::from_name(&fragment.name);
                self.write_markers(&version)?;
                marker = Some(version);
            }

            write_file(&self.resolve(&relative), &content)?;

            let mut line = format!("{} {}", "Created".green(), to_slash(&relative));
            if boundary {
                line.push_str(&" (with global message)".magenta().bold().to_string());
            }
            self.progress(&line);
        }

        if fragments.is_empty() {
            self.warn(&format!(
                "No fragments found in {}",
                to_slash(&self.config.messages_dir)
            ));
        }

        write_file(&self.resolve(&self.config.manifest), &manifest.to_json()?)?;
        self.progress(&format!(
            "{} {}",
            "Created".green(),
            to_slash(&self.config.manifest)
        ));
        self.progress(&"Done.".green().bold().to_string());

        Ok(BuildReport {
            order: fragments.into_iter().map(|f| f.name).collect(),
            manifest,
            marker,
        })
    }

    fn recreate_output_dir(&self) -> AssemblyResult<()> {
        let output_dir = self.resolve(&self.config.output_dir);
        if output_dir.exists() {
            fs::remove_dir_all(&output_dir).map_err(|e| AssemblyError::write(&output_dir, e))?;
        }
        fs::create_dir_all(&output_dir).map_err(|e| AssemblyError::write(&output_dir, e))?;

        self.progress(&format!(
            "{} {}",
            "Deleted".red(),
            to_slash(&self.config.output_dir.join("*"))
        ));
        Ok(())
    }

    fn write_markers(&self, marker: &VersionMarker) -> AssemblyResult<()> {
        let output_dir = self.resolve(&self.config.output_dir);
        write_file(&output_dir.join(VERSION_FILE), &marker.version)?;
        write_file(&output_dir.join(PRE_RELEASE_FILE), marker.pre_release_text())
    }

    fn progress(&self, line: &str) {
        if !self.quiet {
            println!("{}", line);
        }
    }

    fn warn(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", format!("⚠️  {}", message).yellow());
        }
    }
}

fn write_file(path: &Path, content: impl AsRef<[u8]>) -> AssemblyResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| AssemblyError::write(parent, e))?;
    }
    fs::write(path, content).map_err(|e| AssemblyError::write(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project(fragments: &[(&str, &str)], global: &str) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let config = RelnotesConfig::default();
        let messages_dir = temp_dir.path().join(&config.messages_dir);
        fs::create_dir_all(&messages_dir).unwrap();
        for (name, content) in fragments {
            fs::write(messages_dir.join(format!("{}.txt", name)), content).unwrap();
        }
        fs::write(temp_dir.path().join(&config.global_message), global).unwrap();
        temp_dir
    }

    fn read_output(temp_dir: &TempDir, file: &str) -> String {
        let path = temp_dir.path().join("release_messages/dest").join(file);
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_with_global_message() {
        assert_eq!(with_global_message(b"Notes", b"Thanks!"), b"Notes\n\nThanks!");
        assert_eq!(with_global_message(b"", b"Thanks!"), b"Thanks!");
        assert_eq!(with_global_message(b"Notes", b""), b"Notes");
    }

    #[test]
    fn test_build_single_fragment_appends_once() {
        let temp_dir = project(&[("1.0.0", "One")], "Thanks!");
        let report = Assembler::new(temp_dir.path(), RelnotesConfig::default())
            .quiet(true)
            .build()
            .unwrap();

        assert_eq!(report.order, vec!["1.0.0"]);
        assert_eq!(read_output(&temp_dir, "1.0.0.txt"), "One\n\nThanks!");
        assert_eq!(read_output(&temp_dir, "VERSION"), "1.0.0");
        assert_eq!(read_output(&temp_dir, "PRE_RELEASE"), "false");
    }

    #[test]
    fn test_build_middle_fragments_untouched() {
        let temp_dir = project(
            &[("install", "Hi"), ("1.0.0", "One"), ("1.1.0", "Two")],
            "Thanks!",
        );
        Assembler::new(temp_dir.path(), RelnotesConfig::default())
            .quiet(true)
            .build()
            .unwrap();

        assert_eq!(read_output(&temp_dir, "install.txt"), "Hi\n\nThanks!");
        assert_eq!(read_output(&temp_dir, "1.0.0.txt"), "One");
        assert_eq!(read_output(&temp_dir, "1.1.0.txt"), "Two\n\nThanks!");
    }

    #[test]
    fn test_build_copies_non_utf8_content() {
        let temp_dir = project(&[("install", "Hi"), ("1.0.0", "")], "Thanks!");
        let fragment = temp_dir.path().join("release_messages/src/messages/1.0.0.txt");
        fs::write(&fragment, b"Caf\xe9").unwrap();

        Assembler::new(temp_dir.path(), RelnotesConfig::default())
            .quiet(true)
            .build()
            .unwrap();

        let built = fs::read(temp_dir.path().join("release_messages/dest/1.0.0.txt")).unwrap();
        assert_eq!(built, b"Caf\xe9\n\nThanks!");
    }

    #[test]
    fn test_build_removes_stale_output() {
        let temp_dir = project(&[("1.0.0", "One")], "Thanks!");
        let stale = temp_dir.path().join("release_messages/dest/0.1.0.txt");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "old").unwrap();

        Assembler::new(temp_dir.path(), RelnotesConfig::default())
            .quiet(true)
            .build()
            .unwrap();
        assert!(!stale.exists());
    }

    #[test]
    fn test_build_without_fragments() {
        let temp_dir = project(&[], "Thanks!");
        let report = Assembler::new(temp_dir.path(), RelnotesConfig::default())
            .quiet(true)
            .build()
            .unwrap();

        assert!(report.marker.is_none());
        assert!(report.manifest.is_empty());
        assert!(!temp_dir.path().join("release_messages/dest/VERSION").exists());
        let manifest = fs::read_to_string(temp_dir.path().join("messages.json")).unwrap();
        assert_eq!(manifest, "{}");
    }

    #[test]
    fn test_build_missing_global_message() {
        let temp_dir = project(&[("1.0.0", "One")], "");
        fs::remove_file(temp_dir.path().join("release_messages/src/global_message.txt")).unwrap();

        let err = Assembler::new(temp_dir.path(), RelnotesConfig::default())
            .quiet(true)
            .build()
            .unwrap_err();
        assert!(matches!(err, AssemblyError::MissingFile { .. }));
        // nothing is deleted before inputs are known to exist
        assert!(!temp_dir.path().join("release_messages/dest").exists());
    }
}
