use crate::assembler::{release_body, Assembler, VERSION_FILE};
use crate::models::RelnotesConfig;
use crate::{Context, Result};
use std::fs;
use std::path::Path;

/// Print the release body for a built version (default: the current VERSION)
pub fn run(project_root: Option<&str>, version: Option<&str>) -> Result<()> {
    let project_root = super::project_root(project_root)?;
    let body = release_notes(&project_root, version)?;
    println!("{}", body);
    Ok(())
}

fn release_notes(project_root: &Path, version: Option<&str>) -> Result<String> {
    let config = RelnotesConfig::load(project_root).context("Failed to load relnotes.toml")?;
    let output_dir = project_root.join(&config.output_dir);

    let version = match version {
        Some(version) => version.to_string(),
        None => {
            let path = output_dir.join(VERSION_FILE);
            fs::read_to_string(&path)
                .with_context(|| {
                    format!("No {} at {}. Run 'relnotes build' first.", VERSION_FILE, path.display())
                })?
                .trim()
                .to_string()
        }
    };

    let path = output_dir.join(format!("{}.{}", version, config.extension));
    let text = fs::read(&path)
        .with_context(|| format!("Release '{}' not built: {}", version, path.display()))?;

    let global_message = Assembler::new(project_root, config).global_message()?;
    Ok(release_body(
        &String::from_utf8_lossy(&text),
        &String::from_utf8_lossy(&global_message),
    ))
}
