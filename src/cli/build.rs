use crate::assembler::Assembler;
use crate::models::RelnotesConfig;
use crate::{Context, Result};
use std::path::Path;

/// Build the release message set
pub fn run(project_root: Option<&str>, quiet: bool) -> Result<()> {
    let project_root = super::project_root(project_root)?;
    run_impl(&project_root, quiet)
}

fn run_impl(project_root: &Path, quiet: bool) -> Result<()> {
    let config = RelnotesConfig::load(project_root).context("Failed to load relnotes.toml")?;
    Assembler::new(project_root, config).quiet(quiet).build()?;
    Ok(())
}
