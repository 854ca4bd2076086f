use crate::assembler::Assembler;
use crate::models::{Fragment, RelnotesConfig, VersionMarker};
use crate::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// Print fragments in release order without building anything
pub fn run(project_root: Option<&str>) -> Result<()> {
    let project_root = super::project_root(project_root)?;
    let fragments = load_fragments(&project_root)?;

    println!("{}", "📋 Release order:".cyan());
    let Some(last) = fragments.last() else {
        println!("{}", "No fragments found.".yellow());
        return Ok(());
    };

    println!();
    for line in release_order_lines(&fragments) {
        println!("{}", line);
    }

    let marker = VersionMarker::from_name(&last.name);
    println!();
    println!("   VERSION:     {}", marker.version.green());
    println!("   PRE_RELEASE: {}", marker.pre_release_text());

    Ok(())
}

fn load_fragments(project_root: &Path) -> Result<Vec<Fragment>> {
    let config = RelnotesConfig::load(project_root).context("Failed to load relnotes.toml")?;
    Ok(Assembler::new(project_root, config).fragments()?)
}

/// One line per fragment: position, name, and tags for pre-releases and
/// fragments that receive the global message.
fn release_order_lines(fragments: &[Fragment]) -> Vec<String> {
    let last_index = fragments.len().saturating_sub(1);
    fragments
        .iter()
        .enumerate()
        .map(|(index, fragment)| {
            let mut line = format!("{:>4} {}", format!("{}.", index + 1), fragment.name);
            if fragment.is_pre_release() {
                line.push_str(" [pre-release]");
            }
            if index == 0 || index == last_index {
                line.push_str(" [global message]");
            }
            line
        })
        .collect()
}
