//! `gdeps register <file>`

use crate::registry;
use anyhow::Result;
use colored::*;
use std::path::Path;

pub fn register(root: &Path, file: &str) -> Result<()> {
    let registry = registry::register(root, file)?;
    println!(
        "{} Registered {} ({} local files)",
        "✓".green(),
        file.bold(),
        registry.file_dependencies.len()
    );
    Ok(())
}
