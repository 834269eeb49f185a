//! `gdeps init`

use crate::package_manager::PackageManager;
use crate::registry::LocalRegistry;
use crate::ui::Terminal;
use anyhow::{Context, Result};
use colored::*;
use std::path::Path;

/// Run bower's interactive init, then create `gdeps.json` if missing.
///
/// Returns `true` when the sidecar registry was created.
pub fn init(root: &Path, pm: &dyn PackageManager, term: &mut dyn Terminal) -> Result<bool> {
    pm.init(term)?;

    if LocalRegistry::exists(root) {
        println!(
            "{} {} already exists, leaving it untouched.",
            "!".yellow(),
            LocalRegistry::path(root).display()
        );
        return Ok(false);
    }

    LocalRegistry::default()
        .save(root)
        .context("Failed to write gdeps.json")?;
    println!("{} Created {}", "✓".green(), "gdeps.json".bold());
    Ok(true)
}
