//! `gdeps install <package>`
//!
//! Pipeline: locate the project file, let bower install the package, then
//! record the package's entry script as an external source file.

use crate::config::GdepsConfig;
use crate::error::GdepsError;
use crate::manifest::{locate_manifest, merge};
use crate::package_manager::{InstallRequest, PackageManager, join_relative};
use crate::ui::Terminal;
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

/// Install `package` and add it to the project file.
///
/// Returns the path recorded in `externalSourceFiles`.
pub fn install(
    root: &Path,
    package: &str,
    config: &GdepsConfig,
    pm: &dyn PackageManager,
    term: &mut dyn Terminal,
) -> Result<String> {
    let manifest_path = locate_manifest(root, term)?;

    println!("{} Installing {}...", "📦".blue(), package.bold());
    let output = pm.install(&InstallRequest::single(package), term)?;

    let installed = output.values().next().ok_or_else(|| {
        GdepsError::ExternalTool(format!("no package reported for '{}'", package))
    })?;
    let main = installed.main.as_deref().ok_or_else(|| {
        GdepsError::ExternalTool(format!(
            "package '{}' does not declare a main file",
            installed.endpoint_name
        ))
    })?;
    let file = join_relative(&[
        config.components_dir.as_str(),
        installed.endpoint_name.as_str(),
        main,
    ]);

    let text = fs::read_to_string(&manifest_path)
        .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
    let merged = merge(&text, &file)?;
    fs::write(&manifest_path, merged)
        .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

    println!(
        "{} Added {} to {}",
        "✓".green(),
        file.cyan(),
        manifest_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default()
    );
    println!("Done!");
    Ok(file)
}
