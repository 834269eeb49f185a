//! `gdeps list`

use crate::manifest::{ProjectManifest, entry_filename, locate_manifest};
use crate::registry::LocalRegistry;
use crate::ui::{Table, Terminal};
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// `externalSourceFiles` of the project file.
    Manifest,
    /// `gdeps.json`.
    Local,
}

impl Origin {
    pub fn label(self) -> &'static str {
        match self {
            Origin::Manifest => "manifest",
            Origin::Local => "local",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListedFile {
    pub origin: Origin,
    pub filename: String,
    pub gd_managed: bool,
}

/// Every source file known to the project, manifest entries first.
pub fn collect(root: &Path, manifest_path: &Path) -> Result<Vec<ListedFile>> {
    let text = fs::read_to_string(manifest_path)
        .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
    let project = ProjectManifest::parse(&text)?;
    let registry = LocalRegistry::load(root)?;

    let manifest_files = project.external_source_files.iter().map(|entry| ListedFile {
        origin: Origin::Manifest,
        filename: entry_filename(entry).unwrap_or_default().to_string(),
        gd_managed: entry
            .get("gdManaged")
            .and_then(|v| v.as_bool())
            .unwrap_or(false),
    });
    let local_files = registry.file_dependencies.into_iter().map(|f| ListedFile {
        origin: Origin::Local,
        filename: f.filename,
        gd_managed: f.gd_managed,
    });

    Ok(manifest_files.chain(local_files).collect())
}

pub fn list(root: &Path, term: &mut dyn Terminal) -> Result<()> {
    let manifest_path = locate_manifest(root, term)?;
    let files = collect(root, &manifest_path)?;

    if files.is_empty() {
        println!("{} No external source files.", "ℹ".blue());
        return Ok(());
    }

    let mut table = Table::new(&["Origin", "File", "Managed"]);
    for file in files {
        let origin = match file.origin {
            Origin::Manifest => file.origin.label().green().to_string(),
            Origin::Local => file.origin.label().yellow().to_string(),
        };
        let managed = if file.gd_managed { "yes" } else { "no" };
        table.add_row(vec![origin, file.filename, managed.dimmed().to_string()]);
    }
    table.print();
    Ok(())
}
