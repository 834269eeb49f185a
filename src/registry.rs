//! Local source file registry (`gdeps.json`).
//!
//! Files registered by hand with `gdeps register` are tracked here rather
//! than in the project manifest. The file is owned by gdeps; content that
//! does not parse is discarded and replaced on the next save.

use crate::config::REGISTRY_FILE;
use crate::error::{GdepsError, Result};
use crate::manifest::SourceFileRef;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalRegistry {
    pub file_dependencies: Vec<SourceFileRef>,
}

impl LocalRegistry {
    pub fn path(root: &Path) -> PathBuf {
        root.join(REGISTRY_FILE)
    }

    pub fn exists(root: &Path) -> bool {
        Self::path(root).is_file()
    }

    /// Read the registry under `root`. Missing or corrupt files yield an empty registry.
    pub fn load(root: &Path) -> Result<Self> {
        match fs::read_to_string(Self::path(root)) {
            Ok(content) => Ok(Self::parse(&content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn parse(content: &str) -> Self {
        serde_json::from_str(content).unwrap_or_default()
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(Self::path(root), content)?;
        Ok(())
    }

    /// Append an entry. Duplicates are not filtered.
    pub fn push(&mut self, filename: impl Into<String>) {
        self.file_dependencies.push(SourceFileRef::new(filename));
    }
}

/// Record `file` (relative to `root`) in the registry.
pub fn register(root: &Path, file: &str) -> Result<LocalRegistry> {
    let target = root.join(file);
    if !target.is_file() {
        return Err(GdepsError::FileNotFound(target));
    }

    let mut registry = LocalRegistry::load(root)?;
    registry.push(file);
    registry.save(root)?;
    Ok(registry)
}
