//! GDevelop project manifest handling.
//!
//! A GDevelop project is a single JSON document. gdeps only owns two parts of
//! it: `properties.useExternalSourceFiles` and the `externalSourceFiles`
//! array. Every other field, including the existing entries of that array, is
//! carried through as raw JSON.
//!
//! - [`locate_manifest`] - find the project file in a directory
//! - [`merge`] - add an external source file to the project text

mod locate;
mod merge;

pub use locate::{is_manifest_candidate, locate_manifest, manifest_candidates};
pub use merge::merge;

use crate::error::{GdepsError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key toggled on `properties` once a file has been added.
pub const USE_EXTERNAL_SOURCE_FILES: &str = "useExternalSourceFiles";

/// A project file as far as gdeps reads it.
///
/// `properties` and the existing `externalSourceFiles` entries stay raw JSON:
/// gdeps never validates or rewrites what is already in the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectManifest {
    pub properties: Map<String, Value>,
    pub external_source_files: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A script file the engine loads alongside the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceFileRef {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub gd_managed: bool,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Javascript,
}

impl SourceFileRef {
    /// A Javascript file not managed by the GDevelop editor.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            gd_managed: false,
            language: Language::Javascript,
        }
    }
}

/// `filename` of a raw `externalSourceFiles` entry, if it has a string one.
pub fn entry_filename(entry: &Value) -> Option<&str> {
    entry.get("filename").and_then(Value::as_str)
}

impl ProjectManifest {
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|_| GdepsError::MalformedManifest)
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.external_source_files
            .iter()
            .any(|entry| entry_filename(entry) == Some(filename))
    }

    pub fn enable_external_source_files(&mut self) {
        self.properties
            .insert(USE_EXTERNAL_SOURCE_FILES.to_string(), Value::Bool(true));
    }

    pub fn push(&mut self, file: SourceFileRef) -> Result<()> {
        self.external_source_files.push(serde_json::to_value(file)?);
        Ok(())
    }
}
