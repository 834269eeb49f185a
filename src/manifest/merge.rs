use super::{ProjectManifest, SourceFileRef};
use crate::error::{GdepsError, Result};

/// Register `file` as an external source file of the project in `manifest_text`.
///
/// Turns on `useExternalSourceFiles` and appends a new entry. If an entry
/// with the same filename already exists the input text is returned as-is,
/// so merging the same file twice is a no-op.
pub fn merge(manifest_text: &str, file: &str) -> Result<String> {
    let mut project = ProjectManifest::parse(manifest_text)?;
    project.enable_external_source_files();

    if project.contains(file) {
        return Ok(manifest_text.to_string());
    }

    project.push(SourceFileRef::new(file))?;
    serde_json::to_string(&project).map_err(|_| GdepsError::MalformedManifest)
}
