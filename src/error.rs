//! Error types shared by the gdeps library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`GdepsError`].
pub type Result<T> = std::result::Result<T, GdepsError>;

/// Failures a gdeps command can run into.
#[derive(Debug, Error)]
pub enum GdepsError {
    /// No `*.json` file in the project directory.
    #[error("No project file found!")]
    NoManifestFound,

    /// The project file is not a valid GDevelop project document.
    #[error("Malformed JSON file!")]
    MalformedManifest,

    /// A file passed to `register` does not exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Bower failed to launch, exited unsuccessfully, or returned unusable output.
    #[error("Bower: {0}")]
    ExternalTool(String),

    /// An interactive prompt failed or was cancelled.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<inquire::InquireError> for GdepsError {
    fn from(err: inquire::InquireError) -> Self {
        GdepsError::Prompt(err.to_string())
    }
}
