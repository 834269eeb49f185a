use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Sidecar registry of manually registered source files.
pub const REGISTRY_FILE: &str = "gdeps.json";

/// Environment variable overriding the bower executable.
pub const BOWER_ENV: &str = "GDEPS_BOWER";

#[derive(Debug, Clone, PartialEq)]
pub struct GdepsConfig {
    pub bower_program: String,
    /// Where bower puts installed packages, relative to the project root.
    pub components_dir: String,
}

/// The subset of `.bowerrc` gdeps cares about.
#[derive(Deserialize, Debug, Default)]
struct BowerRc {
    #[serde(default = "default_components_dir")]
    directory: String,
}

fn default_components_dir() -> String {
    "bower_components".to_string()
}

fn default_bower_program() -> String {
    if cfg!(windows) {
        "bower.cmd".to_string()
    } else {
        "bower".to_string()
    }
}

impl Default for GdepsConfig {
    fn default() -> Self {
        Self {
            bower_program: default_bower_program(),
            components_dir: default_components_dir(),
        }
    }
}

impl GdepsConfig {
    pub fn load(root: &Path) -> Self {
        let bower_program = std::env::var(BOWER_ENV)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(default_bower_program);
        Self::with_program(root, bower_program)
    }

    fn with_program(root: &Path, bower_program: String) -> Self {
        let components_dir = fs::read_to_string(root.join(".bowerrc"))
            .ok()
            .and_then(|content| serde_json::from_str::<BowerRc>(&content).ok())
            .map(|rc| rc.directory)
            .unwrap_or_else(default_components_dir);

        Self {
            bower_program,
            components_dir,
        }
    }
}
