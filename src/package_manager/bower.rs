use super::{
    InstallOutput, InstallRequest, InstalledPackage, MainEntry, PackageManager, endpoint_name,
    split_endpoint,
};
use crate::config::GdepsConfig;
use crate::error::{GdepsError, Result};
use crate::ui::Terminal;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata bower writes to `<components>/<name>/.bower.json`.
#[derive(Deserialize, Debug)]
struct PackageMeta {
    #[serde(default)]
    main: Option<MainEntry>,
    /// Source the package was requested from, without alias or target.
    #[serde(default, rename = "_originalSource")]
    original_source: Option<String>,
}

/// The `bower` command line client.
///
/// Bower runs with the terminal attached, so its own prompts (version
/// conflicts, `init` questions) go straight to the user.
#[derive(Debug, Clone)]
pub struct Bower {
    program: String,
    root: PathBuf,
    components_dir: String,
}

impl Bower {
    pub fn new(root: &Path, config: &GdepsConfig) -> Self {
        Self {
            program: config.bower_program.clone(),
            root: root.to_path_buf(),
            components_dir: config.components_dir.clone(),
        }
    }

    fn run(&self, args: &[String], term: &mut dyn Terminal) -> Result<()> {
        term.log("Bower", &format!("{} {}", self.program, args.join(" ")));

        let status = Command::new(&self.program)
            .args(args)
            .current_dir(&self.root)
            .status()
            .map_err(|e| GdepsError::ExternalTool(format!("failed to run {}: {}", self.program, e)))?;

        if !status.success() {
            return Err(GdepsError::ExternalTool(format!(
                "'{} {}' exited with {}",
                self.program,
                args.first().map(String::as_str).unwrap_or(""),
                status
            )));
        }
        Ok(())
    }

    fn components_path(&self) -> PathBuf {
        self.root.join(&self.components_dir)
    }

    fn read_meta(&self, endpoint: &str) -> Result<PackageMeta> {
        let meta_path = self.components_path().join(endpoint).join(".bower.json");
        let content = fs::read_to_string(&meta_path).map_err(|e| {
            GdepsError::ExternalTool(format!("cannot read {}: {}", meta_path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            GdepsError::ExternalTool(format!("invalid {}: {}", meta_path.display(), e))
        })
    }

    fn read_installed(&self, endpoint: &str) -> Result<InstalledPackage> {
        let meta = self.read_meta(endpoint)?;
        Ok(InstalledPackage {
            endpoint_name: endpoint.to_string(),
            main: meta.main.as_ref().and_then(|m| m.first()).map(str::to_string),
        })
    }

    /// Directory of the installed package bower fetched from `source`.
    fn find_by_source(&self, source: &str) -> Option<String> {
        let entries = fs::read_dir(self.components_path()).ok()?;
        let mut names: Vec<String> = entries
            .flatten()
            .filter(|e| e.path().is_dir())
            .filter_map(|e| e.file_name().to_str().map(str::to_string))
            .collect();
        names.sort();
        names.into_iter().find(|name| {
            self.read_meta(name)
                .is_ok_and(|meta| meta.original_source.as_deref() == Some(source))
        })
    }

    /// Where `package` landed: its alias, the directory whose metadata
    /// names it as source, or the name derived from the source.
    fn locate_installed(&self, package: &str) -> Result<InstalledPackage> {
        let endpoint = match split_endpoint(package) {
            (Some(alias), _) => alias.to_string(),
            (None, source) => self
                .find_by_source(source)
                .unwrap_or_else(|| endpoint_name(package)),
        };
        self.read_installed(&endpoint)
    }
}

impl PackageManager for Bower {
    fn install(&self, request: &InstallRequest, term: &mut dyn Terminal) -> Result<InstallOutput> {
        let mut args = vec!["install".to_string()];
        args.extend(request.packages.iter().cloned());
        if request.save {
            args.push("--save".to_string());
        }
        self.run(&args, term)?;

        let mut output = InstallOutput::new();
        for package in &request.packages {
            let installed = self.locate_installed(package)?;
            output.insert(installed.endpoint_name.clone(), installed);
        }
        Ok(output)
    }

    fn init(&self, term: &mut dyn Terminal) -> Result<()> {
        self.run(&["init".to_string()], term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{Answer, Prompt};

    struct Silent;

    impl Terminal for Silent {
        fn ask(&mut self, _prompt: &Prompt) -> Result<Answer> {
            Err(GdepsError::Prompt("no prompts expected".to_string()))
        }

        fn log(&mut self, _source: &str, _message: &str) {}
    }

    fn bower_in(root: &Path, program: &str) -> Bower {
        let config = GdepsConfig {
            bower_program: program.to_string(),
            components_dir: "bower_components".to_string(),
        };
        Bower::new(root, &config)
    }

    #[test]
    fn test_read_installed_main() {
        let dir = tempfile::tempdir().unwrap();
        let pkg = dir.path().join("bower_components").join("pkg");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(
            pkg.join(".bower.json"),
            r#"{"name": "pkg", "main": ["dist/pkg.js", "dist/pkg.css"], "version": "1.0.0"}"#,
        )
        .unwrap();

        let installed = bower_in(dir.path(), "bower").read_installed("pkg").unwrap();
        assert_eq!(installed.endpoint_name, "pkg");
        assert_eq!(installed.main.as_deref(), Some("dist/pkg.js"));
    }

    fn install_fake(root: &Path, dir: &str, meta: &str) {
        let pkg = root.join("bower_components").join(dir);
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join(".bower.json"), meta).unwrap();
    }

    #[test]
    fn test_locate_registry_name() {
        let dir = tempfile::tempdir().unwrap();
        install_fake(dir.path(), "jquery", r#"{"main": "dist/jquery.js", "_originalSource": "jquery"}"#);
        let installed = bower_in(dir.path(), "bower")
            .locate_installed("jquery#~3.1.0")
            .unwrap();
        assert_eq!(installed.endpoint_name, "jquery");
        assert_eq!(installed.main.as_deref(), Some("dist/jquery.js"));
    }

    #[test]
    fn test_locate_archive_url() {
        let dir = tempfile::tempdir().unwrap();
        let url = "https://example.com/dist/mylib.zip";
        install_fake(dir.path(), "mylib", &format!(r#"{{"main": "mylib.js", "_originalSource": "{url}"}}"#));
        let installed = bower_in(dir.path(), "bower").locate_installed(url).unwrap();
        assert_eq!(installed.endpoint_name, "mylib");
    }

    #[test]
    fn test_locate_by_original_source_when_name_differs() {
        let dir = tempfile::tempdir().unwrap();
        install_fake(dir.path(), "other", r#"{"main": "o.js", "_originalSource": "jquery"}"#);
        install_fake(dir.path(), "renamed-lib", r#"{"main": "r.js", "_originalSource": "owner/repo"}"#);
        let installed = bower_in(dir.path(), "bower")
            .locate_installed("owner/repo#v2")
            .unwrap();
        assert_eq!(installed.endpoint_name, "renamed-lib");
        assert_eq!(installed.main.as_deref(), Some("r.js"));
    }

    #[test]
    fn test_locate_alias() {
        let dir = tempfile::tempdir().unwrap();
        install_fake(dir.path(), "jquery", r#"{"main": "a.js", "_originalSource": "jquery"}"#);
        install_fake(dir.path(), "jq", r#"{"main": "b.js", "_originalSource": "jquery"}"#);
        let installed = bower_in(dir.path(), "bower").locate_installed("jq=jquery#3").unwrap();
        assert_eq!(installed.endpoint_name, "jq");
        assert_eq!(installed.main.as_deref(), Some("b.js"));
    }

    #[test]
    fn test_locate_falls_back_to_derived_name() {
        let dir = tempfile::tempdir().unwrap();
        install_fake(dir.path(), "repo", r#"{"main": "index.js"}"#);
        let installed = bower_in(dir.path(), "bower")
            .locate_installed("git@github.com:owner/repo.git")
            .unwrap();
        assert_eq!(installed.endpoint_name, "repo");
    }

    #[test]
    fn test_read_installed_missing_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let err = bower_in(dir.path(), "bower").read_installed("pkg").unwrap_err();
        assert!(matches!(err, GdepsError::ExternalTool(_)));
    }

    #[test]
    fn test_missing_program_is_external_error() {
        let dir = tempfile::tempdir().unwrap();
        let bower = bower_in(dir.path(), "gdeps-test-no-such-bower");
        let err = bower
            .install(&InstallRequest::single("pkg"), &mut Silent)
            .unwrap_err();
        assert!(matches!(err, GdepsError::ExternalTool(_)));
    }
}
