use crate::error::{GdepsError, Result};
use crate::ui::Terminal;
use std::fs;
use std::path::{Path, PathBuf};

/// True when the last `.`-delimited segment of `name` is `json`.
pub fn is_manifest_candidate(name: &str) -> bool {
    name.rsplit('.').next() == Some("json")
}

/// Names of the JSON files directly inside `dir`, sorted.
///
/// Symlinks count when they point at a regular file; dangling links are skipped.
pub fn manifest_candidates(dir: &Path) -> Result<Vec<String>> {
    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !fs::metadata(entry.path()).is_ok_and(|m| m.is_file()) {
            continue;
        }
        if let Some(name) = entry.file_name().to_str()
            && is_manifest_candidate(name)
        {
            candidates.push(name.to_string());
        }
    }
    candidates.sort();
    Ok(candidates)
}

/// Find the project file in `dir`, asking the user when there is more than one.
pub fn locate_manifest(dir: &Path, term: &mut dyn Terminal) -> Result<PathBuf> {
    let candidates = manifest_candidates(dir)?;
    let name = match candidates.len() {
        0 => return Err(GdepsError::NoManifestFound),
        1 => candidates[0].clone(),
        _ => term.select("What file is your project file?", &candidates)?,
    };
    Ok(dir.join(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{Answer, Prompt};
    use std::fs;

    #[derive(Default)]
    struct Picker {
        answer: Option<String>,
        asked: Vec<Prompt>,
    }

    impl Terminal for Picker {
        fn ask(&mut self, prompt: &Prompt) -> Result<Answer> {
            self.asked.push(prompt.clone());
            match &self.answer {
                Some(a) => Ok(Answer::Text(a.clone())),
                None => Err(GdepsError::Prompt("unexpected prompt".to_string())),
            }
        }

        fn log(&mut self, _source: &str, _message: &str) {}
    }

    fn dir_with(files: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for file in files {
            fs::write(dir.path().join(file), "{}").unwrap();
        }
        dir
    }

    #[test]
    fn test_candidate_extension() {
        assert!(is_manifest_candidate("game.json"));
        assert!(is_manifest_candidate("my.game.json"));
        assert!(is_manifest_candidate("json"));
        assert!(!is_manifest_candidate("game.json.bak"));
        assert!(!is_manifest_candidate("readme.md"));
        assert!(!is_manifest_candidate("game.JSON"));
    }

    #[test]
    fn test_single_candidate_skips_prompt() {
        let dir = dir_with(&["a.json", "notes.txt"]);
        let mut term = Picker::default();
        let path = locate_manifest(dir.path(), &mut term).unwrap();
        assert_eq!(path, dir.path().join("a.json"));
        assert!(term.asked.is_empty());
    }

    #[test]
    fn test_multiple_candidates_prompt() {
        let dir = dir_with(&["b.json", "a.json"]);
        let mut term = Picker {
            answer: Some("b.json".to_string()),
            ..Default::default()
        };
        let path = locate_manifest(dir.path(), &mut term).unwrap();
        assert_eq!(path, dir.path().join("b.json"));
        assert_eq!(
            term.asked,
            vec![Prompt::Select {
                message: "What file is your project file?".to_string(),
                choices: vec!["a.json".to_string(), "b.json".to_string()],
            }]
        );
    }

    #[test]
    fn test_no_candidates_fails() {
        let dir = dir_with(&["readme.md"]);
        let mut term = Picker::default();
        let err = locate_manifest(dir.path(), &mut term).unwrap_err();
        assert!(matches!(err, GdepsError::NoManifestFound));
    }

    #[test]
    fn test_directories_are_ignored() {
        let dir = dir_with(&["game.json"]);
        fs::create_dir(dir.path().join("backup.json")).unwrap();
        assert_eq!(manifest_candidates(dir.path()).unwrap(), vec!["game.json"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_manifest_is_candidate() {
        let shared = tempfile::tempdir().unwrap();
        fs::write(shared.path().join("game.json"), "{}").unwrap();
        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(shared.path().join("game.json"), dir.path().join("game.json"))
            .unwrap();
        std::os::unix::fs::symlink(shared.path().join("gone.json"), dir.path().join("gone.json"))
            .unwrap();

        assert_eq!(manifest_candidates(dir.path()).unwrap(), vec!["game.json"]);
    }

    #[test]
    fn test_cancelled_prompt_propagates() {
        let dir = dir_with(&["a.json", "b.json"]);
        let mut term = Picker::default();
        let err = locate_manifest(dir.path(), &mut term).unwrap_err();
        assert!(matches!(err, GdepsError::Prompt(_)));
    }
}
