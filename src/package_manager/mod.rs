//! External package manager.
//!
//! gdeps does not resolve or fetch anything itself. It hands the work to a
//! [`PackageManager`] and only reads back where the package's entry script
//! ended up.
//!
//! - [`Bower`] - runs the `bower` CLI

mod bower;

pub use bower::Bower;

use crate::error::Result;
use crate::ui::Terminal;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct InstallRequest {
    pub packages: Vec<String>,
    /// Record the packages in the package manager's own manifest.
    pub save: bool,
}

impl InstallRequest {
    pub fn single(package: &str) -> Self {
        Self {
            packages: vec![package.to_string()],
            save: true,
        }
    }
}

/// A package as it landed on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct InstalledPackage {
    /// Directory name under the components directory.
    pub endpoint_name: String,
    /// Entry script, relative to the package directory.
    pub main: Option<String>,
}

/// Installed packages keyed by the name they were requested under.
pub type InstallOutput = BTreeMap<String, InstalledPackage>;

pub trait PackageManager {
    /// Install packages. Blocks until done; questions are asked through `term`.
    fn install(&self, request: &InstallRequest, term: &mut dyn Terminal) -> Result<InstallOutput>;

    /// Create the package manager's manifest interactively.
    fn init(&self, term: &mut dyn Terminal) -> Result<()>;
}

/// `main` in bower.json is either a path or a list of paths.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum MainEntry {
    One(String),
    Many(Vec<String>),
}

impl MainEntry {
    pub fn first(&self) -> Option<&str> {
        match self {
            MainEntry::One(main) => Some(main.as_str()),
            MainEntry::Many(mains) => mains.first().map(|m| m.as_str()),
        }
    }
}

/// Archive suffixes bower strips when naming a package fetched from a URL.
const ARCHIVE_SUFFIXES: &[&str] = &[".tar.gz", ".tgz", ".tar", ".zip", ".git"];

/// Split `alias=source#target` into its alias and source.
///
/// Only `[A-Za-z0-9_.-]` counts as an alias, so `=` inside a URL query is
/// left alone.
pub fn split_endpoint(package: &str) -> (Option<&str>, &str) {
    let (alias, rest) = match package.split_once('=') {
        Some((alias, rest))
            if !alias.is_empty()
                && alias
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')) =>
        {
            (Some(alias), rest)
        }
        _ => (None, package),
    };
    let source = rest.split('#').next().unwrap_or(rest);
    (alias, source)
}

/// Name of the directory a package source installs into when bower
/// metadata does not say otherwise.
///
/// `alias=owner/repo#1.0` installs as `alias`; `owner/repo.git#1.0` as `repo`;
/// `https://host/dist/lib.tar.gz?v=2` as `lib`.
pub fn endpoint_name(package: &str) -> String {
    let (alias, source) = split_endpoint(package);
    if let Some(alias) = alias {
        return alias.to_string();
    }

    let without_query = source.split('?').next().unwrap_or(source);
    let last = without_query
        .trim_end_matches('/')
        .rsplit(['/', ':'])
        .next()
        .unwrap_or(without_query);
    ARCHIVE_SUFFIXES
        .iter()
        .find_map(|suffix| last.strip_suffix(suffix))
        .unwrap_or(last)
        .to_string()
}

/// Join path segments the way a path join would, always with `/`.
pub fn join_relative(parts: &[&str]) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for part in parts {
        for segment in part.split(['/', '\\']) {
            match segment {
                "" | "." => {}
                ".." => {
                    if segments.last().is_some_and(|s| *s != "..") {
                        segments.pop();
                    } else {
                        segments.push("..");
                    }
                }
                other => segments.push(other),
            }
        }
    }
    segments.join("/")
}
