//! Package store readers.
//!
//! A [`PackageSource`] answers one question: given a package name, what does
//! that installed package declare as its own dependencies? "Not installed"
//! is a normal answer (`Ok(None)`), not an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::trace;

use crate::config::{MANIFEST_FILE, ProjectLayout};
use crate::error::{Error, Result};
use crate::manifest::{DependencyMap, Manifest};

/// Source of installed package manifests.
pub trait PackageSource {
    /// Dependencies declared by the installed package `name`, runtime then
    /// peer, in declaration order.
    ///
    /// Returns `Ok(None)` when the package is not installed.
    ///
    /// # Errors
    ///
    /// Fails when the package is present but its manifest cannot be read or
    /// parsed.
    fn resolve(&self, name: &str) -> Result<Option<DependencyMap>>;
}

/// Reads packages from a `node_modules` directory.
#[derive(Debug, Clone)]
pub struct NodeModulesStore {
    root: PathBuf,
}

impl NodeModulesStore {
    /// Create a store reading from the given `node_modules` directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store for the project's own `node_modules`.
    pub fn for_project(layout: &ProjectLayout) -> Self {
        Self::new(layout.store_dir())
    }

    /// The store directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the manifest of `name` is expected.
    ///
    /// Scoped names (`@scope/pkg`) map onto nested directories.
    pub fn manifest_path(&self, name: &str) -> PathBuf {
        self.root.join(name).join(MANIFEST_FILE)
    }
}

impl PackageSource for NodeModulesStore {
    fn resolve(&self, name: &str) -> Result<Option<DependencyMap>> {
        let path = self.manifest_path(name);

        let source = match fs::read_to_string(&path) {
            Ok(source) => source,
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) =>
            {
                trace!(package = name, path = %path.display(), "Package not installed");
                return Ok(None);
            }
            Err(source) => {
                return Err(Error::SubpackageRead {
                    name: name.to_string(),
                    path,
                    source,
                });
            }
        };

        let manifest = Manifest::parse(&path, &source)?;
        trace!(package = name, path = %path.display(), "Read package manifest");
        Ok(Some(manifest.traversed_dependencies()))
    }
}

/// An in-memory package store.
///
/// Useful for exercising tree building without touching the filesystem.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    packages: IndexMap<String, DependencyMap>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a package with the given `(name, version)` dependencies.
    #[must_use]
    pub fn with_package(mut self, name: &str, dependencies: &[(&str, &str)]) -> Self {
        self.insert(
            name,
            dependencies
                .iter()
                .map(|(dep, version)| ((*dep).to_string(), Some((*version).to_string())))
                .collect(),
        );
        self
    }

    /// Add or replace a package.
    pub fn insert(&mut self, name: &str, dependencies: DependencyMap) {
        self.packages.insert(name.to_string(), dependencies);
    }

    /// Whether `name` is installed.
    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }
}

impl PackageSource for InMemoryStore {
    fn resolve(&self, name: &str) -> Result<Option<DependencyMap>> {
        Ok(self.packages.get(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_package(store: &Path, name: &str, contents: &str) {
        let dir = store.join(name);
        fs::create_dir_all(&dir).expect("create package dir");
        fs::write(dir.join("package.json"), contents).expect("write package.json");
    }

    fn names(map: &DependencyMap) -> Vec<&str> {
        map.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_resolve_absent_package_is_none() {
        let dir = TempDir::new().expect("create temp dir");
        let store = NodeModulesStore::new(dir.path());

        let resolved = store.resolve("nope").expect("absent package is not an error");
        assert!(resolved.is_none());
    }

    #[test]
    fn test_resolve_without_store_dir_is_none() {
        let dir = TempDir::new().expect("create temp dir");
        let store = NodeModulesStore::new(dir.path().join("node_modules"));

        assert!(store.resolve("a").expect("no store dir").is_none());
    }

    #[test]
    fn test_resolve_directory_without_manifest_is_none() {
        let dir = TempDir::new().expect("create temp dir");
        fs::create_dir_all(dir.path().join("empty-pkg")).expect("create dir");
        let store = NodeModulesStore::new(dir.path());

        assert!(store.resolve("empty-pkg").expect("no manifest").is_none());
    }

    #[test]
    fn test_resolve_runtime_then_peer_without_dev() {
        let dir = TempDir::new().expect("create temp dir");
        write_package(
            dir.path(),
            "a",
            r#"{
                "dependencies": {"b": "1.0.0", "c": "1.0.0"},
                "devDependencies": {"mocha": "10.0.0"},
                "peerDependencies": {"react": "18.0.0", "b": "2.0.0"}
            }"#,
        );
        let store = NodeModulesStore::new(dir.path());

        let deps = store.resolve("a").expect("read").expect("installed");
        assert_eq!(names(&deps), ["b", "c", "react"]);
    }

    #[test]
    fn test_resolve_package_without_sections_has_no_dependencies() {
        let dir = TempDir::new().expect("create temp dir");
        write_package(dir.path(), "leaf", r#"{"name": "leaf", "version": "1.0.0"}"#);
        let store = NodeModulesStore::new(dir.path());

        let deps = store.resolve("leaf").expect("read").expect("installed");
        assert!(deps.is_empty());
    }

    #[test]
    fn test_resolve_scoped_package() {
        let dir = TempDir::new().expect("create temp dir");
        write_package(
            dir.path(),
            "@scope/pkg",
            r#"{"dependencies": {"tslib": "2.6.0"}}"#,
        );
        let store = NodeModulesStore::new(dir.path());

        assert_eq!(
            store.manifest_path("@scope/pkg"),
            dir.path().join("@scope").join("pkg").join("package.json")
        );
        let deps = store.resolve("@scope/pkg").expect("read").expect("installed");
        assert_eq!(names(&deps), ["tslib"]);
    }

    #[test]
    fn test_resolve_malformed_manifest_is_error() {
        let dir = TempDir::new().expect("create temp dir");
        write_package(dir.path(), "broken", "{ definitely not json");
        let store = NodeModulesStore::new(dir.path());

        let err = store.resolve("broken").expect_err("malformed manifest must fail");
        assert!(matches!(err, Error::ManifestParse { .. }), "got {err:?}");
    }

    #[test]
    fn test_resolve_manifest_that_is_a_directory_is_error() {
        let dir = TempDir::new().expect("create temp dir");
        fs::create_dir_all(dir.path().join("odd").join("package.json")).expect("create dir");
        let store = NodeModulesStore::new(dir.path());

        let err = store.resolve("odd").expect_err("unreadable manifest must fail");
        assert!(matches!(err, Error::SubpackageRead { ref name, .. } if name == "odd"));
    }

    #[test]
    fn test_in_memory_store() {
        let store = InMemoryStore::new()
            .with_package("a", &[("b", "1.0.0")])
            .with_package("b", &[]);

        assert!(store.contains("a"));
        assert!(!store.contains("c"));
        assert_eq!(
            names(&store.resolve("a").expect("resolve").expect("present")),
            ["b"]
        );
        assert!(store.resolve("c").expect("resolve").is_none());
    }
}
