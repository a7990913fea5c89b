//! `package.json` parsing.
//!
//! Only the three dependency sections matter here. Parsing goes through a
//! [`serde_json::Value`] so that unexpected shapes in third-party manifests
//! (numeric or `null` versions, array sections) degrade instead of failing
//! the run. Syntactically invalid JSON is still a hard error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ProjectLayout;
use crate::error::{Error, Result};

/// Dependency name to version requirement, in declaration order.
///
/// A declared dependency is always kept; its version is `None` when the
/// manifest gives something other than a string or number.
pub type DependencyMap = IndexMap<String, Option<String>>;

/// The dependency sections of a single `package.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// `dependencies`, if the section is present.
    ///
    /// `null`, `false`, `0` and `""` count as absent. Any other non-object
    /// value is present but declares nothing.
    pub dependencies: Option<DependencyMap>,
    /// `devDependencies`, if the section is present.
    pub dev_dependencies: Option<DependencyMap>,
    /// `peerDependencies`, if the section is present.
    pub peer_dependencies: Option<DependencyMap>,
}

impl Manifest {
    /// Parse manifest text. `path` is only used for error reporting.
    pub fn parse(path: &Path, source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source).map_err(|source| Error::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_value(value))
    }

    /// Build a manifest from an already parsed JSON document.
    ///
    /// A non-object document yields an empty manifest.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut object) = value else {
            return Self::default();
        };

        Self {
            dependencies: object.remove("dependencies").and_then(parse_section),
            dev_dependencies: object.remove("devDependencies").and_then(parse_section),
            peer_dependencies: object.remove("peerDependencies").and_then(parse_section),
        }
    }

    /// Dependencies traversed below this package: runtime, then peer.
    ///
    /// Development dependencies of installed packages are never followed.
    pub fn traversed_dependencies(&self) -> DependencyMap {
        merge_sections([&self.dependencies, &self.peer_dependencies])
    }

    /// Union of every declared section, used for version lookups.
    ///
    /// Later sections override the version of earlier ones while keeping the
    /// position where the name first appeared.
    pub fn all_dependencies(&self) -> DependencyMap {
        merge_sections([
            &self.dependencies,
            &self.dev_dependencies,
            &self.peer_dependencies,
        ])
    }
}

fn merge_sections<const N: usize>(sections: [&Option<DependencyMap>; N]) -> DependencyMap {
    let mut merged = DependencyMap::new();
    for section in sections.into_iter().flatten() {
        for (name, version) in section {
            merged.insert(name.clone(), version.clone());
        }
    }
    merged
}

fn parse_section(value: Value) -> Option<DependencyMap> {
    let map = match value {
        Value::Object(map) => map,
        Value::Null | Value::Bool(false) => return None,
        Value::String(ref s) if s.is_empty() => return None,
        Value::Number(ref n) if n.as_f64().is_some_and(|f| f.abs() < f64::EPSILON) => return None,
        other => {
            warn!(value = %other, "Ignoring dependency section that is not an object");
            return Some(DependencyMap::new());
        }
    };

    let mut result = DependencyMap::with_capacity(map.len());
    for (name, version) in map {
        let version = match version {
            Value::String(v) => Some(v),
            Value::Number(v) => Some(v.to_string()),
            other => {
                warn!(
                    dependency = %name,
                    value = %other,
                    "Dependency has no usable version"
                );
                None
            }
        };
        result.insert(name, version);
    }
    Some(result)
}

/// The validated root manifest of the project being analysed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectManifest {
    path: PathBuf,
    dependencies: DependencyMap,
    versions: DependencyMap,
}

impl ProjectManifest {
    /// Load and validate the manifest at the project root.
    ///
    /// # Errors
    ///
    /// - [`Error::ManifestNotFound`] if there is no `package.json`
    /// - [`Error::ManifestRead`] if it cannot be read
    /// - [`Error::ManifestParse`] if it is not valid JSON
    /// - [`Error::MissingDependencies`] if it lacks a `dependencies` section
    pub fn load(layout: &ProjectLayout) -> Result<Self> {
        let path = layout.manifest_path();
        let source = match fs::read_to_string(&path) {
            Ok(source) => source,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::ManifestNotFound {
                    path: layout.root().to_path_buf(),
                });
            }
            Err(source) => return Err(Error::ManifestRead { path, source }),
        };

        let manifest = Manifest::parse(&path, &source)?;
        Self::from_manifest(path, manifest)
    }

    /// Validate an already parsed manifest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingDependencies`] when the runtime section is
    /// absent, even if dev or peer sections exist.
    pub fn from_manifest(path: PathBuf, manifest: Manifest) -> Result<Self> {
        let versions = manifest.all_dependencies();
        let Some(dependencies) = manifest.dependencies else {
            return Err(Error::MissingDependencies { path });
        };

        debug!(
            path = %path.display(),
            runtime = dependencies.len(),
            declared = versions.len(),
            "Loaded project manifest"
        );

        Ok(Self {
            path,
            dependencies,
            versions,
        })
    }

    /// Path the manifest was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runtime dependencies; these are the roots of the forest.
    pub fn dependencies(&self) -> &DependencyMap {
        &self.dependencies
    }

    /// Version pinned for `name` in any root section, if declared there.
    pub fn version_of(&self, name: &str) -> Option<&str> {
        self.versions.get(name)?.as_deref()
    }
}
