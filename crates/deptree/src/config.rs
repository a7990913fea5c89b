//! Project layout conventions.
//!
//! Everything deptree reads lives under a single project root: the root
//! manifest and the installed package store next to it.

use std::path::{Path, PathBuf};

/// File name of a package manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// Directory holding installed packages, relative to the project root.
pub const STORE_DIR: &str = "node_modules";

/// Paths derived from a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Create a layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the root manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    /// Path of the installed package store.
    pub fn store_dir(&self) -> PathBuf {
        self.root.join(STORE_DIR)
    }
}
