//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Path of the compiled deptree binary
pub fn deptree_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_deptree"))
}

/// Run the deptree binary with the given arguments
pub fn run_deptree(args: &[&str]) -> Output {
    Command::new(deptree_binary())
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute deptree binary")
}

/// A temporary npm project with a package.json and a node_modules store.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Create a project whose package.json has the given contents.
    pub fn with_manifest(manifest: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(dir.path().join("package.json"), manifest).expect("write package.json");
        Self { dir }
    }

    /// Install a package with the given package.json contents.
    pub fn package(self, name: &str, manifest: &str) -> Self {
        let package_dir = self.dir.path().join("node_modules").join(name);
        fs::create_dir_all(&package_dir).expect("create package dir");
        fs::write(package_dir.join("package.json"), manifest).expect("write package manifest");
        self
    }

    /// Project root.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Project root as a string argument.
    pub fn arg(&self) -> String {
        self.dir.path().display().to_string()
    }
}
