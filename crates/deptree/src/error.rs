//! Error types for deptree operations.
//!
//! Circular and missing packages are not errors: they are reported as leaf
//! states in the built tree. Everything in this module aborts the run.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// The error type for deptree operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No manifest exists at the expected location.
    #[error("No package.json found in the specified path: {}", .path.display())]
    ManifestNotFound {
        /// Path that was checked.
        path: PathBuf,
    },

    /// The root manifest exists but could not be read.
    #[error("Failed reading '{}'", .path.display())]
    ManifestRead {
        /// Path of the manifest.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A manifest (root or nested) is not valid JSON.
    #[error("Malformed package.json '{}'", .path.display())]
    ManifestParse {
        /// Path of the malformed manifest.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// The root manifest has no `dependencies` section.
    #[error("No dependencies section found in '{}'", .path.display())]
    MissingDependencies {
        /// Path of the root manifest.
        path: PathBuf,
    },

    /// A nested package manifest exists but reading it failed.
    #[error("Failed reading manifest of package '{name}' at '{}'", .path.display())]
    SubpackageRead {
        /// Package being resolved.
        name: String,
        /// Path of the package manifest.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A node reached the renderer without an assigned identifier.
    #[error("No identifier assigned to package '{key}'")]
    UnassignedPackage {
        /// Display form of the package key.
        key: String,
    },

    /// The install command could not be started.
    #[error("Failed to run install command `{command}`")]
    InstallSpawn {
        /// Command line that was attempted.
        command: String,
        /// Underlying spawn failure.
        #[source]
        source: io::Error,
    },

    /// The install command ran and reported failure.
    #[error("Install command `{command}` failed with {status}")]
    InstallFailed {
        /// Command line that was run.
        command: String,
        /// Exit status of the command.
        status: ExitStatus,
    },

    /// The install command line was empty.
    #[error("Install command is empty")]
    EmptyInstallCommand,

    /// Writing rendered output failed.
    #[error("Failed writing output to '{}'", .path.display())]
    Output {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// A specialized Result type for deptree operations.
pub type Result<T> = std::result::Result<T, Error>;
