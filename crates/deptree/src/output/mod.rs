//! Output formatting for the built forest.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers
//! - [`tree`]: Indented tree rendering with ASCII/Unicode connectors

pub mod color;
pub mod tree;

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::domain::DependencyNode;
use crate::error::{Error, Result};

pub use tree::{render_forest_text, write_forest_text};

// ============================================================================
// Output Configuration
// ============================================================================

/// Configuration for text output styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use ASCII-only connectors instead of Unicode.
    pub use_ascii: bool,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new `OutputConfig` with explicit values.
    pub fn new(use_ascii: bool, use_colors: bool) -> Self {
        Self {
            use_ascii,
            use_colors,
        }
    }

    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `DEPTREE_ASCII`: Set to "1" or "true" for ASCII-only connectors (default: false)
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `DEPTREE_COLOR`: Set to "0" or "false" to disable colors (default: true)
    pub fn from_env() -> Self {
        let use_ascii = match env::var("DEPTREE_ASCII") {
            Ok(v) if v == "1" || v.eq_ignore_ascii_case("true") => true,
            Ok(v) if v == "0" || v.eq_ignore_ascii_case("false") || v.is_empty() => false,
            Ok(v) => {
                tracing::warn!(
                    env_var = "DEPTREE_ASCII",
                    value = %v,
                    "Invalid value (expected '1', 'true', '0', or 'false'), using default"
                );
                false
            }
            Err(_) => false,
        };

        // Respect NO_COLOR standard (https://no-color.org/)
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("DEPTREE_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);

        Self {
            use_ascii,
            use_colors,
        }
    }

    /// Same settings with colors turned off, for output that is not a terminal.
    #[must_use]
    pub fn without_colors(&self) -> Self {
        Self {
            use_colors: false,
            ..self.clone()
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_ascii: false,
            use_colors: true,
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Serialize the forest as pretty-printed JSON with two-space indentation.
///
/// # Errors
///
/// Only fails if serialization itself fails, which does not happen for
/// well-formed trees.
pub fn forest_to_json(forest: &[DependencyNode]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(forest)
}

/// Write rendered output to `destination`, or to stdout when it is `None`.
///
/// Content is written as-is followed by a newline if it does not already
/// end with one.
///
/// # Errors
///
/// Returns [`Error::Output`] if the destination cannot be written.
pub fn emit(destination: Option<&Path>, content: &str) -> Result<()> {
    let mut text = content.to_string();
    if !text.ends_with('\n') {
        text.push('\n');
    }

    match destination {
        Some(path) => {
            fs::write(path, text).map_err(|source| Error::Output {
                path: path.to_path_buf(),
                source,
            })?;
            info!(path = %path.display(), "Output written");
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(text.as_bytes())
                .and_then(|()| handle.flush())
                .map_err(|source| Error::Output {
                    path: "<stdout>".into(),
                    source,
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_forest_to_json_is_pretty_array() {
        let forest = vec![DependencyNode::resolved(
            "a",
            Some("1.0.0".to_string()),
            vec![DependencyNode::missing("b", None)],
        )];

        let json = forest_to_json(&forest).expect("serialize");

        assert_eq!(
            json,
            r#"[
  {
    "name": "a",
    "version": "1.0.0",
    "children": [
      {
        "name": "b",
        "missing": true
      }
    ]
  }
]"#
        );
    }

    #[test]
    fn test_forest_to_json_empty() {
        assert_eq!(forest_to_json(&[]).expect("serialize"), "[]");
    }

    #[test]
    fn test_emit_to_file_appends_newline() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("out.txt");

        emit(Some(&path), "hello").expect("write");

        assert_eq!(fs::read_to_string(&path).expect("read"), "hello\n");
    }

    #[test]
    fn test_emit_to_unwritable_path_is_error() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("missing-dir").join("out.txt");

        let err = emit(Some(&path), "hello").expect_err("parent dir does not exist");
        assert!(matches!(err, Error::Output { .. }));
    }

    #[test]
    fn test_without_colors() {
        let config = OutputConfig::new(true, true).without_colors();
        assert_eq!(config, OutputConfig::new(true, false));
    }
}
