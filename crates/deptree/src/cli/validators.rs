//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.

use std::path::PathBuf;

/// Validate the project path argument.
///
/// Rejects blank values; existence is checked later so that the error names
/// the missing manifest.
pub fn validate_project_path(s: &str) -> Result<PathBuf, String> {
    if s.trim().is_empty() {
        return Err("Project path cannot be empty".to_string());
    }
    Ok(PathBuf::from(s))
}

/// Validate the install command line.
pub fn validate_install_command(s: &str) -> Result<String, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("Install command cannot be empty".to_string());
    }

    if s.contains('\n') || s.contains('\r') {
        return Err("Install command must be a single line".to_string());
    }

    Ok(s.to_string())
}
