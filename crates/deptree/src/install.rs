//! Package installation before analysis.
//!
//! The tree is built from whatever is already on disk; this only refreshes
//! the store by running the package manager in the project root.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::error::{Error, Result};

/// Command run when no other is configured.
pub const DEFAULT_INSTALL_COMMAND: &str = "npm install";

/// Run `command_line` in `project_root`.
///
/// The command line is split on whitespace; there is no shell involved.
/// Its stdout is redirected to stderr so that it never mixes with rendered
/// output on stdout.
///
/// # Errors
///
/// - [`Error::EmptyInstallCommand`] for a blank command line
/// - [`Error::InstallSpawn`] if the program cannot be started
/// - [`Error::InstallFailed`] if it exits unsuccessfully
pub fn run_install(project_root: &Path, command_line: &str) -> Result<()> {
    let mut parts = command_line.split_whitespace();
    let Some(program) = parts.next() else {
        return Err(Error::EmptyInstallCommand);
    };

    info!(command = command_line, root = %project_root.display(), "Installing packages");

    let status = Command::new(program)
        .args(parts)
        .current_dir(project_root)
        .stdin(Stdio::null())
        .stdout(std::io::stderr())
        .status()
        .map_err(|source| Error::InstallSpawn {
            command: command_line.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(Error::InstallFailed {
            command: command_line.to_string(),
            status,
        });
    }

    debug!(command = command_line, "Install finished");
    Ok(())
}
