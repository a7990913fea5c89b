//! Command-line interface.
//!
//! `deptree` takes a single project path, optionally refreshes the installed
//! packages, builds the dependency forest and renders it in the requested
//! format.
//!
//! # Example
//!
//! ```bash
//! deptree ./my-app --skip-install
//! deptree ./my-app --skip-install --format tree
//! deptree ./my-app --format html --output dependency-tree.html
//! ```

mod execute;
mod types;
mod validators;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::diagram::MERMAID_SCRIPT_URL;
use crate::install::DEFAULT_INSTALL_COMMAND;

pub use execute::render;
pub use types::OutputFormatArg;
pub use validators::{validate_install_command, validate_project_path};

/// Deptree - reconstruct the dependency tree of an npm project
///
/// Reads `package.json` and the installed packages under `node_modules`,
/// reporting circular and missing packages, and renders the result as JSON,
/// a text tree or a Mermaid diagram.
#[derive(Parser, Debug)]
#[command(name = "deptree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root containing package.json
    #[arg(value_parser = validate_project_path)]
    pub project_path: PathBuf,

    /// Do not run the install command before analysing
    #[arg(long)]
    pub skip_install: bool,

    /// Command used to install packages
    #[arg(long, default_value = DEFAULT_INSTALL_COMMAND, value_parser = validate_install_command)]
    pub install_command: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormatArg::Json)]
    pub format: OutputFormatArg,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Mermaid module URL referenced by html output
    #[arg(long, default_value = MERMAID_SCRIPT_URL)]
    pub script_url: String,

    /// Verbose logging (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse CLI arguments from the environment
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid arguments.
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Default log filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "deptree=warn",
            1 => "deptree=info",
            2 => "deptree=debug",
            _ => "deptree=trace",
        }
    }

    /// Execute the CLI command
    ///
    /// # Errors
    ///
    /// Any fatal condition: manifest problems, store read failures, install
    /// failures or output write failures.
    pub fn execute(&self) -> Result<()> {
        execute::execute(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["deptree", "./app"]).unwrap();

        assert_eq!(cli.project_path, PathBuf::from("./app"));
        assert!(!cli.skip_install);
        assert_eq!(cli.install_command, "npm install");
        assert_eq!(cli.format, OutputFormatArg::Json);
        assert!(cli.output.is_none());
        assert_eq!(cli.script_url, MERMAID_SCRIPT_URL);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_requires_project_path() {
        let err = Cli::try_parse_from(["deptree"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_parse_skip_install() {
        let cli = Cli::try_parse_from(["deptree", "./app", "--skip-install"]).unwrap();
        assert!(cli.skip_install);
    }

    #[test]
    fn test_parse_format_and_output() {
        let cli = Cli::try_parse_from([
            "deptree",
            "./app",
            "--format",
            "html",
            "-o",
            "tree.html",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormatArg::Html);
        assert_eq!(cli.output, Some(PathBuf::from("tree.html")));
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["deptree", "./app", "--format", "dot"]).is_err());
    }

    #[test]
    fn test_parse_custom_install_command() {
        let cli =
            Cli::try_parse_from(["deptree", "./app", "--install-command", "yarn install"]).unwrap();
        assert_eq!(cli.install_command, "yarn install");
    }

    #[test]
    fn test_parse_rejects_blank_install_command() {
        assert!(Cli::try_parse_from(["deptree", "./app", "--install-command", " "]).is_err());
    }

    #[test]
    fn test_verbosity_selects_log_filter() {
        let quiet = Cli::try_parse_from(["deptree", "./app"]).unwrap();
        let loud = Cli::try_parse_from(["deptree", "./app", "-vvv"]).unwrap();

        assert_eq!(quiet.log_filter(), "deptree=warn");
        assert_eq!(loud.log_filter(), "deptree=trace");
    }
}
