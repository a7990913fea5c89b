//! Deptree - dependency tree reconstruction for npm projects.
//!
//! Given a project's `package.json` and its installed `node_modules`, deptree
//! rebuilds the transitive dependency tree of every runtime dependency,
//! marks circular and missing packages, and renders the result as JSON, a
//! text tree or a Mermaid flowchart.
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//!
//! use deptree::builder::build_forest;
//! use deptree::diagram::render_flowchart;
//! use deptree::manifest::{Manifest, ProjectManifest};
//! use deptree::store::InMemoryStore;
//!
//! let manifest = Manifest::from_value(serde_json::json!({
//!     "dependencies": {"a": "1.0.0"}
//! }));
//! let project = ProjectManifest::from_manifest(PathBuf::from("package.json"), manifest)?;
//! let store = InMemoryStore::new()
//!     .with_package("a", &[("b", "2.0.0")])
//!     .with_package("b", &[]);
//!
//! let forest = build_forest(&store, &project)?;
//! assert_eq!(forest[0].children()[0].name, "b");
//!
//! let chart = render_flowchart(&forest)?;
//! assert!(chart.contains(r#"1001["a@1.0.0"] --> 1002["b: undefined"]"#));
//! # Ok::<(), deptree::error::Error>(())
//! ```

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod builder;
pub mod config;
pub mod diagram;
pub mod domain;
pub mod error;
pub mod ids;
pub mod install;
pub mod manifest;
pub mod output;
pub mod store;

// Public CLI module (needed by binary)
pub mod cli;
