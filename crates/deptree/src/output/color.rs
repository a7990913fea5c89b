//! Color and styling helpers for tree output.
//!
//! Semantic Color Theme:
//!   - Info/Reference: cyan   (package names, root marker)
//!   - Warning:        yellow (circular markers)
//!   - Error:          red    (missing markers)
//!   - Muted:          dimmed (versions, connectors)

use colored::Colorize;

use super::OutputConfig;
use crate::domain::{DependencyNode, NodeKind};

/// Apply semantic "info" color (cyan) to text.
pub(crate) fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

/// Apply dimmed style to text.
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// `name@version` with the version dimmed; just the name when unversioned.
pub(crate) fn package_label(node: &DependencyNode, config: &OutputConfig) -> String {
    let name = info(&node.name, config);
    match &node.version {
        Some(version) => format!("{name}{}", dimmed(&format!("@{version}"), config)),
        None => name,
    }
}

/// Suffix marking circular and missing leaves; empty for resolved nodes.
pub(crate) fn state_marker(node: &DependencyNode, config: &OutputConfig) -> String {
    let (text, colorize): (&str, fn(&str) -> String) = match node.kind {
        NodeKind::Resolved(_) => return String::new(),
        NodeKind::Circular => ("(circular)", |t| t.yellow().to_string()),
        NodeKind::Missing => ("(missing)", |t| t.red().bold().to_string()),
    };

    if config.use_colors {
        format!(" {}", colorize(text))
    } else {
        format!(" {text}")
    }
}
