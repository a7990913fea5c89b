//! Indented tree rendering for `--format tree` output.

use std::io::{self, Write};

use colored::Colorize;

use super::OutputConfig;
use super::color::{package_label, state_marker};
use crate::domain::DependencyNode;

/// Render the forest as text.
///
/// Renders each root followed by its subtree:
/// ```text
/// ◆ a@1.0.0
/// ├── b
/// │   └── c (missing)
/// └── a@1.0.0 (circular)
/// ```
pub fn render_forest_text(forest: &[DependencyNode], config: &OutputConfig) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_forest_text(&mut buffer, forest, config);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Write the forest as text to `w`.
///
/// # Errors
///
/// Propagates write failures from `w`.
pub fn write_forest_text<W: Write>(
    w: &mut W,
    forest: &[DependencyNode],
    config: &OutputConfig,
) -> io::Result<()> {
    let root_icon = if config.use_ascii { "*" } else { "◆" };
    let root_icon_str = if config.use_colors {
        root_icon.cyan().bold().to_string()
    } else {
        root_icon.to_string()
    };

    for root in forest {
        writeln!(
            w,
            "{} {}{}",
            root_icon_str,
            package_label(root, config),
            state_marker(root, config)
        )?;
        write_children(w, root.children(), &[], config)?;
    }
    Ok(())
}

/// `prefix_segments` tracks which ancestor levels still have siblings below,
/// used to draw the vertical continuation lines (`│`).
fn write_children<W: Write>(
    w: &mut W,
    children: &[DependencyNode],
    prefix_segments: &[bool],
    config: &OutputConfig,
) -> io::Result<()> {
    let (branch, corner, pipe, space) = if config.use_ascii {
        ("|-- ", "`-- ", "|   ", "    ")
    } else {
        ("├── ", "└── ", "│   ", "    ")
    };

    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;

        let mut prefix = String::new();
        for &has_more in prefix_segments {
            let segment = if has_more { pipe } else { space };
            if config.use_colors {
                prefix.push_str(&segment.dimmed().to_string());
            } else {
                prefix.push_str(segment);
            }
        }

        let connector = if is_last { corner } else { branch };
        let connector_str = if config.use_colors {
            connector.dimmed().to_string()
        } else {
            connector.to_string()
        };

        writeln!(
            w,
            "{}{}{}{}",
            prefix,
            connector_str,
            package_label(child, config),
            state_marker(child, config)
        )?;

        if !child.children().is_empty() {
            let mut next_segments = prefix_segments.to_vec();
            next_segments.push(!is_last);
            write_children(w, child.children(), &next_segments, config)?;
        }
    }

    Ok(())
}
