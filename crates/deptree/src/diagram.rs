//! Mermaid flowchart rendering.
//!
//! Edges reference nodes by their synthetic identifier and carry the package
//! name only inside a quoted label. Parents are labelled `name@version`,
//! children `name: version`.

use indexmap::IndexSet;

use crate::domain::DependencyNode;
use crate::error::{Error, Result};
use crate::ids::{IdentifierMap, assign_identifiers};

/// Default URL of the Mermaid ES module loaded by the HTML wrapper.
pub const MERMAID_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/mermaid@10/dist/mermaid.esm.min.mjs";

/// Render one edge per (parent, child) pair, deduplicated by edge text.
///
/// Edges appear in pre-order of the forest; a duplicate keeps the position
/// of its first occurrence.
///
/// # Errors
///
/// Returns [`Error::UnassignedPackage`] if a node has no identifier in `ids`.
pub fn render_edges(forest: &[DependencyNode], ids: &IdentifierMap) -> Result<Vec<String>> {
    let mut edges = IndexSet::new();
    for root in forest {
        collect_edges(root, ids, &mut edges)?;
    }
    Ok(edges.into_iter().collect())
}

fn collect_edges(
    node: &DependencyNode,
    ids: &IdentifierMap,
    edges: &mut IndexSet<String>,
) -> Result<()> {
    let children = node.children();
    if children.is_empty() {
        return Ok(());
    }

    let parent_id = lookup(node, ids)?;
    let parent_label = escape_label(&format!("{}@{}", node.name, node.version_str()));

    for child in children {
        let child_id = lookup(child, ids)?;
        let child_label = escape_label(&format!("{}: {}", child.name, child.version_str()));
        edges.insert(format!(
            "{parent_id}[\"{parent_label}\"] --> {child_id}[\"{child_label}\"]"
        ));
        collect_edges(child, ids, edges)?;
    }
    Ok(())
}

fn lookup(node: &DependencyNode, ids: &IdentifierMap) -> Result<u32> {
    let key = node.key();
    ids.get(&key).ok_or_else(|| Error::UnassignedPackage {
        key: key.to_string(),
    })
}

/// Mermaid has no backslash escapes inside quoted labels; it uses entity codes.
fn escape_label(label: &str) -> String {
    label.replace('"', "#quot;")
}

/// Wrap edges in a top-down flowchart definition.
pub fn flowchart(edges: &[String]) -> String {
    let mut out = String::from("flowchart TD\n");
    for edge in edges {
        out.push_str("    ");
        out.push_str(edge);
        out.push('\n');
    }
    out
}

/// Assign identifiers with a fresh map and render the whole flowchart.
///
/// # Errors
///
/// Never fails for a forest whose identifiers were assigned here; the
/// `Result` comes from [`render_edges`].
pub fn render_flowchart(forest: &[DependencyNode]) -> Result<String> {
    let ids = assign_identifiers(forest);
    let edges = render_edges(forest, &ids)?;
    Ok(flowchart(&edges))
}

/// A standalone HTML page that renders `flowchart` with the Mermaid module
/// at `script_url`.
pub fn html_document(flowchart: &str, script_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Dependency tree</title>
</head>
<body>
<pre class="mermaid">
{body}</pre>
<script type="module">
  import mermaid from "{script}";
  mermaid.initialize({{ startOnLoad: true }});
</script>
</body>
</html>
"#,
        body = html_escape::encode_text(flowchart),
        script = html_escape::encode_double_quoted_attribute(script_url),
    )
}
