//! Domain types for dependency trees.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Text used wherever an absent version has to be written out.
pub const ABSENT_VERSION: &str = "undefined";

/// The ordered collection of trees, one per root runtime dependency.
pub type Forest = Vec<DependencyNode>;

/// One occurrence of a package on a specific path of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyNode {
    /// Package name.
    pub name: String,
    /// Version pinned in the root manifest, if the root declares this package.
    pub version: Option<String>,
    /// How this occurrence was resolved.
    pub kind: NodeKind,
}

/// Resolution state of a [`DependencyNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// The package was found and expanded.
    Resolved(Vec<DependencyNode>),
    /// The package already appears among its own ancestors.
    Circular,
    /// The package is not present in the store.
    Missing,
}

impl DependencyNode {
    /// An expanded node.
    pub fn resolved(
        name: impl Into<String>,
        version: Option<String>,
        children: Vec<DependencyNode>,
    ) -> Self {
        Self {
            name: name.into(),
            version,
            kind: NodeKind::Resolved(children),
        }
    }

    /// A leaf for a package already on the current path.
    pub fn circular(name: impl Into<String>, version: Option<String>) -> Self {
        Self {
            name: name.into(),
            version,
            kind: NodeKind::Circular,
        }
    }

    /// A leaf for a package absent from the store.
    pub fn missing(name: impl Into<String>, version: Option<String>) -> Self {
        Self {
            name: name.into(),
            version,
            kind: NodeKind::Missing,
        }
    }

    /// Children of a resolved node; empty for leaves.
    pub fn children(&self) -> &[DependencyNode] {
        match &self.kind {
            NodeKind::Resolved(children) => children,
            NodeKind::Circular | NodeKind::Missing => &[],
        }
    }

    /// Whether this node is a circular leaf.
    pub fn is_circular(&self) -> bool {
        self.kind == NodeKind::Circular
    }

    /// Whether this node is a missing leaf.
    pub fn is_missing(&self) -> bool {
        self.kind == NodeKind::Missing
    }

    /// The version, or [`ABSENT_VERSION`].
    pub fn version_str(&self) -> &str {
        self.version.as_deref().unwrap_or(ABSENT_VERSION)
    }

    /// The (name, version) identity of this node.
    pub fn key(&self) -> PackageKey {
        PackageKey::new(&self.name, self.version.as_deref())
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(DependencyNode::node_count)
            .sum::<usize>()
    }
}

// Matches the shape `JSON.stringify` gives the equivalent JavaScript objects:
// `version` disappears when absent and leaves carry a `true` flag.
impl Serialize for DependencyNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 2 + usize::from(self.version.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("name", &self.name)?;
        if let Some(version) = &self.version {
            map.serialize_entry("version", version)?;
        }
        match &self.kind {
            NodeKind::Resolved(children) => map.serialize_entry("children", children)?,
            NodeKind::Circular => map.serialize_entry("circular", &true)?,
            NodeKind::Missing => map.serialize_entry("missing", &true)?,
        }
        map.end()
    }
}

/// Identity of a package for diagram purposes.
///
/// Compared structurally, so names or versions containing `@` cannot collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageKey {
    /// Package name.
    pub name: String,
    /// Root-pinned version, if any.
    pub version: Option<String>,
}

impl PackageKey {
    /// Create a key.
    pub fn new(name: &str, version: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            version: version.map(str::to_string),
        }
    }
}

impl fmt::Display for PackageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}",
            self.name,
            self.version.as_deref().unwrap_or(ABSENT_VERSION)
        )
    }
}
