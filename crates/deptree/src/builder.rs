//! Dependency tree construction.
//!
//! Each root runtime dependency of the project is expanded recursively
//! against a [`PackageSource`]. Cycle detection is per path: a child
//! expansion receives a copy of its parent's ancestor set, so the same
//! package can appear in unrelated branches without being flagged circular.
//!
//! Node versions always come from the root manifest. A package that is only
//! reached through nested traversal has no version, even though its installed
//! manifest may declare one.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::{DependencyNode, Forest};
use crate::error::Result;
use crate::manifest::ProjectManifest;
use crate::store::PackageSource;

/// Builds dependency trees for one project.
#[derive(Debug)]
pub struct TreeBuilder<'a, S: PackageSource + ?Sized> {
    source: &'a S,
    project: &'a ProjectManifest,
}

impl<'a, S: PackageSource + ?Sized> TreeBuilder<'a, S> {
    /// Create a builder resolving packages through `source`.
    pub fn new(source: &'a S, project: &'a ProjectManifest) -> Self {
        Self { source, project }
    }

    /// Build one tree per root runtime dependency, in declaration order.
    ///
    /// Each root starts with an empty ancestor set, so a root that is also
    /// reachable from another root is still expanded directly.
    ///
    /// # Errors
    ///
    /// Propagates the first store failure; no partial forest is returned.
    pub fn build_forest(&self) -> Result<Forest> {
        let empty = HashSet::new();
        let forest = self
            .project
            .dependencies()
            .keys()
            .map(|name| self.build_tree(name, &empty))
            .collect::<Result<Forest>>()?;

        debug!(
            roots = forest.len(),
            nodes = forest.iter().map(DependencyNode::node_count).sum::<usize>(),
            "Built dependency forest"
        );
        Ok(forest)
    }

    /// Expand `name` given the set of its ancestors on the current path.
    ///
    /// # Errors
    ///
    /// Fails if the store cannot read or parse an installed manifest.
    pub fn build_tree(&self, name: &str, ancestors: &HashSet<String>) -> Result<DependencyNode> {
        let version = self.project.version_of(name).map(str::to_string);

        if ancestors.contains(name) {
            debug!(package = name, depth = ancestors.len(), "Circular dependency");
            return Ok(DependencyNode::circular(name, version));
        }

        let mut path = ancestors.clone();
        path.insert(name.to_string());

        let Some(dependencies) = self.source.resolve(name)? else {
            debug!(package = name, depth = ancestors.len(), "Package missing from store");
            return Ok(DependencyNode::missing(name, version));
        };

        let children = dependencies
            .keys()
            .map(|child| self.build_tree(child, &path))
            .collect::<Result<Vec<_>>>()?;

        Ok(DependencyNode::resolved(name, version, children))
    }
}

/// Build the dependency forest of `project` from `source`.
///
/// # Errors
///
/// See [`TreeBuilder::build_forest`].
pub fn build_forest<S: PackageSource + ?Sized>(
    source: &S,
    project: &ProjectManifest,
) -> Result<Forest> {
    TreeBuilder::new(source, project).build_forest()
}
