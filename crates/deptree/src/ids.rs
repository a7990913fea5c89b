//! Synthetic identifiers for diagram nodes.
//!
//! Package names may contain characters that are unsafe in Mermaid syntax
//! (`@`, `/`, `.`), so every distinct (name, version) pair gets a numeric
//! identifier and the name is only ever used inside a quoted label.

use std::collections::HashMap;

use crate::domain::{DependencyNode, PackageKey};

/// First identifier handed out.
pub const FIRST_ID: u32 = 1001;

/// Append-only mapping between package keys and identifiers.
///
/// Identifiers are assigned in first-encounter order and only stable within
/// a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierMap {
    next_id: u32,
    ids: HashMap<PackageKey, u32>,
    keys: Vec<PackageKey>,
}

impl IdentifierMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            next_id: FIRST_ID,
            ids: HashMap::new(),
            keys: Vec::new(),
        }
    }

    /// Assign identifiers to every node of `forest`.
    ///
    /// Pre-order, left to right, roots in order. Keys that already have an
    /// identifier keep it, so calling this twice is a no-op.
    pub fn assign(&mut self, forest: &[DependencyNode]) {
        for root in forest {
            self.assign_node(root);
        }
    }

    fn assign_node(&mut self, node: &DependencyNode) {
        self.intern(node.key());
        for child in node.children() {
            self.assign_node(child);
        }
    }

    /// Identifier for `key`, assigning the next one if it is new.
    pub fn intern(&mut self, key: PackageKey) -> u32 {
        if let Some(&id) = self.ids.get(&key) {
            return id;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.ids.insert(key.clone(), id);
        self.keys.push(key);
        id
    }

    /// Identifier previously assigned to `key`.
    pub fn get(&self, key: &PackageKey) -> Option<u32> {
        self.ids.get(key).copied()
    }

    /// Key that was assigned `id`.
    pub fn key_of(&self, id: u32) -> Option<&PackageKey> {
        let index = usize::try_from(id.checked_sub(FIRST_ID)?).ok()?;
        self.keys.get(index)
    }

    /// Number of assigned identifiers.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether nothing has been assigned yet.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// All `(id, key)` pairs in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &PackageKey)> {
        (FIRST_ID..).zip(self.keys.iter())
    }
}

impl Default for IdentifierMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Assign identifiers to a forest using a fresh map.
pub fn assign_identifiers(forest: &[DependencyNode]) -> IdentifierMap {
    let mut ids = IdentifierMap::new();
    ids.assign(forest);
    ids
}
