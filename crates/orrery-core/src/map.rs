//! Parent map: the single store of child → parent relationships

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::{OrbitError, Result};
use crate::model::DEFAULT_ROOT;
use crate::parser::parse_orbits;

/// Maps every orbiting body to the body it orbits.
///
/// The root never appears as a key and every other body appears at most once.
/// Populated by a single ingestion pass and only read afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct ParentMap {
    root: String,
    parents: HashMap<String, String>,
}

impl std::fmt::Debug for ParentMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParentMap")
            .field("root", &self.root)
            .field("body_count", &self.parents.len())
            .finish()
    }
}

impl ParentMap {
    /// Empty map rooted at [`DEFAULT_ROOT`].
    pub fn new() -> Self {
        Self::with_root(DEFAULT_ROOT)
    }

    /// Empty map rooted at `root`.
    pub fn with_root(root: impl Into<String>) -> Self {
        ParentMap {
            root: root.into(),
            parents: HashMap::new(),
        }
    }

    /// Build a map rooted at [`DEFAULT_ROOT`] from raw orbit text.
    pub fn parse(text: &str) -> Result<Self> {
        let mut map = Self::new();
        map.ingest(text)?;
        Ok(map)
    }

    /// Add every orbit found in `text`, stopping at the first violation.
    /// Returns the number of orbits recorded.
    pub fn ingest(&mut self, text: &str) -> Result<usize> {
        let mut added = 0;
        for orbit in parse_orbits(text) {
            self.add_orbit(orbit.parent, orbit.child)?;
            added += 1;
        }
        tracing::debug!("Ingested {} orbits around {}", added, self.root);
        Ok(added)
    }

    /// Record that `child` orbits `parent`.
    ///
    /// On error the map is left untouched.
    pub fn add_orbit(&mut self, parent: &str, child: &str) -> Result<()> {
        if child == self.root {
            return Err(OrbitError::RootCannotOrbit {
                child: child.to_string(),
            });
        }
        if let Some(existing) = self.parents.get(child) {
            return Err(OrbitError::DuplicateParent {
                child: child.to_string(),
                existing: existing.clone(),
                attempted: parent.to_string(),
            });
        }
        self.parents.insert(child.to_string(), parent.to_string());
        Ok(())
    }

    /// True if `label` has a recorded parent or is the root.
    pub fn has_node(&self, label: &str) -> bool {
        label == self.root || self.parents.contains_key(label)
    }

    /// The body `label` orbits, if one was recorded.
    pub fn parent(&self, label: &str) -> Option<&str> {
        self.parents.get(label).map(String::as_str)
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Number of orbiting bodies (the root is not counted).
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Iterate over every orbiting body, in no particular order.
    pub fn bodies(&self) -> impl Iterator<Item = &str> {
        self.parents.keys().map(String::as_str)
    }

    /// Number of hops from `label` to the root.
    ///
    /// Fails with `BrokenChain` when the walk reaches a body with no recorded
    /// parent, or takes more hops than there are bodies (only possible if the
    /// orbits form a cycle).
    pub fn depth_to_root(&self, label: &str) -> Result<usize> {
        let mut current = label;
        let mut hops = 0;

        while current != self.root {
            if hops > self.parents.len() {
                return Err(OrbitError::broken_chain(label, current));
            }
            current = self
                .parent(current)
                .ok_or_else(|| OrbitError::broken_chain(label, current))?;
            hops += 1;
        }

        Ok(hops)
    }

    /// The root-ward chain from the parent of `label` up to and including the
    /// root. Empty for the root itself.
    pub fn path_to_root(&self, label: &str) -> Result<Vec<&str>> {
        let mut path = Vec::new();
        let mut current = label;

        while current != self.root {
            if path.len() > self.parents.len() {
                return Err(OrbitError::broken_chain(label, current));
            }
            let parent = self
                .parent(current)
                .ok_or_else(|| OrbitError::broken_chain(label, current))?;
            path.push(parent);
            current = parent;
        }

        Ok(path)
    }

    /// Parent lookup for walks that must not fall off the map.
    pub(crate) fn step(&self, start: &str, label: &str) -> Result<&str> {
        self.parent(label)
            .ok_or_else(|| OrbitError::broken_chain(start, label))
    }
}

impl Default for ParentMap {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for ParentMap {
    type Err = OrbitError;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}
