//! Core data structures for the orbit map

/// Label of the universal centre of mass. Used as the root unless a map is
/// built with [`crate::ParentMap::with_root`].
pub const DEFAULT_ROOT: &str = "COM";

/// A single `PARENT)CHILD` relationship: `child` orbits `parent`.
///
/// Labels borrow from the text they were parsed out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orbit<'t> {
    /// The body being orbited.
    pub parent: &'t str,
    /// The orbiting body.
    pub child: &'t str,
}

impl<'t> Orbit<'t> {
    pub fn new(parent: &'t str, child: &'t str) -> Self {
        Orbit { parent, child }
    }
}

impl std::fmt::Display for Orbit<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}){}", self.parent, self.child)
    }
}
