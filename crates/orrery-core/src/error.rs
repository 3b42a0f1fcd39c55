//! Error taxonomy for orbit map construction and queries

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrbitError>;

/// Every failure the core can report. Each variant carries the labels involved
/// so callers can branch on kind rather than message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrbitError {
    /// An edge tried to give the root a parent.
    #[error("`{child}` is the universal centre of mass and cannot orbit a body")]
    RootCannotOrbit { child: String },

    /// An edge tried to give an already-mapped body a second parent.
    #[error("`{child}` already orbits `{existing}` and cannot also orbit `{attempted}`")]
    DuplicateParent {
        child: String,
        existing: String,
        attempted: String,
    },

    /// A root-ward walk from `start` stopped at `at`, which has no recorded
    /// parent, or the walk exceeded the number of known bodies.
    #[error("chain of orbits from `{start}` to the root is broken at `{at}`")]
    BrokenChain { start: String, at: String },

    /// A transfer query named a body that has no recorded parent.
    #[error("`{label}` is not an orbiting body in this map")]
    UnknownNode { label: String },
}

impl OrbitError {
    pub(crate) fn broken_chain(start: &str, at: &str) -> Self {
        OrbitError::BrokenChain {
            start: start.to_string(),
            at: at.to_string(),
        }
    }
}
