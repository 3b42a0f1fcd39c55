//! Orrery Core: orbit map model, edge parser, depth walker and aggregators

pub mod model;
pub mod error;
pub mod parser;
pub mod map;
pub mod aggregation;


#[cfg(test)]
pub mod test_utils;

pub use model::{Orbit, DEFAULT_ROOT};
pub use error::{OrbitError, Result};
pub use parser::{parse_orbits, Orbits};
pub use map::ParentMap;
pub use aggregation::{checksum, transfer_distance};
