//! Edge parser: pulls `PARENT)CHILD` tokens out of raw text
//!
//! Parsing is permissive. Any fragment that is not one or more ASCII
//! alphanumerics, a `)`, then one or more ASCII alphanumerics contributes no
//! edge and is skipped without error. Matches never overlap and are emitted
//! left to right.

use std::sync::LazyLock;

use regex::{CaptureMatches, Regex};

use crate::model::Orbit;

static ORBIT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-zA-Z0-9]+)\)([a-zA-Z0-9]+)").expect("orbit pattern is a valid regex")
});

/// Lazy, pull-based sequence of orbits found in a text blob.
pub struct Orbits<'t> {
    captures: CaptureMatches<'static, 't>,
}

impl<'t> Iterator for Orbits<'t> {
    type Item = Orbit<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.captures.next()?;
        // Both groups are mandatory in the pattern.
        let parent = caps.get(1)?.as_str();
        let child = caps.get(2)?.as_str();
        Some(Orbit::new(parent, child))
    }
}

/// Scan `text` for orbit tokens. Does not touch any store.
pub fn parse_orbits(text: &str) -> Orbits<'_> {
    Orbits {
        captures: ORBIT_PATTERN.captures_iter(text),
    }
}
