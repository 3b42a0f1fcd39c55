//! Aggregate queries over a finished parent map

use std::collections::HashMap;

use crate::error::{OrbitError, Result};
use crate::map::ParentMap;

/// Sum of depth-to-root over every orbiting body.
///
/// The root contributes nothing. The first broken chain aborts the sum.
/// Depths are cached as they are found, so each body is walked once.
pub fn checksum(map: &ParentMap) -> Result<usize> {
    let mut depths: HashMap<&str, usize> = HashMap::with_capacity(map.len() + 1);
    depths.insert(map.root(), 0);

    let mut total = 0;
    for body in map.bodies() {
        total += cached_depth(map, body, &mut depths)?;
    }
    Ok(total)
}

/// Walk from `body` until the root or an already known depth, then record the
/// depth of every body passed on the way.
fn cached_depth<'m>(
    map: &'m ParentMap,
    body: &'m str,
    depths: &mut HashMap<&'m str, usize>,
) -> Result<usize> {
    let mut path = Vec::new();
    let mut current = body;

    let base = loop {
        if let Some(&depth) = depths.get(current) {
            break depth;
        }
        // Same bound as `depth_to_root`: cached bodies always reach the root,
        // so only an uncached cycle can trip it.
        if path.len() > map.len() {
            return Err(OrbitError::broken_chain(body, current));
        }
        path.push(current);
        current = map
            .parent(current)
            .ok_or_else(|| OrbitError::broken_chain(body, current))?;
    };

    for (hops_above, label) in path.iter().rev().enumerate() {
        depths.insert(*label, base + hops_above + 1);
    }
    Ok(base + path.len())
}

/// Minimum number of orbital transfers needed to move from the body `start`
/// orbits to the body `end` orbits.
///
/// Both labels must be orbiting bodies; the root is rejected with
/// `UnknownNode` like any unseen label.
pub fn transfer_distance(map: &ParentMap, start: &str, end: &str) -> Result<usize> {
    for label in [start, end] {
        if map.parent(label).is_none() {
            return Err(OrbitError::UnknownNode {
                label: label.to_string(),
            });
        }
    }

    let start_depth = map.depth_to_root(start)?;
    let end_depth = map.depth_to_root(end)?;

    // Each pointer keeps the endpoint it started from for error reporting.
    let (mut nearer, mut farther) = if start_depth < end_depth {
        ((start, start), (end, end))
    } else {
        ((end, end), (start, start))
    };
    let extra = start_depth.abs_diff(end_depth);

    // Bring the deeper pointer up to the same depth.
    for _ in 0..extra {
        farther.1 = map.step(farther.0, farther.1)?;
    }
    let mut hops = extra;

    while map.step(nearer.0, nearer.1)? != map.step(farther.0, farther.1)? {
        nearer.1 = map.step(nearer.0, nearer.1)?;
        farther.1 = map.step(farther.0, farther.1)?;
        hops += 2;
    }

    tracing::debug!("Transfer {} -> {} takes {} hops", start, end, hops);
    Ok(hops)
}

impl ParentMap {
    /// See [`checksum`].
    pub fn checksum(&self) -> Result<usize> {
        checksum(self)
    }

    /// See [`transfer_distance`].
    pub fn transfer_distance(&self, start: &str, end: &str) -> Result<usize> {
        transfer_distance(self, start, end)
    }
}
