//! Checksum and transfer distance for one orbit map

use orrery_core::{OrbitError, ParentMap};
use serde::{Serialize, Serializer};

use crate::config::OrreryConfig;
use crate::error::Result;

/// Both derived numbers for a single map. Each is computed independently, so
/// a broken transfer query does not hide a valid checksum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub bodies: usize,
    #[serde(serialize_with = "serialize_outcome")]
    pub checksum: std::result::Result<usize, OrbitError>,
    #[serde(serialize_with = "serialize_outcome")]
    pub transfers: std::result::Result<usize, OrbitError>,
}

/// Ingest `text` and compute both results. Only ingestion failures are
/// returned as errors.
pub fn analyze(text: &str, config: &OrreryConfig) -> Result<Analysis> {
    let mut map = config.new_map();
    map.ingest(text)?;
    Ok(analyze_map(&map, config))
}

pub fn analyze_map(map: &ParentMap, config: &OrreryConfig) -> Analysis {
    Analysis {
        bodies: map.len(),
        checksum: map.checksum(),
        transfers: map.transfer_distance(&config.from, &config.to),
    }
}

/// `{"ok": n}` or `{"error": "message"}`.
fn serialize_outcome<S: Serializer>(
    outcome: &std::result::Result<usize, OrbitError>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    #[derive(Serialize)]
    #[serde(rename_all = "lowercase")]
    enum Outcome<'a> {
        Ok(usize),
        Error(&'a str),
    }

    match outcome {
        Ok(value) => Outcome::Ok(*value).serialize(serializer),
        Err(e) => Outcome::Error(&e.to_string()).serialize(serializer),
    }
}
