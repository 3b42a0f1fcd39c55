//! Fixture suites: expected results for a batch of orbit maps
//!
//! A manifest is a JSON array of `{"name", "checksum", "transfers"}` entries.
//! The map text for each entry lives in `<dir>/<name>.txt`.

use std::path::Path;

use orrery_core::OrbitError;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::analyze;
use crate::config::OrreryConfig;
use crate::error::{Result, SuiteError};

/// Recorded in place of a result that could not be computed.
pub const FAILED_SENTINEL: i64 = -1;

/// One expected outcome. A value of [`FAILED_SENTINEL`] means the computation
/// is expected to fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub name: String,
    pub checksum: i64,
    pub transfers: i64,
}

/// What happened when a fixture was evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseOutcome {
    pub name: String,
    pub expected_checksum: i64,
    pub checksum: i64,
    pub expected_transfers: i64,
    pub transfers: i64,
    pub passed: bool,
}

/// Outcomes for a whole manifest, in manifest order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteReport {
    pub cases: Vec<CaseOutcome>,
    pub passed: usize,
    pub total: usize,
}

impl SuiteReport {
    /// Share of passing cases, rounded to the nearest whole percent.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.passed as f64 / self.total as f64 * 100.0).round() as u32
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

/// Read and parse a fixture manifest.
pub fn load_manifest(path: &Path) -> Result<Vec<Fixture>> {
    let contents = std::fs::read_to_string(path).map_err(|source| SuiteError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| SuiteError::Manifest {
        path: path.to_path_buf(),
        source,
    })
}

/// Evaluate every fixture against the map text found in `dir`.
///
/// Each fixture gets its own map, so fixtures are evaluated in parallel.
pub fn run_suite(fixtures: &[Fixture], dir: &Path, config: &OrreryConfig) -> SuiteReport {
    tracing::info!("Running {} fixtures from {}", fixtures.len(), dir.display());

    let cases: Vec<CaseOutcome> = fixtures
        .par_iter()
        .map(|fixture| run_case(fixture, dir, config))
        .collect();
    let passed = cases.iter().filter(|c| c.passed).count();

    SuiteReport {
        total: cases.len(),
        passed,
        cases,
    }
}

fn run_case(fixture: &Fixture, dir: &Path, config: &OrreryConfig) -> CaseOutcome {
    let (checksum, transfers) = match evaluate(fixture, dir, config) {
        Ok(results) => results,
        Err(e) => {
            tracing::warn!("Fixture {} could not be evaluated: {}", fixture.name, e);
            (FAILED_SENTINEL, FAILED_SENTINEL)
        }
    };

    let passed = checksum == fixture.checksum && transfers == fixture.transfers;
    tracing::debug!(
        "Fixture {}: checksum {} transfers {} => {}",
        fixture.name,
        checksum,
        transfers,
        if passed { "passed" } else { "failed" }
    );

    CaseOutcome {
        name: fixture.name.clone(),
        expected_checksum: fixture.checksum,
        checksum,
        expected_transfers: fixture.transfers,
        transfers,
        passed,
    }
}

fn evaluate(fixture: &Fixture, dir: &Path, config: &OrreryConfig) -> Result<(i64, i64)> {
    let path = dir.join(format!("{}.txt", fixture.name));
    let bytes = std::fs::read(&path).map_err(|source| SuiteError::Read {
        path: path.clone(),
        source,
    })?;
    // Undecodable bytes become replacement characters, which the parser skips.
    let text = String::from_utf8_lossy(&bytes);
    let analysis = analyze(&text, config)?;

    Ok((sentinel(analysis.checksum), sentinel(analysis.transfers)))
}

fn sentinel(outcome: std::result::Result<usize, OrbitError>) -> i64 {
    outcome.map_or(FAILED_SENTINEL, |n| n as i64)
}
