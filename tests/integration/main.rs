//! Integration tests for Orrery
//!
//! These tests drive the core and suite crates together over the checked-in fixtures.

use orrery_core::{OrbitError, ParentMap};
use orrery_suite::{analyze, load_manifest, run_suite, OrreryConfig};
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Every checked-in fixture matches its recorded expectation
#[test]
fn test_checked_in_fixtures_pass() {
    let root = fixtures_dir();
    let fixtures = load_manifest(&root.join("tests.json")).unwrap();
    assert!(!fixtures.is_empty());

    let report = run_suite(&fixtures, &root.join("tests"), &OrreryConfig::default());

    for case in &report.cases {
        assert!(case.passed, "Fixture {} failed: {:?}", case.name, case);
    }
    assert_eq!(report.percentage(), 100);
}

/// The boundary and the core agree on the same input
#[test]
fn test_analysis_matches_core() {
    let text = std::fs::read_to_string(fixtures_dir().join("tests/transfer.txt")).unwrap();

    let map: ParentMap = text.parse().unwrap();
    let analysis = analyze(&text, &OrreryConfig::default()).unwrap();

    assert_eq!(analysis.bodies, map.len());
    assert_eq!(analysis.checksum, map.checksum());
    assert_eq!(analysis.transfers, map.transfer_distance("YOU", "SAN"));
    assert_eq!(analysis.transfers, Ok(4));
}

/// Independent maps can be evaluated from several threads at once
#[test]
fn test_parallel_independent_maps() {
    let text = std::fs::read_to_string(fixtures_dir().join("tests/transfer.txt")).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let text = text.clone();
            std::thread::spawn(move || {
                let map = ParentMap::parse(&text).unwrap();
                (map.checksum().unwrap(), map.transfer_distance("SAN", "YOU").unwrap())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), (54, 4));
    }
}

/// Errors surface as typed variants through the boundary
#[test]
fn test_broken_fixture_errors() {
    let text = std::fs::read_to_string(fixtures_dir().join("tests/broken.txt")).unwrap();
    let analysis = analyze(&text, &OrreryConfig::default()).unwrap();

    assert!(matches!(
        analysis.checksum,
        Err(OrbitError::BrokenChain { ref at, .. }) if at == "B"
    ));
    assert!(matches!(analysis.transfers, Err(OrbitError::BrokenChain { .. })));
}
