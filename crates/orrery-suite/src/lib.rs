//! Boundary layer for Orrery
//!
//! Loads configuration and fixture manifests, runs analyses over orbit map
//! text, and applies the fixture comparison policy.

pub mod config;
pub mod error;
pub mod analysis;
pub mod fixture;


pub use config::OrreryConfig;
pub use error::SuiteError;
pub use analysis::{analyze, analyze_map, Analysis};
pub use fixture::{load_manifest, run_suite, CaseOutcome, Fixture, SuiteReport, FAILED_SENTINEL};
