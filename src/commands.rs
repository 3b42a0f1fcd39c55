//! CLI command implementations

use anyhow::Context;
use orrery_suite::{Analysis, OrreryConfig, SuiteReport};
use std::path::{Path, PathBuf};

/// Config file (if any) with command-line overrides applied on top.
pub fn load_config(
    path: Option<&Path>,
    root: Option<String>,
    from: Option<String>,
    to: Option<String>,
) -> anyhow::Result<OrreryConfig> {
    let mut config = match path {
        Some(path) => OrreryConfig::from_file(path)?,
        None => OrreryConfig::default(),
    };

    if let Some(root) = root {
        config.root = root;
    }
    if let Some(from) = from {
        config.from = from;
    }
    if let Some(to) = to {
        config.to = to;
    }

    Ok(config)
}

pub fn analyze(input: &Path, config: &OrreryConfig, json: bool) -> anyhow::Result<()> {
    tracing::info!("Analyzing orbit map: {}", input.display());

    let text = std::fs::read_to_string(input)
        .with_context(|| format!("cannot read {}", input.display()))?;
    let analysis = orrery_suite::analyze(&text, config)
        .with_context(|| format!("invalid orbit map {}", input.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_analysis(&analysis, config);
    }

    Ok(())
}

fn print_analysis(analysis: &Analysis, config: &OrreryConfig) {
    println!("Bodies: {}", analysis.bodies);
    match &analysis.checksum {
        Ok(checksum) => println!("Checksum: {}", checksum),
        Err(e) => println!("Checksum: error: {}", e),
    }
    match &analysis.transfers {
        Ok(hops) => println!("Transfers {} -> {}: {}", config.from, config.to, hops),
        Err(e) => println!("Transfers {} -> {}: error: {}", config.from, config.to, e),
    }
}

pub fn suite(
    manifest: &Path,
    dir: Option<PathBuf>,
    config: &OrreryConfig,
    json: bool,
) -> anyhow::Result<()> {
    let fixtures = orrery_suite::load_manifest(manifest)?;
    let dir = dir.unwrap_or_else(|| {
        manifest
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("tests")
    });

    tracing::info!("Running {} tests...", fixtures.len());
    let report = orrery_suite::run_suite(&fixtures, &dir, config);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if !report.all_passed() {
        anyhow::bail!("{} of {} fixtures failed", report.total - report.passed, report.total);
    }
    Ok(())
}

fn print_report(report: &SuiteReport) {
    for case in &report.cases {
        println!(
            "Name: {} => {}",
            case.name,
            if case.passed { "Passed!" } else { "Failed" }
        );
        println!(
            "Expected Checksum: {} | Checksum: {}",
            case.expected_checksum, case.checksum
        );
        println!(
            "Expected Transfers: {} | Transfers: {}",
            case.expected_transfers, case.transfers
        );
    }
    println!(
        "{}/{} tests passed ({}%)",
        report.passed,
        report.total,
        report.percentage()
    );
}
