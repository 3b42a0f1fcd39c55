//! Orrery CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "orrery")]
#[command(about = "Orbit map checksums and transfer distances", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML config file with root/from/to labels
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Label of the universal centre of mass
    #[arg(long, global = true)]
    root: Option<String>,

    /// Body the transfer starts from
    #[arg(long, global = true)]
    from: Option<String>,

    /// Body the transfer ends at
    #[arg(long, global = true)]
    to: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the checksum and transfer distance of an orbit map
    Analyze {
        /// File containing PARENT)CHILD orbits
        input: PathBuf,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a fixture suite described by a JSON manifest
    Suite {
        /// Manifest of {name, checksum, transfers} entries
        manifest: PathBuf,

        /// Directory holding <name>.txt files (defaults to tests/ next to the manifest)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Print the suite report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "orrery={0},orrery_core={0},orrery_suite={0}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = commands::load_config(cli.config.as_deref(), cli.root, cli.from, cli.to)?;
    tracing::debug!("Using config: {:?}", config);

    match cli.command {
        Commands::Analyze { input, json } => commands::analyze(&input, &config, json),
        Commands::Suite {
            manifest,
            dir,
            json,
        } => commands::suite(&manifest, dir, &config, json),
        Commands::Version => {
            println!("Orrery v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
