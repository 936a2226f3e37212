//! Compound CLI - project contribution plans month by month.
//!
//! # Usage
//!
//! ```bash
//! # Project every plan in a plan file over the configured horizon
//! compound project --plan plans.toml
//!
//! # Project a single asset from a period table, 50 years, yearly rows
//! compound --horizon 600 project --periods periods.csv --name SCHD \
//!     --capital-rate 0.06 --income-rate 0.035 --every 12
//!
//! # Final-month headline per plan
//! compound summary --plan plans.toml
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod input;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = commands::resolve_config(cli.config.as_deref(), cli.horizon)?;
    tracing::debug!(horizon_months = config.horizon_months, "resolved projection config");

    let format = cli.format;

    match cli.command {
        Commands::Project(args) => commands::project::execute(args, &config, format, cli.quiet)?,
        Commands::Summary(args) => commands::summary::execute(args, &config, format)?,
    }

    Ok(())
}

/// Logs go to stderr so table, JSON and CSV output stay clean on stdout.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
