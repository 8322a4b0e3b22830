//! `concierge-chat`: talk to the hotel concierge responder from a terminal.

mod bootstrap;
mod session;
mod tracing_setup;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use concierge_core::config::{CliOverrides, FallbackPolicy};
use concierge_core::constants::VERSION;
use concierge_matcher::{IntentMatcher, ResponseSelector};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "concierge-chat")]
#[command(version, about = "Rule-based hotel concierge chatbot")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Intent catalog (.json or .toml); overrides the configured path
    #[arg(long)]
    catalog: Option<String>,

    /// Fallback strategy after a subset miss: edit, cosine, or none
    #[arg(long)]
    fallback: Option<FallbackPolicy>,

    /// Minimum edit-similarity score for a fallback match
    #[arg(long)]
    edit_threshold: Option<f64>,

    /// Minimum cosine score for a fallback match
    #[arg(long)]
    cosine_threshold: Option<f64>,

    /// Seed the response selector for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Print the catalog's patterns as input suggestions and exit
    #[arg(long)]
    suggest: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            catalog_path: self.catalog.clone(),
            fallback: self.fallback,
            edit_threshold: self.edit_threshold,
            cosine_threshold: self.cosine_threshold,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_setup::init_tracing();

    let bootstrap::Startup { config, catalog } =
        bootstrap::prepare(args.config.as_deref(), &args.overrides())
            .context("concierge-chat failed to start")?;
    tracing_setup::apply_log_level(&config.observability.log_level);
    info!(version = VERSION, catalog = %config.catalog.path, "concierge-chat starting");

    if args.suggest {
        session::write_suggestions(&catalog.all_patterns(), io::stdout().lock())?;
        return Ok(());
    }

    let matcher =
        IntentMatcher::new(&catalog, &config.matcher).context("failed to build intent matcher")?;
    let mut selector = match args.seed {
        Some(seed) => ResponseSelector::seeded(seed),
        None => ResponseSelector::from_entropy(),
    };

    session::run_session(&matcher, &mut selector, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
