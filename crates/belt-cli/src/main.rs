//! Utility Belt CLI application
//!
//! Interactive console menu over the utility registry: pick an entry by
//! number, case-insensitive name, or case-sensitive alias; run it; then
//! decide whether to go around again.

mod args;

use anyhow::Context;
use belt_core::console::StdinLineSource;
use belt_core::{Console, Secrets, SessionLoop, SessionOutcome, UtilityRegistry};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with environment-based filtering
    // Set RUST_LOG=debug for verbose logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("starting application");

    let cli = args::Cli::parse();
    let console = Console::new(cli.verbose);
    console.print_banner();
    println!("Loading...");

    let secrets = Secrets::load(Some(&cli.config))
        .with_context(|| format!("loading secrets from {}", cli.config.display()))?;
    console.info(&format!("secrets loaded from {}", cli.config.display()));

    let registry = UtilityRegistry::build(belt_utilities::default_utilities());
    console.info(&format!("{} utilities registered", registry.len()));

    let mut session = SessionLoop::new(&registry, secrets, console, StdinLineSource);
    match session.run().await? {
        SessionOutcome::Exited => tracing::info!("session exited via menu"),
        SessionOutcome::Declined => tracing::info!("session ended at confirmation"),
    }
    console.success("Goodbye!");

    Ok(())
}
