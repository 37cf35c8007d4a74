//! CLI argument definitions using clap
//!
//! The belt is interactive: no positional task, just a secrets file path
//! and a verbosity switch.

use clap::Parser;
use std::path::PathBuf;

/// Default secrets file name
pub const DEFAULT_SECRETS_FILE: &str = "belt.toml";

#[derive(Parser)]
#[command(name = "belt")]
#[command(about = "Utility Belt - an interactive menu of small console utilities")]
#[command(version)]
pub struct Cli {
    /// Path to the secrets file (TOML); BELT_* env vars override it
    #[arg(long, default_value = DEFAULT_SECRETS_FILE)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,
}
