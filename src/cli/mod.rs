//! CLI argument parsing for campus
//!
//! Uses clap for argument parsing. The planner itself is an interactive
//! menu session driven through stdin; flags only shape output and logging.

pub mod output;

use clap::Parser;
use std::path::PathBuf;

pub use output::OutputFormat;

/// Campus - navigation and utility planner
#[derive(Parser, Debug)]
#[command(name = "campus")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress menus and prompts (results are still printed)
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "campus_core=trace")
    #[arg(long, env = "CAMPUS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Configuration file (default: ~/.config/campus/config.toml)
    #[arg(long, env = "CAMPUS_CONFIG")]
    pub config: Option<PathBuf>,
}
