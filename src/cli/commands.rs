//! CLI arguments

use crate::config::DEFAULT_BASE_URL;
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// List a SUSE Customer Center inventory collection
#[derive(Parser, Debug, Clone)]
#[command(name = "scc-inventory")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Credential file (YAML with `user_name` and `password`)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Resource to list, e.g. products, subscriptions, systems, installer
    #[arg(short, long)]
    pub get: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,

    /// API base URL
    #[arg(long, env = "SCC_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
