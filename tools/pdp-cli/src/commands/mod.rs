//! CLI command implementations.

pub mod carousel;
pub mod config;
pub mod show;
pub mod validate;

use clap::{Args, Subcommand};

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Catalog JSON file (default: catalog.path from config).
    pub path: Option<String>,

    /// List every product, not only the first.
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Catalog JSON file (default: catalog.path from config).
    pub path: Option<String>,

    /// Select a color by option value index.
    #[arg(long, conflicts_with = "color_at")]
    pub color: Option<i64>,

    /// Select a color by swatch position.
    #[arg(long)]
    pub color_at: Option<usize>,

    /// Tab to show (0 description, 1 specifications, 2 reviews, 3 attributes).
    #[arg(short, long, default_value = "0")]
    pub tab: usize,

    /// Jump the carousel to this page.
    #[arg(long)]
    pub page: Option<usize>,

    /// Deliver this many timer ticks before rendering.
    #[arg(long, default_value = "0")]
    pub ticks: usize,

    /// Offer the attributes tab.
    #[arg(long)]
    pub extended: bool,
}

/// Arguments for the carousel command.
#[derive(Args)]
pub struct CarouselArgs {
    /// Catalog JSON file (default: catalog.path from config).
    pub path: Option<String>,

    /// How long to run, in seconds.
    #[arg(short, long, default_value = "10")]
    pub seconds: u64,

    /// Override the auto-advance period in milliseconds.
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Select a color by option value index before starting.
    #[arg(long)]
    pub color: Option<i64>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Catalog path to record.
        #[arg(long, default_value = "catalog.json")]
        catalog: String,
        /// File format (toml or json).
        #[arg(long, default_value = "toml")]
        format: String,
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
