//! pdp - Command line tool for the product detail page engine.
//!
//! Commands:
//! - `pdp validate` - Parse a catalog and summarize it
//! - `pdp show` - Render the page view state after a sequence of actions
//! - `pdp carousel` - Run a live screen and watch the carousel advance
//! - `pdp config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CarouselArgs, ConfigArgs, ShowArgs, ValidateArgs};

/// pdp - Inspect catalogs and drive the product page engine
#[derive(Parser)]
#[command(name = "pdp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a catalog file and report what it contains
    Validate(ValidateArgs),

    /// Print the page view state after applying actions
    Show(ShowArgs),

    /// Run a live screen and print carousel page changes
    Carousel(CarouselArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let filter = if cli.verbose {
        "turbo_pdp=debug".to_string()
    } else {
        format!("turbo_pdp={}", ctx.config.logging.level)
    };
    turbo_observability::init_tracing(&filter)?;

    let result = match cli.command {
        Commands::Validate(args) => commands::validate::run(args, &ctx).await,
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Carousel(args) => commands::carousel::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
