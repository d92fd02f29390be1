//! Rocket CLI - Command line storefront cart for RocketShoes.
//!
//! Commands:
//! - `rocket products` - List the catalog with in-cart amounts
//! - `rocket cart` - Show the cart
//! - `rocket add` - Add one unit of a product
//! - `rocket remove` - Remove a product from the cart
//! - `rocket set` - Set a product's amount
//! - `rocket inc` / `rocket dec` - Step a product's amount
//! - `rocket config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AmountArgs, ConfigArgs, ProductArgs};

/// Rocket CLI - Shop the RocketShoes catalog from the terminal
#[derive(Parser)]
#[command(name = "rocket")]
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
    /// List the product catalog
    Products,

    /// Show the cart
    Cart,

    /// Add one unit of a product to the cart
    Add(ProductArgs),

    /// Remove a product from the cart
    Remove(ProductArgs),

    /// Set the amount of a product in the cart
    Set(AmountArgs),

    /// Add one to a product's amount
    Inc(ProductArgs),

    /// Take one from a product's amount
    Dec(ProductArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Products => commands::products::run(&ctx).await,
        Commands::Cart => commands::cart::show(&ctx),
        Commands::Add(args) => commands::cart::add(args, &ctx).await,
        Commands::Remove(args) => commands::cart::remove(args, &ctx),
        Commands::Set(args) => commands::cart::set(args, &ctx).await,
        Commands::Inc(args) => commands::cart::step(args, 1, &ctx).await,
        Commands::Dec(args) => commands::cart::step(args, -1, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
