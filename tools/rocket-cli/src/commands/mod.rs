//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod products;

use clap::{Args, Subcommand};
use rocket_cart::ProductId;

/// Arguments naming a single product.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: ProductId,
}

/// Arguments for the set command.
#[derive(Args)]
pub struct AmountArgs {
    /// Product ID.
    pub id: ProductId,

    /// New amount. Zero or less is ignored.
    #[arg(allow_negative_numbers = true)]
    pub amount: i64,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Write a default config file in the current directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
