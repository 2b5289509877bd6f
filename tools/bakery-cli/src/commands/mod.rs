//! CLI command implementations.

pub mod bundle;
pub mod config;
pub mod form;
pub mod product_file;
pub mod quote;
pub mod recent;
pub mod wishlist;

use clap::{Args, Subcommand, ValueEnum};

/// Arguments for the quote command.
#[derive(Args)]
pub struct QuoteArgs {
    /// Quote file (TOML or JSON).
    pub file: String,

    /// Also print the add-to-cart event for this selection.
    #[arg(long)]
    pub event: bool,

    /// Record the product as recently viewed.
    #[arg(long)]
    pub track: bool,
}

/// Arguments for the bundle command.
#[derive(Args)]
pub struct BundleArgs {
    /// Bundle file (TOML or JSON).
    pub file: String,

    /// Flip the selection of these secondary products before pricing.
    #[arg(short, long)]
    pub toggle: Vec<String>,

    /// Override the configured bundle discount (0-100).
    #[arg(long)]
    pub discount: Option<u32>,
}

/// Arguments for the wishlist command.
#[derive(Args)]
pub struct WishlistArgs {
    #[command(subcommand)]
    pub command: WishlistCommand,
}

#[derive(Subcommand)]
pub enum WishlistCommand {
    /// Add a product if absent, remove it if present.
    Toggle {
        /// Product ID.
        product: String,
    },
    /// Check whether a product is in the wishlist.
    Has {
        /// Product ID.
        product: String,
    },
    /// List the wishlist.
    List,
}

/// Arguments for the recent command.
#[derive(Args)]
pub struct RecentArgs {
    #[command(subcommand)]
    pub command: RecentCommand,
}

#[derive(Subcommand)]
pub enum RecentCommand {
    /// Record a product view.
    View {
        /// Product ID.
        product: String,
    },
    /// List recently viewed products, most recent first.
    List,
}

/// Arguments for the form command.
#[derive(Args)]
pub struct FormArgs {
    /// Which form to validate.
    #[arg(value_enum)]
    pub form: FormKind,

    /// Field values as key=value pairs.
    #[arg(value_name = "FIELD=VALUE")]
    pub fields: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormKind {
    Review,
    Contact,
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
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
