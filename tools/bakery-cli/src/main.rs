//! Bakery CLI - Command line tool for the bakery storefront engine.
//!
//! Commands:
//! - `bakery quote` - Price a customized product
//! - `bakery bundle` - Price a "buy together" bundle
//! - `bakery wishlist` - Toggle and list favorite products
//! - `bakery recent` - Record and list recently viewed products
//! - `bakery form` - Validate review and contact form input
//! - `bakery config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{BundleArgs, ConfigArgs, FormArgs, QuoteArgs, RecentArgs, WishlistArgs};

/// Bakery CLI - Quote customized products and manage shopper lists
#[derive(Parser)]
#[command(name = "bakery")]
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
    /// Price a product with its customizations
    Quote(QuoteArgs),

    /// Price a primary product bought together with recommendations
    Bundle(BundleArgs),

    /// Manage the wishlist
    Wishlist(WishlistArgs),

    /// Manage recently viewed products
    Recent(RecentArgs),

    /// Validate form input
    Form(FormArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Quote(args) => commands::quote::run(args, &ctx).await,
        Commands::Bundle(args) => commands::bundle::run(args, &ctx).await,
        Commands::Wishlist(args) => commands::wishlist::run(args, &ctx).await,
        Commands::Recent(args) => commands::recent::run(args, &ctx).await,
        Commands::Form(args) => commands::form::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
