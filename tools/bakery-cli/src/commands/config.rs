//! Configuration management commands.

use anyhow::{bail, Result};
use chrono::Utc;

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    // Pricing section
    ctx.output.info("[pricing]");
    ctx.output.kv(
        "installment_count",
        &ctx.config.pricing.installment_count.to_string(),
    );
    ctx.output.kv(
        "bundle_discount_percent",
        &ctx.config.pricing.bundle_discount_percent.to_string(),
    );

    // Store section
    ctx.output.info("[store]");
    ctx.output.kv("data_dir", &ctx.config.store.data_dir);
    ctx.output.kv("recent_limit", &ctx.config.store.recent_limit.to_string());

    // Display section
    ctx.output.info("[display]");
    ctx.output.kv("currency", &ctx.config.display.currency);

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("bakery.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let content = generate_default_config(&Utc::now().format("%Y-%m-%d").to_string());
    std::fs::write(&config_path, content)?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let errors = ctx.config.problems();
    if errors.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    bail!("Configuration has {} error(s)", errors.len())
}
