//! "Buy together" bundle command.

use anyhow::{bail, Result};
use bakery_commerce::pricing::{effective_unit_price, BundleSelection, BundleTotals, PricingConfig};
use bakery_commerce::ProductId;
use serde::Serialize;

use super::product_file::{load_file, BundleFile};
use super::BundleArgs;
use crate::context::Context;
use crate::output::{discount_badge, price};

#[derive(Serialize)]
struct BundleReport {
    primary: String,
    selected: Vec<String>,
    discount_percent: u32,
    totals: BundleTotals,
}

/// Run the bundle command.
pub async fn run(args: BundleArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.file);
    let file: BundleFile = load_file(&path)?;
    let currency = ctx.config.currency()?;

    let pricing = PricingConfig {
        bundle_discount_percent: args
            .discount
            .unwrap_or(ctx.config.pricing.bundle_discount_percent),
        ..ctx.config.pricing
    };
    pricing.validate()?;

    let mut bundle = BundleSelection::new(file.primary.to_product(currency, &pricing)?);
    for item in &file.items {
        bundle.offer(item.product.to_product(currency, &pricing)?, item.selected);
    }

    for id in &args.toggle {
        if bundle.toggle(&ProductId::new(id.as_str())).is_none() {
            bail!("{} is not offered in this bundle", id);
        }
    }

    let totals = bundle.totals(&pricing)?;
    tracing::debug!(
        items = totals.item_count,
        total = %totals.discounted_total,
        "bundle priced"
    );

    if ctx.output.is_json() {
        ctx.output.json(&BundleReport {
            primary: bundle.primary.id.to_string(),
            selected: bundle.selected().map(|p| p.id.to_string()).collect(),
            discount_percent: pricing.bundle_discount_percent,
            totals,
        });
        return Ok(());
    }

    ctx.output.header("Buy together");
    ctx.output.table_row(
        &["[x]", &bundle.primary.name, &effective_unit_price(&bundle.primary).to_string()],
        &[4, 28, 12],
    );
    for item in &bundle.items {
        let mark = if item.selected { "[x]" } else { "[ ]" };
        ctx.output.table_row(
            &[mark, &item.product.name, &effective_unit_price(&item.product).to_string()],
            &[4, 28, 12],
        );
    }

    ctx.output.header("Total");
    ctx.output.kv("items", &totals.item_count.to_string());
    ctx.output.kv("separately", &totals.original_total.to_string());
    ctx.output.kv(
        "together",
        &format!(
            "{} {}",
            price(&totals.discounted_total),
            discount_badge(pricing.bundle_discount_percent)
        ),
    );
    ctx.output.kv("you save", &totals.savings.to_string());

    Ok(())
}
