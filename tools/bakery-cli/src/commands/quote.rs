//! Product quote command.

use anyhow::Result;
use bakery_commerce::cart::{CartInsertion, ProductEvent};
use bakery_commerce::customization::GroupKind;
use bakery_commerce::pricing::{price_breakdown, PriceBreakdown};
use bakery_store::RecentlyViewed;
use chrono::Utc;
use serde::Serialize;

use super::product_file::{load_file, QuoteFile};
use super::QuoteArgs;
use crate::context::Context;
use crate::output::{discount_badge, price, price_delta};

#[derive(Serialize)]
struct QuoteReport {
    product_id: String,
    product_name: String,
    quoted_at: String,
    breakdown: PriceBreakdown,
    can_checkout: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    blocked_reason: Option<String>,
    rejected: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    event: Option<ProductEvent>,
}

/// Run the quote command.
pub async fn run(args: QuoteArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.file);
    let file: QuoteFile = load_file(&path)?;

    let product = file
        .product
        .to_product(ctx.config.currency()?, &ctx.config.pricing)?;
    let groups = file.groups(&product)?;
    let (selection, rejected) = file.selection.apply(&groups);
    let breakdown = price_breakdown(&product, &selection)?;
    tracing::debug!(product = %product.id, total = %breakdown.final_price, "quote computed");

    let insertion = CartInsertion::from_selection(&product, &groups, &selection);
    let blocked_reason = insertion.as_ref().err().map(|e| e.to_string());

    if args.track {
        let store = ctx.open_store()?;
        RecentlyViewed::with_limit(&store, ctx.config.store.recent_limit)
            .record(product.id.as_str())?;
        ctx.output.debug(&format!("Recorded view of {}", product.id));
    }

    if ctx.output.is_json() {
        ctx.output.json(&QuoteReport {
            product_id: product.id.to_string(),
            product_name: product.name.clone(),
            quoted_at: Utc::now().to_rfc3339(),
            breakdown,
            can_checkout: blocked_reason.is_none(),
            blocked_reason,
            rejected,
            event: if args.event {
                insertion.ok().map(ProductEvent::AddToCart)
            } else {
                None
            },
        });
        return Ok(());
    }

    for reason in &rejected {
        ctx.output.warn(&format!("Ignored: {}", reason));
    }

    ctx.output.header(&product.name);
    if let Some(original) = breakdown.original_price {
        ctx.output.kv(
            "was",
            &format!("{} {}", original, discount_badge(breakdown.discount_percent)),
        );
    }
    ctx.output.kv("price", &price(&breakdown.unit_price));
    if breakdown.has_discount() {
        ctx.output.kv("you save", &breakdown.savings.to_string());
    }
    if let Some(plan) = &breakdown.installments {
        ctx.output
            .kv("installments", &format!("{}x {}", plan.count, plan.amount));
    }

    let chosen: Vec<_> = [
        (GroupKind::Size, selection.size()),
        (GroupKind::Flavor, selection.flavor()),
        (GroupKind::Decoration, selection.decoration()),
    ]
    .into_iter()
    .filter_map(|(kind, option)| option.map(|o| (kind, o)))
    .chain(selection.extras().iter().map(|o| (GroupKind::Extras, o)))
    .collect();

    if !chosen.is_empty() {
        ctx.output.header("Customizations");
        for (kind, option) in chosen {
            ctx.output.table_row(
                &[kind.as_str(), &option.name, &price_delta(&option.price_delta)],
                &[12, 24, 12],
            );
        }
        ctx.output
            .kv("add-ons", &breakdown.customization_total.to_string());
    }

    ctx.output.header("Total");
    ctx.output.kv("unit", &breakdown.unit_total.to_string());
    ctx.output.kv("quantity", &breakdown.quantity.to_string());
    ctx.output.kv("total", &price(&breakdown.final_price));

    match insertion {
        Ok(insertion) => {
            ctx.output.success("Ready for checkout");
            if args.event {
                ctx.output.json(&ProductEvent::AddToCart(insertion));
            }
        }
        Err(e) => ctx.output.warn(&format!("Can't add to cart yet: {}", e)),
    }

    Ok(())
}
