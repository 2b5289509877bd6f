//! Pricing engine.
//!
//! Pure functions from a product snapshot and a selection to the figures a
//! product page shows. Nothing here performs I/O or keeps state; tunables
//! come in through [`PricingConfig`].

mod bundle;
mod config;
mod engine;

pub use bundle::{bundle_totals, BundleItem, BundleSelection, BundleTotals};
pub use config::{PricingConfig, DEFAULT_BUNDLE_DISCOUNT_PERCENT};
pub use engine::{
    can_checkout, customization_total, effective_unit_price, final_price, installment_amount,
    installment_offer, price_breakdown, savings, InstallmentPlan, PriceBreakdown,
};
