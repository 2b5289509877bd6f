//! "Buy together" bundles.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::pricing::{effective_unit_price, PricingConfig};
use serde::{Deserialize, Serialize};

/// A secondary product offered alongside the primary one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BundleItem {
    pub product: Product,
    /// Whether the shopper kept this item in the bundle.
    pub selected: bool,
}

/// A primary product plus independently toggleable recommendations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BundleSelection {
    pub primary: Product,
    pub items: Vec<BundleItem>,
}

impl BundleSelection {
    pub fn new(primary: Product) -> Self {
        Self {
            primary,
            items: Vec::new(),
        }
    }

    /// Offer a secondary product. Products already offered are ignored.
    pub fn offer(&mut self, product: Product, selected: bool) {
        if self.items.iter().any(|i| i.product.id == product.id) || product.id == self.primary.id {
            return;
        }
        self.items.push(BundleItem { product, selected });
    }

    /// Flip whether a secondary product is included.
    ///
    /// Returns the new state, or `None` if the product isn't offered.
    pub fn toggle(&mut self, product_id: &ProductId) -> Option<bool> {
        let item = self.items.iter_mut().find(|i| &i.product.id == product_id)?;
        item.selected = !item.selected;
        Some(item.selected)
    }

    /// Secondary products currently included.
    pub fn selected(&self) -> impl Iterator<Item = &Product> {
        self.items.iter().filter(|i| i.selected).map(|i| &i.product)
    }

    /// Totals using the configured bundle discount.
    pub fn totals(&self, config: &PricingConfig) -> Result<BundleTotals, CommerceError> {
        bundle_totals(&self.primary, self.selected(), config.bundle_discount_percent)
    }
}

/// Combined price of a bundle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BundleTotals {
    /// Sum of effective unit prices.
    pub original_total: Money,
    /// original_total minus the bundle discount.
    pub discounted_total: Money,
    pub savings: Money,
    /// Number of products in the bundle, primary included.
    pub item_count: usize,
}

/// Price a primary product together with `secondaries` at a flat
/// `discount_percent` off the combined total.
pub fn bundle_totals<'a>(
    primary: &Product,
    secondaries: impl IntoIterator<Item = &'a Product>,
    discount_percent: u32,
) -> Result<BundleTotals, CommerceError> {
    let currency = primary.currency();
    let mut original_total = effective_unit_price(primary);
    let mut item_count = 1;

    for product in secondaries {
        if product.currency() != currency {
            return Err(CommerceError::mismatch(currency, product.currency()));
        }
        original_total = original_total
            .try_add(&effective_unit_price(product))
            .ok_or(CommerceError::Overflow)?;
        item_count += 1;
    }

    let keep = 100 - i64::from(discount_percent.min(100));
    let discounted_total = original_total.scale(keep, 100);

    Ok(BundleTotals {
        original_total,
        discounted_total,
        savings: Money::new(
            original_total.amount_cents - discounted_total.amount_cents,
            currency,
        ),
        item_count,
    })
}
