//! Cart and line item types.

use crate::cart::{CartInsertion, SelectedOption};
use crate::customization::Quantity;
use crate::error::CommerceError;
use crate::ids::{CartId, LineItemId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Unique cart identifier.
    pub id: CartId,
    /// Items in the cart.
    pub items: Vec<LineItem>,
    /// Cart currency.
    pub currency: Currency,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        let now = current_timestamp();
        Self {
            id: CartId::generate(),
            items: Vec::new(),
            currency,
            created_at: now,
            updated_at: now,
        }
    }

    /// Add a customized product to the cart.
    ///
    /// An insertion with the same product and the same options as an
    /// existing line is merged into it; the merged quantity is capped at
    /// the per-item maximum and the line takes the insertion's unit price.
    pub fn add(&mut self, insertion: CartInsertion) -> Result<LineItemId, CommerceError> {
        if insertion.unit_price.currency != self.currency {
            return Err(CommerceError::mismatch(
                self.currency,
                insertion.unit_price.currency,
            ));
        }

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == insertion.product_id && same_options(&i.options, &insertion.options))
        {
            existing.quantity = Quantity::new(existing.quantity.get().saturating_add(insertion.quantity));
            existing.unit_price = insertion.unit_price;
            existing.update_total()?;
            self.updated_at = current_timestamp();
            tracing::info!(
                product = %existing.product_id,
                quantity = existing.quantity.get(),
                "cart line merged"
            );
            return Ok(existing.id.clone());
        }

        let item = LineItem::new(insertion)?;
        let id = item.id.clone();
        tracing::info!(product = %item.product_id, quantity = item.quantity.get(), "cart line added");
        self.items.push(item);
        self.updated_at = current_timestamp();
        Ok(id)
    }

    /// Set a line's quantity (clamped to the allowed range).
    pub fn update_quantity(&mut self, line_item_id: &LineItemId, quantity: u32) -> Result<(), CommerceError> {
        let item = self
            .items
            .iter_mut()
            .find(|i| &i.id == line_item_id)
            .ok_or_else(|| CommerceError::ItemNotInCart(line_item_id.to_string()))?;
        item.quantity = Quantity::new(quantity);
        item.update_total()?;
        self.updated_at = current_timestamp();
        Ok(())
    }

    /// Remove an item from the cart.
    pub fn remove(&mut self, line_item_id: &LineItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != line_item_id);
        let removed = self.items.len() < len_before;
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity.get()).sum()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by ID.
    pub fn get(&self, line_item_id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == line_item_id)
    }

    /// Sum of all line totals.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        Money::try_sum(self.items.iter().map(|i| &i.total_price), self.currency)
            .ok_or(CommerceError::Overflow)
    }
}

fn same_options(a: &[SelectedOption], b: &[SelectedOption]) -> bool {
    a.len() == b.len()
        && a.iter().all(|x| b.iter().any(|y| y.group == x.group && y.id == x.id))
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Unique line item identifier.
    pub id: LineItemId,
    /// Product ID.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub product_name: String,
    /// Chosen customizations.
    pub options: Vec<SelectedOption>,
    /// Quantity.
    pub quantity: Quantity,
    /// Unit price including customizations.
    pub unit_price: Money,
    /// Total price (unit_price * quantity).
    pub total_price: Money,
}

impl LineItem {
    fn new(insertion: CartInsertion) -> Result<Self, CommerceError> {
        let mut item = Self {
            id: LineItemId::generate(),
            product_id: insertion.product_id,
            product_name: insertion.product_name,
            options: insertion.options,
            quantity: Quantity::new(insertion.quantity),
            unit_price: insertion.unit_price,
            total_price: Money::zero(insertion.unit_price.currency),
        };
        item.update_total()?;
        Ok(item)
    }

    /// Update the total price based on quantity.
    pub fn update_total(&mut self) -> Result<(), CommerceError> {
        self.total_price = self
            .unit_price
            .checked_multiply(i64::from(self.quantity.get()))
            .ok_or(CommerceError::Overflow)?;
        Ok(())
    }

    /// Options rendered for display (e.g., "M - 20cm, Chocolate").
    pub fn options_label(&self) -> String {
        self.options
            .iter()
            .map(|o| o.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customization::GroupKind;
    use crate::ids::OptionId;

    fn brl(units: i64) -> Money {
        Money::from_units(units, Currency::BRL)
    }

    fn insertion(product: &str, options: &[&str], quantity: u32, unit: i64) -> CartInsertion {
        CartInsertion {
            product_id: ProductId::new(product),
            product_name: product.to_string(),
            options: options
                .iter()
                .map(|id| SelectedOption {
                    group: GroupKind::Extras,
                    id: OptionId::new(*id),
                    name: id.to_string(),
                    price_delta: brl(0),
                })
                .collect(),
            quantity,
            unit_price: brl(unit),
            final_price: brl(unit * i64::from(quantity)),
        }
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new(Currency::BRL);
        cart.add(insertion("bolo", &["calda"], 2, 50)).unwrap();

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.subtotal().unwrap(), brl(100));
    }

    #[test]
    fn test_same_product_and_options_merge() {
        let mut cart = Cart::new(Currency::BRL);
        let first = cart.add(insertion("bolo", &["calda", "vela"], 1, 50)).unwrap();
        let second = cart.add(insertion("bolo", &["vela", "calda"], 2, 50)).unwrap();

        assert_eq!(first, second);
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_different_options_stay_separate() {
        let mut cart = Cart::new(Currency::BRL);
        cart.add(insertion("bolo", &["calda"], 1, 50)).unwrap();
        cart.add(insertion("bolo", &[], 1, 42)).unwrap();

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.subtotal().unwrap(), brl(92));
    }

    #[test]
    fn test_merge_caps_quantity() {
        let mut cart = Cart::new(Currency::BRL);
        cart.add(insertion("pao", &[], 8, 5)).unwrap();
        let id = cart.add(insertion("pao", &[], 8, 5)).unwrap();

        let line = cart.get(&id).unwrap();
        assert_eq!(line.quantity.get(), 10);
        assert_eq!(line.total_price, brl(50));
    }

    #[test]
    fn test_merge_takes_latest_unit_price() {
        let mut cart = Cart::new(Currency::BRL);
        cart.add(insertion("bolo", &["calda"], 1, 60)).unwrap();
        let id = cart.add(insertion("bolo", &["calda"], 2, 45)).unwrap();

        let line = cart.get(&id).unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(line.unit_price, brl(45));
        assert_eq!(line.total_price, brl(135));
        assert_eq!(cart.subtotal().unwrap(), brl(135));
    }

    #[test]
    fn test_update_and_remove() {
        let mut cart = Cart::new(Currency::BRL);
        let id = cart.add(insertion("torta", &[], 1, 30)).unwrap();

        cart.update_quantity(&id, 4).unwrap();
        assert_eq!(cart.subtotal().unwrap(), brl(120));

        assert!(cart.remove(&id));
        assert!(cart.is_empty());
        assert!(matches!(
            cart.update_quantity(&id, 1),
            Err(CommerceError::ItemNotInCart(_))
        ));
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let mut cart = Cart::new(Currency::USD);
        let result = cart.add(insertion("bolo", &[], 1, 50));
        assert!(matches!(result, Err(CommerceError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_options_label() {
        let mut cart = Cart::new(Currency::BRL);
        let id = cart.add(insertion("bolo", &["calda", "vela"], 1, 50)).unwrap();
        assert_eq!(cart.get(&id).unwrap().options_label(), "calda, vela");
    }
}
