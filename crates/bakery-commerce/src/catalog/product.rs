//! Product snapshot used for pricing.

use crate::catalog::ProductCategory;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Number of installments offered when a product doesn't say otherwise.
pub const DEFAULT_INSTALLMENT_COUNT: u32 = 12;

fn default_installment_count() -> u32 {
    DEFAULT_INSTALLMENT_COUNT
}

fn default_true() -> bool {
    true
}

/// An immutable product snapshot as delivered by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Catalog category.
    #[serde(default)]
    pub category: ProductCategory,
    /// Regular selling price. Zero when the catalog leaves it out.
    #[serde(default)]
    pub base_price: Money,
    /// Price before discount. Only present when a discount applies.
    #[serde(default)]
    pub original_price: Option<Money>,
    /// Discount in whole percent (0-100).
    #[serde(default)]
    pub discount_percent: u32,
    /// Whether the storefront offers payment in installments.
    #[serde(default)]
    pub allow_installments: bool,
    /// Number of installments offered.
    #[serde(default = "default_installment_count")]
    pub installment_count: u32,
    /// Whether the product can be purchased right now.
    #[serde(default = "default_true")]
    pub available: bool,
}

impl Product {
    /// Create an available, undiscounted product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: ProductCategory,
        base_price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            base_price,
            original_price: None,
            discount_percent: 0,
            allow_installments: false,
            installment_count: DEFAULT_INSTALLMENT_COUNT,
            available: true,
        }
    }

    /// Attach a percentage discount off `original_price`.
    pub fn with_discount(mut self, original_price: Money, percent: u32) -> Result<Self, CommerceError> {
        self.original_price = Some(original_price);
        self.discount_percent = percent;
        self.validate()?;
        Ok(self)
    }

    /// Offer payment in `count` installments.
    pub fn with_installments(mut self, count: u32) -> Result<Self, CommerceError> {
        self.allow_installments = true;
        self.installment_count = count;
        self.validate()?;
        Ok(self)
    }

    /// Mark the product as (un)available for purchase.
    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Check the snapshot's invariants.
    ///
    /// Deserialized products should be validated before they're priced.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.base_price.is_negative() {
            return Err(CommerceError::InvalidPrice(self.base_price.display()));
        }
        if self.discount_percent > 100 {
            return Err(CommerceError::InvalidDiscountPercent(self.discount_percent));
        }
        if self.installment_count == 0 {
            return Err(CommerceError::InvalidInstallmentCount(0));
        }
        if let Some(original) = self.original_price {
            if original.is_negative() {
                return Err(CommerceError::InvalidPrice(original.display()));
            }
            if original.currency != self.base_price.currency {
                return Err(CommerceError::mismatch(
                    self.base_price.currency,
                    original.currency,
                ));
            }
        }
        Ok(())
    }

    /// Check whether a percentage discount is in effect.
    pub fn is_discounted(&self) -> bool {
        self.discount_percent > 0 && self.original_price.is_some()
    }

    /// Currency all of this product's prices are expressed in.
    pub fn currency(&self) -> Currency {
        self.base_price.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brl(units: i64) -> Money {
        Money::from_units(units, Currency::BRL)
    }

    #[test]
    fn test_product_creation() {
        let product = Product::new("bolo-cenoura", "Bolo de Cenoura", ProductCategory::Cake, brl(60));
        assert_eq!(product.id.as_str(), "bolo-cenoura");
        assert!(product.available);
        assert!(!product.is_discounted());
        assert_eq!(product.installment_count, DEFAULT_INSTALLMENT_COUNT);
    }

    #[test]
    fn test_discount_over_100_rejected() {
        let result = Product::new("x", "X", ProductCategory::Pie, brl(10)).with_discount(brl(10), 101);
        assert_eq!(result, Err(CommerceError::InvalidDiscountPercent(101)));
    }

    #[test]
    fn test_discount_currency_must_match() {
        let result = Product::new("x", "X", ProductCategory::Pie, brl(10))
            .with_discount(Money::from_units(10, Currency::USD), 10);
        assert!(matches!(result, Err(CommerceError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_zero_installments_rejected() {
        let result = Product::new("x", "X", ProductCategory::Pie, brl(10)).with_installments(0);
        assert_eq!(result, Err(CommerceError::InvalidInstallmentCount(0)));
    }

    #[test]
    fn test_discount_without_original_price_is_inactive() {
        let mut product = Product::new("x", "X", ProductCategory::Sweet, brl(10));
        product.discount_percent = 30;
        assert!(!product.is_discounted());
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let json = r#"{
            "id": "brigadeiro",
            "name": "Brigadeiro",
            "base_price": { "amount_cents": 350, "currency": "BRL" }
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.available);
        assert_eq!(product.category, ProductCategory::Cake);
        assert_eq!(product.installment_count, 12);
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_missing_base_price_is_zero() {
        let product: Product = serde_json::from_str(r#"{ "id": "x", "name": "X" }"#).unwrap();
        assert!(product.base_price.is_zero());
        assert_eq!(product.currency(), Currency::BRL);
        assert!(product.validate().is_ok());
    }
}
