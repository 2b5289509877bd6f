//! Unit price, savings, installments and final price.

use crate::catalog::Product;
use crate::customization::{CustomizationGroups, Selection};
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Per-item price after any percentage discount, before add-ons.
///
/// The discount only applies when both a percentage and an original price
/// are present; otherwise the base price is returned as is.
pub fn effective_unit_price(product: &Product) -> Money {
    match product.original_price {
        Some(original) if product.discount_percent > 0 => {
            let keep = 100 - i64::from(product.discount_percent.min(100));
            original.scale(keep, 100)
        }
        _ => product.base_price,
    }
}

/// Amount saved per item through the discount. Zero when none applies.
pub fn savings(product: &Product) -> Money {
    match product.original_price {
        Some(original) if product.discount_percent > 0 => {
            let effective = effective_unit_price(product);
            Money::new(original.amount_cents - effective.amount_cents, original.currency)
        }
        _ => Money::zero(product.currency()),
    }
}

/// Effective unit price split across the product's installments, rounded
/// to the cent.
///
/// Each installment is off by at most half a cent, so `amount x count`
/// stays within `count / 2` cents of the unit price (6 for 12x).
///
/// Doesn't look at `allow_installments`; see [`installment_offer`].
pub fn installment_amount(product: &Product) -> Money {
    effective_unit_price(product).split(product.installment_count)
}

/// Installment amount, only when the product offers installments.
pub fn installment_offer(product: &Product) -> Option<Money> {
    product
        .allow_installments
        .then(|| installment_amount(product))
}

/// Sum of the price deltas of every selected option.
pub fn customization_total(selection: &Selection, currency: Currency) -> Result<Money, CommerceError> {
    selection
        .selected_options()
        .try_fold(Money::zero(currency), |acc, option| {
            if option.price_delta.currency != currency {
                return Err(CommerceError::mismatch(currency, option.price_delta.currency));
            }
            acc.try_add(&option.price_delta).ok_or(CommerceError::Overflow)
        })
}

/// (effective unit price + customization total) x quantity.
pub fn final_price(product: &Product, selection: &Selection) -> Result<Money, CommerceError> {
    let unit = effective_unit_price(product)
        .try_add(&customization_total(selection, product.currency())?)
        .ok_or(CommerceError::Overflow)?;
    unit.checked_multiply(i64::from(selection.quantity().get()))
        .ok_or(CommerceError::Overflow)
}

/// Whether the product can go to the cart with this selection.
///
/// Sizes and flavors must be chosen when offered; decorations and extras
/// never are required.
pub fn can_checkout(product: &Product, groups: &CustomizationGroups, selection: &Selection) -> bool {
    product.available
        && (groups.sizes.is_empty() || selection.size().is_some())
        && (groups.flavors.is_empty() || selection.flavor().is_some())
}

/// Installment terms shown next to the price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct InstallmentPlan {
    pub count: u32,
    pub amount: Money,
}

/// Every figure a product page displays, computed in one pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceBreakdown {
    /// Price before discount, when discounted.
    pub original_price: Option<Money>,
    /// Discount in whole percent (0 when none applies).
    pub discount_percent: u32,
    /// Unit price after discount.
    pub unit_price: Money,
    /// Savings per unit.
    pub savings: Money,
    /// Add-on total per unit.
    pub customization_total: Money,
    /// Unit price with add-ons.
    pub unit_total: Money,
    pub quantity: u32,
    /// unit_total x quantity.
    pub final_price: Money,
    /// Present only when the product offers installments.
    pub installments: Option<InstallmentPlan>,
}

impl PriceBreakdown {
    pub fn has_discount(&self) -> bool {
        self.savings.is_positive()
    }
}

/// Compute a [`PriceBreakdown`] for a product and selection.
pub fn price_breakdown(product: &Product, selection: &Selection) -> Result<PriceBreakdown, CommerceError> {
    let unit_price = effective_unit_price(product);
    let customization = customization_total(selection, product.currency())?;
    let unit_total = unit_price
        .try_add(&customization)
        .ok_or(CommerceError::Overflow)?;
    let quantity = selection.quantity().get();

    Ok(PriceBreakdown {
        original_price: product.is_discounted().then_some(product.original_price).flatten(),
        discount_percent: if product.is_discounted() {
            product.discount_percent
        } else {
            0
        },
        unit_price,
        savings: savings(product),
        customization_total: customization,
        unit_total,
        quantity,
        final_price: final_price(product, selection)?,
        installments: installment_offer(product).map(|amount| InstallmentPlan {
            count: product.installment_count,
            amount,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductCategory;
    use crate::customization::CustomizationOption;
    use crate::ids::OptionId;

    fn brl(units: i64) -> Money {
        Money::from_units(units, Currency::BRL)
    }

    fn plain(price: Money) -> Product {
        Product::new("bolo", "Bolo", ProductCategory::Cake, price)
    }

    #[test]
    fn test_no_discount_uses_base_price() {
        let product = plain(brl(75));
        assert_eq!(effective_unit_price(&product), brl(75));
        assert!(savings(&product).is_zero());
    }

    #[test]
    fn test_discount_applies_to_original_price() {
        let product = plain(brl(80)).with_discount(brl(100), 20).unwrap();
        assert_eq!(effective_unit_price(&product), brl(80));
        assert_eq!(savings(&product), brl(20));
    }

    #[test]
    fn test_discount_without_original_falls_back_to_base() {
        let mut product = plain(brl(50));
        product.discount_percent = 40;
        assert_eq!(effective_unit_price(&product), brl(50));
        assert!(savings(&product).is_zero());
    }

    #[test]
    fn test_savings_match_percentage_within_a_cent() {
        // 33,33 at 15% off
        let original = Money::new(3333, Currency::BRL);
        let product = plain(original).with_discount(original, 15).unwrap();
        let expected = original.percentage(15);
        assert!((savings(&product).amount_cents - expected.amount_cents).abs() <= 1);
        assert_eq!(
            savings(&product).amount_cents + effective_unit_price(&product).amount_cents,
            original.amount_cents
        );
    }

    #[test]
    fn test_full_discount_is_free() {
        let product = plain(brl(0)).with_discount(brl(30), 100).unwrap();
        assert!(effective_unit_price(&product).is_zero());
        assert_eq!(savings(&product), brl(30));
    }

    #[test]
    fn test_installments_cover_unit_price() {
        let product = plain(Money::new(9999, Currency::BRL));
        let installment = installment_amount(&product);
        assert_eq!(installment.amount_cents, 833);
        assert_eq!(9999 - installment.amount_cents * 12, 3);
        assert!(installment_offer(&product).is_none());

        let product = product.with_installments(12).unwrap();
        assert_eq!(installment_offer(&product), Some(installment));
    }

    #[test]
    fn test_installment_rounding_stays_within_half_a_cent_each() {
        for count in [1, 2, 3, 6, 10, 12] {
            for cents in (0..2_000).chain([9_999, 12_345, 99_994, 99_999]) {
                let product = plain(Money::new(cents, Currency::BRL))
                    .with_installments(count)
                    .unwrap();
                let total = installment_amount(&product).amount_cents * i64::from(count);
                let bound = i64::from(count / 2);
                assert!(
                    (total - cents).abs() <= bound,
                    "{cents} in {count}x: off by {}",
                    total - cents
                );
            }
        }
    }

    #[test]
    fn test_even_split_is_exact() {
        let product = plain(brl(90)).with_installments(12).unwrap();
        assert_eq!(installment_amount(&product).amount_cents * 12, 9000);
    }

    #[test]
    fn test_empty_selection_has_no_customization_cost() {
        let total = customization_total(&Selection::new(), Currency::BRL).unwrap();
        assert!(total.is_zero());
    }

    #[test]
    fn test_customization_currency_mismatch() {
        let groups = CustomizationGroups {
            extras: vec![CustomizationOption::new(
                "calda",
                "Calda",
                Money::from_units(2, Currency::USD),
            )],
            ..CustomizationGroups::default()
        };
        let mut selection = Selection::new();
        selection.toggle_extra(&groups, &OptionId::new("calda")).unwrap();

        let result = customization_total(&selection, Currency::BRL);
        assert!(matches!(result, Err(CommerceError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_final_price_is_linear_in_quantity() {
        let groups = CustomizationGroups::for_category(ProductCategory::Cake, Currency::BRL);
        let product = plain(brl(60)).with_discount(brl(70), 10).unwrap();
        let mut selection = Selection::new();
        selection.select_size(&groups, &OptionId::new("m")).unwrap();
        selection.toggle_extra(&groups, &OptionId::new("calda")).unwrap();

        let one = final_price(&product, &selection).unwrap();
        selection.set_quantity(2);
        let two = final_price(&product, &selection).unwrap();
        assert_eq!(two, one.multiply(2));
    }

    #[test]
    fn test_can_checkout_requires_size_and_flavor() {
        let groups = CustomizationGroups::for_category(ProductCategory::Cake, Currency::BRL);
        let product = plain(brl(60));
        let mut selection = Selection::new();
        assert!(!can_checkout(&product, &groups, &selection));

        selection.select_size(&groups, &OptionId::new("p")).unwrap();
        assert!(!can_checkout(&product, &groups, &selection));

        selection.select_flavor(&groups, &OptionId::new("chocolate")).unwrap();
        assert!(can_checkout(&product, &groups, &selection));

        let unavailable = product.with_availability(false);
        assert!(!can_checkout(&unavailable, &groups, &selection));
    }

    #[test]
    fn test_can_checkout_without_groups() {
        let product = plain(brl(12));
        assert!(can_checkout(&product, &CustomizationGroups::default(), &Selection::new()));
    }

    #[test]
    fn test_breakdown_hides_inactive_discount() {
        let mut product = plain(brl(50));
        product.original_price = Some(brl(60));
        let breakdown = price_breakdown(&product, &Selection::new()).unwrap();
        assert_eq!(breakdown.original_price, None);
        assert_eq!(breakdown.discount_percent, 0);
        assert!(!breakdown.has_discount());
        assert!(breakdown.installments.is_none());
    }
}
