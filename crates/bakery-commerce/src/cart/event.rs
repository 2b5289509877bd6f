//! Events emitted by a product detail view.

use crate::catalog::Product;
use crate::customization::{CustomizationGroups, CustomizationOption, GroupKind, Selection};
use crate::error::CommerceError;
use crate::ids::{OptionId, ProductId};
use crate::money::Money;
use crate::pricing::{can_checkout, customization_total, effective_unit_price, final_price};
use serde::{Deserialize, Serialize};

/// An option as it was chosen when the item went into the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SelectedOption {
    pub group: GroupKind,
    pub id: OptionId,
    pub name: String,
    pub price_delta: Money,
}

impl SelectedOption {
    fn from_option(group: GroupKind, option: &CustomizationOption) -> Self {
        Self {
            group,
            id: option.id.clone(),
            name: option.name.clone(),
            price_delta: option.price_delta,
        }
    }
}

/// Request to add a customized product to the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartInsertion {
    pub product_id: ProductId,
    pub product_name: String,
    pub options: Vec<SelectedOption>,
    pub quantity: u32,
    /// Effective unit price plus add-ons.
    pub unit_price: Money,
    /// unit_price x quantity.
    pub final_price: Money,
}

impl CartInsertion {
    /// Build the insertion for the current selection.
    ///
    /// Fails with `CheckoutIncomplete` when the product is unavailable or a
    /// required size/flavor is missing.
    pub fn from_selection(
        product: &Product,
        groups: &CustomizationGroups,
        selection: &Selection,
    ) -> Result<Self, CommerceError> {
        if !product.available {
            return Err(CommerceError::CheckoutIncomplete(format!(
                "{} is unavailable",
                product.name
            )));
        }
        if !can_checkout(product, groups, selection) {
            let missing = if !groups.sizes.is_empty() && selection.size().is_none() {
                GroupKind::Size
            } else {
                GroupKind::Flavor
            };
            return Err(CommerceError::CheckoutIncomplete(format!(
                "missing {missing}"
            )));
        }

        let mut options = Vec::new();
        let singles = [
            (GroupKind::Size, selection.size()),
            (GroupKind::Flavor, selection.flavor()),
            (GroupKind::Decoration, selection.decoration()),
        ];
        for (group, option) in singles {
            if let Some(option) = option {
                options.push(SelectedOption::from_option(group, option));
            }
        }
        options.extend(
            selection
                .extras()
                .iter()
                .map(|o| SelectedOption::from_option(GroupKind::Extras, o)),
        );

        let unit_price = effective_unit_price(product)
            .try_add(&customization_total(selection, product.currency())?)
            .ok_or(CommerceError::Overflow)?;

        Ok(Self {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            options,
            quantity: selection.quantity().get(),
            unit_price,
            final_price: final_price(product, selection)?,
        })
    }
}

/// Request to add or remove a product from the wishlist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WishlistToggle {
    pub product_id: ProductId,
}

/// Anything a product view hands to its surroundings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProductEvent {
    AddToCart(CartInsertion),
    ToggleWishlist(WishlistToggle),
}
