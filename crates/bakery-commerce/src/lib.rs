//! Bakery storefront domain types and pricing logic.
//!
//! - **Catalog**: product snapshots and categories
//! - **Customization**: size / flavor / decoration / extras groups and the
//!   selection state of a product view
//! - **Pricing**: discounted unit price, savings, installments, final price
//!   and bundle totals
//! - **Cart**: cart-insertion and wishlist events, and the cart itself
//! - **Forms**: field-rule validation for review and contact forms
//!
//! # Example
//!
//! ```rust
//! use bakery_commerce::prelude::*;
//!
//! let product = Product::new(
//!     "bolo-cenoura",
//!     "Bolo de Cenoura",
//!     ProductCategory::Cake,
//!     Money::from_units(120, Currency::BRL),
//! )
//! .with_discount(Money::from_units(120, Currency::BRL), 25)
//! .unwrap();
//! let groups = CustomizationGroups::for_category(product.category, product.currency());
//!
//! let mut selection = Selection::new();
//! selection.select_size(&groups, &OptionId::new("m")).unwrap();
//! selection.select_flavor(&groups, &OptionId::new("chocolate")).unwrap();
//!
//! let total = final_price(&product, &selection).unwrap();
//! assert_eq!(total.display(), "R$ 105,00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod customization;
pub mod forms;
pub mod pricing;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Product, ProductCategory, DEFAULT_INSTALLMENT_COUNT};

    // Customization
    pub use crate::customization::{
        CustomizationGroups, CustomizationOption, GroupKind, Quantity, Selection,
        SelectionRejected, MAX_QUANTITY, MIN_QUANTITY,
    };

    // Pricing
    pub use crate::pricing::{
        bundle_totals, can_checkout, customization_total, effective_unit_price, final_price,
        installment_amount, installment_offer, price_breakdown, savings, BundleSelection,
        BundleTotals, PriceBreakdown, PricingConfig,
    };

    // Cart
    pub use crate::cart::{Cart, CartInsertion, LineItem, ProductEvent, WishlistToggle};
}
