//! Product catalog module.
//!
//! Contains the product snapshot the pricing engine reads and the
//! category used to derive customization groups.

mod category;
mod product;

pub use category::ProductCategory;
pub use product::{Product, DEFAULT_INSTALLMENT_COUNT};
