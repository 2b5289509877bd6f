//! Commerce error types.

use crate::customization::SelectionRejected;
use thiserror::Error;

/// Errors that can occur in pricing and cart operations.
#[derive(Error, Debug, PartialEq)]
pub enum CommerceError {
    /// Prices from different currencies were combined.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Discount percentage outside 0-100.
    #[error("Invalid discount percent: {0} (must be 0-100)")]
    InvalidDiscountPercent(u32),

    /// Installment count must be positive.
    #[error("Invalid installment count: {0}")]
    InvalidInstallmentCount(u32),

    /// Price could not be parsed or is negative.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Category name not recognized.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// A required customization is missing or the product is unavailable.
    #[error("Checkout incomplete: {0}")]
    CheckoutIncomplete(String),

    /// Line item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// A selection action was rejected.
    #[error("Selection rejected: {0}")]
    SelectionRejected(#[from] SelectionRejected),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CommerceError {
    pub(crate) fn mismatch(
        expected: crate::money::Currency,
        got: crate::money::Currency,
    ) -> Self {
        CommerceError::CurrencyMismatch {
            expected: expected.code().to_string(),
            got: got.code().to_string(),
        }
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
