//! Pricing tunables.

use crate::catalog::DEFAULT_INSTALLMENT_COUNT;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Flat discount applied to "buy together" bundles.
pub const DEFAULT_BUNDLE_DISCOUNT_PERCENT: u32 = 10;

fn default_installment_count() -> u32 {
    DEFAULT_INSTALLMENT_COUNT
}

fn default_bundle_discount_percent() -> u32 {
    DEFAULT_BUNDLE_DISCOUNT_PERCENT
}

/// Storefront-wide pricing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Installments offered for newly created products.
    #[serde(default = "default_installment_count")]
    pub installment_count: u32,

    /// Discount off the combined price of a bundle, in whole percent.
    #[serde(default = "default_bundle_discount_percent")]
    pub bundle_discount_percent: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            installment_count: DEFAULT_INSTALLMENT_COUNT,
            bundle_discount_percent: DEFAULT_BUNDLE_DISCOUNT_PERCENT,
        }
    }
}

impl PricingConfig {
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.installment_count == 0 {
            return Err(CommerceError::InvalidInstallmentCount(0));
        }
        if self.bundle_discount_percent > 100 {
            return Err(CommerceError::InvalidDiscountPercent(
                self.bundle_discount_percent,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PricingConfig::default();
        assert_eq!(config.installment_count, 12);
        assert_eq!(config.bundle_discount_percent, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let config: PricingConfig = serde_json::from_str(r#"{"bundle_discount_percent": 15}"#).unwrap();
        assert_eq!(config.bundle_discount_percent, 15);
        assert_eq!(config.installment_count, 12);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let config = PricingConfig {
            bundle_discount_percent: 120,
            ..PricingConfig::default()
        };
        assert_eq!(config.validate(), Err(CommerceError::InvalidDiscountPercent(120)));

        let config = PricingConfig {
            installment_count: 0,
            ..PricingConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
