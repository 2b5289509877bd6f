//! CLI configuration.

use std::path::Path;

use anyhow::{bail, Context, Result};
use bakery_commerce::pricing::PricingConfig;
use bakery_commerce::Currency;
use bakery_store::DEFAULT_RECENT_LIMIT;
use serde::{Deserialize, Serialize};

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["bakery.toml", ".bakery.toml", "bakery.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BakeryConfig {
    /// Pricing parameters.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Where shopper lists are kept.
    #[serde(default)]
    pub store: StoreConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl BakeryConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Currency prices are read and shown in.
    pub fn currency(&self) -> Result<Currency> {
        match Currency::from_code(&self.display.currency) {
            Some(currency) => Ok(currency),
            None => bail!("Unknown currency code: {}", self.display.currency),
        }
    }

    /// Collect every problem with the config.
    pub fn problems(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if let Err(e) = self.pricing.validate() {
            errors.push(format!("pricing: {}", e));
        }
        if Currency::from_code(&self.display.currency).is_none() {
            errors.push(format!("display.currency '{}' is not supported", self.display.currency));
        }
        if self.store.data_dir.trim().is_empty() {
            errors.push("store.data_dir is required".to_string());
        }
        if self.store.recent_limit == 0 {
            errors.push("store.recent_limit must be at least 1".to_string());
        }

        errors
    }
}

pub fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "json")
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Directory holding the wishlist and recently viewed lists,
    /// relative to the working directory.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// How many recently viewed products to remember.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_data_dir() -> String {
    ".bakery".to_string()
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            recent_limit: default_recent_limit(),
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// ISO currency code (default: BRL).
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

/// Generate a default bakery.toml config file.
pub fn generate_default_config(generated_at: &str) -> String {
    format!(
        r#"# Bakery storefront configuration
# Generated {generated_at}

[pricing]
# Installments offered when a product doesn't set its own count
installment_count = 12
# Flat discount on "buy together" bundles, in percent
bundle_discount_percent = 10

[store]
data_dir = ".bakery"
recent_limit = 8

[display]
currency = "BRL"
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: BakeryConfig = toml::from_str(&generate_default_config("now")).unwrap();
        assert_eq!(config, BakeryConfig::default());
        assert!(config.problems().is_empty());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: BakeryConfig = toml::from_str("[pricing]\nbundle_discount_percent = 15\n").unwrap();
        assert_eq!(config.pricing.bundle_discount_percent, 15);
        assert_eq!(config.pricing.installment_count, 12);
        assert_eq!(config.currency().unwrap(), Currency::BRL);
    }

    #[test]
    fn test_problems_reported() {
        let mut config = BakeryConfig::default();
        config.pricing.bundle_discount_percent = 150;
        config.display.currency = "XYZ".to_string();
        config.store.recent_limit = 0;
        assert_eq!(config.problems().len(), 3);
        assert!(config.currency().is_err());
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bakery.json");
        std::fs::write(&path, r#"{ "display": { "currency": "USD" } }"#).unwrap();

        let config = BakeryConfig::load(&path).unwrap();
        assert_eq!(config.currency().unwrap(), Currency::USD);
        assert_eq!(config.store, StoreConfig::default());
    }

    #[test]
    fn test_load_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bakery.toml");
        std::fs::write(&path, "[pricing\n").unwrap();

        let err = BakeryConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML config"));
    }
}
