//! Quote and bundle file formats.
//!
//! Prices are written as decimal strings (`"120.00"`, `"7,50"`) or whole
//! units (`120`), never as floats.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use bakery_commerce::catalog::{Product, ProductCategory};
use bakery_commerce::customization::{CustomizationGroups, CustomizationOption, Selection};
use bakery_commerce::pricing::PricingConfig;
use bakery_commerce::{CommerceError, Currency, Money, OptionId};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::is_json;

/// Read a TOML or JSON file, picking the format from the extension.
pub fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if is_json(path) {
        serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON: {}", path.display()))
    } else {
        toml::from_str(&content).with_context(|| format!("Failed to parse TOML: {}", path.display()))
    }
}

/// A price as written in a file.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Units(i64),
    Text(String),
}

impl Default for PriceValue {
    fn default() -> Self {
        PriceValue::Units(0)
    }
}

impl PriceValue {
    pub fn to_money(&self, currency: Currency) -> Result<Money, CommerceError> {
        match self {
            PriceValue::Units(units) => {
                Money::checked_from_units(*units, currency).ok_or(CommerceError::Overflow)
            }
            PriceValue::Text(text) => Money::parse(text, currency),
        }
    }
}

fn default_true() -> bool {
    true
}

/// `[product]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Missing prices read as zero.
    #[serde(default)]
    pub price: PriceValue,
    #[serde(default)]
    pub original_price: Option<PriceValue>,
    #[serde(default)]
    pub discount_percent: u32,
    #[serde(default)]
    pub allow_installments: bool,
    /// Falls back to the configured installment count.
    #[serde(default)]
    pub installment_count: Option<u32>,
    #[serde(default = "default_true")]
    pub available: bool,
    /// ISO code; falls back to the configured currency.
    #[serde(default)]
    pub currency: Option<String>,
}

impl ProductDef {
    pub fn currency(&self, fallback: Currency) -> Result<Currency> {
        match &self.currency {
            Some(code) => Currency::from_code(code).ok_or_else(|| anyhow!("Unknown currency code: {}", code)),
            None => Ok(fallback),
        }
    }

    pub fn category(&self) -> Result<ProductCategory> {
        match &self.category {
            Some(name) => name
                .parse::<ProductCategory>()
                .with_context(|| format!("Bad category for {}", self.id)),
            None => Ok(ProductCategory::default()),
        }
    }

    /// Build a validated product snapshot.
    pub fn to_product(&self, fallback: Currency, pricing: &PricingConfig) -> Result<Product> {
        let currency = self.currency(fallback)?;
        let base_price = self
            .price
            .to_money(currency)
            .with_context(|| format!("Bad price for {}", self.id))?;

        let mut product = Product::new(self.id.as_str(), self.name.as_str(), self.category()?, base_price)
            .with_availability(self.available);

        if let Some(original) = &self.original_price {
            let original = original
                .to_money(currency)
                .with_context(|| format!("Bad original_price for {}", self.id))?;
            product = product.with_discount(original, self.discount_percent)?;
        } else if self.discount_percent > 0 {
            return Err(anyhow!(
                "{} has discount_percent but no original_price",
                self.id
            ));
        }

        let count = self.installment_count.unwrap_or(pricing.installment_count);
        product = if self.allow_installments {
            product.with_installments(count)?
        } else {
            product.installment_count = count;
            product
        };

        product.validate()?;
        Ok(product)
    }
}

/// One option of a `[groups]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: PriceValue,
    #[serde(default = "default_true")]
    pub available: bool,
}

/// `[groups]` section. Omitted groups are empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupsDef {
    #[serde(default)]
    pub sizes: Vec<OptionDef>,
    #[serde(default)]
    pub flavors: Vec<OptionDef>,
    #[serde(default)]
    pub decorations: Vec<OptionDef>,
    #[serde(default)]
    pub extras: Vec<OptionDef>,
}

impl GroupsDef {
    pub fn to_groups(&self, currency: Currency) -> Result<CustomizationGroups> {
        let convert = |defs: &[OptionDef]| -> Result<Vec<CustomizationOption>> {
            defs.iter()
                .map(|def| {
                    let delta = def
                        .price
                        .to_money(currency)
                        .with_context(|| format!("Bad price for option {}", def.id))?;
                    let option = CustomizationOption::new(def.id.as_str(), def.name.as_str(), delta);
                    Ok(if def.available { option } else { option.unavailable() })
                })
                .collect()
        };

        Ok(CustomizationGroups {
            sizes: convert(&self.sizes)?,
            flavors: convert(&self.flavors)?,
            decorations: convert(&self.decorations)?,
            extras: convert(&self.extras)?,
        })
    }
}

/// `[selection]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionDef {
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub flavor: Option<String>,
    #[serde(default)]
    pub decoration: Option<String>,
    #[serde(default)]
    pub extras: Vec<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
}

impl SelectionDef {
    /// Replay the choices as shopper actions.
    ///
    /// Rejected actions leave the selection as it was; their reasons are
    /// returned so the caller can report them.
    pub fn apply(&self, groups: &CustomizationGroups) -> (Selection, Vec<String>) {
        let mut selection = Selection::new();
        let mut rejected = Vec::new();

        if let Some(id) = &self.size {
            if let Err(e) = selection.select_size(groups, &OptionId::new(id.as_str())) {
                rejected.push(e.to_string());
            }
        }
        if let Some(id) = &self.flavor {
            if let Err(e) = selection.select_flavor(groups, &OptionId::new(id.as_str())) {
                rejected.push(e.to_string());
            }
        }
        if let Some(id) = &self.decoration {
            if let Err(e) = selection.toggle_decoration(groups, &OptionId::new(id.as_str())) {
                rejected.push(e.to_string());
            }
        }
        for id in &self.extras {
            if selection.extras().iter().any(|o| o.id.as_str() == id) {
                continue;
            }
            if let Err(e) = selection.toggle_extra(groups, &OptionId::new(id.as_str())) {
                rejected.push(e.to_string());
            }
        }
        if let Some(requested) = self.quantity {
            let applied = selection.set_quantity(requested);
            if applied.get() != requested {
                rejected.push(format!("quantity {} clamped to {}", requested, applied.get()));
            }
        }

        (selection, rejected)
    }
}

/// A file for `bakery quote`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteFile {
    pub product: ProductDef,
    /// Derived from the product category when absent.
    #[serde(default)]
    pub groups: Option<GroupsDef>,
    #[serde(default)]
    pub selection: SelectionDef,
}

impl QuoteFile {
    pub fn groups(&self, product: &Product) -> Result<CustomizationGroups> {
        match &self.groups {
            Some(groups) => groups.to_groups(product.currency()),
            None => Ok(CustomizationGroups::for_category(product.category, product.currency())),
        }
    }
}

/// A secondary product of a bundle file.
#[derive(Debug, Clone, Deserialize)]
pub struct BundleItemDef {
    #[serde(flatten)]
    pub product: ProductDef,
    #[serde(default = "default_true")]
    pub selected: bool,
}

/// A file for `bakery bundle`.
#[derive(Debug, Clone, Deserialize)]
pub struct BundleFile {
    pub primary: ProductDef,
    #[serde(default)]
    pub items: Vec<BundleItemDef>,
}
