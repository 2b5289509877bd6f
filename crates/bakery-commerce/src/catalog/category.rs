//! Product categories.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog category of a product.
///
/// Cakes are the only category sold with the full size / flavor /
/// decoration / extras customization; everything else is sold by unit or
/// kit size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    #[default]
    Cake,
    Pie,
    Sweet,
    Bread,
    Kit,
    Other,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Cake => "cake",
            ProductCategory::Pie => "pie",
            ProductCategory::Sweet => "sweet",
            ProductCategory::Bread => "bread",
            ProductCategory::Kit => "kit",
            ProductCategory::Other => "other",
        }
    }

    /// Whether products in this category offer flavor, decoration and
    /// extras groups in addition to sizes.
    pub fn has_full_customization(&self) -> bool {
        matches!(self, ProductCategory::Cake)
    }
}

/// Parses a category name, accepting the storefront's Portuguese labels.
impl FromStr for ProductCategory {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cake" | "bolo" | "bolos" => Ok(ProductCategory::Cake),
            "pie" | "torta" | "tortas" => Ok(ProductCategory::Pie),
            "sweet" | "doce" | "doces" => Ok(ProductCategory::Sweet),
            "bread" | "pao" | "pão" | "paes" | "pães" => Ok(ProductCategory::Bread),
            "kit" | "kits" => Ok(ProductCategory::Kit),
            "other" | "outro" | "outros" => Ok(ProductCategory::Other),
            _ => Err(CommerceError::UnknownCategory(s.to_string())),
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!("Bolos".parse::<ProductCategory>(), Ok(ProductCategory::Cake));
        assert_eq!("pie".parse::<ProductCategory>(), Ok(ProductCategory::Pie));
        assert_eq!(" pão ".parse::<ProductCategory>(), Ok(ProductCategory::Bread));
        assert_eq!(
            "unknown".parse::<ProductCategory>(),
            Err(CommerceError::UnknownCategory("unknown".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for category in [
            ProductCategory::Cake,
            ProductCategory::Pie,
            ProductCategory::Sweet,
            ProductCategory::Bread,
            ProductCategory::Kit,
            ProductCategory::Other,
        ] {
            assert_eq!(category.to_string().parse::<ProductCategory>(), Ok(category));
        }
    }

    #[test]
    fn test_only_cakes_have_full_customization() {
        assert!(ProductCategory::Cake.has_full_customization());
        assert!(!ProductCategory::Sweet.has_full_customization());
        assert!(!ProductCategory::Kit.has_full_customization());
    }
}
