//! Customization options and groups.

use crate::catalog::ProductCategory;
use crate::ids::OptionId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::fmt;

fn default_true() -> bool {
    true
}

/// The customization group an option belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    Size,
    Flavor,
    Decoration,
    Extras,
}

impl GroupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKind::Size => "size",
            GroupKind::Flavor => "flavor",
            GroupKind::Decoration => "decoration",
            GroupKind::Extras => "extras",
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selectable customization (e.g., Size: 20cm, +R$ 15,00).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CustomizationOption {
    /// Identifier, unique within its group.
    pub id: OptionId,
    /// Display name.
    pub name: String,
    /// Amount added to the unit price when selected. May be zero.
    pub price_delta: Money,
    /// Unavailable options cannot be selected.
    #[serde(default = "default_true")]
    pub available: bool,
}

impl CustomizationOption {
    pub fn new(id: impl Into<OptionId>, name: impl Into<String>, price_delta: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price_delta,
            available: true,
        }
    }

    /// Mark this option as out of stock.
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }
}

/// Look up an option by id within one group.
pub fn find_option<'g>(group: &'g [CustomizationOption], id: &OptionId) -> Option<&'g CustomizationOption> {
    group.iter().find(|o| &o.id == id)
}

/// The four option groups offered for a product.
///
/// `sizes` and `flavors` need exactly one selection when non-empty,
/// `decorations` allows zero or one and `extras` any subset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CustomizationGroups {
    #[serde(default)]
    pub sizes: Vec<CustomizationOption>,
    #[serde(default)]
    pub flavors: Vec<CustomizationOption>,
    #[serde(default)]
    pub decorations: Vec<CustomizationOption>,
    #[serde(default)]
    pub extras: Vec<CustomizationOption>,
}

impl CustomizationGroups {
    /// Options of one group.
    pub fn group(&self, kind: GroupKind) -> &[CustomizationOption] {
        match kind {
            GroupKind::Size => &self.sizes,
            GroupKind::Flavor => &self.flavors,
            GroupKind::Decoration => &self.decorations,
            GroupKind::Extras => &self.extras,
        }
    }

    /// Default groups offered for a category.
    ///
    /// Cakes get all four groups. Sweets and kits are sold by box size;
    /// pies, breads and everything else by portion size.
    pub fn for_category(category: ProductCategory, currency: Currency) -> Self {
        let opt = |id: &str, name: &str, units: i64| {
            CustomizationOption::new(id, name, Money::from_units(units, currency))
        };

        match category {
            ProductCategory::Cake => Self {
                sizes: vec![
                    opt("p", "P - 15cm (10 fatias)", 0),
                    opt("m", "M - 20cm (20 fatias)", 15),
                    opt("g", "G - 25cm (30 fatias)", 30),
                ],
                flavors: vec![
                    opt("chocolate", "Chocolate", 0),
                    opt("baunilha", "Baunilha", 0),
                    opt("red-velvet", "Red Velvet", 5),
                    opt("limao-siciliano", "Limão Siciliano", 5),
                ],
                decorations: vec![
                    opt("simples", "Simples", 0),
                    opt("flores", "Flores Naturais", 20),
                    opt("topo", "Topo Personalizado", 25),
                ],
                extras: vec![
                    opt("morangos", "Morangos Frescos", 10),
                    opt("calda", "Calda Extra", 8),
                    opt("frutas-vermelhas", "Frutas Vermelhas", 12),
                    opt("vela", "Vela de Aniversário", 3),
                ],
            },
            ProductCategory::Sweet | ProductCategory::Kit => Self {
                sizes: vec![
                    opt("6un", "6 unidades", 0),
                    opt("12un", "12 unidades", 18),
                    opt("25un", "25 unidades", 40),
                ],
                ..Self::default()
            },
            ProductCategory::Pie | ProductCategory::Bread | ProductCategory::Other => Self {
                sizes: vec![
                    opt("individual", "Individual", 0),
                    opt("media", "Média", 15),
                    opt("grande", "Grande", 30),
                ],
                ..Self::default()
            },
        }
    }

    /// Check whether every option is priced in `currency`.
    pub fn is_priced_in(&self, currency: Currency) -> bool {
        [&self.sizes, &self.flavors, &self.decorations, &self.extras]
            .iter()
            .flat_map(|g| g.iter())
            .all(|o| o.price_delta.currency == currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cake_groups_are_complete() {
        let groups = CustomizationGroups::for_category(ProductCategory::Cake, Currency::BRL);
        assert!(!groups.sizes.is_empty());
        assert!(!groups.flavors.is_empty());
        assert!(!groups.decorations.is_empty());
        assert!(!groups.extras.is_empty());
        assert!(groups.is_priced_in(Currency::BRL));
    }

    #[test]
    fn test_other_categories_only_have_sizes() {
        for category in [ProductCategory::Sweet, ProductCategory::Pie, ProductCategory::Kit] {
            let groups = CustomizationGroups::for_category(category, Currency::BRL);
            assert!(!groups.sizes.is_empty());
            assert!(groups.flavors.is_empty());
            assert!(groups.decorations.is_empty());
            assert!(groups.extras.is_empty());
        }
    }

    #[test]
    fn test_find_option() {
        let groups = CustomizationGroups::for_category(ProductCategory::Cake, Currency::BRL);
        let medium = find_option(groups.group(GroupKind::Size), &OptionId::new("m")).unwrap();
        assert_eq!(medium.price_delta.amount_cents, 1500);
        assert!(find_option(groups.group(GroupKind::Size), &OptionId::new("xl")).is_none());
    }

    #[test]
    fn test_option_availability_defaults_to_true() {
        let json = r#"{"id": "calda", "name": "Calda", "price_delta": {"amount_cents": 800, "currency": "BRL"}}"#;
        let option: CustomizationOption = serde_json::from_str(json).unwrap();
        assert!(option.available);
    }
}
