//! Selection state for a product detail view.
//!
//! Every action either succeeds or returns [`SelectionRejected`] and leaves
//! the state exactly as it was. Rejections are soft: callers may show a
//! hint, nothing else needs to happen.

use crate::customization::{find_option, CustomizationGroups, CustomizationOption, GroupKind};
use crate::ids::OptionId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest quantity that can be ordered.
pub const MIN_QUANTITY: u32 = 1;

/// Largest quantity that can be ordered from a detail view.
pub const MAX_QUANTITY: u32 = 10;

/// A selection action that was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionRejected {
    /// No option with this id exists in the group.
    #[error("no {group} option with id {id}")]
    UnknownOption { group: GroupKind, id: OptionId },

    /// The option exists but is out of stock.
    #[error("{group} option {id} is unavailable")]
    Unavailable { group: GroupKind, id: OptionId },

    /// A quantity step would leave the allowed range.
    #[error("quantity {requested} outside 1..=10")]
    QuantityOutOfRange { requested: u32 },
}

/// Order quantity, always within `MIN_QUANTITY..=MAX_QUANTITY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// Create a quantity, clamping into the allowed range.
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_QUANTITY, MAX_QUANTITY))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Step up by one. Rejected at the maximum.
    pub fn increment(&mut self) -> Result<Self, SelectionRejected> {
        if self.0 >= MAX_QUANTITY {
            return Err(SelectionRejected::QuantityOutOfRange {
                requested: self.0 + 1,
            });
        }
        self.0 += 1;
        Ok(*self)
    }

    /// Step down by one. Rejected at the minimum.
    pub fn decrement(&mut self) -> Result<Self, SelectionRejected> {
        if self.0 <= MIN_QUANTITY {
            return Err(SelectionRejected::QuantityOutOfRange {
                requested: self.0 - 1,
            });
        }
        self.0 -= 1;
        Ok(*self)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(MIN_QUANTITY)
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(q: Quantity) -> Self {
        q.0
    }
}

fn lookup<'g>(
    group: &'g [CustomizationOption],
    kind: GroupKind,
    id: &OptionId,
) -> Result<&'g CustomizationOption, SelectionRejected> {
    let option = find_option(group, id).ok_or_else(|| SelectionRejected::UnknownOption {
        group: kind,
        id: id.clone(),
    })?;

    if !option.available {
        return Err(SelectionRejected::Unavailable {
            group: kind,
            id: id.clone(),
        });
    }

    Ok(option)
}

fn log_rejection(rejection: &SelectionRejected) {
    tracing::debug!(reason = %rejection, "selection rejected");
}

/// Select `id` in a single-choice group (size, flavor).
///
/// Selecting the already selected option is a no-op.
pub fn select_single<'g>(
    group: &'g [CustomizationOption],
    kind: GroupKind,
    slot: &mut Option<CustomizationOption>,
    id: &OptionId,
) -> Result<&'g CustomizationOption, SelectionRejected> {
    let option = lookup(group, kind, id).inspect_err(log_rejection)?;
    *slot = Some(option.clone());
    Ok(option)
}

/// Toggle `id` in an optional single-choice group (decoration).
///
/// Returns `None` when the call cleared the current selection.
pub fn toggle_single<'g>(
    group: &'g [CustomizationOption],
    kind: GroupKind,
    slot: &mut Option<CustomizationOption>,
    id: &OptionId,
) -> Result<Option<&'g CustomizationOption>, SelectionRejected> {
    if slot.as_ref().is_some_and(|current| &current.id == id) {
        *slot = None;
        return Ok(None);
    }
    select_single(group, kind, slot, id).map(Some)
}

/// Toggle membership of `id` in a multi-choice group (extras).
///
/// Returns whether the option is in the set afterwards. Removing an option
/// always succeeds; adding requires it to exist and be available.
pub fn toggle_member(
    group: &[CustomizationOption],
    kind: GroupKind,
    set: &mut Vec<CustomizationOption>,
    id: &OptionId,
) -> Result<bool, SelectionRejected> {
    if let Some(pos) = set.iter().position(|o| &o.id == id) {
        set.remove(pos);
        return Ok(false);
    }
    let option = lookup(group, kind, id).inspect_err(log_rejection)?;
    set.push(option.clone());
    Ok(true)
}

/// Customization choices and quantity for one product view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Selection {
    size: Option<CustomizationOption>,
    flavor: Option<CustomizationOption>,
    decoration: Option<CustomizationOption>,
    extras: Vec<CustomizationOption>,
    quantity: Quantity,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_size<'g>(
        &mut self,
        groups: &'g CustomizationGroups,
        id: &OptionId,
    ) -> Result<&'g CustomizationOption, SelectionRejected> {
        select_single(&groups.sizes, GroupKind::Size, &mut self.size, id)
    }

    pub fn select_flavor<'g>(
        &mut self,
        groups: &'g CustomizationGroups,
        id: &OptionId,
    ) -> Result<&'g CustomizationOption, SelectionRejected> {
        select_single(&groups.flavors, GroupKind::Flavor, &mut self.flavor, id)
    }

    pub fn toggle_decoration<'g>(
        &mut self,
        groups: &'g CustomizationGroups,
        id: &OptionId,
    ) -> Result<Option<&'g CustomizationOption>, SelectionRejected> {
        toggle_single(&groups.decorations, GroupKind::Decoration, &mut self.decoration, id)
    }

    pub fn toggle_extra(
        &mut self,
        groups: &CustomizationGroups,
        id: &OptionId,
    ) -> Result<bool, SelectionRejected> {
        toggle_member(&groups.extras, GroupKind::Extras, &mut self.extras, id)
    }

    /// Set the quantity, clamping into the allowed range.
    pub fn set_quantity(&mut self, quantity: u32) -> Quantity {
        self.quantity = Quantity::new(quantity);
        self.quantity
    }

    pub fn increment_quantity(&mut self) -> Result<Quantity, SelectionRejected> {
        self.quantity.increment().inspect_err(log_rejection)
    }

    pub fn decrement_quantity(&mut self) -> Result<Quantity, SelectionRejected> {
        self.quantity.decrement().inspect_err(log_rejection)
    }

    pub fn size(&self) -> Option<&CustomizationOption> {
        self.size.as_ref()
    }

    pub fn flavor(&self) -> Option<&CustomizationOption> {
        self.flavor.as_ref()
    }

    pub fn decoration(&self) -> Option<&CustomizationOption> {
        self.decoration.as_ref()
    }

    /// Selected extras in the order they were added.
    pub fn extras(&self) -> &[CustomizationOption] {
        &self.extras
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Every selected option across all groups.
    pub fn selected_options(&self) -> impl Iterator<Item = &CustomizationOption> {
        self.size
            .iter()
            .chain(self.flavor.iter())
            .chain(self.decoration.iter())
            .chain(self.extras.iter())
    }
}
