//! Product customization.
//!
//! Contains option groups (size, flavor, decoration, extras) and the
//! per-view selection state built from them.

mod option;
mod selection;

pub use option::{find_option, CustomizationGroups, CustomizationOption, GroupKind};
pub use selection::{
    select_single, toggle_member, toggle_single, Quantity, Selection, SelectionRejected,
    MAX_QUANTITY, MIN_QUANTITY,
};
