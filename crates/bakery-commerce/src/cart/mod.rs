//! Shopping cart module.
//!
//! Contains the events a product view emits and the cart that consumes
//! them.

mod cart;
mod event;

pub use cart::{Cart, LineItem};
pub use event::{CartInsertion, ProductEvent, SelectedOption, WishlistToggle};
