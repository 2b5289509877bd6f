//! Persisted id lists for the bakery storefront.
//!
//! Wishlists and recently viewed products are plain ordered lists of
//! product ids kept in a small key-value store.
//!
//! # Example
//!
//! ```rust,ignore
//! use bakery_store::{FileStore, RecentlyViewed, Wishlist};
//!
//! let store = FileStore::open(".bakery")?;
//!
//! // Favorite a product
//! Wishlist::new(&store).toggle("bolo-cenoura")?;
//!
//! // Remember a product page visit
//! RecentlyViewed::new(&store).record("torta-limao")?;
//! ```

mod error;
mod kv;
mod lists;

pub use error::StoreError;
pub use kv::{FileStore, IdListStore, MemoryStore};
pub use lists::{
    RecentlyViewed, Wishlist, DEFAULT_RECENT_LIMIT, RECENTLY_VIEWED_KEY, WISHLIST_KEY,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStore, IdListStore, MemoryStore, RecentlyViewed, StoreError, Wishlist};
}
