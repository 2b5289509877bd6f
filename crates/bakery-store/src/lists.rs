//! Wishlist and recently-viewed lists on top of an [`IdListStore`].

use crate::{IdListStore, StoreError};

/// Key the wishlist is stored under.
pub const WISHLIST_KEY: &str = "wishlist";

/// Key the recently viewed list is stored under.
pub const RECENTLY_VIEWED_KEY: &str = "recently_viewed";

/// Default number of recently viewed products kept.
pub const DEFAULT_RECENT_LIMIT: usize = 8;

/// Products the shopper marked as favorite, in the order they were added.
///
/// # Example
///
/// ```rust
/// use bakery_store::{MemoryStore, Wishlist};
///
/// let wishlist = Wishlist::new(MemoryStore::new());
/// assert!(wishlist.toggle("bolo-cenoura").unwrap());
/// assert!(wishlist.contains("bolo-cenoura").unwrap());
/// assert!(!wishlist.toggle("bolo-cenoura").unwrap());
/// ```
pub struct Wishlist<S> {
    store: S,
}

impl<S: IdListStore> Wishlist<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Add the product if absent, remove it if present.
    ///
    /// Returns whether the product is in the wishlist afterwards.
    pub fn toggle(&self, product_id: &str) -> Result<bool, StoreError> {
        let mut ids = self.store.get(WISHLIST_KEY)?;
        let present = match ids.iter().position(|id| id == product_id) {
            Some(pos) => {
                ids.remove(pos);
                false
            }
            None => {
                ids.push(product_id.to_string());
                true
            }
        };
        self.store.put(WISHLIST_KEY, ids)?;
        tracing::debug!(product = product_id, present, "wishlist toggled");
        Ok(present)
    }

    pub fn contains(&self, product_id: &str) -> Result<bool, StoreError> {
        Ok(self.store.get(WISHLIST_KEY)?.iter().any(|id| id == product_id))
    }

    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        self.store.get(WISHLIST_KEY)
    }
}

/// Products the shopper opened, most recent first, without repeats.
pub struct RecentlyViewed<S> {
    store: S,
    limit: usize,
}

impl<S: IdListStore> RecentlyViewed<S> {
    pub fn new(store: S) -> Self {
        Self::with_limit(store, DEFAULT_RECENT_LIMIT)
    }

    /// Keep at most `limit` products (at least one).
    pub fn with_limit(store: S, limit: usize) -> Self {
        Self {
            store,
            limit: limit.max(1),
        }
    }

    /// Record a view, moving the product to the front.
    pub fn record(&self, product_id: &str) -> Result<Vec<String>, StoreError> {
        let mut ids = self.store.get(RECENTLY_VIEWED_KEY)?;
        ids.retain(|id| id != product_id);
        ids.insert(0, product_id.to_string());
        ids.truncate(self.limit);
        self.store.put(RECENTLY_VIEWED_KEY, ids.clone())?;
        Ok(ids)
    }

    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut ids = self.store.get(RECENTLY_VIEWED_KEY)?;
        ids.truncate(self.limit);
        Ok(ids)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FileStore, MemoryStore};

    #[test]
    fn test_wishlist_toggle_keeps_order() {
        let wishlist = Wishlist::new(MemoryStore::new());
        assert!(wishlist.toggle("a").unwrap());
        assert!(wishlist.toggle("b").unwrap());
        assert!(wishlist.toggle("c").unwrap());
        assert!(!wishlist.toggle("b").unwrap());

        assert_eq!(wishlist.list().unwrap(), vec!["a", "c"]);
        assert!(!wishlist.contains("b").unwrap());
    }

    #[test]
    fn test_wishlist_double_toggle_is_identity() {
        let wishlist = Wishlist::new(MemoryStore::new());
        wishlist.toggle("a").unwrap();
        let before = wishlist.list().unwrap();
        wishlist.toggle("z").unwrap();
        wishlist.toggle("z").unwrap();
        assert_eq!(wishlist.list().unwrap(), before);
    }

    #[test]
    fn test_recent_moves_to_front_without_duplicates() {
        let recent = RecentlyViewed::new(MemoryStore::new());
        recent.record("a").unwrap();
        recent.record("b").unwrap();
        let ids = recent.record("a").unwrap();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_recent_is_capped() {
        let recent = RecentlyViewed::with_limit(MemoryStore::new(), 3);
        for id in ["a", "b", "c", "d", "e"] {
            recent.record(id).unwrap();
        }
        assert_eq!(recent.list().unwrap(), vec!["e", "d", "c"]);
    }

    #[test]
    fn test_zero_limit_keeps_one() {
        let recent = RecentlyViewed::with_limit(MemoryStore::new(), 0);
        recent.record("a").unwrap();
        recent.record("b").unwrap();
        assert_eq!(recent.list().unwrap(), vec!["b"]);
    }

    #[test]
    fn test_lists_share_a_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        let wishlist = Wishlist::new(&store);
        let recent = RecentlyViewed::new(&store);

        wishlist.toggle("bolo").unwrap();
        recent.record("torta").unwrap();

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(Wishlist::new(&reopened).list().unwrap(), vec!["bolo"]);
        assert_eq!(RecentlyViewed::new(&reopened).list().unwrap(), vec!["torta"]);
    }
}
