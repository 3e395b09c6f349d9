//! Application state for the API server.

use std::sync::Arc;

use crate::store::ItemStore;

/// Shared application state.
///
/// Generic over `S: ItemStore`, so handlers can run against any store
/// implementation. The store is injected via the constructor, not created
/// internally.
pub struct AppState<S: ItemStore> {
    store: Arc<S>,
}

// Manual Clone impl - we only need Arc to be cloneable, not S.
impl<S: ItemStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ItemStore> AppState<S> {
    /// Create a new AppState owning the given store.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Get a reference to the item store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
