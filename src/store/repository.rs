//! Repository trait for item access abstraction.
//!
//! This trait defines the contract for item access, allowing different
//! storage backends to be swapped without changing handler logic.

use crate::store::{Item, ItemPatch, StoreResult};

/// Repository for Item operations.
pub trait ItemStore: Send + Sync {
    /// Get all items in insertion order.
    fn list(&self) -> StoreResult<Vec<Item>>;

    /// Get an item by ID.
    fn get(&self, id: u64) -> StoreResult<Item>;

    /// Insert a new item, assigning the next free ID.
    fn insert(&self, name: String, description: String) -> StoreResult<Item>;

    /// Apply a partial update to an existing item.
    fn update(&self, id: u64, patch: ItemPatch) -> StoreResult<Item>;

    /// Delete an item by ID.
    fn delete(&self, id: u64) -> StoreResult<()>;
}
