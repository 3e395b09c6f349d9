//! Mutex-guarded in-memory store implementation.

use parking_lot::Mutex;

use crate::store::{Item, ItemPatch, ItemStore, StoreError, StoreResult};

/// In-memory item store.
///
/// Items live in a `Vec` behind a single mutex; every operation holds the
/// lock for its full duration, so concurrent requests observe
/// one-writer-at-a-time semantics. Insertion order is listing order.
/// All state is lost when the process exits.
pub struct MemoryStore {
    items: Mutex<Vec<Item>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with the two startup items.
    pub fn seeded() -> Self {
        Self {
            items: Mutex::new(vec![
                Item {
                    id: 1,
                    name: "Item 1".to_string(),
                    description: "Description for Item 1".to_string(),
                },
                Item {
                    id: 2,
                    name: "Item 2".to_string(),
                    description: "Description for Item 2".to_string(),
                },
            ]),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore for MemoryStore {
    fn list(&self) -> StoreResult<Vec<Item>> {
        Ok(self.items.lock().clone())
    }

    fn get(&self, id: u64) -> StoreResult<Item> {
        self.items
            .lock()
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    fn insert(&self, name: String, description: String) -> StoreResult<Item> {
        let mut items = self.items.lock();
        // Next id is max existing + 1 (1 when empty), not last element + 1,
        // so a new id can never collide with a live one.
        let id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        let item = Item {
            id,
            name,
            description,
        };
        items.push(item.clone());
        Ok(item)
    }

    fn update(&self, id: u64, patch: ItemPatch) -> StoreResult<Item> {
        let mut items = self.items.lock();
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound { id })?;
        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(description) = patch.description {
            item.description = description;
        }
        Ok(item.clone())
    }

    fn delete(&self, id: u64) -> StoreResult<()> {
        let mut items = self.items.lock();
        let pos = items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::NotFound { id })?;
        items.remove(pos);
        Ok(())
    }
}
