//! Domain models for the item store.
//!
//! These models are storage-agnostic and represent the core entity
//! used throughout the application.

use serde::{Deserialize, Serialize};

/// A stored item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned by the store.
    pub id: u64,
    /// Item name.
    pub name: String,
    /// Item description, empty when none was given.
    pub description: String,
}

/// Partial update for an item.
///
/// `None` fields keep the stored value unchanged.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}
