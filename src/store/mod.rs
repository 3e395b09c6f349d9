//! Item store abstraction layer.
//!
//! This module provides a trait-based abstraction for item access,
//! allowing different storage backends (in-memory, embedded database, etc.)
//! to be swapped without changing handler logic.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Item, ItemPatch)
//! - `repository`: Trait definition for item access
//! - `memory`: Mutex-guarded in-memory implementation

mod error;
mod memory;
mod models;
mod repository;


pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use models::*;
pub use repository::*;
