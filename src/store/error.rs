//! Store error types.
//!
//! This module provides abstracted error types for item store operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Item store operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum StoreError {
    #[error("Item not found: id {id}")]
    #[diagnostic(code(itemstore::store::not_found))]
    NotFound { id: u64 },

    #[error("Store backend error: {message}")]
    #[diagnostic(code(itemstore::store::backend))]
    Backend { message: String },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
