//! # Error Types
//!
//! Domain-specific error types for tagstore-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tagstore-core errors (this file)                                      │
//! │  ├── CoreError        - Store contract violations                      │
//! │  └── ValidationError  - Malformed input (money strings, rates)         │
//! │                                                                         │
//! │  tagstore-driver errors (separate crate)                               │
//! │  ├── ConfigError      - Bad environment / flags                        │
//! │  └── DriverError      - Script parse and I/O failures                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DriverError → stderr              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Missing ids and missing tags on queries are answered with zero values
//! (zero Money, a count of 0). Only the cases below fail.

use thiserror::Error;

use crate::types::{ItemId, Tag};

// =============================================================================
// Core Error
// =============================================================================

/// Store-level errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Item cannot be found.
    ///
    /// ## When This Occurs
    /// - `remove_names` is called with a non-empty tag list for an id that
    ///   was never inserted (or was deleted)
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// The primary and inverted indexes disagree.
    ///
    /// Only produced by `IndexedStore::check_consistency`. Seeing this
    /// outside of a test means a mutation path bypassed the index helpers.
    #[error("Index inconsistent for tag {tag}, item {id}: {reason}")]
    IndexInconsistent { tag: Tag, id: ItemId, reason: String },

    /// A thread panicked while holding the shared store lock.
    #[error("Store lock poisoned")]
    LockPoisoned,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., "12.x4" as money).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
