//! # tagstore-core: In-Memory Indexed Record Store
//!
//! This crate is the **heart** of tagstore. It holds the store, its value
//! types and their validation, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        tagstore Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    tagstore-driver                              │   │
//! │  │    command script ──► parse ──► execute ──► summary            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tagstore-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐ │   │
//! │  │   │   types   │  │   money   │  │   store    │  │ validation│ │   │
//! │  │   │   Item    │  │   Money   │  │ IndexedSt. │  │   rules   │ │   │
//! │  │   │ HikeRate  │  │  "D.CC"   │  │ SharedSt.  │  │  checks   │ │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • DETERMINISTIC          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`] - IndexedStore: ordered primary index + inverted tag index
//! - [`shared`] - SharedStore: single-lock wrapper for cross-thread use
//! - [`money`] - Money type (dollars/cents, no floating point storage)
//! - [`types`] - Item, HikeRate, InsertOutcome
//! - [`error`] - Domain error types
//! - [`validation`] - Money string and rate validation
//!
//! ## Example Usage
//!
//! ```rust
//! use tagstore_core::{HikeRate, IndexedStore, Money};
//!
//! let mut store = IndexedStore::new();
//! store.insert(22, "19.97".parse().unwrap(), &[475, 1238, 9742]);
//!
//! assert_eq!(store.find_max_price(1238), Money::new(19, 97));
//! assert_eq!(store.remove_names(22, &[475, 1]).unwrap(), 475);
//!
//! let increase = store.price_hike(0, 100, HikeRate::from_percentage(10.0));
//! assert_eq!(increase.to_string(), "1.99");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod shared;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use shared::SharedStore;
pub use store::IndexedStore;
pub use types::*;
