//! # Shared Store
//!
//! A thread-safe handle around one [`IndexedStore`].
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` because the primary and inverted
//! indexes must change together. One lock over the whole store means no
//! reader can observe one index updated and the other not.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  thread A ──► with_store_mut(|s| s.insert(..)) ──┐                      │
//! │                                                   ├──► Mutex<Store>     │
//! │  thread B ──► with_store(|s| s.find(..)) ─────────┘    (one at a time)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use tracing::error;

use crate::error::{CoreError, CoreResult};
use crate::store::IndexedStore;

/// Cloneable handle; clones share the same store.
///
/// ## Why Not RwLock?
/// Every operation is a short in-memory computation and half of them
/// mutate. A RwLock adds complexity with little benefit.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    store: Arc<Mutex<IndexedStore>>,
}

impl SharedStore {
    /// Creates a handle around an empty store.
    pub fn new() -> Self {
        SharedStore::default()
    }

    /// Wraps an existing store.
    pub fn from_store(store: IndexedStore) -> Self {
        SharedStore {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// use tagstore_core::{Money, SharedStore};
    ///
    /// let shared = SharedStore::new();
    /// let price = shared.with_store(|store| store.find(1)).unwrap();
    /// assert_eq!(price, Money::zero());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> CoreResult<R>
    where
        F: FnOnce(&IndexedStore) -> R,
    {
        let store = self.store.lock().map_err(|_| {
            error!("Shared store mutex poisoned");
            CoreError::LockPoisoned
        })?;
        Ok(f(&store))
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// use tagstore_core::{Money, SharedStore};
    ///
    /// let shared = SharedStore::new();
    /// shared
    ///     .with_store_mut(|store| store.insert(1, Money::new(2, 50), &[3]))
    ///     .unwrap();
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> CoreResult<R>
    where
        F: FnOnce(&mut IndexedStore) -> R,
    {
        let mut store = self.store.lock().map_err(|_| {
            error!("Shared store mutex poisoned");
            CoreError::LockPoisoned
        })?;
        Ok(f(&mut store))
    }
}
