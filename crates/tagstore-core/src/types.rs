//! # Domain Types
//!
//! Core domain types used throughout tagstore.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │    HikeRate     │   │  InsertOutcome  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  percent (f64)  │   │  New      (1)   │       │
//! │  │  price (Money)  │   │  12.345 = 12.3% │   │  Existing (0)   │       │
//! │  │  tags (Vec)     │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tags Are a Multiset
//! An item keeps its tags exactly as given, duplicates included. The inverted
//! index only cares whether at least one occurrence remains.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::validate_rate_percentage;

/// Item identifier. Unique key of the primary index.
pub type ItemId = i64;

/// Numeric description tag.
pub type Tag = i64;

// =============================================================================
// Hike Rate
// =============================================================================

/// Percentage rate applied by a price hike.
///
/// Unlike a tax rate this is not limited to whole basis points: 12.345% is
/// a legal rate. The fractional cents it produces are discarded when applied.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct HikeRate(f64);

impl HikeRate {
    /// Creates a rate from a percentage without validation.
    #[inline]
    pub const fn from_percentage(pct: f64) -> Self {
        HikeRate(pct)
    }

    /// Creates a rate from a percentage, rejecting NaN and infinities.
    pub fn try_from_percentage(pct: f64) -> Result<Self, ValidationError> {
        validate_rate_percentage(pct).map(HikeRate)
    }

    /// Returns the rate as a percentage.
    #[inline]
    pub const fn percentage(&self) -> f64 {
        self.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        HikeRate(0.0)
    }
}

impl Default for HikeRate {
    fn default() -> Self {
        HikeRate::zero()
    }
}

// =============================================================================
// Item
// =============================================================================

/// A stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier.
    pub id: ItemId,

    /// Current price.
    pub price: Money,

    /// Description tags, in insertion order.
    pub tags: Vec<Tag>,
}

impl Item {
    /// Creates an item, copying the caller's tag slice.
    pub fn new(id: ItemId, price: Money, tags: &[Tag]) -> Self {
        Item {
            id,
            price,
            tags: tags.to_vec(),
        }
    }

    /// Checks if at least one occurrence of `tag` is present.
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// Sum of every tag value, duplicates counted. Wraps on overflow.
    pub fn tag_sum(&self) -> i64 {
        self.tags.iter().fold(0i64, |acc, &tag| acc.wrapping_add(tag))
    }

    /// Removes the first occurrence of `tag`. Returns false if absent.
    pub(crate) fn remove_tag_once(&mut self, tag: Tag) -> bool {
        match self.tags.iter().position(|&t| t == tag) {
            Some(pos) => {
                self.tags.remove(pos);
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// Insert Outcome
// =============================================================================

/// Result of `IndexedStore::insert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertOutcome {
    /// The id was not present; a new item was created.
    New,

    /// The id was present; its price (and maybe tags) were replaced.
    Existing,
}

impl InsertOutcome {
    /// Numeric code: 1 for a new item, 0 for an existing one.
    #[inline]
    pub const fn code(&self) -> i32 {
        match self {
            InsertOutcome::New => 1,
            InsertOutcome::Existing => 0,
        }
    }
}

impl std::fmt::Display for InsertOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsertOutcome::New => write!(f, "new"),
            InsertOutcome::Existing => write!(f, "existing"),
        }
    }
}
