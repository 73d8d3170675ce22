//! # Money Module
//!
//! Provides the `Money` type: a fixed-point price with two fractional digits.
//!
//! ## Representation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Money { dollars: i64, cents: i32 }                                     │
//! │                                                                         │
//! │  Ordering:   dollars first, then cents                                  │
//! │  Arithmetic: on total cents = dollars * 100 + cents, wrapping           │
//! │  Text:       "D.CC" out, "D" or "D.C" in                                │
//! │                                                                         │
//! │  cents is NOT clamped to 0..=99. Values built through arithmetic are   │
//! │  always normalized; values built with `Money::new` are kept as given.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tagstore_core::money::Money;
//! use tagstore_core::types::HikeRate;
//!
//! let price: Money = "100.00".parse().unwrap();
//! let increase = price.percentage_increase(HikeRate::from_percentage(12.345));
//! assert_eq!(increase, Money::new(12, 34)); // fractional cent discarded
//! assert_eq!((price + increase).to_string(), "112.34");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::HikeRate;
use crate::validation::validate_money_str;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value as a dollars/cents pair.
///
/// ## Design Decisions
/// - **Field order matters**: the derived `Ord` compares `dollars` before
///   `cents`, which is exactly the required total order
/// - **i32 cents**: matches the external representation; totals are i64
/// - **No floats**: the only float is the hike rate, and its product is
///   truncated straight back into whole cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money {
    dollars: i64,
    cents: i32,
}

impl Money {
    /// Creates a Money value from its dollar and cent components.
    ///
    /// ## Example
    /// ```rust
    /// use tagstore_core::money::Money;
    ///
    /// let price = Money::new(10, 99);
    /// assert_eq!(price.dollars(), 10);
    /// assert_eq!(price.cents(), 99);
    /// assert_eq!(price.total_cents(), 1099);
    /// ```
    #[inline]
    pub const fn new(dollars: i64, cents: i32) -> Self {
        Money { dollars, cents }
    }

    /// Creates a Money value from a total number of cents.
    ///
    /// Splits with truncating division, so negative totals give a negative
    /// dollar part and a negative cent part (`-550` → `-5`, `-50`).
    #[inline]
    pub const fn from_cents(total: i64) -> Self {
        Money {
            dollars: total / 100,
            cents: (total % 100) as i32,
        }
    }

    /// Returns the dollar component.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.dollars
    }

    /// Returns the cent component as stored.
    #[inline]
    pub const fn cents(&self) -> i32 {
        self.cents
    }

    /// Returns the value as a single cents count.
    ///
    /// Wraps on `i64` overflow, so dollar parts beyond `i64::MAX / 100`
    /// produce a wrapped total rather than a panic.
    #[inline]
    pub const fn total_cents(&self) -> i64 {
        self.dollars.wrapping_mul(100).wrapping_add(self.cents as i64)
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money {
            dollars: 0,
            cents: 0,
        }
    }

    /// Checks if both components are zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.dollars == 0 && self.cents == 0
    }

    /// Calculates the increase produced by a percentage rate.
    ///
    /// ## Truncation
    /// `increase = trunc(total_cents * rate / 100)`. Fractional cents are
    /// discarded, never rounded: 10000 cents at 12.345% is 1234.5 cents,
    /// which becomes 1234.
    ///
    /// ## Example
    /// ```rust
    /// use tagstore_core::money::Money;
    /// use tagstore_core::types::HikeRate;
    ///
    /// let price = Money::new(19, 99);
    /// let increase = price.percentage_increase(HikeRate::from_percentage(10.0));
    /// // 1999 * 10 / 100 = 199.9 → 199
    /// assert_eq!(increase.total_cents(), 199);
    /// ```
    pub fn percentage_increase(&self, rate: HikeRate) -> Money {
        let increase = self.total_cents() as f64 * rate.percentage() / 100.0;
        // `as` truncates toward zero and saturates at the i64 bounds
        Money::from_cents(increase as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `D.CC` with a single leading sign (`-5.50`, `-0.99`).
///
/// Components with opposite signs are normalized first. Cent components
/// above 99 are printed as stored.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = if (self.dollars < 0 && self.cents > 0) || (self.dollars > 0 && self.cents < 0) {
            Money::from_cents(self.total_cents())
        } else {
            *self
        };
        let sign = if value.dollars < 0 || value.cents < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            value.dollars.unsigned_abs(),
            value.cents.unsigned_abs()
        )
    }
}

/// Parses `D` or `D.C`. A leading `-` applies to the cents as well.
///
/// ## Example
/// ```rust
/// use tagstore_core::money::Money;
///
/// assert_eq!("12.34".parse::<Money>().unwrap(), Money::new(12, 34));
/// assert_eq!("12".parse::<Money>().unwrap(), Money::new(12, 0));
/// assert!("12.3x".parse::<Money>().is_err());
/// ```
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (dollars, cents) = validate_money_str("money", s)?;
        Ok(Money::new(dollars, cents))
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values (normalized result, wrapping).
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money::from_cents(self.total_cents().wrapping_add(other.total_cents()))
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}
