//! # Validation Module
//!
//! Input validation for values that cross into the store from text.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Driver (tagstore-driver)                                     │
//! │  ├── Tokenizing, command names, integer ids and tags                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Money strings ("D" / "D.C")                                       │
//! │  └── Hike rates (finite percentages)                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: IndexedStore                                                 │
//! │  └── Contract checks (ItemNotFound)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tagstore_core::validation::{validate_money_str, validate_rate_percentage};
//!
//! assert_eq!(validate_money_str("price", "19.97").unwrap(), (19, 97));
//! assert!(validate_rate_percentage(f64::NAN).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Money Strings
// =============================================================================

/// Validates a decimal money string and splits it into dollars and cents.
///
/// ## Rules
/// - Must not be empty
/// - Form is `D` or `D.C`; a missing or empty fraction means 0 cents
/// - `D` is a signed 64-bit integer, `C` is digits only and fits in 32 bits
/// - The fraction is read as an integer cents count, not rescaled
/// - A leading `-` on `D` makes the cents negative too (`-5.50` is -550 cents)
///
/// ## Example
/// ```rust
/// use tagstore_core::validation::validate_money_str;
///
/// assert_eq!(validate_money_str("price", "10").unwrap(), (10, 0));
/// assert_eq!(validate_money_str("price", "10.05").unwrap(), (10, 5));
/// assert!(validate_money_str("price", "ten.05").is_err());
/// ```
pub fn validate_money_str(field: &str, input: &str) -> ValidationResult<(i64, i32)> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let (dollars_part, cents_part) = match input.split_once('.') {
        Some((dollars, cents)) => (dollars, cents),
        None => (input, ""),
    };

    let dollars = dollars_part
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("dollars '{}' must be an integer", dollars_part),
        })?;

    if cents_part.is_empty() {
        return Ok((dollars, 0));
    }

    if !cents_part.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("cents '{}' must contain only digits", cents_part),
        });
    }

    let cents = cents_part
        .parse::<i32>()
        .map_err(|_| ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i32::MAX as i64,
        })?;

    if dollars_part.starts_with('-') {
        return Ok((dollars, -cents));
    }
    Ok((dollars, cents))
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a percentage rate for a price hike.
///
/// ## Rules
/// - Must be finite (NaN and infinities are rejected)
/// - Negative rates are allowed and lower prices
pub fn validate_rate_percentage(pct: f64) -> ValidationResult<f64> {
    if !pct.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "rate".to_string(),
            reason: format!("{} is not a finite percentage", pct),
        });
    }

    Ok(pct)
}
