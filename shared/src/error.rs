//! Unified error type for the trade offer engine
//!
//! The allocation core itself is total over its documented domain and
//! never errors; these variants cover boundary validation (forecast
//! splits, non-finite monetary input).

use thiserror::Error;

/// Result alias using [`OfferError`]
pub type OfferResult<T> = Result<T, OfferError>;

/// Errors raised at the engine boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OfferError {
    /// A forecast percentage split does not sum to 100
    #[error("{name} percentages must sum to 100, got {sum}")]
    InvalidDistribution { name: &'static str, sum: f64 },

    /// A numeric input was NaN, infinite, or negative
    #[error("{field} must be a finite non-negative number, got {value}")]
    InvalidAmount { field: &'static str, value: f64 },
}
