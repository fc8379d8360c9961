//! Data models
//!
//! Shared between the allocation engine and embedding applications
//! (UI, persistence, reporting). Monetary amounts are stored as `f64`
//! rounded to 2 decimal places; arithmetic happens in
//! `rust_decimal::Decimal` inside the engine.

pub mod customer;
pub mod gift;
pub mod order;
pub mod tier;

// Re-exports
pub use customer::*;
pub use gift::*;
pub use order::*;
pub use tier::*;
