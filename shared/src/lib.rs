//! Shared types for the trade offer engine
//!
//! Value types used by the allocation core and by outer layers
//! (UI, persistence, reporting): orders, customers, tiers, gifts,
//! and the unified error type.

pub mod error;
pub mod models;

// Re-exports
pub use error::{OfferError, OfferResult};
pub use serde::{Deserialize, Serialize};
