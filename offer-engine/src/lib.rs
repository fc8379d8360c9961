//! Trade offer engine
//!
//! Pure computation core for allocating promotional gift budgets to
//! wholesale orders: tier/eligibility classification, greedy integer
//! gift allocation with an ROI convergence loop, tier-ceiling
//! reconciliation for hand-edited allocations, and investment
//! forecasting. No I/O and no shared mutable state; every call is
//! parameterized explicitly by its inputs.

pub mod allocation;
pub mod eligibility;
pub mod forecast;
pub mod money;
pub mod storage;

// Re-exports
pub use allocation::{
    allocate, calculate_roi, cap_to_tier_ceiling, derive_budget, max_quantities, optimize_to_roi,
};
pub use eligibility::{Classification, classify};
pub use forecast::{ForecastInput, ForecastReport, forecast};
pub use storage::{MemoryOrderStore, OrderStore, history_totals};
