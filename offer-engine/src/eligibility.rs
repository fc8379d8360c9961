//! Tier/Eligibility Classifier
//!
//! Maps raw order quantities and weight to the two eligibility gates and
//! the volume tier. Pure function of the order summary; no side effects.
//!
//! The gates are independent: an order can meet the weight minimum while
//! failing the product-mix rule (or vice versa). Callers must check both
//! before invoking the allocator.

use shared::models::{OrderSummary, Tier};

/// Minimum total order weight for any gift tier (6kg)
const MIN_ELIGIBLE_WEIGHT_G: u64 = 6_000;

/// Product-mix thresholds: 10+ packs of 50g, 3+ of 250g, or 2+ of 1kg
const MIN_PACKS_50G: u32 = 10;
const MIN_PACKS_250G: u32 = 3;
const MIN_PACKS_1KG: u32 = 2;

/// Result of classifying an order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Total weight meets the 6kg minimum
    pub weight_eligible: bool,
    /// Product-mix quantity rule is met (independent of weight)
    pub product_eligible: bool,
    /// Volume tier; `None` when the order is below the weight minimum
    pub tier: Option<Tier>,
}

impl Classification {
    /// Both gates passed; gift allocation may be attempted
    pub fn gift_eligible(&self) -> bool {
        self.weight_eligible && self.product_eligible
    }
}

/// Classify an order into eligibility gates and volume tier.
///
/// Tier boundaries are inclusive (≥). Every tier above Silver requires
/// at least one 1kg pack; weight-eligible orders without one stay
/// Silver regardless of weight.
pub fn classify(order: &OrderSummary) -> Classification {
    let weight_g = order.total_weight_g();
    let weight_eligible = weight_g >= MIN_ELIGIBLE_WEIGHT_G;

    let q = &order.quantities;
    let product_eligible = q.qty_50g >= MIN_PACKS_50G
        || q.qty_250g >= MIN_PACKS_250G
        || q.qty_1kg >= MIN_PACKS_1KG;

    let tier = if !weight_eligible {
        None
    } else if weight_g >= Tier::Platinum.min_weight_g() && order.has_kg1() {
        Some(Tier::Platinum)
    } else if weight_g >= Tier::Diamond.min_weight_g() && order.has_kg1() {
        Some(Tier::Diamond)
    } else if weight_g >= Tier::Gold.min_weight_g() && order.has_kg1() {
        Some(Tier::Gold)
    } else {
        Some(Tier::Silver)
    };

    Classification {
        weight_eligible,
        product_eligible,
        tier,
    }
}
