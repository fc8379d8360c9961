//! Gift Allocator
//!
//! Greedy budget allocation over the fixed two-item catalog: hookahs are
//! pre-allocated for heavy tobacco-shop orders, then the remaining budget
//! is filled with Pack-FOC. Uses rust_decimal for the monetary steps and
//! plain integer arithmetic for quantities.
//!
//! The allocator does not check eligibility; callers are expected to
//! consult the classifier first.

mod optimizer;

pub use optimizer::*;

use rust_decimal::prelude::*;
use shared::models::{
    CustomerCategory, GiftAllocation, GiftKind, MAX_HOOKAHS_PER_ORDER, MaxQuantities, OrderSummary,
};

use crate::money::{to_decimal, to_f64};

/// Weight above which a tobacco shop qualifies for two hookahs (kg)
const TWO_HOOKAH_WEIGHT_KG: u64 = 100;
/// Weight above which a tobacco shop qualifies for one hookah (kg)
const ONE_HOOKAH_WEIGHT_KG: u64 = 50;

/// Maximum gift quantities purchasable with a budget.
///
/// Retailers never receive hookahs; a zero or negative budget yields
/// all-zero maxima.
pub fn max_quantities(budget: f64, category: CustomerCategory) -> MaxQuantities {
    let budget = to_decimal(budget);
    if budget <= Decimal::ZERO {
        return MaxQuantities::default();
    }

    let pack_foc = (budget / Decimal::from(GiftKind::PackFoc.unit_value()))
        .floor()
        .to_u32()
        .unwrap_or(0);
    let hookah = if category.hookah_eligible() {
        (budget / Decimal::from(GiftKind::Hookah.unit_value()))
            .floor()
            .to_u32()
            .unwrap_or(0)
    } else {
        0
    };

    MaxQuantities { pack_foc, hookah }
}

/// Allocate gift quantities for an order within a budget.
///
/// Hookah pre-allocation (tobacco shops only, first match wins):
/// - over 100kg with at least 2 × $400 remaining: up to two hookahs
/// - over 50kg with at least $400 remaining: exactly one hookah
///
/// The remaining budget buys Pack-FOC at $38 apiece; fractional
/// remainders are truncated, never rounded up. A zero or negative
/// budget yields an all-zero allocation without error.
pub fn allocate(order: &OrderSummary, category: CustomerCategory, budget: f64) -> GiftAllocation {
    let max = max_quantities(budget, category);
    let mut remaining = to_decimal(budget);
    if remaining <= Decimal::ZERO {
        return GiftAllocation::default();
    }

    let hookah_price = Decimal::from(GiftKind::Hookah.unit_value());
    let pack_price = Decimal::from(GiftKind::PackFoc.unit_value());
    let weight_kg = Decimal::from(order.total_weight_g()) / Decimal::ONE_THOUSAND;

    let mut hookah = 0u32;
    if category.hookah_eligible() {
        if weight_kg > Decimal::from(TWO_HOOKAH_WEIGHT_KG)
            && remaining >= hookah_price * Decimal::TWO
        {
            hookah = MAX_HOOKAHS_PER_ORDER.min(max.hookah);
        } else if weight_kg > Decimal::from(ONE_HOOKAH_WEIGHT_KG) && remaining >= hookah_price {
            hookah = 1;
        }
        remaining -= hookah_price * Decimal::from(hookah);
    }

    let pack_foc = (remaining / pack_price)
        .floor()
        .to_u32()
        .unwrap_or(0)
        .min(max.pack_foc);

    GiftAllocation { pack_foc, hookah }
}

/// Gift budget derived from the order value and a target ROI
/// percentage, rounded to cents.
pub fn derive_budget(order: &OrderSummary, target_roi: f64) -> f64 {
    let budget = to_decimal(order.total_value) * to_decimal(target_roi) / Decimal::ONE_HUNDRED;
    to_f64(budget)
}

/// Realized ROI of an allocation against the order value, as a
/// percentage rounded to 2 decimal places.
///
/// A zero-value order yields 0 by definition; division by zero is not
/// an error here.
pub fn calculate_roi(order: &OrderSummary, gifts: &GiftAllocation) -> f64 {
    let total_value = to_decimal(order.total_value);
    if total_value <= Decimal::ZERO {
        return 0.0;
    }

    let gift_value = to_decimal(gifts.total_value());
    to_f64(gift_value / total_value * Decimal::ONE_HUNDRED)
}
