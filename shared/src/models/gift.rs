//! Gift Catalog and Allocation Models

use serde::{Deserialize, Serialize};

/// Hard cap on hookahs per order, regardless of budget
pub const MAX_HOOKAHS_PER_ORDER: u32 = 2;

/// Kind of promotional gift in the fixed two-item catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GiftKind {
    /// Free-of-charge fill pack
    PackFoc,
    /// Premium hookah (tobacco shops only)
    Hookah,
}

impl GiftKind {
    /// All catalog entries, in allocation priority order
    pub const ALL: [GiftKind; 2] = [GiftKind::Hookah, GiftKind::PackFoc];

    /// Monetary value of one unit, in whole dollars
    pub fn unit_value(&self) -> u32 {
        match self {
            GiftKind::PackFoc => 38,
            GiftKind::Hookah => 400,
        }
    }
}

/// Integer gift quantities allocated to an order
///
/// Fixed-size record rather than a keyed map; quantities are
/// non-negative by construction.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GiftAllocation {
    pub pack_foc: u32,
    pub hookah: u32,
}

impl GiftAllocation {
    pub fn new(pack_foc: u32, hookah: u32) -> Self {
        Self { pack_foc, hookah }
    }

    /// Quantity allocated for a gift kind
    pub fn quantity(&self, kind: GiftKind) -> u32 {
        match kind {
            GiftKind::PackFoc => self.pack_foc,
            GiftKind::Hookah => self.hookah,
        }
    }

    /// Total monetary value of the allocation
    pub fn total_value(&self) -> f64 {
        GiftKind::ALL
            .iter()
            .map(|&kind| self.quantity(kind) * kind.unit_value())
            .sum::<u32>() as f64
    }

    /// No gifts allocated at all
    pub fn is_empty(&self) -> bool {
        self.pack_foc == 0 && self.hookah == 0
    }
}

/// Maximum gift quantities purchasable with a given budget
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MaxQuantities {
    pub pack_foc: u32,
    pub hookah: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_total_value() {
        let gifts = GiftAllocation::new(107, 1);
        assert_eq!(gifts.total_value(), 4466.0);
    }

    #[test]
    fn test_empty_allocation() {
        let gifts = GiftAllocation::default();
        assert!(gifts.is_empty());
        assert_eq!(gifts.total_value(), 0.0);
    }

    #[test]
    fn test_quantity_lookup_by_kind() {
        let gifts = GiftAllocation::new(5, 2);
        assert_eq!(gifts.quantity(GiftKind::PackFoc), 5);
        assert_eq!(gifts.quantity(GiftKind::Hookah), 2);
    }
}
