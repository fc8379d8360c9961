//! Order Models
//!
//! An order is summarized as pack quantities priced against a price
//! table. Everything here is a value type: the summary is recomputed
//! from scratch whenever quantities, prices, or the customer category
//! change, and any previously derived gift allocation is discarded.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use super::customer::CustomerCategory;
use super::gift::GiftAllocation;
use super::tier::Tier;

/// Pack sizes sold on the price list
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackSize {
    G50,
    G250,
    Kg1,
}

impl PackSize {
    /// All sizes, in price-list order
    pub const ALL: [PackSize; 3] = [PackSize::G50, PackSize::G250, PackSize::Kg1];

    /// Net weight of a single pack in grams
    pub fn grams(&self) -> u32 {
        match self {
            PackSize::G50 => 50,
            PackSize::G250 => 250,
            PackSize::Kg1 => 1000,
        }
    }
}

/// Unit prices per pack size
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceTable {
    pub price_50g: f64,
    pub price_250g: f64,
    pub price_1kg: f64,
}

impl Default for PriceTable {
    /// Current list prices per pack
    fn default() -> Self {
        Self {
            price_50g: 32.80,
            price_250g: 176.81,
            price_1kg: 638.83,
        }
    }
}

impl PriceTable {
    /// Unit price for a pack size
    pub fn unit_price(&self, size: PackSize) -> f64 {
        match size {
            PackSize::G50 => self.price_50g,
            PackSize::G250 => self.price_250g,
            PackSize::Kg1 => self.price_1kg,
        }
    }
}

/// Ordered pack quantities per size
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackQuantities {
    pub qty_50g: u32,
    pub qty_250g: u32,
    pub qty_1kg: u32,
}

impl PackQuantities {
    pub fn new(qty_50g: u32, qty_250g: u32, qty_1kg: u32) -> Self {
        Self {
            qty_50g,
            qty_250g,
            qty_1kg,
        }
    }

    /// Quantity ordered for a pack size
    pub fn quantity(&self, size: PackSize) -> u32 {
        match size {
            PackSize::G50 => self.qty_50g,
            PackSize::G250 => self.qty_250g,
            PackSize::Kg1 => self.qty_1kg,
        }
    }
}

/// Immutable order summary: quantities, the prices they were taken at,
/// and the derived total value (2 decimal places)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    pub quantities: PackQuantities,
    pub prices: PriceTable,
    /// Total monetary value: Σ quantity × unit price
    pub total_value: f64,
}

impl OrderSummary {
    /// Build a summary from quantities and a price table.
    ///
    /// The total is computed in `Decimal` and rounded half-up to cents.
    pub fn new(quantities: PackQuantities, prices: &PriceTable) -> Self {
        let total: Decimal = PackSize::ALL
            .iter()
            .map(|&size| {
                Decimal::from(quantities.quantity(size))
                    * Decimal::from_f64(prices.unit_price(size)).unwrap_or_default()
            })
            .sum();

        Self {
            quantities,
            prices: prices.clone(),
            total_value: total
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                .to_f64()
                .unwrap_or_default(),
        }
    }

    /// Total order weight in grams
    pub fn total_weight_g(&self) -> u64 {
        PackSize::ALL
            .iter()
            .map(|&size| self.quantities.quantity(size) as u64 * size.grams() as u64)
            .sum()
    }

    /// Whether the order includes at least one 1kg pack
    ///
    /// Structural condition for every tier above Silver.
    pub fn has_kg1(&self) -> bool {
        self.quantities.qty_1kg > 0
    }
}

/// Fields captured when persisting an accepted offer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDraft {
    pub customer_name: String,
    pub customer_address: String,
    pub customer_category: CustomerCategory,
    pub order: OrderSummary,
    pub tier: Tier,
    /// Target ROI percentage applied to this order
    pub roi_percentage: f64,
    /// Budget the allocation was computed against
    pub budget: f64,
    pub gifts: GiftAllocation,
}

/// Persisted order row, as returned by an order store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Store-assigned opaque id
    pub id: i64,
    pub saved_at: DateTime<Utc>,
    pub customer_name: String,
    pub customer_address: String,
    pub customer_category: CustomerCategory,
    pub order: OrderSummary,
    pub total_weight_g: u64,
    pub tier: Tier,
    pub roi_percentage: f64,
    pub budget: f64,
    pub gifts: GiftAllocation,
}
