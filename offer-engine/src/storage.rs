//! Order persistence seam
//!
//! The engine itself never performs I/O; embedding applications persist
//! accepted offers through the [`OrderStore`] trait and receive opaque
//! ids back. A simple in-memory implementation is provided for tests
//! and single-session use.

use chrono::Utc;
use rust_decimal::prelude::*;
use shared::error::OfferResult;
use shared::models::{OrderDraft, OrderRecord};

use crate::money::{to_decimal, to_f64};

/// Persistence sink for accepted offers
pub trait OrderStore {
    /// Persist a draft and return the store-assigned order id
    fn save(&mut self, draft: OrderDraft) -> OfferResult<i64>;

    /// Look up a saved order by id
    fn find(&self, id: i64) -> Option<&OrderRecord>;

    /// All saved orders, oldest first
    fn all(&self) -> &[OrderRecord];
}

/// In-memory order store with sequential ids
#[derive(Debug, Default)]
pub struct MemoryOrderStore {
    orders: Vec<OrderRecord>,
    next_id: i64,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderStore for MemoryOrderStore {
    fn save(&mut self, draft: OrderDraft) -> OfferResult<i64> {
        self.next_id += 1;
        let id = self.next_id;
        let total_weight_g = draft.order.total_weight_g();

        self.orders.push(OrderRecord {
            id,
            saved_at: Utc::now(),
            customer_name: draft.customer_name,
            customer_address: draft.customer_address,
            customer_category: draft.customer_category,
            order: draft.order,
            total_weight_g,
            tier: draft.tier,
            roi_percentage: draft.roi_percentage,
            budget: draft.budget,
            gifts: draft.gifts,
        });

        Ok(id)
    }

    fn find(&self, id: i64) -> Option<&OrderRecord> {
        self.orders.iter().find(|record| record.id == id)
    }

    fn all(&self) -> &[OrderRecord] {
        &self.orders
    }
}

/// Aggregated metrics over saved orders
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HistoryTotals {
    pub order_count: usize,
    pub total_order_value: f64,
    pub total_gift_value: f64,
    /// Mean of the target ROI percentages stored with each order
    pub average_roi: f64,
}

/// Compute history metrics over a slice of saved orders
pub fn history_totals(records: &[OrderRecord]) -> HistoryTotals {
    if records.is_empty() {
        return HistoryTotals::default();
    }

    let mut order_value = Decimal::ZERO;
    let mut gift_value = Decimal::ZERO;
    let mut roi_sum = Decimal::ZERO;

    for record in records {
        order_value += to_decimal(record.order.total_value);
        gift_value += to_decimal(record.gifts.total_value());
        roi_sum += to_decimal(record.roi_percentage);
    }

    HistoryTotals {
        order_count: records.len(),
        total_order_value: to_f64(order_value),
        total_gift_value: to_f64(gift_value),
        average_roi: to_f64(roi_sum / Decimal::from(records.len() as u64)),
    }
}
