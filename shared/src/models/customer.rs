//! Customer Category Model

use serde::{Deserialize, Serialize};

/// Wholesale customer category
///
/// Only tobacco shops may receive the premium hookah gift; retailers
/// are limited to Pack-FOC.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerCategory {
    Retailer,
    TobaccoShop,
}

impl CustomerCategory {
    /// Whether this category is eligible for hookah gifts
    pub fn hookah_eligible(&self) -> bool {
        matches!(self, CustomerCategory::TobaccoShop)
    }
}
