//! Investment Forecast
//!
//! Projects the gift budget required for a sales plan: given a master
//! case volume and its split across pack sizes, tiers, and customer
//! categories, computes projected order values and the per-tier gift
//! budget at each tier's target ROI.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::error::{OfferError, OfferResult};
use shared::models::{PackSize, PriceTable, Tier};

use crate::money::{to_decimal, to_f64};

/// Tolerance when validating that a percentage split sums to 100
const SPLIT_TOLERANCE: f64 = 0.001;

/// Packs per master case: 10 cartons of 12 / 6 / 2 packs
pub fn packs_per_master_case(size: PackSize) -> u32 {
    match size {
        PackSize::G50 => 120,
        PackSize::G250 => 60,
        PackSize::Kg1 => 20,
    }
}

/// Master case distribution across pack sizes (percentages)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SizeSplit {
    pub g50: f64,
    pub g250: f64,
    pub kg1: f64,
}

/// Order value distribution across tiers (percentages)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TierSplit {
    pub silver: f64,
    pub gold: f64,
    pub diamond: f64,
    pub platinum: f64,
}

/// Order value distribution across customer categories (percentages)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CustomerSplit {
    pub retailer: f64,
    pub tobacco_shop: f64,
}

/// Sales projection input
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ForecastInput {
    pub total_master_cases: f64,
    pub size_split: SizeSplit,
    pub tier_split: TierSplit,
    pub customer_split: CustomerSplit,
}

/// Projection for one pack size
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SizeProjection {
    pub master_cases: f64,
    pub packs: f64,
    pub value: f64,
}

/// Projection for one tier: value share and gift budget at target ROI
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct TierProjection {
    pub value: f64,
    pub budget: f64,
}

/// Full forecast output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastReport {
    pub g50: SizeProjection,
    pub g250: SizeProjection,
    pub kg1: SizeProjection,
    pub total_value: f64,
    pub silver: TierProjection,
    pub gold: TierProjection,
    pub diamond: TierProjection,
    pub platinum: TierProjection,
    pub total_budget: f64,
    pub retailer_value: f64,
    pub tobacco_shop_value: f64,
}

fn validate_split(name: &'static str, parts: &[f64]) -> OfferResult<()> {
    for &part in parts {
        if !part.is_finite() || part < 0.0 {
            return Err(OfferError::InvalidAmount {
                field: name,
                value: part,
            });
        }
    }
    let sum: f64 = parts.iter().sum();
    if (sum - 100.0).abs() > SPLIT_TOLERANCE {
        return Err(OfferError::InvalidDistribution { name, sum });
    }
    Ok(())
}

fn project_size(
    total_master_cases: f64,
    percent: f64,
    size: PackSize,
    prices: &PriceTable,
) -> SizeProjection {
    let master_cases = to_decimal(total_master_cases) * to_decimal(percent) / Decimal::ONE_HUNDRED;
    let packs = master_cases * Decimal::from(packs_per_master_case(size));
    let value = packs * to_decimal(prices.unit_price(size));

    SizeProjection {
        master_cases: master_cases.to_f64().unwrap_or_default(),
        packs: packs.to_f64().unwrap_or_default(),
        value: to_f64(value),
    }
}

fn project_tier(total_value: Decimal, percent: f64, tier: Tier) -> TierProjection {
    let value = total_value * to_decimal(percent) / Decimal::ONE_HUNDRED;
    let budget = value * to_decimal(tier.target_roi()) / Decimal::ONE_HUNDRED;

    TierProjection {
        value: to_f64(value),
        budget: to_f64(budget),
    }
}

/// Compute the investment forecast for a sales plan.
///
/// Each percentage split must sum to 100 (within 0.001); a violation
/// yields [`OfferError::InvalidDistribution`].
pub fn forecast(input: &ForecastInput, prices: &PriceTable) -> OfferResult<ForecastReport> {
    validate_split(
        "size",
        &[
            input.size_split.g50,
            input.size_split.g250,
            input.size_split.kg1,
        ],
    )?;
    validate_split(
        "tier",
        &[
            input.tier_split.silver,
            input.tier_split.gold,
            input.tier_split.diamond,
            input.tier_split.platinum,
        ],
    )?;
    validate_split(
        "customer",
        &[
            input.customer_split.retailer,
            input.customer_split.tobacco_shop,
        ],
    )?;

    if !input.total_master_cases.is_finite() || input.total_master_cases < 0.0 {
        return Err(OfferError::InvalidAmount {
            field: "total_master_cases",
            value: input.total_master_cases,
        });
    }

    let g50 = project_size(
        input.total_master_cases,
        input.size_split.g50,
        PackSize::G50,
        prices,
    );
    let g250 = project_size(
        input.total_master_cases,
        input.size_split.g250,
        PackSize::G250,
        prices,
    );
    let kg1 = project_size(
        input.total_master_cases,
        input.size_split.kg1,
        PackSize::Kg1,
        prices,
    );

    let total_value = to_decimal(g50.value) + to_decimal(g250.value) + to_decimal(kg1.value);

    let silver = project_tier(total_value, input.tier_split.silver, Tier::Silver);
    let gold = project_tier(total_value, input.tier_split.gold, Tier::Gold);
    let diamond = project_tier(total_value, input.tier_split.diamond, Tier::Diamond);
    let platinum = project_tier(total_value, input.tier_split.platinum, Tier::Platinum);

    let total_budget = to_decimal(silver.budget)
        + to_decimal(gold.budget)
        + to_decimal(diamond.budget)
        + to_decimal(platinum.budget);

    let retailer_value = total_value * to_decimal(input.customer_split.retailer) / Decimal::ONE_HUNDRED;
    let tobacco_shop_value =
        total_value * to_decimal(input.customer_split.tobacco_shop) / Decimal::ONE_HUNDRED;

    Ok(ForecastReport {
        g50,
        g250,
        kg1,
        total_value: to_f64(total_value),
        silver,
        gold,
        diamond,
        platinum,
        total_budget: to_f64(total_budget),
        retailer_value: to_f64(retailer_value),
        tobacco_shop_value: to_f64(tobacco_shop_value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ForecastInput {
        ForecastInput {
            total_master_cases: 100.0,
            size_split: SizeSplit {
                g50: 70.0,
                g250: 20.0,
                kg1: 10.0,
            },
            tier_split: TierSplit {
                silver: 40.0,
                gold: 30.0,
                diamond: 20.0,
                platinum: 10.0,
            },
            customer_split: CustomerSplit {
                retailer: 60.0,
                tobacco_shop: 40.0,
            },
        }
    }

    #[test]
    fn test_size_projection_counts() {
        let report = forecast(&input(), &PriceTable::default()).unwrap();
        // 70 master cases × 120 packs, 20 × 60, 10 × 20
        assert_eq!(report.g50.packs, 8400.0);
        assert_eq!(report.g250.packs, 1200.0);
        assert_eq!(report.kg1.packs, 200.0);
    }

    #[test]
    fn test_values_and_total() {
        let report = forecast(&input(), &PriceTable::default()).unwrap();
        assert_eq!(report.g50.value, 275_520.0); // 8400 × 32.80
        assert_eq!(report.g250.value, 212_172.0); // 1200 × 176.81
        assert_eq!(report.kg1.value, 127_766.0); // 200 × 638.83
        assert_eq!(report.total_value, 615_458.0);
    }

    #[test]
    fn test_tier_budgets_use_target_roi() {
        let report = forecast(&input(), &PriceTable::default()).unwrap();
        // Silver: 40% of value at 5% ROI
        assert_eq!(report.silver.value, 246_183.2);
        assert_eq!(report.silver.budget, 12_309.16);
        // Platinum: 10% of value at 13% ROI
        assert_eq!(report.platinum.value, 61_545.8);
        assert_eq!(report.platinum.budget, 8_000.95);
    }

    #[test]
    fn test_total_budget_sums_tiers() {
        let report = forecast(&input(), &PriceTable::default()).unwrap();
        let expected = report.silver.budget
            + report.gold.budget
            + report.diamond.budget
            + report.platinum.budget;
        assert!((report.total_budget - expected).abs() < 0.01);
    }

    #[test]
    fn test_customer_split_of_value() {
        let report = forecast(&input(), &PriceTable::default()).unwrap();
        assert_eq!(report.retailer_value, 369_274.8);
        assert_eq!(report.tobacco_shop_value, 246_183.2);
    }

    #[test]
    fn test_rejects_split_not_summing_to_100() {
        let mut bad = input();
        bad.tier_split.silver = 50.0; // now sums to 110
        let err = forecast(&bad, &PriceTable::default()).unwrap_err();
        assert_eq!(
            err,
            OfferError::InvalidDistribution {
                name: "tier",
                sum: 110.0
            }
        );
    }

    #[test]
    fn test_rejects_negative_percentage() {
        let mut bad = input();
        bad.customer_split.retailer = -10.0;
        bad.customer_split.tobacco_shop = 110.0;
        assert!(matches!(
            forecast(&bad, &PriceTable::default()),
            Err(OfferError::InvalidAmount { field: "customer", .. })
        ));
    }
}
