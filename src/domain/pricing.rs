//! Volume-discount quote pricing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("quantity must be a positive integer, got {0}")]
    InvalidQuantity(i64),
}

/// Discount tiers, highest threshold first. Lower bounds are inclusive.
const DISCOUNT_TIERS: [(u64, f64); 3] = [(10_000, 0.85), (5_000, 0.90), (1_000, 0.95)];

/// Volume-discount multiplier for an order quantity.
pub fn discount_multiplier(quantity: u64) -> f64 {
    DISCOUNT_TIERS
        .iter()
        .find(|(threshold, _)| quantity >= *threshold)
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(1.0)
}

/// One priced quote line. Callers may persist it as a saved quote; this
/// module only ever computes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub product_name: String,
    pub quantity: u64,
    pub base_unit_price: f64,
    pub effective_unit_price: f64,
    pub total: f64,
    pub currency: String,
}

/// Prices one quote line.
///
/// A missing or non-finite base price is treated as zero — draft quotes are
/// allowed to be unpriced. A zero quantity is a validation failure the
/// caller should re-prompt for, not retry.
pub fn price_quote(
    product_name: &str,
    base_unit_price: Option<f64>,
    quantity: u64,
    currency: &str,
) -> Result<QuoteLine, PricingError> {
    if quantity == 0 {
        return Err(PricingError::InvalidQuantity(0));
    }

    let base = base_unit_price.filter(|p| p.is_finite()).unwrap_or(0.0);
    let effective_unit_price = base * discount_multiplier(quantity);

    Ok(QuoteLine {
        product_name: product_name.to_string(),
        quantity,
        base_unit_price: base,
        effective_unit_price,
        total: effective_unit_price * quantity as f64,
        currency: currency.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(quantity: u64) -> QuoteLine {
        price_quote("Widget", Some(10.0), quantity, "USD").unwrap()
    }

    #[test]
    fn no_discount_below_first_tier() {
        let line = priced(500);
        assert_eq!(line.effective_unit_price, 10.0);
        assert_eq!(line.total, 5000.0);
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(priced(999).effective_unit_price, 10.0);
        assert_eq!(priced(1000).effective_unit_price, 9.5);
        assert_eq!(priced(4999).effective_unit_price, 9.5);
        assert_eq!(priced(5000).effective_unit_price, 9.0);
        assert_eq!(priced(9999).effective_unit_price, 9.0);
        assert_eq!(priced(10_000).effective_unit_price, 8.5);
    }

    #[test]
    fn deepest_tier_totals() {
        let line = priced(10_000);
        assert_eq!(line.total, 85_000.0);
    }

    #[test]
    fn quantities_beyond_u32_range_price_normally() {
        let line = priced(5_000_000_000);
        assert_eq!(line.effective_unit_price, 8.5);
        assert_eq!(line.total, 42_500_000_000.0);
    }

    #[test]
    fn zero_quantity_is_rejected() {
        assert_eq!(
            price_quote("Widget", Some(10.0), 0, "USD").unwrap_err(),
            PricingError::InvalidQuantity(0)
        );
    }

    #[test]
    fn missing_base_price_prices_to_zero() {
        let line = price_quote("Widget", None, 250, "USD").unwrap();
        assert_eq!(line.base_unit_price, 0.0);
        assert_eq!(line.effective_unit_price, 0.0);
        assert_eq!(line.total, 0.0);
    }

    #[test]
    fn non_finite_base_price_prices_to_zero() {
        let line = price_quote("Widget", Some(f64::NAN), 250, "USD").unwrap();
        assert_eq!(line.total, 0.0);
    }

    #[test]
    fn effective_price_never_increases_across_tiers() {
        let mut previous = f64::INFINITY;
        for quantity in [1, 999, 1000, 4999, 5000, 9999, 10_000, 50_000] {
            let line = priced(quantity);
            assert!(line.effective_unit_price <= previous);
            previous = line.effective_unit_price;
        }
    }

    #[test]
    fn identical_inputs_produce_identical_outputs() {
        assert_eq!(priced(7500), priced(7500));
    }
}
