//! Shipment totals and mode-specific chargeable quantities.
//!
//! Freight carriers bill the larger of actual and dimensional weight, so a
//! bulky-but-light shipment can cost far more than its scale weight
//! suggests. This module derives those chargeable figures once so every
//! downstream consumer (route scoring, quote drafting) agrees on them.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Air volumetric divisor in cm³ per kg (IATA convention).
const AIR_VOLUMETRIC_DIVISOR: f64 = 6000.0;
const CM3_PER_CBM: f64 = 1_000_000.0;
const KG_PER_TON: f64 = 1000.0;

/// One line of cargo.
///
/// Intake data is frequently incomplete: a line missing its weight or
/// dimensions is not an error, it simply contributes zero on that axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalItem {
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_weight_kg: Option<f64>,
    /// Length, width, height in centimeters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions_cm: Option<[f64; 3]>,
}

impl PhysicalItem {
    /// A whole-shipment aggregate: total weight plus one overall dimension
    /// triple, treated as a one-item list by [`compute_metrics`].
    pub fn aggregate(total_weight_kg: f64, dimensions_cm: Option<[f64; 3]>) -> Self {
        Self {
            quantity: 1,
            unit_weight_kg: Some(total_weight_kg),
            dimensions_cm,
        }
    }
}

/// Derived shipment figures. Computed fresh on every request; never cached
/// across differing item sets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentMetrics {
    pub total_weight_kg: f64,
    pub total_volume_cbm: f64,
    pub air_volumetric_kg: f64,
    /// max(actual, volumetric) — air carriers bill whichever is larger.
    pub chargeable_air_kg: f64,
    /// Revenue ton: max(weight tons, CBM).
    pub sea_weight_or_measure_ton: f64,
    pub truck_chargeable_kg: f64,
}

/// Derives totals and chargeable weights for a list of cargo lines.
///
/// An empty list yields all-zero metrics rather than an error.
pub fn compute_metrics(items: &[PhysicalItem]) -> ShipmentMetrics {
    let mut total_weight_kg = 0.0;
    let mut total_volume_cbm = 0.0;
    let mut air_volumetric_kg = 0.0;

    for item in items {
        let quantity = item.quantity as f64;
        if let Some(unit_weight) = item.unit_weight_kg {
            total_weight_kg += quantity * unit_weight;
        }
        if let Some([length, width, height]) = item.dimensions_cm {
            let volume_cm3 = length * width * height;
            total_volume_cbm += volume_cm3 * quantity / CM3_PER_CBM;
            air_volumetric_kg += volume_cm3 / AIR_VOLUMETRIC_DIVISOR * quantity;
        }
    }

    let metrics = ShipmentMetrics {
        total_weight_kg,
        total_volume_cbm,
        air_volumetric_kg,
        chargeable_air_kg: total_weight_kg.max(air_volumetric_kg),
        sea_weight_or_measure_ton: (total_weight_kg / KG_PER_TON).max(total_volume_cbm),
        // Road freight carries no volumetric adjustment in this model.
        truck_chargeable_kg: total_weight_kg,
    };

    debug!(
        items = items.len(),
        total_weight_kg = metrics.total_weight_kg,
        chargeable_air_kg = metrics.chargeable_air_kg,
        "computed shipment metrics"
    );

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: u32, weight: Option<f64>, dims: Option<[f64; 3]>) -> PhysicalItem {
        PhysicalItem {
            quantity,
            unit_weight_kg: weight,
            dimensions_cm: dims,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn single_item_with_weight_and_dimensions() {
        let metrics = compute_metrics(&[item(1, Some(10.0), Some([50.0, 40.0, 30.0]))]);

        assert_close(metrics.total_weight_kg, 10.0);
        assert_close(metrics.total_volume_cbm, 0.06);
        assert_close(metrics.air_volumetric_kg, 10.0);
        assert_close(metrics.chargeable_air_kg, 10.0);
        assert_close(metrics.sea_weight_or_measure_ton, 0.06);
        assert_close(metrics.truck_chargeable_kg, 10.0);
    }

    #[test]
    fn items_without_dimensions_contribute_weight_only() {
        let metrics = compute_metrics(&[item(2, Some(5.0), None)]);

        assert_close(metrics.total_weight_kg, 10.0);
        assert_close(metrics.total_volume_cbm, 0.0);
        assert_close(metrics.air_volumetric_kg, 0.0);
        assert_close(metrics.chargeable_air_kg, 10.0);
        assert_close(metrics.sea_weight_or_measure_ton, 0.01);
    }

    #[test]
    fn items_without_weight_contribute_volume_only() {
        let metrics = compute_metrics(&[item(1, None, Some([100.0, 100.0, 100.0]))]);

        assert_close(metrics.total_weight_kg, 0.0);
        assert_close(metrics.total_volume_cbm, 1.0);
        // 1,000,000 cm³ / 6000 = 166.67 volumetric kg with zero scale weight.
        assert_close(metrics.air_volumetric_kg, 1_000_000.0 / 6000.0);
        assert_close(metrics.chargeable_air_kg, 1_000_000.0 / 6000.0);
        assert_close(metrics.sea_weight_or_measure_ton, 1.0);
    }

    #[test]
    fn empty_item_list_yields_all_zeros() {
        assert_eq!(compute_metrics(&[]), ShipmentMetrics::default());
    }

    #[test]
    fn aggregate_shipment_matches_equivalent_item_list() {
        let aggregate = compute_metrics(&[PhysicalItem::aggregate(120.0, Some([120.0, 80.0, 100.0]))]);
        let granular = compute_metrics(&[item(1, Some(120.0), Some([120.0, 80.0, 100.0]))]);

        assert_eq!(aggregate, granular);
    }

    #[test]
    fn recomputation_is_bit_identical() {
        let items = [
            item(3, Some(7.5), Some([40.0, 30.0, 20.0])),
            item(2, Some(1.25), None),
        ];

        assert_eq!(compute_metrics(&items), compute_metrics(&items));
    }

    #[test]
    fn chargeable_air_dominates_both_weights() {
        let dense = compute_metrics(&[item(4, Some(50.0), Some([10.0, 10.0, 10.0]))]);
        let bulky = compute_metrics(&[item(4, Some(0.5), Some([60.0, 50.0, 40.0]))]);

        for metrics in [dense, bulky] {
            assert!(metrics.chargeable_air_kg >= metrics.total_weight_kg);
            assert!(metrics.chargeable_air_kg >= metrics.air_volumetric_kg);
        }
    }

    #[test]
    fn increasing_quantity_never_decreases_metrics() {
        let base = compute_metrics(&[item(2, Some(3.0), Some([25.0, 25.0, 25.0]))]);
        let more = compute_metrics(&[item(3, Some(3.0), Some([25.0, 25.0, 25.0]))]);

        assert!(more.total_weight_kg >= base.total_weight_kg);
        assert!(more.total_volume_cbm >= base.total_volume_cbm);
        assert!(more.air_volumetric_kg >= base.air_volumetric_kg);
        assert!(more.chargeable_air_kg >= base.chargeable_air_kg);
        assert!(more.sea_weight_or_measure_ton >= base.sea_weight_or_measure_ton);
    }
}
