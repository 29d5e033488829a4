//! JSON request envelopes for the console's request handlers.
//!
//! The core stays a plain library; these types pin the wire field names the
//! handlers exchange with the UI and adapt them onto the domain functions.

use serde::{Deserialize, Serialize};

use crate::domain::{
    compute_metrics, price_quote, recommend, FreightMode, Location, PhysicalItem, PricingError,
    QuoteLine, RouteError, RoutePreference, RouteRecommendationResult, ShipmentMetrics,
    SpeedPreference,
};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentMetricsRequest {
    #[serde(default)]
    pub items: Vec<PhysicalItem>,
}

pub fn shipment_metrics(request: &ShipmentMetricsRequest) -> ShipmentMetrics {
    compute_metrics(&request.items)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecommendationRequest {
    pub origin: Location,
    pub destination: Location,
    pub freight_mode: FreightMode,
    #[serde(default)]
    pub speed_preference: SpeedPreference,
    pub metrics: ShipmentMetrics,
}

pub fn route_recommendation(
    request: &RouteRecommendationRequest,
) -> Result<RouteRecommendationResult, RouteError> {
    let preference = RoutePreference {
        freight_mode: request.freight_mode,
        speed_preference: request.speed_preference,
    };
    recommend(
        &request.metrics,
        &preference,
        &request.origin,
        &request.destination,
    )
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotePricingRequest {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub base_unit_price: Option<f64>,
    /// Signed on the wire so non-positive values surface as a validation
    /// failure instead of a deserialization error.
    pub quantity: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

pub fn quote_pricing(request: &QuotePricingRequest) -> Result<QuoteLine, PricingError> {
    let quantity = u64::try_from(request.quantity)
        .ok()
        .filter(|q| *q > 0)
        .ok_or(PricingError::InvalidQuantity(request.quantity))?;
    price_quote(
        &request.product_name,
        request.base_unit_price,
        quantity,
        &request.currency,
    )
}
