//! Domain logic for shipment metrics, route ranking and quote pricing.

pub mod pricing;
pub mod routing;
pub mod shipment;
pub mod units;

pub use pricing::{discount_multiplier, price_quote, PricingError, QuoteLine};
pub use routing::{
    recommend, recommend_weighted, score_candidates, FreightMode, Incoterm, Location,
    RouteCandidate, RouteError, RouteLeg, RoutePreference, RouteRecommendationResult,
    ScoringWeights, SpeedPreference,
};
pub use shipment::{compute_metrics, PhysicalItem, ShipmentMetrics};
pub use units::{
    to_centimeters, to_centimeters_str, to_kilograms, to_kilograms_str, LengthUnit, UnitError,
    WeightUnit,
};
