//! Shipment metrics and freight route recommendation core.
//!
//! - Derives the mode-specific chargeable quantities carriers bill a
//!   shipment by (actual vs. dimensional weight, W/M revenue tons).
//! - Synthesizes and ranks candidate carrier routes against cost, transit
//!   time, reliability and emissions.
//! - Prices quote lines through volume-discount tiers.
//!
//! Every operation is a pure, synchronous function over its arguments:
//! no shared state, no I/O, safe to call concurrently. Transport,
//! persistence and UI belong to the surrounding console, not here.

pub mod api;
pub mod domain;

pub use domain::{
    compute_metrics, discount_multiplier, price_quote, recommend, recommend_weighted,
    score_candidates, to_centimeters, to_kilograms, FreightMode, Incoterm, LengthUnit, Location,
    PhysicalItem, PricingError, QuoteLine, RouteCandidate, RouteError, RouteLeg, RoutePreference,
    RouteRecommendationResult, ScoringWeights, ShipmentMetrics, SpeedPreference, UnitError,
    WeightUnit,
};
