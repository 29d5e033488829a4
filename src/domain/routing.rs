//! Route candidate synthesis and multi-objective ranking.
//!
//! - Synthesizes one representative carrier offer per transport mode that is
//!   compatible with the requested freight mode and lane.
//! - Scores each offer against cost, transit time, reliability and emissions,
//!   then returns the set best-first.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::shipment::ShipmentMetrics;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no {mode} route available between {origin} and {destination}")]
    NoRouteAvailable {
        mode: String,
        origin: String,
        destination: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FreightMode {
    Air,
    Sea,
    Truck,
}

impl FreightMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Air => "air",
            Self::Sea => "sea",
            Self::Truck => "truck",
        }
    }
}

impl std::str::FromStr for FreightMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "air" => Ok(FreightMode::Air),
            "sea" | "ocean" => Ok(FreightMode::Sea),
            "truck" | "road" => Ok(FreightMode::Truck),
            other => Err(format!("unknown freight mode: {other}")),
        }
    }
}

/// How the shipper trades transit time against cost. The wire vocabulary
/// also admits `express`/`standard`/`economy` as synonyms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedPreference {
    #[serde(alias = "express")]
    Fastest,
    #[default]
    #[serde(alias = "standard")]
    Balanced,
    #[serde(alias = "economy")]
    Cheapest,
}

impl SpeedPreference {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fastest => "fastest",
            Self::Balanced => "balanced",
            Self::Cheapest => "cheapest",
        }
    }

    /// (ETA multiplier, cost multiplier). Faster service costs more.
    fn multipliers(&self) -> (f64, f64) {
        match self {
            Self::Fastest => (0.6, 1.35),
            Self::Balanced => (1.0, 1.0),
            Self::Cheapest => (1.4, 0.80),
        }
    }
}

impl std::str::FromStr for SpeedPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fastest" | "express" => Ok(SpeedPreference::Fastest),
            "balanced" | "standard" => Ok(SpeedPreference::Balanced),
            "cheapest" | "economy" => Ok(SpeedPreference::Cheapest),
            other => Err(format!("unknown speed preference: {other}")),
        }
    }
}

/// Standardized shipping-term code; which party bears cost/risk where.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Incoterm {
    Exw,
    Fob,
    Cif,
    Dap,
    Ddp,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub city: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_code: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePreference {
    pub freight_mode: FreightMode,
    #[serde(default)]
    pub speed_preference: SpeedPreference,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub from: String,
    pub to: String,
    pub mode: FreightMode,
}

/// One carrier/mode offer for the requested lane.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteCandidate {
    pub mode: FreightMode,
    pub carrier_name: String,
    pub eta_days: u32,
    pub cost_usd: f64,
    /// On-time fraction in [0, 1].
    pub reliability: f64,
    pub emissions_kg_co2e: f64,
    pub incoterm: Incoterm,
    pub legs: Vec<RouteLeg>,
    /// Weighted multi-objective score in [0, 1]; filled by the scorer.
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Relative importance of each objective. [`recommend_weighted`] scales
/// caller-supplied weights to sum to 1.0 before scoring, so every
/// recommendation reports unit-sum weights.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub cost: f64,
    pub eta: f64,
    pub reliability: f64,
    pub emissions: f64,
}

impl ScoringWeights {
    /// Scales the weights to a unit sum, preserving their proportions.
    /// A non-finite or non-positive sum falls back to the defaults.
    pub fn normalized(&self) -> Self {
        let sum = self.cost + self.eta + self.reliability + self.emissions;
        if !sum.is_finite() || sum <= 0.0 {
            return Self::default();
        }
        Self {
            cost: self.cost / sum,
            eta: self.eta / sum,
            reliability: self.reliability / sum,
            emissions: self.emissions / sum,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            cost: 0.40,
            eta: 0.35,
            reliability: 0.20,
            emissions: 0.05,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecommendationResult {
    /// Best-first by score.
    pub routes: Vec<RouteCandidate>,
    pub scoring_weights: ScoringWeights,
    pub why_top_pick: String,
}

// Per-mode carrier policy. Business configuration, not derived constants:
// the numbers only promise the monotonic ordering fastest > balanced >
// cheapest on cost and the reverse on ETA.
struct ModePolicy {
    carrier: &'static str,
    base_eta_days: f64,
    /// USD per chargeable unit (kg for air/truck, W/M revenue ton for sea).
    rate_usd: f64,
    min_cost_usd: f64,
    reliability: f64,
    /// kg CO₂e per kg of actual shipment weight.
    emissions_per_kg: f64,
    incoterm: Incoterm,
}

const AIR_POLICY: ModePolicy = ModePolicy {
    carrier: "Skybridge Air Cargo",
    base_eta_days: 5.0,
    rate_usd: 4.50,
    min_cost_usd: 120.0,
    reliability: 0.92,
    emissions_per_kg: 1.10,
    incoterm: Incoterm::Cif,
};

const SEA_POLICY: ModePolicy = ModePolicy {
    carrier: "Meridian Ocean Lines",
    base_eta_days: 30.0,
    rate_usd: 180.0,
    min_cost_usd: 150.0,
    reliability: 0.85,
    emissions_per_kg: 0.02,
    incoterm: Incoterm::Fob,
};

const TRUCK_POLICY: ModePolicy = ModePolicy {
    carrier: "Crossland Haulage",
    base_eta_days: 4.0,
    rate_usd: 0.90,
    min_cost_usd: 80.0,
    reliability: 0.88,
    emissions_per_kg: 0.12,
    incoterm: Incoterm::Exw,
};

fn policy_for(mode: FreightMode) -> &'static ModePolicy {
    match mode {
        FreightMode::Air => &AIR_POLICY,
        FreightMode::Sea => &SEA_POLICY,
        FreightMode::Truck => &TRUCK_POLICY,
    }
}

fn chargeable_units(mode: FreightMode, metrics: &ShipmentMetrics) -> f64 {
    match mode {
        FreightMode::Air => metrics.chargeable_air_kg,
        FreightMode::Sea => metrics.sea_weight_or_measure_ton,
        FreightMode::Truck => metrics.truck_chargeable_kg,
    }
}

/// Modes that can serve the lane. Truck only runs domestically; a domestic
/// lane additionally admits a truck offer next to the requested mode.
fn compatible_modes(requested: FreightMode, origin: &Location, destination: &Location) -> Vec<FreightMode> {
    let domestic = origin.country.eq_ignore_ascii_case(&destination.country);
    match requested {
        FreightMode::Truck if domestic => vec![FreightMode::Truck],
        FreightMode::Truck => vec![],
        mode if domestic => vec![mode, FreightMode::Truck],
        mode => vec![mode],
    }
}

fn build_legs(mode: FreightMode, origin: &Location, destination: &Location) -> Vec<RouteLeg> {
    if mode == FreightMode::Sea {
        if let (Some(origin_port), Some(dest_port)) =
            (origin.port_code.as_ref(), destination.port_code.as_ref())
        {
            return vec![
                RouteLeg {
                    from: origin.city.clone(),
                    to: origin_port.clone(),
                    mode: FreightMode::Truck,
                },
                RouteLeg {
                    from: origin_port.clone(),
                    to: dest_port.clone(),
                    mode: FreightMode::Sea,
                },
                RouteLeg {
                    from: dest_port.clone(),
                    to: destination.city.clone(),
                    mode: FreightMode::Truck,
                },
            ];
        }
    }

    vec![RouteLeg {
        from: origin.city.clone(),
        to: destination.city.clone(),
        mode,
    }]
}

fn build_notes(mode: FreightMode, metrics: &ShipmentMetrics) -> Option<String> {
    let mut notes = Vec::new();
    if mode == FreightMode::Air && metrics.air_volumetric_kg > metrics.total_weight_kg {
        notes.push("Billed by dimensional weight".to_string());
    }
    if mode == FreightMode::Sea && metrics.total_volume_cbm > metrics.total_weight_kg / 1000.0 {
        notes.push("Billed by measure (CBM)".to_string());
    }

    if notes.is_empty() {
        None
    } else {
        Some(notes.join(", "))
    }
}

fn synthesize_candidate(
    mode: FreightMode,
    preference: SpeedPreference,
    metrics: &ShipmentMetrics,
    origin: &Location,
    destination: &Location,
) -> RouteCandidate {
    let policy = policy_for(mode);
    let (eta_mult, cost_mult) = preference.multipliers();
    let eta_days = ((policy.base_eta_days * eta_mult).round() as u32).max(1);
    let cost_usd = (policy.rate_usd * chargeable_units(mode, metrics))
        .max(policy.min_cost_usd)
        * cost_mult;

    RouteCandidate {
        mode,
        carrier_name: policy.carrier.to_string(),
        eta_days,
        cost_usd,
        reliability: policy.reliability,
        emissions_kg_co2e: policy.emissions_per_kg * metrics.total_weight_kg,
        incoterm: policy.incoterm,
        legs: build_legs(mode, origin, destination),
        score: 0.0,
        notes: build_notes(mode, metrics),
    }
}

/// Inverted linear normalization: the smallest value maps to 1.0, the
/// largest to 0.0. A degenerate spread maps everything to 1.0 so a lone
/// candidate is never penalized.
fn inverse_normalize(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    values
        .iter()
        .map(|v| {
            if span > f64::EPSILON {
                (max - v) / span
            } else {
                1.0
            }
        })
        .collect()
}

/// Scores and ranks candidates in place: descending by score, ties broken
/// by lower cost, then lower ETA.
pub fn score_candidates(candidates: &mut [RouteCandidate], weights: &ScoringWeights) {
    let costs: Vec<f64> = candidates.iter().map(|c| c.cost_usd).collect();
    let etas: Vec<f64> = candidates.iter().map(|c| c.eta_days as f64).collect();
    let emissions: Vec<f64> = candidates.iter().map(|c| c.emissions_kg_co2e).collect();

    let cost_scores = inverse_normalize(&costs);
    let eta_scores = inverse_normalize(&etas);
    let emissions_scores = inverse_normalize(&emissions);

    for (i, candidate) in candidates.iter_mut().enumerate() {
        candidate.score = (weights.cost * cost_scores[i]
            + weights.eta * eta_scores[i]
            + weights.reliability * candidate.reliability
            + weights.emissions * emissions_scores[i])
            .clamp(0.0, 1.0);
    }

    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.cost_usd.partial_cmp(&b.cost_usd).unwrap_or(Ordering::Equal))
            .then_with(|| a.eta_days.cmp(&b.eta_days))
    });
}

/// Recommends ranked routes for a lane with the default scoring weights.
pub fn recommend(
    metrics: &ShipmentMetrics,
    preference: &RoutePreference,
    origin: &Location,
    destination: &Location,
) -> Result<RouteRecommendationResult, RouteError> {
    recommend_weighted(metrics, preference, origin, destination, &ScoringWeights::default())
}

/// [`recommend`] with caller-supplied scoring weights. The weights are
/// normalized to a unit sum before use.
pub fn recommend_weighted(
    metrics: &ShipmentMetrics,
    preference: &RoutePreference,
    origin: &Location,
    destination: &Location,
    weights: &ScoringWeights,
) -> Result<RouteRecommendationResult, RouteError> {
    let weights = weights.normalized();
    let modes = compatible_modes(preference.freight_mode, origin, destination);
    if modes.is_empty() {
        return Err(RouteError::NoRouteAvailable {
            mode: preference.freight_mode.label().to_string(),
            origin: origin.city.clone(),
            destination: destination.city.clone(),
        });
    }

    let mut routes: Vec<RouteCandidate> = modes
        .into_iter()
        .map(|mode| {
            synthesize_candidate(mode, preference.speed_preference, metrics, origin, destination)
        })
        .collect();
    score_candidates(&mut routes, &weights);

    debug!(
        candidates = routes.len(),
        mode = preference.freight_mode.label(),
        speed = preference.speed_preference.label(),
        "ranked route candidates"
    );

    let why_top_pick = routes
        .first()
        .map(|top| {
            format!(
                "{} is the strongest match for your {} preference at {:.0}% on-time reliability.",
                top.carrier_name,
                preference.speed_preference.label(),
                top.reliability * 100.0
            )
        })
        .unwrap_or_default();

    Ok(RouteRecommendationResult {
        routes,
        scoring_weights: weights,
        why_top_pick,
    })
}
