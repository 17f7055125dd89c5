use serde::{Deserialize, Serialize};

use super::polyline::Polyline;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct JourneyRequest {
    #[serde(default)]
    pub(super) origin: Option<String>,
    #[serde(default)]
    pub(super) destination: Option<String>,
    #[serde(default)]
    pub(super) fuel_price: Option<f64>,
    #[serde(default)]
    pub(super) mileage: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(super) struct Point {
    pub(super) lat: f64,
    pub(super) lng: f64,
}

impl Point {
    pub(super) fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// One candidate as delivered by the provider, before costing.
#[derive(Debug, Clone)]
pub(super) struct RouteCandidate {
    pub(super) summary: String,
    pub(super) distance_km: Option<f64>,
    pub(super) duration_traffic_minutes: Option<f64>,
    pub(super) duration_minutes: Option<f64>,
    pub(super) points: Vec<Point>,
    pub(super) polyline: Polyline,
}

impl RouteCandidate {
    /// Traffic-aware duration when the provider supplied one, base otherwise.
    pub(super) fn effective_duration_minutes(&self) -> Option<f64> {
        self.duration_traffic_minutes.or(self.duration_minutes)
    }

    pub(super) fn has_leg_data(&self) -> bool {
        self.distance_km.is_some() || self.effective_duration_minutes().is_some()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ScoredRoute {
    pub(super) summary: String,
    pub(super) distance_km: Option<f64>,
    pub(super) duration_traffic_minutes: Option<f64>,
    pub(super) fuel_cost: Option<f64>,
    pub(super) smart_score: f64,
    // ranking key only, never sent to the client
    #[serde(skip_serializing)]
    pub(super) cost: f64,
    pub(super) points: Vec<Point>,
    pub(super) polyline: Polyline,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RankingResult {
    pub(super) best_route: ScoredRoute,
    pub(super) routes: Vec<ScoredRoute>,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct CostWeights {
    pub(super) time_weight: f64,
    pub(super) fuel_weight: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            time_weight: 1.0,
            fuel_weight: 0.2,
        }
    }
}
