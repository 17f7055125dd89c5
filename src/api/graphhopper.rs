use serde::Deserialize;

use super::error::ApiError;
use super::models::{Point, RouteCandidate};
use super::polyline::Polyline;
use super::util::{meters_to_km, millis_to_minutes};

const REQUEST_TIMEOUT_SECS: u64 = 10;
const MAX_ALTERNATIVES: u32 = 3;

/// Place name resolved to coordinates.
#[derive(Debug, Clone)]
pub(super) struct GeocodedPlace {
    pub(super) name: String,
    pub(super) point: Point,
}

/// Where `/api/route` gets its candidates from.
#[derive(Debug, Clone)]
pub(crate) enum RouteSource {
    Live(GraphHopperClient),
    Demo,
}

#[derive(Debug, Clone)]
pub(crate) struct GraphHopperClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl GraphHopperClient {
    pub(crate) fn new(base_url: String, api_key: String) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }

    /// Resolves a place name through the geocoding endpoint, taking the
    /// first hit. Zero hits is an error, never a guessed coordinate.
    pub(super) async fn geocode(&self, place: &str) -> Result<GeocodedPlace, ApiError> {
        let url = format!("{}/geocode", self.base_url);
        log::info!("Calling GraphHopper geocode for \"{place}\"");

        let response: GeocodeResponse = self
            .get_json(&url, &[("q", place), ("limit", "1"), ("key", &self.api_key)])
            .await?;

        let hit = response
            .hits
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::GeocodeNotFound {
                place: place.to_string(),
            })?;

        if !hit.point.in_range() {
            return Err(ApiError::Provider {
                detail: format!(
                    "geocode hit for \"{place}\" is out of range: {:?}",
                    hit.point
                ),
            });
        }

        Ok(GeocodedPlace {
            name: place.to_string(),
            point: hit.point,
        })
    }

    /// Fetches up to `MAX_ALTERNATIVES` candidate routes between two places.
    pub(super) async fn fetch_routes(
        &self,
        origin: &GeocodedPlace,
        destination: &GeocodedPlace,
    ) -> Result<Vec<RouteCandidate>, ApiError> {
        let url = format!("{}/route", self.base_url);
        let origin_param = format!("{},{}", origin.point.lat, origin.point.lng);
        let dest_param = format!("{},{}", destination.point.lat, destination.point.lng);
        let max_paths = MAX_ALTERNATIVES.to_string();
        log::info!(
            "Calling GraphHopper route {} -> {}",
            origin.name,
            destination.name
        );

        let response: RouteResponse = self
            .get_json(
                &url,
                &[
                    ("point", origin_param.as_str()),
                    ("point", dest_param.as_str()),
                    ("vehicle", "car"),
                    ("locale", "en"),
                    ("instructions", "true"),
                    ("calc_points", "true"),
                    ("points_encoded", "false"),
                    ("algorithm", "alternative_route"),
                    ("alternative_route.max_paths", max_paths.as_str()),
                    ("ch.disable", "true"),
                    ("key", self.api_key.as_str()),
                ],
            )
            .await?;

        let base_summary = format!("{} → {}", origin.name, destination.name);
        let mut candidates = Vec::with_capacity(response.paths.len());
        for (index, path) in response.paths.into_iter().enumerate() {
            candidates.push(path.into_candidate(&base_summary, index)?);
        }
        Ok(candidates)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Provider {
                detail: format!("GraphHopper request failed: {e}"),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Provider {
            detail: format!("GraphHopper read failed: {e}"),
        })?;

        if !status.is_success() {
            return Err(ApiError::Provider {
                detail: format!("GraphHopper error ({status}): {body}"),
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Provider {
            detail: format!("GraphHopper response was not valid JSON: {e}"),
        })
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    hits: Vec<GeocodeHit>,
}

#[derive(Debug, Deserialize)]
struct GeocodeHit {
    point: Point,
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    #[serde(default)]
    paths: Vec<RoutePath>,
}

/// One candidate path as GraphHopper returns it. Distances are meters,
/// times are milliseconds.
#[derive(Debug, Deserialize)]
struct RoutePath {
    distance: Option<f64>,
    time: Option<f64>,
    points: Option<Polyline>,
}

impl RoutePath {
    fn into_candidate(self, base_summary: &str, index: usize) -> Result<RouteCandidate, ApiError> {
        let summary = if index == 0 {
            base_summary.to_string()
        } else {
            format!("{base_summary} (alternative {})", index + 1)
        };

        let polyline = self
            .points
            .unwrap_or_else(|| Polyline::Encoded(String::new()));
        let points = polyline.decode().map_err(|e| ApiError::Provider {
            detail: format!("GraphHopper returned an undecodable polyline: {e}"),
        })?;

        Ok(RouteCandidate {
            summary,
            distance_km: self.distance.map(meters_to_km),
            duration_traffic_minutes: self.time.map(millis_to_minutes),
            duration_minutes: None,
            points,
            polyline,
        })
    }
}
