use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;

use super::demo::demo_candidates;
use super::error::ApiError;
use super::graphhopper::{GraphHopperClient, RouteSource};
use super::models::{CostWeights, JourneyRequest, RouteCandidate};
use super::scoring::rank;
use super::util::{non_blank, positive};

pub(super) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(plan_route);
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({"ok": true}))
}

#[post("/api/route")]
async fn plan_route(
    source: web::Data<RouteSource>,
    req: web::Json<JourneyRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    let origin = req
        .origin
        .as_deref()
        .and_then(non_blank)
        .ok_or(ApiError::MissingPlaces)?;
    let destination = req
        .destination
        .as_deref()
        .and_then(non_blank)
        .ok_or(ApiError::MissingPlaces)?;

    let candidates = match source.get_ref() {
        RouteSource::Live(client) => fetch_live(client, origin, destination).await?,
        RouteSource::Demo => demo_candidates(origin, destination),
    };
    if candidates.is_empty() {
        return Err(ApiError::NoRoutes);
    }

    let result = rank(
        &candidates,
        positive(req.fuel_price),
        positive(req.mileage),
        &CostWeights::default(),
    )
    .ok_or(ApiError::NoUsableRoutes)?;

    Ok(HttpResponse::Ok().json(result))
}

async fn fetch_live(
    client: &GraphHopperClient,
    origin: &str,
    destination: &str,
) -> Result<Vec<RouteCandidate>, ApiError> {
    let origin_place = client.geocode(origin).await?;
    let dest_place = client.geocode(destination).await?;
    client.fetch_routes(&origin_place, &dest_place).await
}
