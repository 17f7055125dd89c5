use actix_web::http::StatusCode;
use actix_web::ResponseError;

use super::error::ApiError;
use super::models::{CostWeights, Point, RouteCandidate};
use super::polyline::Polyline;
use super::scoring::{compute_cost, fuel_cost, rank, to_smart_score};
use super::util::{non_blank, positive};

fn candidate(summary: &str, distance_km: Option<f64>, duration: Option<f64>) -> RouteCandidate {
    RouteCandidate {
        summary: summary.to_string(),
        distance_km,
        duration_traffic_minutes: duration,
        duration_minutes: None,
        points: vec![Point {
            lat: 27.559,
            lng: 68.212,
        }],
        polyline: Polyline::Encoded("_p~iF~ps|U".to_string()),
    }
}

#[test]
fn fuel_cost_follows_the_mileage_formula() {
    let cost = fuel_cost(Some(450.0), Some(14.0), Some(280.0)).unwrap();
    assert!((cost - 9000.0).abs() < 1e-6);
}

#[test]
fn fuel_cost_guards_unusable_inputs() {
    assert_eq!(fuel_cost(None, Some(14.0), Some(280.0)), None);
    assert_eq!(fuel_cost(Some(450.0), None, Some(280.0)), None);
    assert_eq!(fuel_cost(Some(450.0), Some(14.0), None), None);
    assert_eq!(fuel_cost(Some(450.0), Some(0.0), Some(280.0)), None);
    assert_eq!(fuel_cost(Some(450.0), Some(-5.0), Some(280.0)), None);
    assert_eq!(fuel_cost(Some(450.0), Some(f64::NAN), Some(280.0)), None);
}

#[test]
fn cost_is_strictly_monotonic_in_duration() {
    let weights = CostWeights::default();
    let shorter = compute_cost(360.0, Some(100.0), &weights);
    let longer = compute_cost(361.0, Some(100.0), &weights);
    assert!(longer > shorter);
}

#[test]
fn missing_duration_costs_infinity() {
    let weights = CostWeights::default();
    assert!(compute_cost(f64::INFINITY, Some(100.0), &weights).is_infinite());
}

#[test]
fn cost_combines_time_and_fuel_with_default_weights() {
    let weights = CostWeights::default();
    assert_eq!(compute_cost(360.0, Some(100.0), &weights), 380.0);
    assert_eq!(compute_cost(390.0, Some(110.0), &weights), 412.0);
    assert_eq!(compute_cost(420.0, Some(130.0), &weights), 446.0);
    assert_eq!(compute_cost(360.0, None, &weights), 360.0);
}

#[test]
fn smart_score_stays_within_bounds() {
    for cost in [0.0, 1.0, 223.0, 380.0, 446.0, 1000.0] {
        let score = to_smart_score(cost, 446.0);
        assert!((5.0..=10.0).contains(&score), "{cost} scored {score}");
    }
    assert_eq!(to_smart_score(0.0, 0.0), 10.0);
    assert_eq!(to_smart_score(0.0, 446.0), 10.0);
    assert_eq!(to_smart_score(446.0, 446.0), 5.0);
}

#[test]
fn ranking_is_deterministic_for_the_reference_candidates() {
    // mileage 1 at price 1 makes fuel cost equal the distance, so the
    // costs land at 380, 412 and 446 under the default weights
    let candidates = vec![
        candidate("direct", Some(100.0), Some(360.0)),
        candidate("via hyderabad", Some(110.0), Some(390.0)),
        candidate("scenic", Some(130.0), Some(420.0)),
    ];

    let result = rank(&candidates, Some(1.0), Some(1.0), &CostWeights::default()).unwrap();

    assert_eq!(result.routes.len(), 3);
    assert_eq!(result.routes[0].cost, 380.0);
    assert_eq!(result.routes[1].cost, 412.0);
    assert_eq!(result.routes[2].cost, 446.0);

    assert!((result.routes[0].smart_score - 5.739_910_313_9).abs() < 1e-6);
    assert!((result.routes[1].smart_score - 5.381_165_919_2).abs() < 1e-6);
    assert_eq!(result.routes[2].smart_score, 5.0);

    assert_eq!(result.best_route.summary, "direct");
    // routes keep provider order, not cost order
    assert_eq!(result.routes[0].summary, "direct");
    assert_eq!(result.routes[1].summary, "via hyderabad");
    assert_eq!(result.routes[2].summary, "scenic");
}

#[test]
fn equal_costs_break_ties_by_input_order() {
    let candidates = vec![
        candidate("first", Some(100.0), Some(360.0)),
        candidate("second", Some(100.0), Some(360.0)),
    ];

    let result = rank(&candidates, Some(1.0), Some(1.0), &CostWeights::default()).unwrap();
    assert_eq!(result.best_route.summary, "first");
}

#[test]
fn missing_duration_is_never_best_unless_sole() {
    let candidates = vec![
        candidate("no duration", Some(100.0), None),
        candidate("timed", Some(100.0), Some(360.0)),
    ];

    let result = rank(&candidates, None, None, &CostWeights::default()).unwrap();
    assert_eq!(result.routes.len(), 2);
    assert!(result.routes[0].cost.is_infinite());
    assert_eq!(result.routes[0].smart_score, 5.0);
    assert_eq!(result.best_route.summary, "timed");

    let sole = vec![candidate("no duration", Some(100.0), None)];
    let result = rank(&sole, None, None, &CostWeights::default()).unwrap();
    assert_eq!(result.best_route.summary, "no duration");
}

#[test]
fn candidates_without_leg_data_are_dropped() {
    let candidates = vec![
        candidate("empty", None, None),
        candidate("timed", Some(100.0), Some(360.0)),
    ];

    let result = rank(&candidates, None, None, &CostWeights::default()).unwrap();
    assert_eq!(result.routes.len(), 1);
    assert_eq!(result.routes[0].summary, "timed");
}

#[test]
fn zero_usable_candidates_yield_no_result() {
    let candidates = vec![candidate("empty", None, None), candidate("bare", None, None)];
    assert!(rank(&candidates, None, None, &CostWeights::default()).is_none());
}

#[test]
fn ranking_result_serializes_the_wire_contract() {
    let candidates = vec![candidate("direct", Some(450.0), Some(360.0))];
    let result = rank(&candidates, Some(280.0), Some(14.0), &CostWeights::default()).unwrap();

    let value = serde_json::to_value(&result).unwrap();
    let best = value.get("bestRoute").unwrap();
    assert_eq!(best.get("summary").unwrap(), "direct");
    assert_eq!(best.get("distanceKm").unwrap(), 450.0);
    assert_eq!(best.get("durationTrafficMinutes").unwrap(), 360.0);
    let fuel = best.get("fuelCost").unwrap().as_f64().unwrap();
    assert!((fuel - 9000.0).abs() < 1e-6);
    assert!(best.get("smartScore").is_some());
    assert!(best.get("points").is_some());
    assert!(best.get("polyline").is_some());
    assert!(best.get("cost").is_none());

    assert_eq!(value.get("routes").unwrap().as_array().unwrap().len(), 1);
}

#[test]
fn request_field_gates_trim_and_filter() {
    assert_eq!(non_blank("  Larkana "), Some("Larkana"));
    assert_eq!(non_blank("   "), None);
    assert_eq!(non_blank(""), None);

    assert_eq!(positive(Some(14.0)), Some(14.0));
    assert_eq!(positive(Some(0.0)), None);
    assert_eq!(positive(Some(-1.0)), None);
    assert_eq!(positive(Some(f64::INFINITY)), None);
    assert_eq!(positive(None), None);
}

#[test]
fn errors_map_onto_the_wire_contract() {
    assert_eq!(ApiError::MissingPlaces.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(ApiError::NoRoutes.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(ApiError::NoUsableRoutes.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        ApiError::GeocodeNotFound {
            place: "Atlantis".to_string()
        }
        .status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        ApiError::Provider {
            detail: "connection refused".to_string()
        }
        .status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );

    assert_eq!(
        ApiError::MissingPlaces.to_string(),
        "Origin and destination are required"
    );
    assert_eq!(ApiError::NoRoutes.to_string(), "No routes returned");
    assert_eq!(
        ApiError::NoUsableRoutes.to_string(),
        "No usable routes returned"
    );
    // upstream detail never reaches the client string
    assert_eq!(
        ApiError::Provider {
            detail: "secret upstream detail".to_string()
        }
        .to_string(),
        "Routing failed. Check GraphHopper key and request."
    );
}
