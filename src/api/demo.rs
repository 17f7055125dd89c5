//! Built-in demo candidates for running without a GraphHopper key.
//!
//! Serves three fixed Larkana → Karachi alternatives through the same
//! costing and ranking pipeline as live provider data.

use super::models::{Point, RouteCandidate};
use super::polyline::{encode, Polyline};

pub(super) fn demo_candidates(origin: &str, destination: &str) -> Vec<RouteCandidate> {
    let larkana = Point {
        lat: 27.559,
        lng: 68.212,
    };
    let karachi = Point {
        lat: 24.8607,
        lng: 67.0011,
    };

    // N-55 highway, the direct run
    let direct = path(
        larkana,
        karachi,
        &[
            Point { lat: 27.2, lng: 68.15 },
            Point { lat: 26.8, lng: 68.05 },
            Point { lat: 26.3, lng: 67.95 },
            Point { lat: 25.9, lng: 67.7 },
            Point { lat: 25.5, lng: 67.4 },
            Point { lat: 25.1, lng: 67.2 },
        ],
    );

    // N-5 via Hyderabad, longer but calmer
    let via_hyderabad = path(
        larkana,
        karachi,
        &[
            Point { lat: 27.1, lng: 68.2 },
            Point { lat: 26.5, lng: 68.3 },
            Point { lat: 25.8, lng: 68.35 },
            Point { lat: 25.396, lng: 68.3737 },
            Point { lat: 25.2, lng: 68.2 },
            Point { lat: 25.0, lng: 67.9 },
            Point { lat: 24.95, lng: 67.6 },
        ],
    );

    // winding detour through the countryside
    let scenic = path(
        larkana,
        karachi,
        &[
            Point { lat: 27.3, lng: 68.3 },
            Point { lat: 27.0, lng: 68.4 },
            Point { lat: 26.6, lng: 68.35 },
            Point { lat: 26.2, lng: 68.25 },
            Point { lat: 25.8, lng: 68.1 },
            Point { lat: 25.4, lng: 67.95 },
            Point { lat: 25.0, lng: 67.8 },
            Point { lat: 24.9, lng: 67.5 },
        ],
    );

    vec![
        candidate(format!("{origin} → {destination}"), 450.0, 360.0, direct),
        candidate(
            format!("{origin} → Hyderabad → {destination}"),
            480.0,
            390.0,
            via_hyderabad,
        ),
        candidate(
            format!("{origin} → Scenic Route → {destination}"),
            520.0,
            420.0,
            scenic,
        ),
    ]
}

fn path(start: Point, end: Point, waypoints: &[Point]) -> Vec<Point> {
    let mut points = Vec::with_capacity(waypoints.len() + 2);
    points.push(start);
    points.extend_from_slice(waypoints);
    points.push(end);
    points
}

fn candidate(
    summary: String,
    distance_km: f64,
    duration_minutes: f64,
    points: Vec<Point>,
) -> RouteCandidate {
    let polyline = Polyline::Encoded(encode(&points));
    RouteCandidate {
        summary,
        distance_km: Some(distance_km),
        duration_traffic_minutes: Some(duration_minutes),
        duration_minutes: None,
        points,
        polyline,
    }
}
