use super::heap::MinCostHeap;
use super::models::{CostWeights, RankingResult, RouteCandidate, ScoredRoute};
use super::util::positive;

/// Weighted scalar cost of a candidate; lower is better. A missing duration
/// is passed in as infinity and dominates regardless of fuel expense.
pub(super) fn compute_cost(
    duration_minutes: f64,
    fuel_cost: Option<f64>,
    weights: &CostWeights,
) -> f64 {
    duration_minutes * weights.time_weight + fuel_cost.unwrap_or(0.0) * weights.fuel_weight
}

/// Fuel expense for a trip: `(distance / mileage) * price`.
///
/// `None` unless the distance is known and mileage and price are both
/// positive and finite, so a zero mileage can never divide through.
pub(super) fn fuel_cost(
    distance_km: Option<f64>,
    mileage: Option<f64>,
    fuel_price: Option<f64>,
) -> Option<f64> {
    let distance = distance_km?;
    let mileage = positive(mileage)?;
    let price = positive(fuel_price)?;
    Some((distance / mileage) * price)
}

/// Bounded display score: 5 for the costliest candidate, 10 for a free one.
pub(super) fn to_smart_score(cost: f64, max_cost: f64) -> f64 {
    if max_cost <= 0.0 {
        return 10.0;
    }
    if !cost.is_finite() {
        return 5.0;
    }
    let normalized = (1.0 - cost / max_cost).clamp(0.0, 1.0);
    5.0 + normalized * 5.0
}

/// Costs, scores and ranks the provider's candidates.
///
/// Candidates without any leg data are dropped. The returned `routes` keep
/// the provider's order; `best_route` is the cheapest, with ties going to
/// the earliest candidate. `None` means nothing usable was retained.
pub(super) fn rank(
    candidates: &[RouteCandidate],
    fuel_price: Option<f64>,
    mileage: Option<f64>,
    weights: &CostWeights,
) -> Option<RankingResult> {
    let mut scored: Vec<ScoredRoute> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !candidate.has_leg_data() {
            log::debug!("Skipping candidate without leg data: {}", candidate.summary);
            continue;
        }
        let duration = candidate.effective_duration_minutes();
        let fuel = fuel_cost(candidate.distance_km, mileage, fuel_price);
        let cost = compute_cost(duration.unwrap_or(f64::INFINITY), fuel, weights);
        scored.push(ScoredRoute {
            summary: candidate.summary.clone(),
            distance_km: candidate.distance_km,
            duration_traffic_minutes: duration,
            fuel_cost: fuel,
            smart_score: 0.0,
            cost,
            points: candidate.points.clone(),
            polyline: candidate.polyline.clone(),
        });
    }

    if scored.is_empty() {
        return None;
    }

    let max_cost = scored.iter().map(|r| r.cost).fold(0.0, f64::max);
    for route in &mut scored {
        route.smart_score = to_smart_score(route.cost, max_cost);
    }

    let mut heap = MinCostHeap::with_capacity(scored.len());
    for (index, route) in scored.iter().enumerate() {
        heap.push(route.cost, index);
    }
    let (min_cost, _) = heap.pop()?;

    // earliest retained candidate at the minimum cost wins ties
    let best_index = scored.iter().position(|r| r.cost == min_cost)?;
    let best_route = scored[best_index].clone();

    Some(RankingResult {
        best_route,
        routes: scored,
    })
}
