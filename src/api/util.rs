pub(super) fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

pub(super) fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

pub(super) fn meters_to_km(meters: f64) -> f64 {
    meters / 1000.0
}

pub(super) fn millis_to_minutes(millis: f64) -> f64 {
    millis / 60_000.0
}
