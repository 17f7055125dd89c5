//! Route geometry codecs.
//!
//! GraphHopper delivers path geometry in one of two wire shapes depending on
//! `points_encoded`: a compact encoded-polyline string, or a GeoJSON
//! LineString object. Both deserialize into [`Polyline`], which decodes to
//! plain latitude/longitude points at the API boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::models::Point;

#[derive(Debug, Error, PartialEq)]
pub(super) enum PolylineError {
    #[error("invalid polyline byte {byte:#04x} at offset {offset}")]
    InvalidByte { byte: u8, offset: usize },
    #[error("polyline input ends in the middle of a value")]
    UnexpectedEnd,
    #[error("polyline value at offset {offset} exceeds 32 bits")]
    Overflow { offset: usize },
}

/// Path geometry in whichever shape the provider sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub(super) enum Polyline {
    Encoded(String),
    GeoPath(GeoPath),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(super) struct GeoPath {
    #[serde(rename = "type")]
    pub(super) kind: String,
    pub(super) coordinates: Value,
}

impl Polyline {
    /// Decodes either wire shape into points.
    ///
    /// Encoded strings decode strictly: a byte outside the polyline alphabet
    /// or input ending mid-value is an error. GeoJSON decodes leniently:
    /// anything that is not a LineString with numeric `[lng, lat]` pairs
    /// yields an empty sequence.
    pub(super) fn decode(&self) -> Result<Vec<Point>, PolylineError> {
        match self {
            Polyline::Encoded(encoded) => decode_encoded(encoded),
            Polyline::GeoPath(path) => Ok(decode_geo_path(path)),
        }
    }
}

pub(super) fn encode(points: &[Point]) -> String {
    let mut encoded = String::new();
    let mut prev_lat = 0i64;
    let mut prev_lng = 0i64;

    for point in points {
        let lat = (point.lat * 1e5).round() as i64;
        let lng = (point.lng * 1e5).round() as i64;
        encode_value(lat - prev_lat, &mut encoded);
        encode_value(lng - prev_lng, &mut encoded);
        prev_lat = lat;
        prev_lng = lng;
    }

    encoded
}

fn encode_value(value: i64, out: &mut String) {
    let mut value = if value < 0 { !(value << 1) } else { value << 1 };
    while value >= 0x20 {
        out.push((((0x20 | (value & 0x1f)) + 63) as u8) as char);
        value >>= 5;
    }
    out.push(((value + 63) as u8) as char);
}

fn decode_encoded(encoded: &str) -> Result<Vec<Point>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut offset = 0;
    let mut lat = 0i64;
    let mut lng = 0i64;
    let mut points = Vec::new();

    while offset < bytes.len() {
        lat += read_delta(bytes, &mut offset)?;
        lng += read_delta(bytes, &mut offset)?;
        points.push(Point {
            lat: lat as f64 / 1e5,
            lng: lng as f64 / 1e5,
        });
    }

    Ok(points)
}

fn read_delta(bytes: &[u8], offset: &mut usize) -> Result<i64, PolylineError> {
    let mut result = 0i64;
    let mut shift = 0u32;

    loop {
        let Some(&byte) = bytes.get(*offset) else {
            return Err(PolylineError::UnexpectedEnd);
        };
        let Some(chunk) = byte.checked_sub(63).filter(|c| *c < 0x40) else {
            return Err(PolylineError::InvalidByte {
                byte,
                offset: *offset,
            });
        };
        *offset += 1;

        result |= i64::from(chunk & 0x1f) << shift;
        shift += 5;
        if chunk < 0x20 {
            break;
        }
        if shift > 35 {
            return Err(PolylineError::Overflow { offset: *offset });
        }
    }

    Ok(if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

fn decode_geo_path(path: &GeoPath) -> Vec<Point> {
    if path.kind != "LineString" {
        return Vec::new();
    }
    let Some(pairs) = path.coordinates.as_array() else {
        return Vec::new();
    };

    let mut points = Vec::with_capacity(pairs.len());
    for pair in pairs {
        // wire order is longitude first
        let (Some(lng), Some(lat)) = (
            pair.get(0).and_then(Value::as_f64),
            pair.get(1).and_then(Value::as_f64),
        ) else {
            return Vec::new();
        };
        points.push(Point { lat, lng });
    }
    points
}
