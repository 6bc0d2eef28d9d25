//! Places nearby-search payloads and their conversion into [`Candidate`]s.
//!
//! Only the fields the ranking engine needs are modelled. Observed shape of a
//! result entry:
//!
//! - `rating` is omitted for places without reviews; we default to `0.0`.
//! - `price_level` is omitted for most places; we default to
//!   [`UNKNOWN_PRICE_LEVEL`].
//! - `vicinity` is a short street address and is occasionally missing.
//! - `geometry.location` is always present.
//!
//! Fetching the payload is left to the caller.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::candidates::{Candidate, Coordinate, UNKNOWN_PRICE_LEVEL};

#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("places search returned status {0}")]
    Status(String),
}

/// Top-level nearby-search response.
#[derive(Debug, Deserialize)]
pub struct PlacesResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceResult>,
}

impl PlacesResponse {
    /// Parse a raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Json`] if the body is not a valid response.
    pub fn from_json(body: &str) -> Result<Self, PlacesError> {
        Ok(serde_json::from_str(body)?)
    }
}

#[derive(Debug, Deserialize)]
pub struct PlaceResult {
    pub place_id: String,
    pub name: String,
    pub vicinity: Option<String>,
    pub rating: Option<f64>,
    pub price_level: Option<i32>,
    pub geometry: PlaceGeometry,
}

#[derive(Debug, Deserialize)]
pub struct PlaceGeometry {
    pub location: PlaceLocation,
}

#[derive(Debug, Deserialize)]
pub struct PlaceLocation {
    pub lat: f64,
    pub lng: f64,
}

impl PlaceResult {
    fn into_candidate(self, region: &str) -> Candidate {
        let coordinate = Coordinate::new(self.geometry.location.lat, self.geometry.location.lng);
        Candidate {
            name: self.name,
            address: self.vicinity.unwrap_or_default(),
            rating: self.rating.unwrap_or(0.0),
            coordinate,
            price_level: self.price_level.unwrap_or(UNKNOWN_PRICE_LEVEL),
            region: region.to_string(),
            place_id: Some(self.place_id),
        }
    }
}

/// Convert a nearby-search response into candidates tagged with `region`.
///
/// Results whose `place_id` is in `known_place_ids`, or that repeat an id
/// earlier in the same response, are skipped.
///
/// # Errors
///
/// Returns [`PlacesError::Status`] unless the response status is `OK` or
/// `ZERO_RESULTS`.
pub fn candidates_from_places(
    response: PlacesResponse,
    region: &str,
    known_place_ids: &HashSet<String>,
) -> Result<Vec<Candidate>, PlacesError> {
    match response.status.as_str() {
        "OK" | "ZERO_RESULTS" => {}
        other => return Err(PlacesError::Status(other.to_string())),
    }

    let region = region.trim();
    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates = Vec::with_capacity(response.results.len());

    for place in response.results {
        if known_place_ids.contains(&place.place_id) || !seen.insert(place.place_id.clone()) {
            continue;
        }
        candidates.push(place.into_candidate(region));
    }

    Ok(candidates)
}
