use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Price level recorded for places whose price tier is not known.
///
/// Sorts below every real level.
pub const UNKNOWN_PRICE_LEVEL: i32 = -1;

/// A planar latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a coordinate only when both halves are present.
    #[must_use]
    pub fn from_parts(lat: Option<f64>, lng: Option<f64>) -> Option<Self> {
        match (lat, lng) {
            (Some(lat), Some(lng)) => Some(Self { lat, lng }),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// One restaurant being ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(flatten)]
    pub coordinate: Coordinate,
    /// `0..=4` when known, [`UNKNOWN_PRICE_LEVEL`] otherwise.
    #[serde(default = "unknown_price_level")]
    pub price_level: i32,
    /// Postal code or district the candidate was collected under, e.g. `"2200"`.
    #[serde(default)]
    pub region: String,
    /// External place identifier, used to skip re-imports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}

fn unknown_price_level() -> i32 {
    UNKNOWN_PRICE_LEVEL
}

impl Candidate {
    /// A candidate with no address, rating `0.0`, unknown price and no region.
    #[must_use]
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            address: String::new(),
            rating: 0.0,
            coordinate,
            price_level: UNKNOWN_PRICE_LEVEL,
            region: String::new(),
            place_id: None,
        }
    }

    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    #[must_use]
    pub fn with_price_level(mut self, price_level: i32) -> Self {
        self.price_level = price_level;
        self
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    #[must_use]
    pub fn with_place_id(mut self, place_id: impl Into<String>) -> Self {
        self.place_id = Some(place_id.into());
        self
    }

    #[must_use]
    pub fn has_known_price(&self) -> bool {
        self.price_level != UNKNOWN_PRICE_LEVEL
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CandidatesFile {
    #[serde(default)]
    pub restaurants: Vec<Candidate>,
}

/// Load and validate a candidate file.
///
/// The file may be YAML or JSON; JSON is parsed through the YAML reader.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_candidates(path: &Path) -> Result<CandidatesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CandidatesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: CandidatesFile =
        serde_yaml::from_str(&content).map_err(ConfigError::CandidatesFileParse)?;

    validate_candidates(&file.restaurants)?;

    Ok(file)
}

fn validate_candidates(candidates: &[Candidate]) -> Result<(), ConfigError> {
    for (idx, candidate) in candidates.iter().enumerate() {
        if candidate.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "restaurant #{idx} has an empty name"
            )));
        }

        if !candidate.coordinate.is_finite() {
            return Err(ConfigError::Validation(format!(
                "restaurant '{}' has a non-finite coordinate",
                candidate.name
            )));
        }

        if !candidate.rating.is_finite() {
            return Err(ConfigError::Validation(format!(
                "restaurant '{}' has a non-finite rating",
                candidate.name
            )));
        }

        if candidate.price_level < UNKNOWN_PRICE_LEVEL {
            return Err(ConfigError::Validation(format!(
                "restaurant '{}' has invalid price level {}; must be -1 or non-negative",
                candidate.name, candidate.price_level
            )));
        }
    }

    Ok(())
}

/// Keep candidates whose region contains `query`, ignoring case and
/// surrounding whitespace. An empty query keeps everything.
#[must_use]
pub fn filter_by_region(candidates: &[Candidate], query: &str) -> Vec<Candidate> {
    let needle = query.trim().to_lowercase();
    candidates
        .iter()
        .filter(|c| c.region.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "candidates_test.rs"]
mod tests;
