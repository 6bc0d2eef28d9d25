//! Single entry point that maps a method name onto a criterion and algorithm.

use tablefinder_core::{Candidate, Coordinate};

use crate::criteria::Criterion;
use crate::error::RankError;
use crate::merge_sort::stable_sort;
use crate::method::RankMethod;
use crate::nearest::k_nearest;

/// A ranking request as received from a caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankRequest {
    /// Method name; parsed case-insensitively.
    pub method: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// Only read by `knn`.
    pub k: Option<i64>,
}

impl RankRequest {
    #[must_use]
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_reference(mut self, lat: f64, lng: f64) -> Self {
        self.lat = Some(lat);
        self.lng = Some(lng);
        self
    }

    #[must_use]
    pub fn with_k(mut self, k: i64) -> Self {
        self.k = Some(k);
        self
    }
}

/// Rank `candidates` according to `request`.
///
/// `distance`, `rating`, `price` and `weighted` return every candidate in a
/// stable order; `knn` returns at most `k` candidates, nearest first.
///
/// # Errors
///
/// Returns [`RankError`] if the method is unknown, a reference-based method is
/// missing either coordinate, or `knn` has no `k` or a negative one.
pub fn rank(candidates: &[Candidate], request: &RankRequest) -> Result<Vec<Candidate>, RankError> {
    let method: RankMethod = request.method.parse()?;
    let reference = Coordinate::from_parts(request.lat, request.lng);

    tracing::debug!(
        method = %method,
        candidates = candidates.len(),
        k = ?request.k,
        "ranking candidates"
    );

    let criterion = match method {
        RankMethod::Price => Criterion::Price,
        RankMethod::Rating => Criterion::Rating,
        RankMethod::Distance => Criterion::Distance(require_reference(method, reference)?),
        RankMethod::Weighted => Criterion::Weighted(require_reference(method, reference)?),
        RankMethod::Knn => {
            let reference = require_reference(method, reference)?;
            let k = parse_k(request.k)?;
            return Ok(k_nearest(candidates, reference, k));
        }
    };

    // Sort references so the merge levels move pointers; clone once at the end.
    let refs: Vec<&Candidate> = candidates.iter().collect();
    let sorted = stable_sort(&refs, |a, b| criterion.compare(a, b));
    Ok(sorted.into_iter().cloned().collect())
}

fn require_reference(
    method: RankMethod,
    reference: Option<Coordinate>,
) -> Result<Coordinate, RankError> {
    reference.ok_or(RankError::MissingReference { method })
}

fn parse_k(k: Option<i64>) -> Result<usize, RankError> {
    let k = k.ok_or(RankError::MissingK)?;
    if k < 0 {
        return Err(RankError::InvalidK(k));
    }
    Ok(usize::try_from(k).unwrap_or(usize::MAX))
}

#[cfg(test)]
#[path = "rank_test.rs"]
mod tests;
