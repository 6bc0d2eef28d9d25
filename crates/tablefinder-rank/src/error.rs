use thiserror::Error;

use crate::method::RankMethod;

/// Rejected ranking requests.
///
/// Every variant is an invalid-argument condition derived from the request
/// shape alone; none is transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("unknown ranking method: {0}")]
    UnknownMethod(String),

    #[error("lat and lng are required for method: {method}")]
    MissingReference { method: RankMethod },

    #[error("k is required for method: knn")]
    MissingK,

    #[error("invalid k {0}: must be a non-negative integer")]
    InvalidK(i64),
}
