//! Ranking and nearest-selection engine for tablefinder.
//!
//! Orders restaurant candidates by price, rating, distance to a reference
//! point, or a weighted blend of the three, and picks the k candidates
//! nearest a reference point. Every operation is pure: inputs are borrowed,
//! results are freshly allocated.

pub mod criteria;
pub mod error;
pub mod geometry;
pub mod merge_sort;
pub mod method;
pub mod nearest;
pub mod rank;
pub mod synthetic;

pub use criteria::{weighted_score, Criterion};
pub use error::RankError;
pub use geometry::{distance, squared_distance};
pub use merge_sort::stable_sort;
pub use method::RankMethod;
pub use nearest::k_nearest;
pub use rank::{rank, RankRequest};
