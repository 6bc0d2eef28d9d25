use std::cmp::Ordering;

use tablefinder_core::{Candidate, Coordinate};

use crate::geometry::distance;

/// A total order over candidates.
///
/// Distance-based criteria carry their reference point, so a criterion that
/// needs one cannot be built without it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Criterion {
    /// Cheapest first; unknown price (`-1`) sorts before every real level.
    Price,
    /// Nearest to the reference first.
    Distance(Coordinate),
    /// Highest rating first.
    Rating,
    /// Lowest [`weighted_score`] first.
    Weighted(Coordinate),
}

impl Criterion {
    #[must_use]
    pub fn compare(&self, a: &Candidate, b: &Candidate) -> Ordering {
        match *self {
            Criterion::Price => a.price_level.cmp(&b.price_level),
            Criterion::Distance(reference) => distance(a.coordinate, reference)
                .total_cmp(&distance(b.coordinate, reference)),
            Criterion::Rating => b.rating.total_cmp(&a.rating),
            Criterion::Weighted(reference) => {
                weighted_score(a, reference).total_cmp(&weighted_score(b, reference))
            }
        }
    }
}

/// Composite "badness" score: lower is better.
///
/// `(5 - rating) * 2 + distance + price_level * 0.5`. The terms mix units
/// (rating points, degrees, price tiers) and the coefficients are fixed; an
/// unknown price contributes `-0.5`.
#[must_use]
pub fn weighted_score(candidate: &Candidate, reference: Coordinate) -> f64 {
    (5.0 - candidate.rating) * 2.0
        + distance(candidate.coordinate, reference)
        + f64::from(candidate.price_level) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    const CPH: Coordinate = Coordinate::new(55.6761, 12.5683);

    fn at(name: &str, lat: f64, lng: f64) -> Candidate {
        Candidate::new(name, Coordinate::new(lat, lng))
    }

    #[test]
    fn price_orders_ascending() {
        let cheap = at("cheap", 0.0, 0.0).with_price_level(1);
        let pricey = at("pricey", 0.0, 0.0).with_price_level(4);
        assert_eq!(Criterion::Price.compare(&cheap, &pricey), Ordering::Less);
        assert_eq!(Criterion::Price.compare(&pricey, &cheap), Ordering::Greater);
    }

    #[test]
    fn unknown_price_sorts_lowest() {
        let unknown = at("unknown", 0.0, 0.0);
        let free = at("free", 0.0, 0.0).with_price_level(0);
        assert_eq!(Criterion::Price.compare(&unknown, &free), Ordering::Less);
    }

    #[test]
    fn rating_orders_descending() {
        let good = at("good", 0.0, 0.0).with_rating(4.5);
        let meh = at("meh", 0.0, 0.0).with_rating(3.5);
        assert_eq!(Criterion::Rating.compare(&good, &meh), Ordering::Less);
        assert_eq!(Criterion::Rating.compare(&meh, &meh), Ordering::Equal);
    }

    #[test]
    fn distance_orders_nearest_first() {
        let close = at("close", 55.676, 12.568);
        let far = at("far", 55.7, 12.6);
        let by_distance = Criterion::Distance(CPH);
        assert_eq!(by_distance.compare(&close, &far), Ordering::Less);
        assert_eq!(by_distance.compare(&far, &close), Ordering::Greater);
    }

    #[test]
    fn weighted_score_matches_formula() {
        let c = at("c", 3.0, 4.0).with_rating(4.0).with_price_level(2);
        let score = weighted_score(&c, Coordinate::new(0.0, 0.0));
        // (5 - 4) * 2 + 5 + 2 * 0.5
        assert!((score - 8.0).abs() < 1e-12);
    }

    #[test]
    fn weighted_score_counts_unknown_price_as_negative() {
        let c = at("c", 0.0, 0.0).with_rating(5.0);
        let score = weighted_score(&c, Coordinate::new(0.0, 0.0));
        assert!((score - -0.5).abs() < 1e-12);
    }

    #[test]
    fn weighted_prefers_better_rating_at_equal_distance_and_price() {
        let better = at("better", 55.68, 12.57).with_rating(4.8).with_price_level(2);
        let worse = at("worse", 55.68, 12.57).with_rating(3.1).with_price_level(2);
        assert_eq!(
            Criterion::Weighted(CPH).compare(&better, &worse),
            Ordering::Less
        );
    }

    #[test]
    fn weighted_penalises_price() {
        let cheap = at("cheap", 55.68, 12.57).with_rating(4.0).with_price_level(1);
        let pricey = at("pricey", 55.68, 12.57).with_rating(4.0).with_price_level(4);
        assert_eq!(
            Criterion::Weighted(CPH).compare(&cheap, &pricey),
            Ordering::Less
        );
    }
}
