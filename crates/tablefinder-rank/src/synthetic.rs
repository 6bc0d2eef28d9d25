//! Seeded synthetic candidates for benchmarks and load checks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tablefinder_core::{Candidate, Coordinate};

/// Copenhagen city centre.
pub const COPENHAGEN: Coordinate = Coordinate::new(55.6761, 12.5683);

/// Full width of the square, in degrees, that generated candidates fall in.
pub const SPREAD_DEGREES: f64 = 0.5;

const NAMES: &[&str] = &[
    "Pizza Place",
    "Sushi Bar",
    "Burger Joint",
    "Taco Stand",
    "Italian Bistro",
    "French Cafe",
    "Thai Restaurant",
    "Chinese Wok",
    "Indian Curry House",
    "Greek Taverna",
    "Mexican Cantina",
    "Steakhouse",
];

/// Generate `count` candidates scattered around `centre`.
///
/// Ratings fall in `[1, 5)`, price levels in `1..=4`, and regions in
/// `"2000".."2999"`. The same `seed` always yields the same candidates.
#[must_use]
pub fn generate_candidates(count: usize, centre: Coordinate, seed: u64) -> Vec<Candidate> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let name = format!("{} #{i}", NAMES[i % NAMES.len()]);
            let rating = 1.0 + rng.random::<f64>() * 4.0;
            let lat = centre.lat + (rng.random::<f64>() - 0.5) * SPREAD_DEGREES;
            let lng = centre.lng + (rng.random::<f64>() - 0.5) * SPREAD_DEGREES;
            let price_level = rng.random_range(1..=4);
            let region = format!("{:04}", 2000 + rng.random_range(0..1000));

            Candidate::new(name, Coordinate::new(lat, lng))
                .with_address(format!("Street {i}, Copenhagen"))
                .with_rating(rating)
                .with_price_level(price_level)
                .with_region(region)
        })
        .collect()
}
