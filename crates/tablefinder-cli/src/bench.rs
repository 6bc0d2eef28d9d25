//! `bench` command: wall-clock timings of every method on synthetic data.
//!
//! For statistically careful numbers use the criterion suite in
//! `tablefinder-rank/benches`; this is the quick check.

use std::hint::black_box;
use std::time::{Duration, Instant};

use tablefinder_core::Candidate;
use tablefinder_rank::synthetic::{generate_candidates, COPENHAGEN};
use tablefinder_rank::{distance, rank, squared_distance, RankMethod, RankRequest};

const WARMUP_RUNS: u32 = 3;
const KNN_KS: [usize; 3] = [5, 10, 20];

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Timing {
    pub label: String,
    pub size: usize,
    pub average: Duration,
}

fn time_runs<F: FnMut()>(iterations: u32, mut run: F) -> Duration {
    for _ in 0..WARMUP_RUNS {
        run();
    }
    let start = Instant::now();
    for _ in 0..iterations {
        run();
    }
    start.elapsed() / iterations.max(1)
}

fn time_method(
    data: &[Candidate],
    request: &RankRequest,
    iterations: u32,
) -> anyhow::Result<Duration> {
    // Validate once so the timed loop cannot fail.
    rank(data, request)?;
    Ok(time_runs(iterations, || {
        let _ = black_box(rank(black_box(data), request));
    }))
}

/// Time every method for each size. k values at or above the size are skipped.
pub(crate) fn collect_timings(
    sizes: &[usize],
    seed: u64,
    iterations: u32,
) -> anyhow::Result<Vec<Timing>> {
    let mut timings = Vec::new();

    for &size in sizes {
        let data = generate_candidates(size, COPENHAGEN, seed);
        let with_reference = |method: RankMethod| {
            RankRequest::new(method.as_str()).with_reference(COPENHAGEN.lat, COPENHAGEN.lng)
        };

        for method in [
            RankMethod::Price,
            RankMethod::Rating,
            RankMethod::Distance,
            RankMethod::Weighted,
        ] {
            let average = time_method(&data, &with_reference(method), iterations)?;
            timings.push(Timing {
                label: format!("merge sort ({method})"),
                size,
                average,
            });
        }

        for k in KNN_KS.into_iter().chain([size / 2]) {
            if k == 0 || k >= size {
                continue;
            }
            let request = with_reference(RankMethod::Knn).with_k(i64::try_from(k)?);
            let average = time_method(&data, &request, iterations)?;
            timings.push(Timing {
                label: format!("knn (k={k})"),
                size,
                average,
            });
        }

        let squared = time_runs(iterations, || {
            for c in &data {
                black_box(squared_distance(black_box(c.coordinate), COPENHAGEN));
            }
        });
        let euclidean = time_runs(iterations, || {
            for c in &data {
                black_box(distance(black_box(c.coordinate), COPENHAGEN));
            }
        });
        timings.push(Timing {
            label: "distance (squared)".to_string(),
            size,
            average: squared,
        });
        timings.push(Timing {
            label: "distance (euclidean)".to_string(),
            size,
            average: euclidean,
        });
    }

    Ok(timings)
}

pub(crate) fn run_bench(sizes: &[usize], seed: u64, iterations: u32) -> anyhow::Result<()> {
    tracing::info!(?sizes, seed, iterations, "running ranking benchmark");
    let timings = collect_timings(sizes, seed, iterations)?;

    let mut current_size = None;
    for timing in &timings {
        if current_size != Some(timing.size) {
            println!("\n{} restaurants", timing.size);
            current_size = Some(timing.size);
        }
        println!(
            "  {:<28} {:>10.3} ms (avg of {iterations} runs)",
            timing.label,
            timing.average.as_secs_f64() * 1_000.0
        );
    }
    Ok(())
}
