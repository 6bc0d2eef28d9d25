//! `rank` command: load candidates, rank them, print JSON.

use std::path::PathBuf;

use anyhow::Context;
use tablefinder_core::{filter_by_region, load_candidates, AppConfig, CandidatesFile};
use tablefinder_rank::RankRequest;

#[derive(Debug, Clone)]
pub(crate) struct RankArgs {
    pub method: String,
    pub input: Option<PathBuf>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub k: Option<i64>,
    pub region: Option<String>,
}

/// Fill in caller-side defaults. Only `k` has one; the engine itself never
/// defaults it.
pub(crate) fn build_request(config: &AppConfig, args: &RankArgs) -> RankRequest {
    RankRequest {
        method: args.method.clone(),
        lat: args.lat,
        lng: args.lng,
        k: Some(args.k.unwrap_or_else(|| i64::from(config.default_k))),
    }
}

pub(crate) fn run_rank(config: &AppConfig, args: &RankArgs) -> anyhow::Result<()> {
    let path = args.input.as_ref().unwrap_or(&config.candidates_path);
    let file = load_candidates(path)
        .with_context(|| format!("failed to load candidates from {}", path.display()))?;

    let candidates = match args.region.as_deref() {
        Some(region) => filter_by_region(&file.restaurants, region),
        None => file.restaurants,
    };

    if candidates.is_empty() {
        tracing::warn!(path = %path.display(), region = ?args.region, "no candidates to rank");
    }

    let request = build_request(config, args);
    let ranked = tablefinder_rank::rank(&candidates, &request)?;
    tracing::info!(
        method = %request.method.trim(),
        ranked = ranked.len(),
        of = candidates.len(),
        "ranking complete"
    );

    let output = CandidatesFile {
        restaurants: ranked,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
