//! `import` command: normalize a saved nearby-search response.
//!
//! Place ids already present in the existing candidate file are skipped. The
//! new candidates are printed; nothing is written back.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use tablefinder_core::{
    candidates_from_places, load_candidates, AppConfig, Candidate, CandidatesFile, PlacesResponse,
};

/// Place ids recorded in `path`. A missing file means nothing is known yet.
pub(crate) fn known_place_ids(path: &Path) -> anyhow::Result<HashSet<String>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no existing candidate file");
        return Ok(HashSet::new());
    }

    let file = load_candidates(path)
        .with_context(|| format!("failed to load candidates from {}", path.display()))?;
    Ok(file
        .restaurants
        .into_iter()
        .filter_map(|c| c.place_id)
        .collect())
}

pub(crate) fn import_places(
    places_path: &Path,
    region: &str,
    known: &HashSet<String>,
) -> anyhow::Result<Vec<Candidate>> {
    let body = std::fs::read_to_string(places_path)
        .with_context(|| format!("failed to read {}", places_path.display()))?;
    let response = PlacesResponse::from_json(&body)
        .with_context(|| format!("failed to parse {}", places_path.display()))?;
    let total = response.results.len();

    let candidates = candidates_from_places(response, region, known)?;
    let skipped = total - candidates.len();
    if skipped > 0 {
        tracing::info!(skipped, region, "skipping places that are already known");
    }
    Ok(candidates)
}

pub(crate) fn run_import(
    config: &AppConfig,
    places_path: &Path,
    region: &str,
    input: Option<&Path>,
) -> anyhow::Result<()> {
    let existing = input.unwrap_or(&config.candidates_path);
    let known = known_place_ids(existing)?;
    let candidates = import_places(places_path, region, &known)?;

    println!(
        "{}",
        serde_json::to_string_pretty(&CandidatesFile {
            restaurants: candidates
        })?
    );
    Ok(())
}
