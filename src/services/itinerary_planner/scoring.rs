use crate::constants::SCORE_NORMALIZATION_KM;
use crate::models::{Candidate, Category, GeoPoint, PreferenceProfile, ScoredCandidate};
use std::collections::HashMap;

/// Weighted linear distance decay. Zero at the normalization horizon,
/// negative beyond it.
pub fn decayed_score(weight: f64, distance_km: f64) -> f64 {
    weight * (1.0 - distance_km / SCORE_NORMALIZATION_KM)
}

pub fn score_candidate(hotel: &GeoPoint, candidate: Candidate, weight: f64) -> ScoredCandidate {
    let distance = hotel.distance_to(&candidate.location);
    ScoredCandidate::new(candidate, decayed_score(weight, distance), distance)
}

/// Score every candidate of every profile category and return one flat pool
/// ordered by score, highest first.
///
/// Categories are visited in profile order; candidates supplied for a
/// category the profile does not weight are ignored. A place returned under
/// two categories becomes two pool entries.
pub fn score_candidates(
    hotel: &GeoPoint,
    candidates_by_category: &HashMap<Category, Vec<Candidate>>,
    profile: &PreferenceProfile,
) -> Vec<ScoredCandidate> {
    let mut pool: Vec<ScoredCandidate> = profile
        .iter()
        .flat_map(move |(category, weight)| {
            candidates_by_category
                .get(&category)
                .into_iter()
                .flatten()
                .map(move |candidate| score_candidate(hotel, candidate.clone(), weight))
        })
        .collect();

    pool.sort_by(|a, b| b.score.total_cmp(&a.score));

    tracing::debug!(
        pool_size = pool.len(),
        best_score = pool.first().map(|c| c.score),
        "Scored {} candidates",
        pool.len()
    );

    pool
}
