pub mod scoring;
pub mod sequencing;

use crate::config::PlannerConfig;
use crate::models::{Candidate, Category, GeoPoint, Itinerary, PreferenceProfile};
use std::collections::HashMap;

/// Score candidates against a profile, then sequence them into days.
///
/// The score ordering only primes the pool; visiting order comes from live
/// nearest-neighbor selection, so the two orderings generally differ.
pub fn plan(
    hotel: &GeoPoint,
    candidates_by_category: &HashMap<Category, Vec<Candidate>>,
    profile: &PreferenceProfile,
    days: u32,
    slots_per_day: usize,
) -> Itinerary {
    let pool = scoring::score_candidates(hotel, candidates_by_category, profile);
    sequencing::sequence(hotel, pool, days, slots_per_day)
}

#[derive(Debug, Clone)]
pub struct ItineraryPlanner {
    slots_per_day: usize,
}

impl ItineraryPlanner {
    pub fn new(config: &PlannerConfig) -> Self {
        ItineraryPlanner {
            slots_per_day: config.slots_per_day,
        }
    }

    pub fn plan(
        &self,
        hotel: &GeoPoint,
        candidates_by_category: &HashMap<Category, Vec<Candidate>>,
        profile: &PreferenceProfile,
        days: u32,
    ) -> Itinerary {
        let itinerary = plan(hotel, candidates_by_category, profile, days, self.slots_per_day);

        tracing::info!(
            days = days,
            total_visits = itinerary.total_visits(),
            "Planned {} visits over {} days",
            itinerary.total_visits(),
            days
        );

        itinerary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planner_uses_configured_slots() {
        let config = PlannerConfig {
            slots_per_day: 2,
            ..PlannerConfig::default()
        };
        let planner = ItineraryPlanner::new(&config);
        let hotel = GeoPoint::new(0.0, 0.0).unwrap();
        let candidates: Vec<Candidate> = (1..=5)
            .map(|i| {
                Candidate::new(
                    format!("n{}", i),
                    None,
                    Category::Natural,
                    GeoPoint::new(0.0, i as f64 * 0.01).unwrap(),
                )
            })
            .collect();
        let map = HashMap::from([(Category::Natural, candidates)]);
        let profile = PreferenceProfile::new(vec![(Category::Natural, 1.0)]);

        let itinerary = planner.plan(&hotel, &map, &profile, 3);
        let lengths: Vec<usize> = itinerary.days.iter().map(|d| d.len()).collect();
        assert_eq!(lengths, vec![2, 2, 1]);
    }
}
