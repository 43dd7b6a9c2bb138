use crate::models::{GeoPoint, Itinerary, ItineraryDay, ScoredCandidate, Visit};

/// Pool entry tagged with its position in the score ordering.
struct PoolEntry {
    rank: usize,
    place: ScoredCandidate,
}

/// Greedy nearest-neighbor sequencing over a score-ordered pool.
///
/// The current position starts at the hotel and carries over from one day
/// to the next. Each day works on the remaining pool restored to score
/// order; each slot re-sorts it by live distance from the current position
/// and takes the nearest entry. Equal distances keep their relative order.
/// Once the pool is exhausted every remaining slot and day stays empty.
pub fn sequence(
    hotel: &GeoPoint,
    pool: Vec<ScoredCandidate>,
    days: u32,
    slots_per_day: usize,
) -> Itinerary {
    let mut remaining: Vec<PoolEntry> = pool
        .into_iter()
        .enumerate()
        .map(|(rank, place)| PoolEntry { rank, place })
        .collect();
    let mut current = *hotel;
    let mut itinerary = Itinerary {
        days: Vec::with_capacity(days as usize),
    };

    for day_number in 1..=days {
        let mut day = ItineraryDay::new(day_number);
        remaining.sort_by_key(|entry| entry.rank);

        for slot in 1..=slots_per_day {
            if remaining.is_empty() {
                break;
            }

            remaining.sort_by(|a, b| {
                current
                    .distance_to(a.place.location())
                    .total_cmp(&current.distance_to(b.place.location()))
            });

            let chosen = remaining.remove(0);
            let step_km = current.distance_to(chosen.place.location());
            current = *chosen.place.location();
            day.visits.push(Visit::new(slot, chosen.place, step_km));
        }

        tracing::debug!(
            day = day_number,
            visits = day.len(),
            remaining = remaining.len(),
            "Day {} planned with {} visits",
            day_number,
            day.len()
        );
        itinerary.days.push(day);
    }

    itinerary
}
