use crate::config::PlannerConfig;
use crate::models::{Candidate, Category, Preference, TripPlan, TripRequest, TripSummary};
use crate::services::itinerary_planner::ItineraryPlanner;
use crate::services::places_provider::PlacesProvider;
use std::collections::HashMap;
use std::sync::Arc;

/// Runs one planning request end to end: hotel lookup, candidate lookups,
/// then scoring and sequencing.
pub struct TripService {
    provider: Arc<dyn PlacesProvider>,
    planner: ItineraryPlanner,
    config: PlannerConfig,
}

impl TripService {
    pub fn new(provider: Arc<dyn PlacesProvider>, config: PlannerConfig) -> Self {
        TripService {
            provider,
            planner: ItineraryPlanner::new(&config),
            config,
        }
    }

    pub fn provider(&self) -> &Arc<dyn PlacesProvider> {
        &self.provider
    }

    /// Plan a trip. The request is expected to be validated already.
    ///
    /// Returns [`TripPlan::HotelNotFound`] without looking up any candidates
    /// when the hotel cannot be geocoded.
    pub async fn plan_trip(&self, request: &TripRequest) -> TripPlan {
        let query = request.hotel_query();
        let Some(hotel_location) = self.provider.geocode(&query).await else {
            tracing::warn!(query = %query, "Could not determine hotel location");
            return TripPlan::HotelNotFound;
        };

        let preference = Preference::from_label(&request.preference);
        let profile = preference.profile();

        tracing::info!(
            destination = %request.destination,
            days = request.days,
            preference = %preference,
            "Planning {} day trip to {} from {}",
            request.days,
            request.destination,
            hotel_location
        );

        let mut candidates_by_category: HashMap<Category, Vec<Candidate>> = HashMap::new();
        for category in profile.categories() {
            let candidates = self
                .provider
                .search_places(
                    &hotel_location,
                    self.config.search_radius_m,
                    category,
                    self.config.places_limit,
                )
                .await;

            if candidates.is_empty() {
                tracing::warn!("No {} places found near hotel", category);
            }
            candidates_by_category.insert(category, candidates);
        }

        let itinerary =
            self.planner
                .plan(&hotel_location, &candidates_by_category, &profile, request.days);

        let summary = TripSummary {
            destination: request.destination.trim().to_string(),
            hotel: request.hotel.trim().to_string(),
            hotel_location,
            preference,
            itinerary,
        };

        if summary.itinerary.total_visits() == 0 {
            TripPlan::NoCandidates(summary)
        } else {
            TripPlan::Planned(summary)
        }
    }
}
