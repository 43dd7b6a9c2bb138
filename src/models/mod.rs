pub mod candidate;
pub mod category;
pub mod geo_point;
pub mod itinerary;
pub mod preference;
pub mod trip;

pub use candidate::{Candidate, ScoredCandidate};
pub use category::Category;
pub use geo_point::{distance_km, GeoPoint};
pub use itinerary::{Itinerary, ItineraryDay, Visit};
pub use preference::{Preference, PreferenceProfile};
pub use trip::{TripPlan, TripRequest, TripResponse, TripSummary};
