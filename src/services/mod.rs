pub mod geoapify;
pub mod itinerary_planner;
pub mod places_provider;
pub mod trip_service;
