//! Stable application-wide constants.
//!
//! Values here are algorithm coefficients and default fallbacks for
//! env-var-based configuration. Tuning knobs that are worth changing per
//! deployment live in [`PlannerConfig`](crate::config::PlannerConfig) instead.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Geometry ---

/// Mean Earth radius used by the haversine distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

// --- Scoring ---

/// Normalization horizon for distance decay. A candidate this far from the
/// hotel scores zero; farther candidates go negative and are kept.
pub const SCORE_NORMALIZATION_KM: f64 = 50.0;

// --- Planner defaults (used when ITINERARY_* env vars are absent) ---

/// Visits per day: morning, afternoon, evening.
pub const DEFAULT_SLOTS_PER_DAY: usize = 3;
/// Radius around the hotel searched for candidates, in meters.
pub const DEFAULT_SEARCH_RADIUS_METERS: u32 = 5_000;
/// Maximum candidates requested per category.
pub const DEFAULT_PLACES_LIMIT: u32 = 20;
/// Upper bound the places API accepts for `limit`.
pub const MAX_PLACES_LIMIT: u32 = 500;
/// Longest trip accepted by request validation.
pub const MAX_TRIP_DAYS: u32 = 30;

// --- Geoapify ---

/// Production Geoapify API root. Overridden by `GEOAPIFY_BASE_URL`.
pub const GEOAPIFY_BASE_URL: &str = "https://api.geoapify.com";
/// Timeout for the API key probe request.
pub const API_KEY_CHECK_TIMEOUT_SECONDS: u64 = 5;
/// Place geocoded by the API key probe.
pub const API_KEY_CHECK_QUERY: &str = "Paris";
