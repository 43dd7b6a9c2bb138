pub mod debug;
pub mod itineraries;

use axum::{routing::{get, post}, Router};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/itineraries", post(itineraries::create_itinerary))
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
