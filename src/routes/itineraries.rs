use crate::error::{AppError, Result};
use crate::models::{TripPlan, TripRequest, TripResponse};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

/// POST /itineraries
/// Plan a multi-day itinerary around a hotel
pub async fn create_itinerary(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<TripRequest>, JsonRejection>,
) -> Result<Json<TripResponse>> {
    let Json(request) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;
    request.validate().map_err(AppError::InvalidRequest)?;

    tracing::info!(
        destination = %request.destination,
        hotel = %request.hotel,
        days = request.days,
        preference = %request.preference,
        "Itinerary request: {} at {}, {} days, preference '{}'",
        request.destination, request.hotel, request.days, request.preference
    );

    let plan = state.trip_service.plan_trip(&request).await;
    let status = plan.status();

    match plan {
        TripPlan::HotelNotFound => Err(AppError::HotelNotFound(request.hotel_query())),
        TripPlan::NoCandidates(summary) | TripPlan::Planned(summary) => {
            let total_visits = summary.itinerary.total_visits();
            Ok(Json(TripResponse {
                status,
                summary,
                total_visits,
            }))
        }
    }
}
