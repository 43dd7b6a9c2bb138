use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Check if the places provider is usable
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut status = json!({
        "status": "ok",
        "checks": {}
    });

    let provider = state.trip_service.provider();
    if provider.health_check().await {
        status["checks"]["places_provider"] = json!({
            "status": "ok",
            "backend": provider.provider_name(),
        });
    } else {
        status["checks"]["places_provider"] = json!({
            "status": "error",
            "backend": provider.provider_name(),
        });
        status["status"] = json!("error");
    }

    Json(status)
}
