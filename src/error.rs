use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Geoapify API error: {0}")]
    GeoapifyApi(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Hotel not found: {0}")]
    HotelNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::GeoapifyApi(ref e) => {
                tracing::error!("Geoapify API error: {}", e);
                (StatusCode::BAD_GATEWAY, "Places service error")
            }
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.as_str()),
            AppError::HotelNotFound(ref e) => {
                tracing::info!("Hotel not found: {}", e);
                (StatusCode::NOT_FOUND, "Could not determine hotel location")
            }
            AppError::Config(ref e) => {
                tracing::error!("Configuration error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server misconfigured")
            }
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::GeoapifyApi("boom".to_string()), StatusCode::BAD_GATEWAY),
            (AppError::InvalidRequest("bad".to_string()), StatusCode::BAD_REQUEST),
            (AppError::HotelNotFound("Ritz, Paris".to_string()), StatusCode::NOT_FOUND),
            (AppError::Config("missing".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_display_includes_detail() {
        let err = AppError::HotelNotFound("Ritz, Paris".to_string());
        assert_eq!(err.to_string(), "Hotel not found: Ritz, Paris");
    }
}
