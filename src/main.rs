use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tripweaver::config::Config;
use tripweaver::error::AppError;
use tripweaver::services::geoapify::GeoapifyClient;
use tripweaver::services::places_provider::PlacesProvider;
use tripweaver::services::trip_service::TripService;
use tripweaver::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tripweaver=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(AppError::Config)?;

    tracing::info!("Starting tripweaver API server");
    tracing::info!("Configuration loaded successfully");

    let geoapify = GeoapifyClient::from_config(&config.geoapify);

    // One upfront credential check; a failure is reported but does not stop startup
    if !geoapify.health_check().await {
        tracing::warn!("Geoapify API key validation failed. Lookups may not work correctly.");
    }

    let provider: Arc<dyn PlacesProvider> = Arc::new(geoapify);
    let state = Arc::new(AppState {
        trip_service: TripService::new(provider, config.planner.clone()),
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", tripweaver::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
