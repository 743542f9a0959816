//! FraudGate scoring server entry point

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fraudgate::{config::Config, create_router, engine::ModelState, AppState};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "fraudgate=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing::info!("FraudGate scoring server starting...");
    tracing::info!("Environment: {}", config.environment);

    // Load model artifacts. A failed load leaves the service up but
    // unhealthy; the scoring routes answer 503 until a valid model is
    // deployed.
    let model = Arc::new(ModelState::initialize(&config));
    if model.is_ready() {
        tracing::info!("Classifier ready; scoring enabled");
    } else {
        tracing::warn!("Classifier not loaded; scoring routes will return 503");
    }

    // Build application state and router
    let state = AppState {
        model,
        config: config.clone(),
    };
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
