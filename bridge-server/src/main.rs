//! bridge-server — PAR Brink POS integration bridge
//!
//! Long-running service that:
//! - Resolves store locations and timezone-correct business clocks
//! - Fetches sales/labor/employee data from the Brink SOAP services
//! - Reduces raw POS responses into hourly dashboard metrics

use bridge_server::api;
use bridge_server::core::{AppState, Config};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bridge_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("Starting bridge-server (env: {})", config.environment);

    let state = AppState::new(&config)?;
    tracing::info!(
        locations = state.locations.len(),
        "Location directory loaded"
    );

    let app = api::create_router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("bridge-server HTTP listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
