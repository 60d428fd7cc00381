//! HTTP server for the hotel booking API.

mod routes;

pub use routes::{
    BookingCostRequest, HealthResponse, HotelDetailsRequest, QueryRequest, QueryResponse,
    RootResponse, SearchHotelsRequest,
};

use axum::Router;
use dataset::HotelStore;
use runtime::{HotelToolHost, OpenAiBackend, Orchestrator};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Application state shared across handlers.
pub struct AppState {
    pub store: Arc<HotelStore>,
    /// The query orchestrator, or the startup fault that disabled it.
    /// Direct tool endpoints work either way.
    pub orchestrator: Result<Orchestrator<OpenAiBackend, HotelToolHost>, String>,
}

impl AppState {
    /// Build state from the environment. The model credential is read once
    /// here; when it is missing the `/query` endpoint answers with a
    /// degraded error string while the rest of the API stays up.
    pub fn from_env() -> Self {
        let store = Arc::new(HotelStore::sample());
        let orchestrator = match OpenAiBackend::from_env() {
            Ok(backend) => Ok(Orchestrator::new(
                backend,
                HotelToolHost::new(Arc::clone(&store)),
            )),
            Err(e) => {
                warn!("model backend unavailable: {e}");
                Err(e.to_string())
            }
        };
        Self {
            store,
            orchestrator,
        }
    }
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::query_routes())
        .merge(routes::tool_routes())
        .merge(routes::meta_routes())
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until shutdown.
pub async fn run(state: AppState, port: u16) -> std::io::Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on http://{addr}");

    axum::serve(listener, app(state)).await
}
