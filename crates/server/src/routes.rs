//! API routes for the hotel booking server.

use crate::AppState;
use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use runtime::tools::hotel;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

type AppStateArc = Arc<AppState>;

// ============================================================================
// Request / Response Models
// ============================================================================

/// Request model for natural language queries.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Response model for query results.
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub query: String,
    pub response: String,
    pub status: String,
}

/// Request model for hotel search.
#[derive(Debug, Deserialize)]
pub struct SearchHotelsRequest {
    pub location: String,
    #[serde(default)]
    pub max_price: Option<i64>,
}

/// Request model for hotel details.
#[derive(Debug, Deserialize)]
pub struct HotelDetailsRequest {
    pub location: String,
    pub hotel_name: String,
}

/// Request model for booking cost calculation.
#[derive(Debug, Deserialize)]
pub struct BookingCostRequest {
    pub price_per_night: i64,
    pub nights: i64,
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
}

fn default_tax_rate() -> f64 {
    hotel::DEFAULT_TAX_RATE
}

/// Response model for the health check.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Response model for the root endpoint.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub endpoints: Value,
}

// ============================================================================
// Query Routes
// ============================================================================

pub fn query_routes() -> Router<AppStateArc> {
    Router::new().route("/query", post(process_query))
}

async fn process_query(
    State(state): State<AppStateArc>,
    Json(req): Json<QueryRequest>,
) -> Json<QueryResponse> {
    info!("processing query: {}", req.query);

    let response = match &state.orchestrator {
        Ok(orchestrator) => orchestrator.process(&req.query).await,
        Err(detail) => format!("Error processing query: {detail}"),
    };

    Json(QueryResponse {
        query: req.query,
        response,
        status: "success".into(),
    })
}

// ============================================================================
// Direct Tool Routes
// ============================================================================

pub fn tool_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/search-hotels", post(search_hotels))
        .route("/hotel-details", post(hotel_details))
        .route("/calculate-cost", post(calculate_cost))
        .route("/locations", get(locations))
}

async fn search_hotels(
    State(state): State<AppStateArc>,
    Json(req): Json<SearchHotelsRequest>,
) -> Json<Value> {
    Json(hotel::search_hotels(
        &state.store,
        &req.location,
        req.max_price,
    ))
}

async fn hotel_details(
    State(state): State<AppStateArc>,
    Json(req): Json<HotelDetailsRequest>,
) -> Json<Value> {
    Json(hotel::get_hotel_details(
        &state.store,
        &req.location,
        &req.hotel_name,
    ))
}

async fn calculate_cost(
    State(_state): State<AppStateArc>,
    Json(req): Json<BookingCostRequest>,
) -> Json<Value> {
    Json(hotel::calculate_booking_cost(
        req.price_per_night,
        req.nights,
        req.tax_rate,
    ))
}

async fn locations(State(state): State<AppStateArc>) -> Json<Value> {
    Json(hotel::get_available_locations(&state.store))
}

// ============================================================================
// Meta Routes
// ============================================================================

pub fn meta_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hotel Booking API".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        endpoints: json!({
            "POST /query": "Process natural language hotel queries",
            "POST /search-hotels": "Search hotels by location and price",
            "POST /hotel-details": "Get specific hotel details",
            "POST /calculate-cost": "Calculate booking costs",
            "GET /locations": "Get available locations",
            "GET /health": "Health check endpoint",
        }),
    })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use dataset::HotelStore;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app() -> Router {
        app(AppState {
            store: Arc::new(HotelStore::sample()),
            orchestrator: Err("credential missing: OPENAI_API_KEY not set".into()),
        })
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let response = test_app().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn root_lists_endpoints() {
        let response = test_app().oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Hotel Booking API");
        assert!(body["endpoints"]["POST /query"].is_string());
    }

    #[tokio::test]
    async fn locations_pass_through() {
        let response = test_app().oneshot(get("/locations")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["total_locations"], 5);
    }

    #[tokio::test]
    async fn search_pass_through_filters_by_price() {
        let request = post_json("/search-hotels", json!({"location": "tokyo", "max_price": 300}));
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["total_available"], 1);
        assert_eq!(body["hotels"][0]["name"], "Shibuya Excel Hotel Tokyu");
    }

    #[tokio::test]
    async fn hotel_details_pass_through() {
        let request = post_json(
            "/hotel-details",
            json!({"location": "london", "hotel_name": "the savoy"}),
        );
        let response = test_app().oneshot(request).await.unwrap();

        let body = body_json(response).await;
        assert_eq!(body["hotel_details"]["name"], "The Savoy");
    }

    #[tokio::test]
    async fn calculate_cost_defaults_tax_rate() {
        let request = post_json("/calculate-cost", json!({"price_per_night": 200, "nights": 5}));
        let response = test_app().oneshot(request).await.unwrap();

        let body = body_json(response).await;
        assert_eq!(body["subtotal"], 1000);
        assert_eq!(body["tax"], 120.0);
        assert_eq!(body["total_cost"], 1120.0);
    }

    #[tokio::test]
    async fn query_degrades_without_credential() {
        let request = post_json("/query", json!({"query": "Any hotels in Tokyo?"}));
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["query"], "Any hotels in Tokyo?");
        assert_eq!(body["status"], "success");
        assert_eq!(
            body["response"],
            "Error processing query: credential missing: OPENAI_API_KEY not set"
        );
    }
}
