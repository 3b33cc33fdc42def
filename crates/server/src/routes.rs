use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::Health;
use service::cars::CarRepository;

pub mod cars;

/// Shared handler state. The repository is built once at startup and injected here.
#[derive(Clone)]
pub struct AppState {
    pub cars: Arc<dyn CarRepository>,
}

impl AppState {
    pub fn new(cars: Arc<dyn CarRepository>) -> Self {
        Self { cars }
    }
}

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Build the full application router: car CRUD plus health.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/cars", get(cars::list).post(cars::insert))
        .route(
            "/cars/:id",
            get(cars::get).put(cars::update).delete(cars::delete),
        )
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
