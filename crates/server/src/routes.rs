use axum::{
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::{metrics, openapi::ApiDoc, state::ServerState};

pub mod categories;
pub mod products;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn metrics_text() -> (axum::http::StatusCode, String) {
    metrics::encode_metrics()
}

/// Build the full application router: health, metrics, both resources and the API docs
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_text));

    let categories = Router::new()
        .route(
            "/api/categories",
            get(categories::list).post(categories::create).delete(categories::delete_all),
        )
        .route("/api/categories/all", get(categories::get_all))
        .route(
            "/api/categories/:id",
            get(categories::get).put(categories::update).delete(categories::delete),
        );

    let products = Router::new()
        .route(
            "/api/products",
            get(products::list).post(products::create).delete(products::delete_all),
        )
        .route("/api/products/all", get(products::get_all))
        .route(
            "/api/products/:id",
            get(products::get).put(products::update).delete(products::delete),
        );

    public
        .merge(categories)
        .merge(products)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // One INFO span per request with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // Status code and latency
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
