pub mod data;
pub mod health;
pub mod history;
pub mod recent;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::common::{AppState, Pagination, ResponseStatus};
use crate::error::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        data::ingest_reading,
        data::query_readings,
        recent::latest_values,
        history::list_history,
    ),
    components(
        schemas(
            ResponseStatus,
            Pagination,
            ErrorResponse,
            data::IngestRequest,
            data::MessageResponse,
            data::ReadingResponse,
            data::ReadingsListResponse,
            recent::LatestValue,
            recent::LatestValues,
            recent::RecentResponse,
            history::AlertResponse,
            history::HistoryResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "data", description = "Sensor reading ingestion and queries"),
        (name = "history", description = "Threshold alert history"),
    ),
    info(
        title = "RAS Monitor API",
        description = "Water quality ingestion and alerting API for recirculating aquaculture systems",
        version = "0.1.0"
    )
)]
struct ApiDoc;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.request_body_limit_bytes;

    let api_routes = Router::new()
        .route(
            "/data",
            get(data::query_readings).post(data::ingest_reading),
        )
        .route("/recent", get(recent::latest_values))
        .route("/history", get(history::list_history))
        .layer(RequestBodyLimitLayer::new(body_limit));

    // Health check routes
    let health_routes = Router::new().route("/healthz", get(health::healthz));

    // OpenAPI documentation
    let docs_routes = Router::new().merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    // Combine all routes
    Router::new()
        .nest("/api/v1", api_routes)
        .merge(health_routes)
        .merge(docs_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
