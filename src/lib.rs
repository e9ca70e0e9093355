pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod pipeline;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{
    auth::require_bearer_auth,
    rate_limit::{rate_limit_middleware, RateLimiter},
};
use crate::services::candidate_service::CandidateService;
use crate::store::CandidateStore;

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub candidate_service: CandidateService,
    pub jwt_secret: String,
}

impl AppState {
    pub fn new(store: Arc<dyn CandidateStore>, jwt_secret: impl Into<String>) -> Self {
        Self {
            candidate_service: CandidateService::new(store),
            jwt_secret: jwt_secret.into(),
        }
    }
}

/// Full HTTP surface. Everything under `/api` needs a bearer token and shares one request budget.
pub fn build_router(state: AppState, api_rps: u32) -> Router {
    let base_routes = Router::new()
        .route("/health", get(routes::health::health))
        .route("/api-docs/openapi.json", get(routes::openapi_json));

    let api = Router::new()
        .route(
            "/api/candidates",
            get(routes::candidate_routes::list_candidates)
                .post(routes::candidate_routes::create_candidate),
        )
        .route(
            "/api/candidates/board",
            get(routes::candidate_routes::get_board),
        )
        .route(
            "/api/candidates/roles",
            get(routes::candidate_routes::list_roles),
        )
        .route(
            "/api/candidates/:id",
            get(routes::candidate_routes::get_candidate)
                .put(routes::candidate_routes::update_candidate),
        )
        .route(
            "/api/candidates/:id/status",
            patch(routes::candidate_routes::update_candidate_status),
        )
        .route("/api/analytics", get(routes::analytics::get_analytics))
        .route(
            "/api/export/csv",
            post(routes::export::export_candidates_csv),
        )
        .route(
            "/api/export/xlsx",
            post(routes::export::export_candidates_xlsx),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_bearer_auth,
        ))
        .layer(axum::middleware::from_fn_with_state(
            RateLimiter::per_second(api_rps),
            rate_limit_middleware,
        ));

    base_routes
        .merge(api)
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
