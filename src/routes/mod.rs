pub mod analytics;
pub mod candidate_routes;
pub mod export;
pub mod health;

use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Candidate Pipeline API"),
    paths(
        health::health,
        candidate_routes::list_candidates,
        candidate_routes::get_board,
        candidate_routes::list_roles,
        candidate_routes::create_candidate,
        candidate_routes::get_candidate,
        candidate_routes::update_candidate,
        candidate_routes::update_candidate_status,
        analytics::get_analytics,
        export::export_candidates_csv,
        export::export_candidates_xlsx,
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
