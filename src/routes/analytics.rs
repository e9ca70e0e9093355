use axum::{extract::State, response::IntoResponse, Json};

use crate::{error::Result, AppState};

#[utoipa::path(
    get,
    path = "/api/analytics",
    responses(
        (status = 200, description = "Pipeline metrics over every candidate, ignoring filters")
    )
)]
#[axum::debug_handler]
pub async fn get_analytics(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let snapshot = state.candidate_service.analytics().await?;
    Ok(Json(snapshot))
}
