use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::candidate_dto::ExportRequest, error::Result,
    services::export_service::ExportService, AppState,
};

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Export all or selected candidates as CSV
#[utoipa::path(
    post,
    path = "/api/export/csv",
    request_body = ExportRequest,
    responses(
        (status = 200, description = "CSV attachment, newest application first")
    )
)]
#[axum::debug_handler]
pub async fn export_candidates_csv(
    State(state): State<AppState>,
    Json(payload): Json<ExportRequest>,
) -> Result<impl IntoResponse> {
    let candidates = state
        .candidate_service
        .export_rows(payload.candidate_ids.as_deref())
        .await?;
    tracing::info!(rows = candidates.len(), "Exporting candidates as CSV");

    let body = ExportService::candidates_csv(&candidates);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"candidates-data.csv\"".to_string(),
            ),
        ],
        body,
    ))
}

/// Export all or selected candidates as XLSX, with a summary sheet
#[utoipa::path(
    post,
    path = "/api/export/xlsx",
    request_body = ExportRequest,
    responses(
        (status = 200, description = "XLSX attachment")
    )
)]
#[axum::debug_handler]
pub async fn export_candidates_xlsx(
    State(state): State<AppState>,
    Json(payload): Json<ExportRequest>,
) -> Result<impl IntoResponse> {
    let candidates = state
        .candidate_service
        .export_rows(payload.candidate_ids.as_deref())
        .await?;
    let summary = state.candidate_service.analytics().await?;
    tracing::info!(rows = candidates.len(), "Exporting candidates as XLSX");

    let buffer = ExportService::candidates_xlsx(&candidates, &summary)?;
    let filename = format!(
        "candidates_export_{}.xlsx",
        crate::utils::time::now().format("%Y%m%d_%H%M")
    );
    let disposition = format!("attachment; filename=\"{}\"", filename);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        buffer,
    ))
}
