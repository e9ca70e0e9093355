use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::candidate_dto::{
        CandidateListResponse, CreateCandidatePayload, RolesResponse, StatusChangeRequest,
        UpdateCandidatePayload,
    },
    error::Result,
    models::filter::FilterCriteria,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/candidates",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive match on name, email or role"),
        ("role" = Option<String>, Query, description = "Exact role, or `all`"),
        ("experience" = Option<String>, Query, description = "Band: all, 0-2, 3-5, 6-10, 10+"),
        ("sort" = Option<String>, Query, description = "name, name-desc, experience, experience-desc, date, date-desc")
    ),
    responses(
        (status = 200, description = "Filtered and sorted candidates", body = CandidateListResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_candidates(
    State(state): State<AppState>,
    Query(criteria): Query<FilterCriteria>,
) -> Result<impl IntoResponse> {
    let items = state.candidate_service.list(&criteria).await?;
    let total = items.len();
    Ok(Json(CandidateListResponse { items, total }))
}

#[utoipa::path(
    get,
    path = "/api/candidates/board",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive match on name, email or role"),
        ("role" = Option<String>, Query, description = "Exact role, or `all`"),
        ("experience" = Option<String>, Query, description = "Experience band"),
        ("sort" = Option<String>, Query, description = "Order inside each column")
    ),
    responses(
        (status = 200, description = "Candidates grouped into pipeline columns")
    )
)]
#[axum::debug_handler]
pub async fn get_board(
    State(state): State<AppState>,
    Query(criteria): Query<FilterCriteria>,
) -> Result<impl IntoResponse> {
    let board = state.candidate_service.board(&criteria).await?;
    Ok(Json(board))
}

#[utoipa::path(
    get,
    path = "/api/candidates/roles",
    responses(
        (status = 200, description = "Distinct roles for the role filter", body = RolesResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_roles(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let roles = state.candidate_service.roles().await?;
    Ok(Json(RolesResponse { roles }))
}

#[utoipa::path(
    post,
    path = "/api/candidates",
    request_body = CreateCandidatePayload,
    responses(
        (status = 201, description = "Candidate created"),
        (status = 400, description = "Invalid payload or status")
    )
)]
#[axum::debug_handler]
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(payload): Json<CreateCandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let candidate = state.candidate_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(candidate)))
}

#[utoipa::path(
    get,
    path = "/api/candidates/{id}",
    params(
        ("id" = Uuid, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "Candidate found"),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let candidate = state.candidate_service.get(id).await?;
    Ok(Json(candidate))
}

#[utoipa::path(
    put,
    path = "/api/candidates/{id}",
    params(
        ("id" = Uuid, Path, description = "Candidate ID")
    ),
    request_body = UpdateCandidatePayload,
    responses(
        (status = 200, description = "Candidate updated"),
        (status = 400, description = "Invalid payload or status"),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let candidate = state.candidate_service.update(id, payload).await?;
    Ok(Json(candidate))
}

#[utoipa::path(
    patch,
    path = "/api/candidates/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Candidate ID")
    ),
    request_body = StatusChangeRequest,
    responses(
        (status = 200, description = "Candidate moved to the requested stage"),
        (status = 400, description = "Unknown status"),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn update_candidate_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<StatusChangeRequest>,
) -> Result<impl IntoResponse> {
    let candidate = state
        .candidate_service
        .change_status(id, &payload.status)
        .await?;
    Ok(Json(candidate))
}
