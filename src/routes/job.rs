use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::job_dto::{
        CreateJobApplicationReq, CreateJobPostingReq, GetJobPostingsReq, GetJobPostingsResp,
        JobPostingResp,
    },
    error::Result,
    middleware::auth::Claims,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/job/posting",
    request_body = CreateJobPostingReq,
    responses(
        (status = 201, description = "Job posting created successfully"),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn create_posting(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(mut payload): Json<CreateJobPostingReq>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    payload.login_user_id = claims.user_id()?;
    state.job_service.create_posting(&payload).await?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    get,
    path = "/api/job/postings",
    params(
        ("page" = Option<i64>, Query, description = "Page number, 0 disables pagination"),
        ("page_size" = Option<i64>, Query, description = "Items per page"),
        ("skills" = Option<String>, Query, description = "Substring match on skills"),
        ("location" = Option<String>, Query, description = "Substring match on location"),
        ("min_budget" = Option<String>, Query, description = "Lower budget bound"),
        ("max_budget" = Option<String>, Query, description = "Upper budget bound"),
        ("currency" = Option<String>, Query, description = "Exact currency match"),
        ("status" = Option<String>, Query, description = "Filter by posting status")
    ),
    responses(
        (status = 200, description = "Active job postings", body = Json<GetJobPostingsResp>)
    )
)]
#[axum::debug_handler]
pub async fn list_postings(
    State(state): State<AppState>,
    Query(query): Query<GetJobPostingsReq>,
) -> Result<impl IntoResponse> {
    let resp = state.job_service.list_postings(&query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/job/posting/{id}",
    params(
        ("id" = Uuid, Path, description = "Job posting ID")
    ),
    responses(
        (status = 200, description = "Job posting found", body = Json<JobPostingResp>),
        (status = 404, description = "Job posting not found")
    )
)]
#[axum::debug_handler]
pub async fn get_posting(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let resp = state.job_service.get_posting(id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/job/application",
    request_body = CreateJobApplicationReq,
    responses(
        (status = 201, description = "Application submitted successfully"),
        (status = 400, description = "Already applied or payload invalid"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Job posting not found")
    )
)]
#[axum::debug_handler]
pub async fn create_application(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(mut payload): Json<CreateJobApplicationReq>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    payload.login_user_id = claims.user_id()?;
    state.job_service.create_application(&payload).await?;
    Ok(StatusCode::CREATED)
}
