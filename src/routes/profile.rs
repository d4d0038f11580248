use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::profile_dto::{
        CreateFreelancerProfileReq, FreelancerProfileResp, GetFreelancerProfileReq,
        GetFreelancerProfilesReq, GetFreelancerProfilesResp, UpdateFreelancerProfileReq,
    },
    error::Result,
    middleware::auth::Claims,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/freelancer/profile",
    request_body = CreateFreelancerProfileReq,
    responses(
        (status = 201, description = "Profile created successfully"),
        (status = 400, description = "Profile already exists or payload invalid"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn create_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(mut payload): Json<CreateFreelancerProfileReq>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    payload.login_user_id = claims.user_id()?;
    state.profile_service.create_profile(&payload).await?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    put,
    path = "/api/freelancer/profile",
    request_body = UpdateFreelancerProfileReq,
    responses(
        (status = 200, description = "Profile updated successfully"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Profile not found")
    )
)]
#[axum::debug_handler]
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(mut payload): Json<UpdateFreelancerProfileReq>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    payload.login_user_id = claims.user_id()?;
    state.profile_service.update_profile(&payload).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    get,
    path = "/api/freelancer/profile",
    params(
        ("user_id" = Uuid, Query, description = "Account id the profile belongs to")
    ),
    responses(
        (status = 200, description = "Profile found", body = Json<FreelancerProfileResp>),
        (status = 404, description = "Profile not found")
    )
)]
#[axum::debug_handler]
pub async fn get_profile(
    State(state): State<AppState>,
    Query(query): Query<GetFreelancerProfileReq>,
) -> Result<impl IntoResponse> {
    let resp = state.profile_service.get_profile(query.user_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/freelancer/profiles",
    params(
        ("page" = Option<i64>, Query, description = "Page number, 0 disables pagination"),
        ("page_size" = Option<i64>, Query, description = "Items per page"),
        ("skills" = Option<String>, Query, description = "Substring match on skills"),
        ("location" = Option<String>, Query, description = "Substring match on location"),
        ("min_rate" = Option<String>, Query, description = "Lower hourly rate bound"),
        ("max_rate" = Option<String>, Query, description = "Upper hourly rate bound"),
        ("currency" = Option<String>, Query, description = "Exact currency match")
    ),
    responses(
        (status = 200, description = "Available freelancer profiles", body = Json<GetFreelancerProfilesResp>)
    )
)]
#[axum::debug_handler]
pub async fn list_profiles(
    State(state): State<AppState>,
    Query(query): Query<GetFreelancerProfilesReq>,
) -> Result<impl IntoResponse> {
    let resp = state.profile_service.list_profiles(&query).await?;
    Ok(Json(resp))
}
