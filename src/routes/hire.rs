use axum::{
    extract::State,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::hire_dto::{HireFreelancerReq, HireFreelancerResp},
    error::Result,
    middleware::auth::Claims,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/freelancer/hire",
    request_body = HireFreelancerReq,
    responses(
        (status = 200, description = "Hiring message accepted", body = Json<HireFreelancerResp>),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Freelancer or profile not found")
    )
)]
#[axum::debug_handler]
pub async fn hire_freelancer(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(mut payload): Json<HireFreelancerReq>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    payload.login_user_id = claims.user_id()?;
    let resp = state.hire_service.hire_freelancer(&payload).await?;
    Ok(Json(resp))
}
