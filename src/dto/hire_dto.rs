use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HireFreelancerReq {
    pub freelancer_user_id: Uuid,
    #[validate(length(min = 1))]
    pub subject: String,
    #[validate(length(min = 1))]
    pub message: String,
    #[serde(skip)]
    pub login_user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HireFreelancerResp {
    pub success: bool,
    pub message: String,
}
