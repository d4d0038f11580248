use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::Result;
use crate::models::job_application::{ApplicationStatus, JobApplication};
use crate::models::job_posting::{JobPosting, JobStatus};
use crate::utils::{json_list, time};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobPostingReq {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[serde(default)]
    pub budget: Decimal,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub budget_type: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub contact_email: String,
    /// Epoch seconds; converted to an absolute timestamp on insert.
    #[serde(default)]
    pub expires_at: i64,
    #[serde(skip)]
    pub login_user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GetJobPostingsReq {
    pub page: i64,
    pub page_size: i64,
    pub skills: Option<String>,
    pub location: Option<String>,
    pub min_budget: Option<Decimal>,
    pub max_budget: Option<Decimal>,
    pub currency: Option<String>,
    pub status: Option<JobStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPostingResp {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub description_html: String,
    pub budget: Decimal,
    pub currency: String,
    pub budget_type: String,
    pub skills: Vec<String>,
    pub experience_level: String,
    pub duration: String,
    pub location: String,
    pub status: JobStatus,
    pub contact_email: String,
    pub application_count: i32,
    pub views_count: i32,
    pub is_active: bool,
    pub expires_at: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetJobPostingsResp {
    pub count: i64,
    pub list: Vec<JobPostingResp>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobApplicationReq {
    pub job_id: Uuid,
    #[serde(default)]
    pub cover_letter: String,
    #[serde(default)]
    pub proposed_rate: Decimal,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub message: String,
    #[serde(skip)]
    pub login_user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GetJobApplicationsReq {
    pub job_id: Option<Uuid>,
    pub applicant_id: Option<Uuid>,
    pub status: Option<ApplicationStatus>,
    pub page: i64,
    pub page_size: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplicationResp {
    pub id: Uuid,
    pub job_id: Uuid,
    pub applicant_id: Uuid,
    pub cover_letter: String,
    pub proposed_rate: Decimal,
    pub currency: String,
    pub status: ApplicationStatus,
    pub message: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl JobPostingResp {
    pub fn from_entity(posting: &JobPosting) -> Result<Self> {
        Ok(Self {
            id: posting.id,
            user_id: posting.user_id,
            title: posting.title.clone(),
            description: posting.description.clone(),
            description_html: posting.description_html.clone(),
            budget: posting.budget,
            currency: posting.currency.clone(),
            budget_type: posting.budget_type.clone(),
            skills: json_list::decode(&posting.skills)?,
            experience_level: posting.experience_level.clone(),
            duration: posting.duration.clone(),
            location: posting.location.clone(),
            status: posting.status,
            contact_email: posting.contact_email.clone(),
            application_count: posting.application_count,
            views_count: posting.views_count,
            is_active: posting.is_active,
            expires_at: time::to_epoch(posting.expires_at),
            created_at: time::to_epoch(posting.created_at),
            updated_at: time::to_epoch(posting.updated_at),
        })
    }
}

impl From<&JobApplication> for JobApplicationResp {
    fn from(application: &JobApplication) -> Self {
        Self {
            id: application.id,
            job_id: application.job_id,
            applicant_id: application.applicant_id,
            cover_letter: application.cover_letter.clone(),
            proposed_rate: application.proposed_rate,
            currency: application.currency.clone(),
            status: application.status,
            message: application.message.clone(),
            created_at: time::to_epoch(application.created_at),
            updated_at: time::to_epoch(application.updated_at),
        }
    }
}
