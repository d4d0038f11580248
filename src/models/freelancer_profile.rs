use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One row per user (`user_id` is unique). The four list-typed fields
/// (`skills`, `portfolio`, `preferred_projects`, `languages`) hold
/// JSON-encoded string arrays in TEXT columns; see [`crate::utils::json_list`]
/// for the codec applied at the DTO boundary.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FreelancerProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub is_available: bool,
    pub hourly_rate: Decimal,
    pub currency: String,
    pub skills: String,
    pub experience: String,
    pub portfolio: String,
    pub availability: String,
    pub preferred_projects: String,
    pub location: String,
    pub contact_email: String,
    pub linkedin_profile: String,
    pub github_profile: String,
    pub website: String,
    pub bio: String,
    pub bio_html: String,
    pub languages: String,
    pub time_zone: String,
    pub response_time: String,
    pub completed_projects: i32,
    pub client_satisfaction: Decimal,
    pub is_verified: bool,
    pub verification_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
