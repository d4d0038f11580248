use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::Result;
use crate::models::freelancer_profile::FreelancerProfile;
use crate::utils::{json_list, time};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFreelancerProfileReq {
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub hourly_rate: Decimal,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub portfolio: Vec<String>,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub preferred_projects: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub linkedin_profile: String,
    #[serde(default)]
    pub github_profile: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub time_zone: String,
    #[serde(default)]
    pub response_time: String,
    /// Injected from the authenticated session, never from the body.
    #[serde(skip)]
    pub login_user_id: Uuid,
}

/// Full-replace update; every mutable field is overwritten.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateFreelancerProfileReq {
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub hourly_rate: Decimal,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub portfolio: Vec<String>,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub preferred_projects: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub linkedin_profile: String,
    #[serde(default)]
    pub github_profile: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub time_zone: String,
    #[serde(default)]
    pub response_time: String,
    #[serde(skip)]
    pub login_user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetFreelancerProfileReq {
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GetFreelancerProfilesReq {
    pub page: i64,
    pub page_size: i64,
    pub skills: Option<String>,
    pub location: Option<String>,
    pub min_rate: Option<Decimal>,
    pub max_rate: Option<Decimal>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreelancerProfileResp {
    pub id: Uuid,
    pub user_id: Uuid,
    pub is_available: bool,
    pub hourly_rate: Decimal,
    pub currency: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub portfolio: Vec<String>,
    pub availability: String,
    pub preferred_projects: Vec<String>,
    pub location: String,
    pub contact_email: String,
    pub linkedin_profile: String,
    pub github_profile: String,
    pub website: String,
    pub bio: String,
    pub bio_html: String,
    pub languages: Vec<String>,
    pub time_zone: String,
    pub response_time: String,
    pub completed_projects: i32,
    pub client_satisfaction: Decimal,
    pub is_verified: bool,
    pub verification_date: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetFreelancerProfilesResp {
    pub count: i64,
    pub list: Vec<FreelancerProfileResp>,
}

impl FreelancerProfileResp {
    /// Decodes the JSON list columns; a corrupted column is surfaced as an
    /// error rather than an empty list.
    pub fn from_entity(profile: &FreelancerProfile) -> Result<Self> {
        Ok(Self {
            id: profile.id,
            user_id: profile.user_id,
            is_available: profile.is_available,
            hourly_rate: profile.hourly_rate,
            currency: profile.currency.clone(),
            skills: json_list::decode(&profile.skills)?,
            experience: profile.experience.clone(),
            portfolio: json_list::decode(&profile.portfolio)?,
            availability: profile.availability.clone(),
            preferred_projects: json_list::decode(&profile.preferred_projects)?,
            location: profile.location.clone(),
            contact_email: profile.contact_email.clone(),
            linkedin_profile: profile.linkedin_profile.clone(),
            github_profile: profile.github_profile.clone(),
            website: profile.website.clone(),
            bio: profile.bio.clone(),
            bio_html: profile.bio_html.clone(),
            languages: json_list::decode(&profile.languages)?,
            time_zone: profile.time_zone.clone(),
            response_time: profile.response_time.clone(),
            completed_projects: profile.completed_projects,
            client_satisfaction: profile.client_satisfaction,
            is_verified: profile.is_verified,
            verification_date: profile.verification_date.map(time::to_epoch),
            created_at: time::to_epoch(profile.created_at),
            updated_at: time::to_epoch(profile.updated_at),
        })
    }
}
