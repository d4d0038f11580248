use rust_decimal::Decimal;
use uuid::Uuid;

use crate::dto::profile_dto::{
    CreateFreelancerProfileReq, FreelancerProfileResp, GetFreelancerProfilesReq,
    GetFreelancerProfilesResp, UpdateFreelancerProfileReq,
};
use crate::error::{Error, Result};
use crate::models::freelancer_profile::FreelancerProfile;
use crate::repos::profile_repo::ProfileRepo;
use crate::utils::{json_list, time};

#[derive(Clone)]
pub struct ProfileService<R> {
    repo: R,
}

impl<R: ProfileRepo> ProfileService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn create_profile(&self, req: &CreateFreelancerProfileReq) -> Result<()> {
        if self
            .repo
            .get_by_user_id(req.login_user_id)
            .await?
            .is_some()
        {
            return Err(Error::BadRequest(
                "Freelancer profile already exists".to_string(),
            ));
        }

        let now = time::now();
        let profile = FreelancerProfile {
            id: Uuid::new_v4(),
            user_id: req.login_user_id,
            is_available: req.is_available,
            hourly_rate: req.hourly_rate,
            currency: req.currency.clone(),
            skills: json_list::encode(&req.skills)?,
            experience: req.experience.clone(),
            portfolio: json_list::encode(&req.portfolio)?,
            availability: req.availability.clone(),
            preferred_projects: json_list::encode(&req.preferred_projects)?,
            location: req.location.clone(),
            contact_email: req.contact_email.clone(),
            linkedin_profile: req.linkedin_profile.clone(),
            github_profile: req.github_profile.clone(),
            website: req.website.clone(),
            bio: req.bio.clone(),
            bio_html: String::new(),
            languages: json_list::encode(&req.languages)?,
            time_zone: req.time_zone.clone(),
            response_time: req.response_time.clone(),
            completed_projects: 0,
            client_satisfaction: Decimal::ZERO,
            is_verified: false,
            verification_date: None,
            created_at: now,
            updated_at: now,
        };

        self.repo.create(&profile).await
    }

    /// Full replace of every mutable field; aggregate stats and verification
    /// state stay server-owned.
    pub async fn update_profile(&self, req: &UpdateFreelancerProfileReq) -> Result<()> {
        let mut profile = self
            .repo
            .get_by_user_id(req.login_user_id)
            .await?
            .ok_or_else(|| Error::NotFound("Freelancer profile not found".to_string()))?;

        profile.is_available = req.is_available;
        profile.hourly_rate = req.hourly_rate;
        profile.currency = req.currency.clone();
        profile.skills = json_list::encode(&req.skills)?;
        profile.experience = req.experience.clone();
        profile.portfolio = json_list::encode(&req.portfolio)?;
        profile.availability = req.availability.clone();
        profile.preferred_projects = json_list::encode(&req.preferred_projects)?;
        profile.location = req.location.clone();
        profile.contact_email = req.contact_email.clone();
        profile.linkedin_profile = req.linkedin_profile.clone();
        profile.github_profile = req.github_profile.clone();
        profile.website = req.website.clone();
        profile.bio = req.bio.clone();
        profile.languages = json_list::encode(&req.languages)?;
        profile.time_zone = req.time_zone.clone();
        profile.response_time = req.response_time.clone();
        profile.updated_at = time::now();

        self.repo.update(&profile).await
    }

    pub async fn get_profile(&self, user_id: Uuid) -> Result<FreelancerProfileResp> {
        let profile = self
            .repo
            .get_by_user_id(user_id)
            .await?
            .ok_or_else(|| Error::NotFound("Freelancer profile not found".to_string()))?;
        FreelancerProfileResp::from_entity(&profile)
    }

    pub async fn list_profiles(
        &self,
        req: &GetFreelancerProfilesReq,
    ) -> Result<GetFreelancerProfilesResp> {
        let (profiles, total) = self.repo.list(req).await?;
        let list = profiles
            .iter()
            .map(FreelancerProfileResp::from_entity)
            .collect::<Result<Vec<_>>>()?;
        Ok(GetFreelancerProfilesResp { count: total, list })
    }
}
