use std::future::Future;

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::profile_dto::GetFreelancerProfilesReq;
use crate::error::Result;
use crate::models::freelancer_profile::FreelancerProfile;

/// Storage port for freelancer profiles. Delete has no exposed route today
/// and is kept as an optional capability.
pub trait ProfileRepo: Clone + Send + Sync + 'static {
    fn create(&self, profile: &FreelancerProfile) -> impl Future<Output = Result<()>> + Send;

    fn update(&self, profile: &FreelancerProfile) -> impl Future<Output = Result<()>> + Send;

    fn get_by_user_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<FreelancerProfile>>> + Send;

    /// Returns the page plus the total count across all filtered rows.
    fn list(
        &self,
        req: &GetFreelancerProfilesReq,
    ) -> impl Future<Output = Result<(Vec<FreelancerProfile>, i64)>> + Send;

    fn delete_by_user_id(&self, user_id: Uuid) -> impl Future<Output = Result<()>> + Send;
}

const COLUMNS: &str = "id, user_id, is_available, hourly_rate, currency, skills, experience, \
     portfolio, availability, preferred_projects, location, contact_email, linkedin_profile, \
     github_profile, website, bio, bio_html, languages, time_zone, response_time, \
     completed_projects, client_satisfaction, is_verified, verification_date, \
     created_at, updated_at";

#[derive(Clone)]
pub struct PgProfileRepo {
    pool: PgPool,
}

impl PgProfileRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, req: &GetFreelancerProfilesReq) {
    builder.push(" WHERE is_available = TRUE");
    if let Some(skills) = &req.skills {
        builder
            .push(" AND skills LIKE ")
            .push_bind(format!("%{}%", skills));
    }
    if let Some(location) = &req.location {
        builder
            .push(" AND location LIKE ")
            .push_bind(format!("%{}%", location));
    }
    if let Some(min_rate) = req.min_rate {
        builder.push(" AND hourly_rate >= ").push_bind(min_rate);
    }
    if let Some(max_rate) = req.max_rate {
        builder.push(" AND hourly_rate <= ").push_bind(max_rate);
    }
    if let Some(currency) = &req.currency {
        builder.push(" AND currency = ").push_bind(currency.clone());
    }
}

impl ProfileRepo for PgProfileRepo {
    async fn create(&self, profile: &FreelancerProfile) -> Result<()> {
        sqlx::query(
            "INSERT INTO freelancer_profile (
                id, user_id, is_available, hourly_rate, currency, skills, experience,
                portfolio, availability, preferred_projects, location, contact_email,
                linkedin_profile, github_profile, website, bio, bio_html, languages,
                time_zone, response_time, completed_projects, client_satisfaction,
                is_verified, verification_date, created_at, updated_at
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17,
                $18, $19, $20, $21, $22, $23, $24, $25, $26
            )",
        )
        .bind(profile.id)
        .bind(profile.user_id)
        .bind(profile.is_available)
        .bind(profile.hourly_rate)
        .bind(&profile.currency)
        .bind(&profile.skills)
        .bind(&profile.experience)
        .bind(&profile.portfolio)
        .bind(&profile.availability)
        .bind(&profile.preferred_projects)
        .bind(&profile.location)
        .bind(&profile.contact_email)
        .bind(&profile.linkedin_profile)
        .bind(&profile.github_profile)
        .bind(&profile.website)
        .bind(&profile.bio)
        .bind(&profile.bio_html)
        .bind(&profile.languages)
        .bind(&profile.time_zone)
        .bind(&profile.response_time)
        .bind(profile.completed_projects)
        .bind(profile.client_satisfaction)
        .bind(profile.is_verified)
        .bind(profile.verification_date)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update(&self, profile: &FreelancerProfile) -> Result<()> {
        sqlx::query(
            "UPDATE freelancer_profile SET
                is_available = $2, hourly_rate = $3, currency = $4, skills = $5,
                experience = $6, portfolio = $7, availability = $8, preferred_projects = $9,
                location = $10, contact_email = $11, linkedin_profile = $12,
                github_profile = $13, website = $14, bio = $15, languages = $16,
                time_zone = $17, response_time = $18, updated_at = $19
            WHERE user_id = $1",
        )
        .bind(profile.user_id)
        .bind(profile.is_available)
        .bind(profile.hourly_rate)
        .bind(&profile.currency)
        .bind(&profile.skills)
        .bind(&profile.experience)
        .bind(&profile.portfolio)
        .bind(&profile.availability)
        .bind(&profile.preferred_projects)
        .bind(&profile.location)
        .bind(&profile.contact_email)
        .bind(&profile.linkedin_profile)
        .bind(&profile.github_profile)
        .bind(&profile.website)
        .bind(&profile.bio)
        .bind(&profile.languages)
        .bind(&profile.time_zone)
        .bind(&profile.response_time)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Option<FreelancerProfile>> {
        let profile = sqlx::query_as::<_, FreelancerProfile>(&format!(
            "SELECT {} FROM freelancer_profile WHERE user_id = $1",
            COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(profile)
    }

    async fn list(
        &self,
        req: &GetFreelancerProfilesReq,
    ) -> Result<(Vec<FreelancerProfile>, i64)> {
        let mut count_builder =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM freelancer_profile");
        push_filters(&mut count_builder, req);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        let mut items_builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {} FROM freelancer_profile",
            COLUMNS
        ));
        push_filters(&mut items_builder, req);
        items_builder.push(" ORDER BY created_at DESC");
        if let Some((limit, offset)) = super::page_window(req.page, req.page_size) {
            items_builder
                .push(" LIMIT ")
                .push_bind(limit)
                .push(" OFFSET ")
                .push_bind(offset);
        }
        let profiles = items_builder
            .build_query_as::<FreelancerProfile>()
            .fetch_all(&self.pool)
            .await?;

        Ok((profiles, total))
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM freelancer_profile WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
