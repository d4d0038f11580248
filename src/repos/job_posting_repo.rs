use std::future::Future;

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::job_dto::GetJobPostingsReq;
use crate::error::Result;
use crate::models::job_posting::JobPosting;

/// Storage port for job postings. `update`, `delete` and `list_by_user` have
/// no exposed route today and are kept as optional capabilities.
pub trait JobPostingRepo: Clone + Send + Sync + 'static {
    fn create(&self, posting: &JobPosting) -> impl Future<Output = Result<()>> + Send;

    fn update(&self, posting: &JobPosting) -> impl Future<Output = Result<()>> + Send;

    fn get_by_id(&self, id: Uuid) -> impl Future<Output = Result<Option<JobPosting>>> + Send;

    fn list(
        &self,
        req: &GetJobPostingsReq,
    ) -> impl Future<Output = Result<(Vec<JobPosting>, i64)>> + Send;

    fn list_by_user(&self, user_id: Uuid) -> impl Future<Output = Result<Vec<JobPosting>>> + Send;

    fn delete(&self, id: Uuid) -> impl Future<Output = Result<()>> + Send;

    /// Row-level atomic increment; callers never await this on the request path.
    fn increment_views(&self, id: Uuid) -> impl Future<Output = Result<()>> + Send;
}

const COLUMNS: &str = "id, user_id, title, description, description_html, budget, currency, \
     budget_type, skills, experience_level, duration, location, status, contact_email, \
     application_count, views_count, is_active, expires_at, created_at, updated_at";

#[derive(Clone)]
pub struct PgJobPostingRepo {
    pool: PgPool,
}

impl PgJobPostingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, req: &GetJobPostingsReq) {
    builder.push(" WHERE is_active = TRUE");
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
    if let Some(min_budget) = req.min_budget {
        builder.push(" AND budget >= ").push_bind(min_budget);
    }
    if let Some(max_budget) = req.max_budget {
        builder.push(" AND budget <= ").push_bind(max_budget);
    }
    if let Some(currency) = &req.currency {
        builder.push(" AND currency = ").push_bind(currency.clone());
    }
    if let Some(status) = req.status {
        builder.push(" AND status = ").push_bind(status);
    }
}

impl JobPostingRepo for PgJobPostingRepo {
    async fn create(&self, posting: &JobPosting) -> Result<()> {
        sqlx::query(
            "INSERT INTO job_posting (
                id, user_id, title, description, description_html, budget, currency,
                budget_type, skills, experience_level, duration, location, status,
                contact_email, application_count, views_count, is_active, expires_at,
                created_at, updated_at
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                $17, $18, $19, $20
            )",
        )
        .bind(posting.id)
        .bind(posting.user_id)
        .bind(&posting.title)
        .bind(&posting.description)
        .bind(&posting.description_html)
        .bind(posting.budget)
        .bind(&posting.currency)
        .bind(&posting.budget_type)
        .bind(&posting.skills)
        .bind(&posting.experience_level)
        .bind(&posting.duration)
        .bind(&posting.location)
        .bind(posting.status)
        .bind(&posting.contact_email)
        .bind(posting.application_count)
        .bind(posting.views_count)
        .bind(posting.is_active)
        .bind(posting.expires_at)
        .bind(posting.created_at)
        .bind(posting.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update(&self, posting: &JobPosting) -> Result<()> {
        sqlx::query(
            "UPDATE job_posting SET
                title = $2, description = $3, budget = $4, currency = $5, budget_type = $6,
                skills = $7, experience_level = $8, duration = $9, location = $10,
                status = $11, contact_email = $12, is_active = $13, expires_at = $14,
                updated_at = $15
            WHERE id = $1",
        )
        .bind(posting.id)
        .bind(&posting.title)
        .bind(&posting.description)
        .bind(posting.budget)
        .bind(&posting.currency)
        .bind(&posting.budget_type)
        .bind(&posting.skills)
        .bind(&posting.experience_level)
        .bind(&posting.duration)
        .bind(&posting.location)
        .bind(posting.status)
        .bind(&posting.contact_email)
        .bind(posting.is_active)
        .bind(posting.expires_at)
        .bind(posting.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<JobPosting>> {
        let posting = sqlx::query_as::<_, JobPosting>(&format!(
            "SELECT {} FROM job_posting WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(posting)
    }

    async fn list(&self, req: &GetJobPostingsReq) -> Result<(Vec<JobPosting>, i64)> {
        let mut count_builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM job_posting");
        push_filters(&mut count_builder, req);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        let mut items_builder =
            QueryBuilder::<Postgres>::new(format!("SELECT {} FROM job_posting", COLUMNS));
        push_filters(&mut items_builder, req);
        items_builder.push(" ORDER BY created_at DESC");
        if let Some((limit, offset)) = super::page_window(req.page, req.page_size) {
            items_builder
                .push(" LIMIT ")
                .push_bind(limit)
                .push(" OFFSET ")
                .push_bind(offset);
        }
        let postings = items_builder
            .build_query_as::<JobPosting>()
            .fetch_all(&self.pool)
            .await?;

        Ok((postings, total))
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<JobPosting>> {
        let postings = sqlx::query_as::<_, JobPosting>(&format!(
            "SELECT {} FROM job_posting WHERE user_id = $1 ORDER BY created_at DESC",
            COLUMNS
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(postings)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM job_posting WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn increment_views(&self, id: Uuid) -> Result<()> {
        sqlx::query("UPDATE job_posting SET views_count = views_count + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
