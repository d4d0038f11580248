use std::future::Future;

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::job_dto::GetJobApplicationsReq;
use crate::error::Result;
use crate::models::job_application::JobApplication;

/// Storage port for job applications. Only `create` and `list_by_applicant`
/// back an exposed route; the rest are optional capabilities.
pub trait JobApplicationRepo: Clone + Send + Sync + 'static {
    fn create(&self, application: &JobApplication) -> impl Future<Output = Result<()>> + Send;

    fn update(&self, application: &JobApplication) -> impl Future<Output = Result<()>> + Send;

    fn get_by_id(&self, id: Uuid) -> impl Future<Output = Result<Option<JobApplication>>> + Send;

    fn list(
        &self,
        req: &GetJobApplicationsReq,
    ) -> impl Future<Output = Result<(Vec<JobApplication>, i64)>> + Send;

    fn list_by_job(&self, job_id: Uuid) -> impl Future<Output = Result<Vec<JobApplication>>> + Send;

    fn list_by_applicant(
        &self,
        applicant_id: Uuid,
    ) -> impl Future<Output = Result<Vec<JobApplication>>> + Send;

    fn delete(&self, id: Uuid) -> impl Future<Output = Result<()>> + Send;
}

const COLUMNS: &str = "id, job_id, applicant_id, cover_letter, proposed_rate, currency, \
     status, message, created_at, updated_at";

#[derive(Clone)]
pub struct PgJobApplicationRepo {
    pool: PgPool,
}

impl PgJobApplicationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, req: &GetJobApplicationsReq) {
    builder.push(" WHERE TRUE");
    if let Some(job_id) = req.job_id {
        builder.push(" AND job_id = ").push_bind(job_id);
    }
    if let Some(applicant_id) = req.applicant_id {
        builder.push(" AND applicant_id = ").push_bind(applicant_id);
    }
    if let Some(status) = req.status {
        builder.push(" AND status = ").push_bind(status);
    }
}

impl JobApplicationRepo for PgJobApplicationRepo {
    async fn create(&self, application: &JobApplication) -> Result<()> {
        sqlx::query(
            "INSERT INTO job_application (
                id, job_id, applicant_id, cover_letter, proposed_rate, currency, status,
                message, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(application.id)
        .bind(application.job_id)
        .bind(application.applicant_id)
        .bind(&application.cover_letter)
        .bind(application.proposed_rate)
        .bind(&application.currency)
        .bind(application.status)
        .bind(&application.message)
        .bind(application.created_at)
        .bind(application.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update(&self, application: &JobApplication) -> Result<()> {
        sqlx::query(
            "UPDATE job_application SET
                cover_letter = $2, proposed_rate = $3, currency = $4, status = $5,
                message = $6, updated_at = $7
            WHERE id = $1",
        )
        .bind(application.id)
        .bind(&application.cover_letter)
        .bind(application.proposed_rate)
        .bind(&application.currency)
        .bind(application.status)
        .bind(&application.message)
        .bind(application.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<JobApplication>> {
        let application = sqlx::query_as::<_, JobApplication>(&format!(
            "SELECT {} FROM job_application WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(application)
    }

    async fn list(&self, req: &GetJobApplicationsReq) -> Result<(Vec<JobApplication>, i64)> {
        let mut count_builder =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM job_application");
        push_filters(&mut count_builder, req);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        let mut items_builder =
            QueryBuilder::<Postgres>::new(format!("SELECT {} FROM job_application", COLUMNS));
        push_filters(&mut items_builder, req);
        items_builder.push(" ORDER BY created_at DESC");
        if let Some((limit, offset)) = super::page_window(req.page, req.page_size) {
            items_builder
                .push(" LIMIT ")
                .push_bind(limit)
                .push(" OFFSET ")
                .push_bind(offset);
        }
        let applications = items_builder
            .build_query_as::<JobApplication>()
            .fetch_all(&self.pool)
            .await?;

        Ok((applications, total))
    }

    async fn list_by_job(&self, job_id: Uuid) -> Result<Vec<JobApplication>> {
        let applications = sqlx::query_as::<_, JobApplication>(&format!(
            "SELECT {} FROM job_application WHERE job_id = $1 ORDER BY created_at DESC",
            COLUMNS
        ))
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(applications)
    }

    async fn list_by_applicant(&self, applicant_id: Uuid) -> Result<Vec<JobApplication>> {
        let applications = sqlx::query_as::<_, JobApplication>(&format!(
            "SELECT {} FROM job_application WHERE applicant_id = $1 ORDER BY created_at DESC",
            COLUMNS
        ))
        .bind(applicant_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(applications)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM job_application WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
