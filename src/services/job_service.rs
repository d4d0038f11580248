use rust_decimal::Decimal;
use uuid::Uuid;

use crate::dto::job_dto::{
    CreateJobApplicationReq, CreateJobPostingReq, GetJobApplicationsReq, GetJobPostingsReq,
    GetJobPostingsResp, JobApplicationResp, JobPostingResp,
};
use crate::error::{Error, Result};
use crate::models::job_application::{ApplicationStatus, JobApplication};
use crate::models::job_posting::{JobPosting, JobStatus};
use crate::repos::job_application_repo::JobApplicationRepo;
use crate::repos::job_posting_repo::JobPostingRepo;
use crate::utils::{json_list, time};

#[derive(Clone)]
pub struct JobService<P, A> {
    postings: P,
    applications: A,
}

impl<P, A> JobService<P, A>
where
    P: JobPostingRepo,
    A: JobApplicationRepo,
{
    pub fn new(postings: P, applications: A) -> Self {
        Self {
            postings,
            applications,
        }
    }

    pub async fn create_posting(&self, req: &CreateJobPostingReq) -> Result<()> {
        let now = time::now();
        let budget_type = if req.budget_type.is_empty() {
            "fixed".to_string()
        } else {
            req.budget_type.clone()
        };
        let posting = JobPosting {
            id: Uuid::new_v4(),
            user_id: req.login_user_id,
            title: req.title.clone(),
            description: req.description.clone(),
            description_html: String::new(),
            budget: req.budget,
            currency: req.currency.clone(),
            budget_type,
            skills: json_list::encode(&req.skills)?,
            experience_level: req.experience_level.clone(),
            duration: req.duration.clone(),
            location: req.location.clone(),
            status: JobStatus::Open,
            contact_email: req.contact_email.clone(),
            application_count: 0,
            views_count: 0,
            is_active: true,
            expires_at: time::from_epoch(req.expires_at)?,
            created_at: now,
            updated_at: now,
        };
        self.postings.create(&posting).await
    }

    /// The view counter is bumped on a detached task; the response neither
    /// waits for it nor observes its outcome.
    pub async fn get_posting(&self, id: Uuid) -> Result<JobPostingResp> {
        let posting = self
            .postings
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound("Job posting not found".to_string()))?;

        let repo = self.postings.clone();
        tokio::spawn(async move {
            if let Err(err) = repo.increment_views(id).await {
                tracing::warn!(job_id = %id, error = ?err, "failed to increment views count");
            }
        });

        JobPostingResp::from_entity(&posting)
    }

    pub async fn list_postings(&self, req: &GetJobPostingsReq) -> Result<GetJobPostingsResp> {
        let (postings, total) = self.postings.list(req).await?;
        let list = postings
            .iter()
            .map(JobPostingResp::from_entity)
            .collect::<Result<Vec<_>>>()?;
        Ok(GetJobPostingsResp { count: total, list })
    }

    pub async fn create_application(&self, req: &CreateJobApplicationReq) -> Result<()> {
        if self.postings.get_by_id(req.job_id).await?.is_none() {
            return Err(Error::NotFound("Job posting not found".to_string()));
        }

        let existing = self.applications.list_by_applicant(req.login_user_id).await?;
        if existing.iter().any(|a| a.job_id == req.job_id) {
            return Err(Error::BadRequest(
                "You have already applied to this job".to_string(),
            ));
        }

        let now = time::now();
        let application = JobApplication {
            id: Uuid::new_v4(),
            job_id: req.job_id,
            applicant_id: req.login_user_id,
            cover_letter: req.cover_letter.clone(),
            proposed_rate: req.proposed_rate,
            currency: req.currency.clone(),
            status: ApplicationStatus::Pending,
            message: req.message.clone(),
            created_at: now,
            updated_at: now,
        };
        self.applications.create(&application).await
    }

    /// Repo-backed application listing; like status updates, not bound to a
    /// route yet.
    pub async fn list_applications(
        &self,
        req: &GetJobApplicationsReq,
    ) -> Result<(Vec<JobApplicationResp>, i64)> {
        let (applications, total) = self.applications.list(req).await?;
        let list = applications.iter().map(JobApplicationResp::from).collect();
        Ok((list, total))
    }

    /// Applies the closed transition set; not bound to a route yet.
    pub async fn update_application_status(
        &self,
        id: Uuid,
        next: ApplicationStatus,
    ) -> Result<()> {
        let mut application = self
            .applications
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound("Job application not found".to_string()))?;

        if !application.status.can_transition_to(next) {
            return Err(Error::BadRequest(format!(
                "Invalid status transition: {} -> {}",
                application.status.as_str(),
                next.as_str()
            )));
        }

        application.status = next;
        application.updated_at = time::now();
        self.applications.update(&application).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::memory::{InMemoryJobApplicationRepo, InMemoryJobPostingRepo};
    use std::time::Duration;

    fn service() -> (
        JobService<InMemoryJobPostingRepo, InMemoryJobApplicationRepo>,
        InMemoryJobPostingRepo,
        InMemoryJobApplicationRepo,
    ) {
        let postings = InMemoryJobPostingRepo::new();
        let applications = InMemoryJobApplicationRepo::new();
        (
            JobService::new(postings.clone(), applications.clone()),
            postings,
            applications,
        )
    }

    fn sample_posting(id: Uuid) -> JobPosting {
        let now = time::now();
        JobPosting {
            id,
            user_id: Uuid::new_v4(),
            title: "Build an API".to_string(),
            description: "REST backend".to_string(),
            description_html: String::new(),
            budget: Decimal::from(1000),
            currency: "USD".to_string(),
            budget_type: "fixed".to_string(),
            skills: "[\"Rust\"]".to_string(),
            experience_level: "senior".to_string(),
            duration: "1-3 months".to_string(),
            location: "remote".to_string(),
            status: JobStatus::Open,
            contact_email: String::new(),
            application_count: 0,
            views_count: 0,
            is_active: true,
            expires_at: now,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_req(job_id: Uuid, applicant: Uuid) -> CreateJobApplicationReq {
        CreateJobApplicationReq {
            job_id,
            cover_letter: "I would love to help".to_string(),
            proposed_rate: Decimal::from(60),
            currency: "USD".to_string(),
            message: String::new(),
            login_user_id: applicant,
        }
    }

    #[tokio::test]
    async fn get_posting_bumps_views_without_blocking_the_response() {
        let (service, postings, _) = service();
        let id = Uuid::new_v4();
        postings.insert(sample_posting(id));

        let resp = service.get_posting(id).await.unwrap();
        // The response reflects the pre-increment value.
        assert_eq!(resp.views_count, 0);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(postings.views_of(id), 1);
    }

    #[tokio::test]
    async fn get_missing_posting_is_not_found() {
        let (service, _, _) = service();
        let err = service.get_posting(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn second_application_to_same_job_is_rejected() {
        let (service, postings, applications) = service();
        let job_id = Uuid::new_v4();
        postings.insert(sample_posting(job_id));
        let applicant = Uuid::new_v4();

        service.create_application(&apply_req(job_id, applicant)).await.unwrap();
        let err = service
            .create_application(&apply_req(job_id, applicant))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));

        let rows = applications.snapshot();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, ApplicationStatus::Pending);
    }

    #[tokio::test]
    async fn applying_to_missing_job_creates_no_row() {
        let (service, _, applications) = service();
        let err = service
            .create_application(&apply_req(Uuid::new_v4(), Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert!(applications.snapshot().is_empty());
    }

    #[tokio::test]
    async fn application_status_follows_the_transition_set() {
        let (service, postings, applications) = service();
        let job_id = Uuid::new_v4();
        postings.insert(sample_posting(job_id));
        let applicant = Uuid::new_v4();
        service.create_application(&apply_req(job_id, applicant)).await.unwrap();
        let app_id = applications.snapshot()[0].id;

        service
            .update_application_status(app_id, ApplicationStatus::Accepted)
            .await
            .unwrap();
        assert_eq!(applications.snapshot()[0].status, ApplicationStatus::Accepted);

        let err = service
            .update_application_status(app_id, ApplicationStatus::Withdrawn)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }

    #[tokio::test]
    async fn applications_list_by_applicant_with_response_fields() {
        let (service, postings, _) = service();
        let first_job = Uuid::new_v4();
        let second_job = Uuid::new_v4();
        postings.insert(sample_posting(first_job));
        postings.insert(sample_posting(second_job));

        let applicant = Uuid::new_v4();
        let other = Uuid::new_v4();
        service.create_application(&apply_req(first_job, applicant)).await.unwrap();
        service.create_application(&apply_req(second_job, applicant)).await.unwrap();
        service.create_application(&apply_req(first_job, other)).await.unwrap();

        let (list, total) = service
            .list_applications(&GetJobApplicationsReq {
                applicant_id: Some(applicant),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(total, 2);
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|a| a.applicant_id == applicant));
        assert!(list.iter().all(|a| a.status == ApplicationStatus::Pending));
        assert!(list.iter().all(|a| a.created_at > 0));

        let (rejected, total) = service
            .list_applications(&GetJobApplicationsReq {
                status: Some(ApplicationStatus::Rejected),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(total, 0);
        assert!(rejected.is_empty());
    }

    #[tokio::test]
    async fn listing_filters_by_status() {
        let (service, postings, _) = service();
        let mut open = sample_posting(Uuid::new_v4());
        open.status = JobStatus::Open;
        let mut filled = sample_posting(Uuid::new_v4());
        filled.status = JobStatus::Filled;
        postings.insert(open);
        postings.insert(filled);

        let resp = service
            .list_postings(&GetJobPostingsReq {
                status: Some(JobStatus::Filled),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(resp.count, 1);
        assert_eq!(resp.list[0].status, JobStatus::Filled);
    }
}
