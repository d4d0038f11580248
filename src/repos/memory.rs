//! In-memory implementations of the storage ports for service-level tests,
//! mirroring the filter, ordering and pagination semantics of the Postgres
//! adapters.

use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::dto::job_dto::{GetJobApplicationsReq, GetJobPostingsReq};
use crate::dto::profile_dto::GetFreelancerProfilesReq;
use crate::error::{Error, Result};
use crate::models::freelancer_profile::FreelancerProfile;
use crate::models::job_application::JobApplication;
use crate::models::job_posting::JobPosting;
use crate::models::user::User;

use super::job_application_repo::JobApplicationRepo;
use super::job_posting_repo::JobPostingRepo;
use super::profile_repo::ProfileRepo;
use super::user_repo::UserRepo;

fn paginate<T: Clone>(mut rows: Vec<T>, page: i64, page_size: i64) -> Vec<T> {
    let Some((limit, offset)) = super::page_window(page, page_size) else {
        return rows;
    };
    let start = offset.min(rows.len() as i64) as usize;
    rows.drain(..start);
    rows.truncate(limit as usize);
    rows
}

#[derive(Clone, Default)]
pub struct InMemoryProfileRepo {
    rows: Arc<Mutex<Vec<FreelancerProfile>>>,
}

impl InMemoryProfileRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, profile: FreelancerProfile) {
        self.rows.lock().unwrap().push(profile);
    }

    pub fn snapshot(&self) -> Vec<FreelancerProfile> {
        self.rows.lock().unwrap().clone()
    }
}

impl ProfileRepo for InMemoryProfileRepo {
    async fn create(&self, profile: &FreelancerProfile) -> Result<()> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|p| p.user_id == profile.user_id) {
            return Err(Error::BadRequest("Resource already exists".to_string()));
        }
        rows.push(profile.clone());
        Ok(())
    }

    async fn update(&self, profile: &FreelancerProfile) -> Result<()> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows.iter_mut().find(|p| p.user_id == profile.user_id) {
            *existing = profile.clone();
        }
        Ok(())
    }

    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Option<FreelancerProfile>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|p| p.user_id == user_id).cloned())
    }

    async fn list(
        &self,
        req: &GetFreelancerProfilesReq,
    ) -> Result<(Vec<FreelancerProfile>, i64)> {
        let rows = self.rows.lock().unwrap();
        let mut matched: Vec<FreelancerProfile> = rows
            .iter()
            .filter(|p| p.is_available)
            .filter(|p| {
                req.skills
                    .as_ref()
                    .map_or(true, |s| p.skills.contains(s.as_str()))
            })
            .filter(|p| {
                req.location
                    .as_ref()
                    .map_or(true, |l| p.location.contains(l.as_str()))
            })
            .filter(|p| req.min_rate.map_or(true, |min| p.hourly_rate >= min))
            .filter(|p| req.max_rate.map_or(true, |max| p.hourly_rate <= max))
            .filter(|p| req.currency.as_ref().map_or(true, |c| &p.currency == c))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let total = matched.len() as i64;
        Ok((paginate(matched, req.page, req.page_size), total))
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<()> {
        self.rows.lock().unwrap().retain(|p| p.user_id != user_id);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryJobPostingRepo {
    rows: Arc<Mutex<Vec<JobPosting>>>,
}

impl InMemoryJobPostingRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, posting: JobPosting) {
        self.rows.lock().unwrap().push(posting);
    }

    pub fn views_of(&self, id: Uuid) -> i32 {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.views_count)
            .unwrap_or(0)
    }
}

impl JobPostingRepo for InMemoryJobPostingRepo {
    async fn create(&self, posting: &JobPosting) -> Result<()> {
        self.rows.lock().unwrap().push(posting.clone());
        Ok(())
    }

    async fn update(&self, posting: &JobPosting) -> Result<()> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows.iter_mut().find(|p| p.id == posting.id) {
            *existing = posting.clone();
        }
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<JobPosting>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self, req: &GetJobPostingsReq) -> Result<(Vec<JobPosting>, i64)> {
        let rows = self.rows.lock().unwrap();
        let mut matched: Vec<JobPosting> = rows
            .iter()
            .filter(|p| p.is_active)
            .filter(|p| {
                req.skills
                    .as_ref()
                    .map_or(true, |s| p.skills.contains(s.as_str()))
            })
            .filter(|p| {
                req.location
                    .as_ref()
                    .map_or(true, |l| p.location.contains(l.as_str()))
            })
            .filter(|p| req.min_budget.map_or(true, |min| p.budget >= min))
            .filter(|p| req.max_budget.map_or(true, |max| p.budget <= max))
            .filter(|p| req.currency.as_ref().map_or(true, |c| &p.currency == c))
            .filter(|p| req.status.map_or(true, |s| p.status == s))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let total = matched.len() as i64;
        Ok((paginate(matched, req.page, req.page_size), total))
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<JobPosting>> {
        let rows = self.rows.lock().unwrap();
        let mut matched: Vec<JobPosting> =
            rows.iter().filter(|p| p.user_id == user_id).cloned().collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.rows.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }

    async fn increment_views(&self, id: Uuid) -> Result<()> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(posting) = rows.iter_mut().find(|p| p.id == id) {
            posting.views_count += 1;
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryJobApplicationRepo {
    rows: Arc<Mutex<Vec<JobApplication>>>,
}

impl InMemoryJobApplicationRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<JobApplication> {
        self.rows.lock().unwrap().clone()
    }
}

impl JobApplicationRepo for InMemoryJobApplicationRepo {
    async fn create(&self, application: &JobApplication) -> Result<()> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|a| a.job_id == application.job_id && a.applicant_id == application.applicant_id)
        {
            return Err(Error::BadRequest("Resource already exists".to_string()));
        }
        rows.push(application.clone());
        Ok(())
    }

    async fn update(&self, application: &JobApplication) -> Result<()> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows.iter_mut().find(|a| a.id == application.id) {
            *existing = application.clone();
        }
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<JobApplication>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|a| a.id == id).cloned())
    }

    async fn list(&self, req: &GetJobApplicationsReq) -> Result<(Vec<JobApplication>, i64)> {
        let rows = self.rows.lock().unwrap();
        let mut matched: Vec<JobApplication> = rows
            .iter()
            .filter(|a| req.job_id.map_or(true, |id| a.job_id == id))
            .filter(|a| req.applicant_id.map_or(true, |id| a.applicant_id == id))
            .filter(|a| req.status.map_or(true, |s| a.status == s))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let total = matched.len() as i64;
        Ok((paginate(matched, req.page, req.page_size), total))
    }

    async fn list_by_job(&self, job_id: Uuid) -> Result<Vec<JobApplication>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|a| a.job_id == job_id).cloned().collect())
    }

    async fn list_by_applicant(&self, applicant_id: Uuid) -> Result<Vec<JobApplication>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|a| a.applicant_id == applicant_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.rows.lock().unwrap().retain(|a| a.id != id);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryUserRepo {
    rows: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, user: User) {
        self.rows.lock().unwrap().push(user);
    }
}

impl UserRepo for InMemoryUserRepo {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|u| u.id == id).cloned())
    }
}
