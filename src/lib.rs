pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repos;
pub mod routes;
pub mod services;
pub mod utils;

use sqlx::PgPool;

use crate::repos::job_application_repo::PgJobApplicationRepo;
use crate::repos::job_posting_repo::PgJobPostingRepo;
use crate::repos::profile_repo::PgProfileRepo;
use crate::repos::user_repo::PgUserRepo;
use crate::services::email::WebhookEmailSender;
use crate::services::hire_service::HireService;
use crate::services::job_service::JobService;
use crate::services::profile_service::ProfileService;
use crate::services::site_info::ConfigSiteInfo;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub profile_service: ProfileService<PgProfileRepo>,
    pub job_service: JobService<PgJobPostingRepo, PgJobApplicationRepo>,
    pub hire_service: HireService<PgUserRepo, PgProfileRepo, ConfigSiteInfo, WebhookEmailSender>,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();

        let profiles = PgProfileRepo::new(pool.clone());
        let postings = PgJobPostingRepo::new(pool.clone());
        let applications = PgJobApplicationRepo::new(pool.clone());
        let users = PgUserRepo::new(pool.clone());

        let profile_service = ProfileService::new(profiles.clone());
        let job_service = JobService::new(postings, applications);
        let hire_service = HireService::new(
            users,
            profiles,
            ConfigSiteInfo::new(config.site_name.clone()),
            WebhookEmailSender::new(config.email_webhook_url.clone()),
        );

        Self {
            pool,
            profile_service,
            job_service,
            hire_service,
        }
    }
}
