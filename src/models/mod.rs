pub mod freelancer_profile;
pub mod job_application;
pub mod job_posting;
pub mod user;
