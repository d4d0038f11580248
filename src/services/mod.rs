pub mod email;
pub mod hire_service;
pub mod job_service;
pub mod profile_service;
pub mod site_info;
