pub mod health;
pub mod hire;
pub mod job;
pub mod profile;
