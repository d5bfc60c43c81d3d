pub mod auth;
pub mod dashboard;
pub mod gallery;
pub mod heroes;
pub mod insights;
pub mod intro_settings;
pub mod metadata;
pub mod process_steps;
pub mod projects;
pub mod services;
pub mod site;
pub mod users;
