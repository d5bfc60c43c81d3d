//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod hero;
pub mod insight;
pub mod intro_settings;
pub mod media;
pub mod page_metadata;
pub mod process_step;
pub mod project;
pub mod service;
pub mod session;
pub mod user;
pub mod user_profile;
