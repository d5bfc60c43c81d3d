//! Domain logic for the Gold Leaf Scapes content service.
//!
//! Everything here is pure: no database, no HTTP, no filesystem. The `db`,
//! `media` and `api` crates build on these types.

pub mod content;
pub mod error;
pub mod fields;
pub mod html;
pub mod pages;
pub mod pagination;
pub mod roles;
pub mod slug;
pub mod types;
pub mod validation;
