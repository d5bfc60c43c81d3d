//! Steps of the generic "how we work" section.

use goldleaf_core::types::{DbId, SortOrder, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `process_steps` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProcessStep {
    pub id: DbId,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub sort_order: SortOrder,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateProcessStep {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub sort_order: Option<SortOrder>,
    pub active: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProcessStep {
    pub icon: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub active: Option<bool>,
}
