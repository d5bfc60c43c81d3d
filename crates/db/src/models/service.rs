//! Landscaping service pages.
//!
//! Several text columns hold delimiter-encoded records (`a|b,c|d`); see
//! `goldleaf_core::fields` for the record shapes.

use goldleaf_core::types::{DbId, SortOrder, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub full_description: String,
    pub hero_image_url: String,
    pub icon: String,
    pub hero_tag: String,
    pub hero_meta_projects: String,
    pub hero_meta_satisfaction: String,
    pub hero_meta_guarantee: String,
    pub cta_text: String,
    pub cta_link: String,
    pub stats_strip_data: String,
    pub overview_content: String,
    pub whats_included: String,
    pub timeline_data: String,
    pub process_steps_data: String,
    pub showcase_projects_data: String,
    pub specs_data: String,
    pub faq_data: String,
    pub testimonial_text: String,
    pub testimonial_author: String,
    pub testimonial_role: String,
    /// Comma-separated slugs of related services.
    pub related_services: String,
    pub featured: bool,
    pub sort_order: SortOrder,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a service. A blank `slug` is derived from the title.
#[derive(Debug, Default, Deserialize)]
pub struct CreateService {
    pub title: String,
    pub slug: Option<String>,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub hero_image_url: Option<String>,
    pub icon: Option<String>,
    pub hero_tag: Option<String>,
    pub hero_meta_projects: Option<String>,
    pub hero_meta_satisfaction: Option<String>,
    pub hero_meta_guarantee: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub stats_strip_data: Option<String>,
    pub overview_content: Option<String>,
    pub whats_included: Option<String>,
    pub timeline_data: Option<String>,
    pub process_steps_data: Option<String>,
    pub showcase_projects_data: Option<String>,
    pub specs_data: Option<String>,
    pub faq_data: Option<String>,
    pub testimonial_text: Option<String>,
    pub testimonial_author: Option<String>,
    pub testimonial_role: Option<String>,
    pub related_services: Option<String>,
    pub featured: Option<bool>,
    pub sort_order: Option<SortOrder>,
}

/// DTO for updating a service. A blank `slug` keeps the current one.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateService {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub hero_image_url: Option<String>,
    pub icon: Option<String>,
    pub hero_tag: Option<String>,
    pub hero_meta_projects: Option<String>,
    pub hero_meta_satisfaction: Option<String>,
    pub hero_meta_guarantee: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub stats_strip_data: Option<String>,
    pub overview_content: Option<String>,
    pub whats_included: Option<String>,
    pub timeline_data: Option<String>,
    pub process_steps_data: Option<String>,
    pub showcase_projects_data: Option<String>,
    pub specs_data: Option<String>,
    pub faq_data: Option<String>,
    pub testimonial_text: Option<String>,
    pub testimonial_author: Option<String>,
    pub testimonial_role: Option<String>,
    pub related_services: Option<String>,
    pub featured: Option<bool>,
    pub sort_order: Option<SortOrder>,
}
