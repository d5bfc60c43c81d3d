//! Closed value sets stored as text columns: page keys and insight status.
//!
//! These must match the `CHECK` constraints in the migrations.

use crate::error::CoreError;

/// Pages that can carry a hero banner.
pub const HERO_PAGES: &[&str] = &["home", "services", "about", "contact", "custom"];

/// Pages that can carry SEO metadata.
pub const METADATA_PAGES: &[&str] = &["home", "services", "about", "contact", "blog", "custom"];

pub const PAGE_HOME: &str = "home";
pub const PAGE_SERVICES: &str = "services";
pub const PAGE_CUSTOM: &str = "custom";

pub const STATUS_DRAFT: &str = "draft";
pub const STATUS_PUBLISHED: &str = "published";

const INSIGHT_STATUSES: &[&str] = &[STATUS_DRAFT, STATUS_PUBLISHED];

fn validate_one_of(kind: &str, value: &str, allowed: &[&str]) -> Result<(), CoreError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid {kind} '{value}'. Must be one of: {}",
            allowed.join(", ")
        )))
    }
}

/// Validate a hero page key.
pub fn validate_hero_page(page: &str) -> Result<(), CoreError> {
    validate_one_of("hero page", page, HERO_PAGES)
}

/// Validate a metadata page key.
pub fn validate_metadata_page(page: &str) -> Result<(), CoreError> {
    validate_one_of("metadata page", page, METADATA_PAGES)
}

/// Validate an insight status.
pub fn validate_insight_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("status", status, INSIGHT_STATUSES)
}

/// A custom page must name its slug.
pub fn validate_custom_slug(page: &str, custom_slug: &str) -> Result<(), CoreError> {
    if page == PAGE_CUSTOM && custom_slug.trim().is_empty() {
        return Err(CoreError::Validation(
            "custom_slug is required when page is 'custom'".into(),
        ));
    }
    Ok(())
}

/// Whether a status change should stamp `published_at`.
///
/// Only the first transition into `published` stamps the date; a post that
/// already has a publication date keeps it when re-published.
pub fn should_stamp_published(
    old_status: Option<&str>,
    new_status: &str,
    already_published_at: bool,
) -> bool {
    new_status == STATUS_PUBLISHED
        && old_status != Some(STATUS_PUBLISHED)
        && !already_published_at
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_pages() {
        assert!(validate_hero_page("home").is_ok());
        assert!(validate_hero_page("blog").is_err());
    }

    #[test]
    fn metadata_pages_include_blog() {
        assert!(validate_metadata_page("blog").is_ok());
        assert!(validate_metadata_page("gallery").is_err());
    }

    #[test]
    fn statuses() {
        assert!(validate_insight_status("draft").is_ok());
        assert!(validate_insight_status("archived").is_err());
    }

    #[test]
    fn custom_page_needs_slug() {
        assert!(validate_custom_slug("custom", " ").is_err());
        assert!(validate_custom_slug("custom", "landing").is_ok());
        assert!(validate_custom_slug("home", "").is_ok());
    }

    #[test]
    fn publish_stamp_rules() {
        // New post created as published.
        assert!(should_stamp_published(None, "published", false));
        // Draft promoted for the first time.
        assert!(should_stamp_published(Some("draft"), "published", false));
        // Re-publishing after an unpublish keeps the original date.
        assert!(!should_stamp_published(Some("draft"), "published", true));
        // Saving an already published post.
        assert!(!should_stamp_published(Some("published"), "published", false));
        assert!(!should_stamp_published(Some("published"), "draft", false));
    }
}
