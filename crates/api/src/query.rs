//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?page=` for page-number listings.
///
/// Kept as a raw string: a value that is not a number still resolves to a
/// page (see `goldleaf_core::pagination::Page::resolve`).
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

/// `?status=` filter for the insights dashboard.
#[derive(Debug, Default, Deserialize)]
pub struct StatusFilter {
    pub status: Option<String>,
}

/// `?page=&custom_slug=` for SEO metadata lookup.
#[derive(Debug, Deserialize)]
pub struct MetadataQuery {
    pub page: String,
    #[serde(default)]
    pub custom_slug: String,
}
