//! Input checks shared by the dashboard write endpoints.

use crate::error::CoreError;
use crate::slug::{is_valid_slug, slug_or_title};

/// Reject a missing or whitespace-only required value.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Like [`require_non_blank`] for a field that may be left out of an update.
pub fn optional_non_blank(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    value.map_or(Ok(()), |v| require_non_blank(field, v))
}

/// A submitted slug may be blank (derived from the title) but otherwise
/// must be a valid slug.
pub fn validate_slug_input(slug: Option<&str>) -> Result<(), CoreError> {
    match slug.map(str::trim) {
        Some(s) if !s.is_empty() && !is_valid_slug(s) => Err(CoreError::Validation(format!(
            "Invalid slug '{s}'. Use letters, numbers, hyphens and underscores only"
        ))),
        _ => Ok(()),
    }
}

/// Check the slug of a new record: the submitted slug when given, otherwise
/// the one derived from `title`, which must not come out empty.
pub fn validate_new_slug(slug: Option<&str>, title: &str) -> Result<(), CoreError> {
    validate_slug_input(slug)?;
    if slug_or_title(slug, title).is_empty() {
        return Err(CoreError::Validation(
            "A slug is required when the title has no letters or digits".into(),
        ));
    }
    Ok(())
}
