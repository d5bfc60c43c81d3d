//! URL slug generation.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Characters that are neither word characters, whitespace nor hyphens.
static STRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));

/// Runs of hyphens and whitespace.
static DASH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid regex"));

/// A slug as accepted from dashboard input.
static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-a-zA-Z0-9_]+$").expect("valid regex"));

/// Maximum length of a media public id derived from a file name.
pub const MAX_PUBLIC_ID_LEN: usize = 120;

/// Turn arbitrary text into a lowercase, hyphen-separated ASCII slug.
///
/// Accented letters fold to their ASCII base (`é` → `e`) and anything
/// left outside ASCII is dropped. Punctuation is removed, and runs of
/// whitespace or hyphens collapse to a single `-`. Leading and trailing
/// `-`/`_` are trimmed, so the result may be empty.
pub fn slugify(text: &str) -> String {
    // NFKD splits accented letters into base + combining mark.
    let ascii: String = text
        .nfkd()
        .filter(char::is_ascii)
        .collect::<String>()
        .to_lowercase();
    let stripped = STRIP_RE.replace_all(&ascii, "");
    DASH_RE
        .replace_all(&stripped, "-")
        .trim_matches(|c| c == '-' || c == '_')
        .to_string()
}

/// Whether `slug` consists only of letters, digits, hyphens and underscores.
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_RE.is_match(slug)
}

/// Use the given slug when it is non-blank, otherwise derive one from `title`.
pub fn slug_or_title(slug: Option<&str>, title: &str) -> String {
    match slug.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => slugify(title),
    }
}

/// Cut a slug to at most `max` characters.
pub fn truncate_slug(slug: &str, max: usize) -> String {
    slug.chars().take(max).collect()
}

/// Derive a media public id from an uploaded file name.
///
/// The last extension is removed (the upload is re-encoded anyway), the
/// rest is slugified and capped at [`MAX_PUBLIC_ID_LEN`].
pub fn public_id_from_filename(filename: &str) -> String {
    let base = match filename.rsplit_once('.') {
        Some((stem, _ext)) => stem,
        None => filename,
    };
    truncate_slug(&slugify(base), MAX_PUBLIC_ID_LEN)
}
