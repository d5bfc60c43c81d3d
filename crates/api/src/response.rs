//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Dashboard writes of
//! records with structured text fields add a `warnings` list.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "data": T, "warnings": [...] }` for saved rows whose structured
/// fields contain records that will be ignored when parsed.
#[derive(Debug, Serialize)]
pub struct WithWarnings<T: Serialize> {
    pub data: T,
    pub warnings: Vec<String>,
}
