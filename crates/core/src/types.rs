/// Primary keys (PostgreSQL `BIGSERIAL`).
pub type DbId = i64;

/// UTC timestamp as stored in `TIMESTAMPTZ` columns.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Display position of a card or section; lower sorts first.
pub type SortOrder = i32;
