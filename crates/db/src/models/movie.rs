//! Movie entity and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::DbId;

/// A row from the `movies` table.
///
/// Every content field is nullable; `id` is the sole lookup key and is
/// assigned by the database on insert.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub name: Option<String>,
    pub img: Option<String>,
    pub summary: Option<String>,
}

/// DTO for creating a movie. Any subset of fields may be supplied,
/// including none. Unrecognized payload fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub name: Option<String>,
    pub img: Option<String>,
    pub summary: Option<String>,
}

/// DTO for patching a movie. Only fields present and non-null in the
/// payload are applied; absent fields are left unchanged, not cleared.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMovie {
    pub name: Option<String>,
    pub img: Option<String>,
    pub summary: Option<String>,
}
