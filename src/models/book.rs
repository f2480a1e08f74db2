//! Book model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Store-assigned book identifier
pub type BookId = i64;

/// Book fields owned by the caller: everything except the id.
///
/// This is both the create and the update body. Updates overwrite every
/// field, so an omitted optional field is cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookData {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    pub genre: Option<String>,
    /// ISO-8601 date (`YYYY-MM-DD`)
    pub publication_date: Option<NaiveDate>,
    /// `true` when the book can be borrowed
    #[serde(default = "default_availability")]
    pub availability_status: bool,
    pub summary: Option<String>,
}

fn default_availability() -> bool {
    true
}

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: BookId,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub data: BookData,
}

impl Book {
    pub fn new(id: BookId, data: BookData) -> Self {
        Self { id, data }
    }
}
