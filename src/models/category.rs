//! Category model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Category record. Books reference it through `book.category_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl Category {
    /// Name given to a category created on demand for an unknown id
    pub fn default_name(requested_id: i32) -> String {
        format!("Default Category {}", requested_id)
    }
}
