//! Category model

use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
}
