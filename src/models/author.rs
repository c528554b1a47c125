//! Author model

use sqlx::FromRow;

/// Author row from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Author {
    pub id: i32,
    pub name: String,
}
