//! Book model and related types

use sqlx::FromRow;

/// Book row from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
    pub category_id: i32,
}

/// Insert request for a book. Foreign keys are store-assigned ids.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author_id: i32,
    pub category_id: i32,
}
