//! User (borrower) model

use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
}
