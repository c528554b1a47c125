//! Users repository for database operations

use sqlx::PgConnection;

use crate::{error::AppResult, models::User};

/// Insert a user; the id comes back from the store
pub async fn insert(conn: &mut PgConnection, name: &str) -> AppResult<User> {
    let user = sqlx::query_as::<_, User>("INSERT INTO users (name) VALUES ($1) RETURNING id, name")
        .bind(name)
        .fetch_one(&mut *conn)
        .await?;

    tracing::info!("Created user {} ({})", user.id, user.name);
    Ok(user)
}
