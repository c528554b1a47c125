//! Authors, categories and books

use sqlx::PgConnection;

use crate::{
    error::AppResult,
    models::{Author, Book, Category, NewBook},
};

/// Count authors; the seeder keys off this number
pub async fn count_authors(conn: &mut PgConnection) -> AppResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
        .fetch_one(&mut *conn)
        .await?;
    Ok(count)
}

pub async fn insert_author(conn: &mut PgConnection, name: &str) -> AppResult<Author> {
    let author = sqlx::query_as::<_, Author>(
        "INSERT INTO authors (name) VALUES ($1) RETURNING id, name",
    )
    .bind(name)
    .fetch_one(&mut *conn)
    .await?;

    tracing::debug!("Inserted author {} ({})", author.id, author.name);
    Ok(author)
}

pub async fn insert_category(conn: &mut PgConnection, name: &str) -> AppResult<Category> {
    let category = sqlx::query_as::<_, Category>(
        "INSERT INTO categories (name) VALUES ($1) RETURNING id, name",
    )
    .bind(name)
    .fetch_one(&mut *conn)
    .await?;

    tracing::debug!("Inserted category {} ({})", category.id, category.name);
    Ok(category)
}

pub async fn insert_book(conn: &mut PgConnection, book: &NewBook) -> AppResult<Book> {
    let inserted = sqlx::query_as::<_, Book>(
        r#"
        INSERT INTO books (title, author_id, category_id)
        VALUES ($1, $2, $3)
        RETURNING id, title, author_id, category_id
        "#,
    )
    .bind(&book.title)
    .bind(book.author_id)
    .bind(book.category_id)
    .fetch_one(&mut *conn)
    .await?;

    tracing::debug!("Inserted book {} ({})", inserted.id, inserted.title);
    Ok(inserted)
}
