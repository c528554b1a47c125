//! Repository layer for database operations

pub mod catalog;
pub mod loans;
pub mod tables;
pub mod users;

use async_trait::async_trait;
use sqlx::{postgres::PgConnectOptions, Connection, PgConnection};

use crate::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
    models::{
        table::quote_identifier, Author, Book, Category, Loan, NewBook, NewLoan, TableSpec, User,
    },
};

/// Operations the menu needs from the relational store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LibraryStore: Send {
    async fn count_authors(&mut self) -> AppResult<i64>;

    async fn insert_author(&mut self, name: &str) -> AppResult<Author>;

    async fn insert_category(&mut self, name: &str) -> AppResult<Category>;

    async fn insert_book(&mut self, book: &NewBook) -> AppResult<Book>;

    async fn insert_user(&mut self, name: &str) -> AppResult<User>;

    async fn insert_loan(&mut self, loan: &NewLoan) -> AppResult<Loan>;

    /// Every row of `spec.name`, restricted to `spec.columns`, rendered as text
    async fn select_rows(&mut self, spec: &TableSpec) -> AppResult<Vec<Vec<Option<String>>>>;
}

/// Main repository struct holding the single database session
pub struct Repository {
    conn: PgConnection,
}

impl Repository {
    /// Wrap an already opened session
    pub fn new(conn: PgConnection) -> Self {
        Self { conn }
    }

    /// Open the session and point its search path at the configured schema.
    pub async fn connect(config: &DatabaseConfig, password: &str) -> AppResult<Self> {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.username)
            .password(password)
            .database(&config.name);

        let mut conn = PgConnection::connect_with(&options)
            .await
            .map_err(AppError::Connection)?;

        let search_path = format!("SET search_path TO {}", quote_identifier(&config.schema)?);
        sqlx::query(&search_path)
            .execute(&mut conn)
            .await
            .map_err(AppError::Connection)?;

        tracing::info!(
            "Connected to {}:{} as {} (schema {})",
            config.host,
            config.port,
            config.username,
            config.schema
        );

        Ok(Self { conn })
    }

    /// Close the session gracefully
    pub async fn close(self) -> AppResult<()> {
        self.conn.close().await?;
        Ok(())
    }
}

#[async_trait]
impl LibraryStore for Repository {
    async fn count_authors(&mut self) -> AppResult<i64> {
        catalog::count_authors(&mut self.conn).await
    }

    async fn insert_author(&mut self, name: &str) -> AppResult<Author> {
        catalog::insert_author(&mut self.conn, name).await
    }

    async fn insert_category(&mut self, name: &str) -> AppResult<Category> {
        catalog::insert_category(&mut self.conn, name).await
    }

    async fn insert_book(&mut self, book: &NewBook) -> AppResult<Book> {
        catalog::insert_book(&mut self.conn, book).await
    }

    async fn insert_user(&mut self, name: &str) -> AppResult<User> {
        users::insert(&mut self.conn, name).await
    }

    async fn insert_loan(&mut self, loan: &NewLoan) -> AppResult<Loan> {
        loans::insert(&mut self.conn, loan).await
    }

    async fn select_rows(&mut self, spec: &TableSpec) -> AppResult<Vec<Vec<Option<String>>>> {
        tables::select_rows(&mut self.conn, spec).await
    }
}
