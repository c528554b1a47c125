//! Error types for Bookkeep

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error connecting to database server: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Loan duration of {0} days is out of range")]
    LoanDuration(i64),

    #[error("Reference data is inconsistent: {0}")]
    SeedData(String),

    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error initializing books: {0}")]
    Seed(#[source] Box<AppError>),

    #[error("Error showing table '{table}': {source}")]
    ShowTable {
        table: String,
        #[source]
        source: Box<AppError>,
    },

    #[error("Error adding user '{name}': {source}")]
    AddUser {
        name: String,
        #[source]
        source: Box<AppError>,
    },

    #[error("Error registering loan for user ID {user_id} and book ID {book_id}: {source}")]
    RegisterLoan {
        user_id: i32,
        book_id: i32,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// Fatal errors end the process; everything else is reported and the menu
    /// carries on.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::Connection(_) | AppError::Io(_))
    }

    pub fn seed(source: AppError) -> Self {
        AppError::Seed(Box::new(source))
    }

    pub fn show_table(table: &str, source: AppError) -> Self {
        AppError::ShowTable {
            table: table.to_string(),
            source: Box::new(source),
        }
    }

    pub fn add_user(name: &str, source: AppError) -> Self {
        AppError::AddUser {
            name: name.to_string(),
            source: Box::new(source),
        }
    }

    pub fn register_loan(user_id: i32, book_id: i32, source: AppError) -> Self {
        AppError::RegisterLoan {
            user_id,
            book_id,
            source: Box::new(source),
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
