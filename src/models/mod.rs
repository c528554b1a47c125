//! Data models for Bookkeep

pub mod author;
pub mod book;
pub mod category;
pub mod loan;
pub mod table;
pub mod user;

// Re-export commonly used types
pub use author::Author;
pub use book::{Book, NewBook};
pub use category::Category;
pub use loan::{Loan, LoanDates, NewLoan};
pub use table::{TableSpec, TableView};
pub use user::User;
