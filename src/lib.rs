//! Bookkeep Library Management Menu
//!
//! A console front end over a PostgreSQL `bookkeep` schema: list authors,
//! books and loans, register users, and record loans with computed due dates.

pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
