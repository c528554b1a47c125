//! Generic table listing: which columns to fetch and how to print them

use std::fmt;

use crate::error::{AppError, AppResult};

const DIVIDER: &str = "------------------------";

/// A table name and the ordered columns to display from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

impl TableSpec {
    pub const AUTHORS: TableSpec = TableSpec {
        name: "authors",
        columns: &["id", "name"],
    };

    pub const BOOKS: TableSpec = TableSpec {
        name: "books",
        columns: &["id", "title", "author_id", "category_id"],
    };

    pub const LOANS: TableSpec = TableSpec {
        name: "loans",
        columns: &["id", "user_id", "book_id", "loan_date", "return_date"],
    };

    /// Build the select statement for this listing.
    ///
    /// Every column is cast to text so rows of any table decode the same way.
    /// Rows come back ordered by the first requested column.
    pub fn select_sql(&self) -> AppResult<String> {
        let table = quote_identifier(self.name)?;
        let first = self
            .columns
            .first()
            .ok_or_else(|| AppError::InvalidIdentifier(String::new()))?;

        let columns = self
            .columns
            .iter()
            .map(|c| quote_identifier(c).map(|q| format!("{q}::text AS {q}")))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(format!(
            "SELECT {} FROM {table} ORDER BY {table}.{}",
            columns.join(", "),
            quote_identifier(first)?
        ))
    }
}

/// Quote a plain SQL identifier, rejecting anything that is not one.
pub fn quote_identifier(name: &str) -> AppResult<String> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if valid {
        Ok(format!("\"{name}\""))
    } else {
        Err(AppError::InvalidIdentifier(name.to_string()))
    }
}

/// Rows fetched for a [`TableSpec`], values already rendered as text.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub table: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl TableView {
    pub fn new(spec: &TableSpec, rows: Vec<Vec<Option<String>>>) -> Self {
        Self {
            table: spec.name.to_string(),
            columns: spec.columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.table)?;
        for row in &self.rows {
            writeln!(f, "{DIVIDER}")?;
            for (column, value) in self.columns.iter().zip(row) {
                writeln!(f, "{}: {}", column, value.as_deref().unwrap_or("NULL"))?;
            }
        }
        writeln!(f, "{DIVIDER}")?;
        writeln!(f)
    }
}
