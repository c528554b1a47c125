//! Menu operations over a [`LibraryStore`](crate::repository::LibraryStore)

pub mod loans;
pub mod seed;
pub mod tables;
pub mod users;

use std::fmt;

use crate::models::{Loan, TableView, User};

pub use loans::register_loan;
pub use seed::{seed_reference_data, SeedReport};
pub use tables::show_table;
pub use users::add_user;

/// What a successful menu operation produced, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Table(TableView),
    UserAdded(User),
    LoanRegistered(Loan),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Table(view) => write!(f, "{view}"),
            Outcome::UserAdded(user) => writeln!(f, "User '{}' added successfully!", user.name),
            Outcome::LoanRegistered(loan) => {
                writeln!(f, "Loan registered successfully!")?;
                writeln!(
                    f,
                    "Loan Date: {}, Return Date: {}",
                    loan.loan_date, loan.return_date
                )
            }
        }
    }
}
