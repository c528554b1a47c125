//! Loan registration

use chrono::{DateTime, TimeZone};

use crate::{
    error::{AppError, AppResult},
    models::{Loan, LoanDates, NewLoan},
    repository::LibraryStore,
};

/// Record a loan starting at `now` and due `duration_days` later.
///
/// Neither id is checked here; the store's constraints decide.
pub async fn register_loan<S, Tz>(
    store: &mut S,
    user_id: i32,
    book_id: i32,
    now: DateTime<Tz>,
    duration_days: i64,
) -> AppResult<Loan>
where
    S: LibraryStore + ?Sized,
    Tz: TimeZone,
{
    let dates = LoanDates::starting_at(now, duration_days)
        .map_err(|e| AppError::register_loan(user_id, book_id, e))?;
    let loan = NewLoan {
        user_id,
        book_id,
        dates,
    };

    store
        .insert_loan(&loan)
        .await
        .map_err(|e| AppError::register_loan(user_id, book_id, e))
}
