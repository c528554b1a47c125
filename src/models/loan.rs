//! Loan model and due-date arithmetic

use std::ops::RangeInclusive;

use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use sqlx::FromRow;

use crate::error::{AppError, AppResult};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Accepted loan lengths, in days
pub const LOAN_DAYS: RangeInclusive<i64> = 1..=36500;

/// Loan row from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Loan {
    pub id: i32,
    pub user_id: i32,
    pub book_id: i32,
    pub loan_date: NaiveDate,
    pub return_date: NaiveDate,
}

/// Create loan request
#[derive(Debug, Clone, PartialEq)]
pub struct NewLoan {
    pub user_id: i32,
    pub book_id: i32,
    pub dates: LoanDates,
}

/// Start and due date of a loan, both as calendar dates in the caller's zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanDates {
    pub loan_date: NaiveDate,
    pub return_date: NaiveDate,
}

impl LoanDates {
    /// Dates for a loan starting at `now`.
    ///
    /// The due date is the calendar date of `now` shifted by a whole number of
    /// 86400-second days, so it counts days rather than calendar months.
    pub fn starting_at<Tz: TimeZone>(now: DateTime<Tz>, duration_days: i64) -> AppResult<Self> {
        if !LOAN_DAYS.contains(&duration_days) {
            return Err(AppError::LoanDuration(duration_days));
        }

        let due = duration_days
            .checked_mul(SECONDS_PER_DAY)
            .and_then(Duration::try_seconds)
            .and_then(|offset| now.clone().checked_add_signed(offset))
            .ok_or(AppError::LoanDuration(duration_days))?;

        Ok(Self {
            loan_date: now.date_naive(),
            return_date: due.date_naive(),
        })
    }
}
