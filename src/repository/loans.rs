//! Loans repository for database operations

use sqlx::PgConnection;

use crate::{
    error::AppResult,
    models::loan::{Loan, NewLoan},
};

/// Create a new loan
pub async fn insert(conn: &mut PgConnection, loan: &NewLoan) -> AppResult<Loan> {
    let loan = sqlx::query_as::<_, Loan>(
        r#"
        INSERT INTO loans (user_id, book_id, loan_date, return_date)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, book_id, loan_date, return_date
        "#,
    )
    .bind(loan.user_id)
    .bind(loan.book_id)
    .bind(loan.dates.loan_date)
    .bind(loan.dates.return_date)
    .fetch_one(&mut *conn)
    .await?;

    tracing::info!(
        "Created loan {} (user {}, book {}, due {})",
        loan.id,
        loan.user_id,
        loan.book_id,
        loan.return_date
    );
    Ok(loan)
}
