//! Column-list selects for the table listings

use sqlx::{PgConnection, Row};

use crate::{error::AppResult, models::TableSpec};

pub async fn select_rows(
    conn: &mut PgConnection,
    spec: &TableSpec,
) -> AppResult<Vec<Vec<Option<String>>>> {
    let sql = spec.select_sql()?;
    tracing::debug!("{}", sql);

    let rows = sqlx::query(&sql).fetch_all(&mut *conn).await?;

    let mut result = Vec::with_capacity(rows.len());
    for row in rows {
        let values = (0..spec.columns.len())
            .map(|i| row.try_get::<Option<String>, _>(i))
            .collect::<Result<Vec<_>, _>>()?;
        result.push(values);
    }

    Ok(result)
}
