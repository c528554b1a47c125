//! Table listings

use crate::{
    error::{AppError, AppResult},
    models::{TableSpec, TableView},
    repository::LibraryStore,
};

/// Fetch every row of a table for display. Nothing is cached between calls.
pub async fn show_table<S>(store: &mut S, spec: &TableSpec) -> AppResult<TableView>
where
    S: LibraryStore + ?Sized,
{
    let rows = store
        .select_rows(spec)
        .await
        .map_err(|e| AppError::show_table(spec.name, e))?;

    tracing::debug!("Fetched {} rows from {}", rows.len(), spec.name);
    Ok(TableView::new(spec, rows))
}
