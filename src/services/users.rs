//! User registration

use crate::{
    error::{AppError, AppResult},
    models::User,
    repository::LibraryStore,
};

/// Register a user under `name`. Leading whitespace and the line ending are
/// dropped; anything else is stored as typed.
pub async fn add_user<S>(store: &mut S, name: &str) -> AppResult<User>
where
    S: LibraryStore + ?Sized,
{
    let name = name.trim_start().trim_end_matches(['\r', '\n']);
    store
        .insert_user(name)
        .await
        .map_err(|e| AppError::add_user(name, e))
}
