//! Defines the crate level error type.

use crate::{category::CategoryId, model_state::ModelErrors};

/// The errors that may occur when administering categories.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The submitted model failed validation.
    ///
    /// The caller should correct the listed fields before trying again,
    /// resubmitting the same data will fail the same way.
    #[error("the submitted model is invalid: {0}")]
    InvalidModel(ModelErrors),

    /// The requested category was not found.
    ///
    /// Callers should check that the ID is correct and that the category has
    /// been saved.
    #[error("the requested category could not be found")]
    NotFound,

    /// Tried to update a category that does not exist.
    #[error("tried to update category {0} which is not in the database")]
    UpdateMissingCategory(CategoryId),

    /// Tried to delete a category that does not exist.
    #[error("tried to delete category {0} which is not in the database")]
    DeleteMissingCategory(CategoryId),

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl Error {
    /// Whether the error means the targeted category does not exist.
    ///
    /// Hosts can use this to decide between a "not found" and a generic
    /// failure response.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::NotFound | Error::UpdateMissingCategory(_) | Error::DeleteMissingCategory(_)
        )
    }
}
