//! Contains the traits the category service uses to reach the persistence
//! layer, and an in-memory implementation of them.

mod in_memory;

pub use in_memory::{InMemoryCategoryRepository, InMemoryDatabase, InMemoryUnitOfWork};

use crate::{
    Error,
    category::{Category, CategoryId},
};

/// Stages changes to categories and reads saved categories.
///
/// Changes made through the repository are not visible to other units of
/// work until [UnitOfWork::save] is called.
pub trait CategoryRepository {
    /// Stage a new category. The ID is assigned when the change is saved.
    fn add(&mut self, category: Category) -> Result<(), Error>;

    /// Stage new values for an existing category, matched by ID.
    fn update(&mut self, category: Category) -> Result<(), Error>;

    /// Stage the removal of a category.
    ///
    /// # Errors
    ///
    /// Returns [Error::DeleteMissingCategory] if there is no category with
    /// `category_id`.
    fn delete(&mut self, category_id: CategoryId) -> Result<(), Error>;

    /// Get a saved category by its ID.
    ///
    /// # Errors
    ///
    /// Returns [Error::NotFound] if there is no category with `category_id`.
    fn find(&self, category_id: CategoryId) -> Result<Category, Error>;

    /// Get the saved categories, optionally only those whose name contains `filter`.
    fn get_all(&self, filter: Option<&str>) -> Result<Vec<Category>, Error>;
}

/// Groups the repositories used during a request and commits their staged
/// changes together.
pub trait UnitOfWork {
    /// The category repository type.
    type Category: CategoryRepository;

    /// The category repository for this unit of work.
    fn category(&mut self) -> &mut Self::Category;

    /// Commit all staged changes.
    ///
    /// Either every staged change is applied or none are.
    fn save(&mut self) -> Result<(), Error>;
}
