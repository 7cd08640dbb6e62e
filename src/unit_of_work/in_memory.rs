//! Implements a unit of work backed by an in-memory category table.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    Error,
    category::{Category, CategoryId},
    unit_of_work::{CategoryRepository, UnitOfWork},
};

#[derive(Debug, Clone, Default)]
struct CategoryTable {
    rows: Vec<Category>,
    last_id: CategoryId,
}

impl CategoryTable {
    fn contains(&self, category_id: CategoryId) -> bool {
        self.rows.iter().any(|row| row.id == category_id)
    }

    fn apply(&mut self, change: &PendingChange) -> Result<(), Error> {
        match change {
            PendingChange::Add(category) => {
                self.last_id += 1;
                self.rows.push(Category {
                    id: self.last_id,
                    name: category.name.clone(),
                });
            }
            PendingChange::Update(category) => {
                let row = self
                    .rows
                    .iter_mut()
                    .find(|row| row.id == category.id)
                    .ok_or(Error::UpdateMissingCategory(category.id))?;

                row.name = category.name.clone();
            }
            PendingChange::Delete(category_id) => {
                // Another unit of work may have deleted the row after it was staged here.
                if !self.contains(*category_id) {
                    return Err(Error::DeleteMissingCategory(*category_id));
                }

                self.rows.retain(|row| row.id != *category_id);
            }
        }

        Ok(())
    }
}

/// A category store held in memory and shared between units of work.
///
/// Clones share the same table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    table: Arc<Mutex<CategoryTable>>,
}

impl InMemoryDatabase {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a unit of work against this store.
    pub fn unit_of_work(&self) -> InMemoryUnitOfWork {
        InMemoryUnitOfWork {
            category: InMemoryCategoryRepository {
                database: self.clone(),
                pending: Vec::new(),
            },
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, CategoryTable>, Error> {
        self.table
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum PendingChange {
    Add(Category),
    Update(Category),
    Delete(CategoryId),
}

/// Stages category changes for an [InMemoryUnitOfWork] and reads the saved
/// categories from its [InMemoryDatabase].
#[derive(Debug)]
pub struct InMemoryCategoryRepository {
    database: InMemoryDatabase,
    pending: Vec<PendingChange>,
}

impl CategoryRepository for InMemoryCategoryRepository {
    /// Stage a new category.
    ///
    /// Any ID on `category` is ignored, the next free ID is assigned on save.
    fn add(&mut self, category: Category) -> Result<(), Error> {
        self.pending.push(PendingChange::Add(category));

        Ok(())
    }

    /// Stage an update. A missing category is only detected on save.
    fn update(&mut self, category: Category) -> Result<(), Error> {
        self.pending.push(PendingChange::Update(category));

        Ok(())
    }

    fn delete(&mut self, category_id: CategoryId) -> Result<(), Error> {
        let already_deleted = self
            .pending
            .contains(&PendingChange::Delete(category_id));

        if already_deleted || !self.database.lock()?.contains(category_id) {
            return Err(Error::DeleteMissingCategory(category_id));
        }

        self.pending.push(PendingChange::Delete(category_id));

        Ok(())
    }

    fn find(&self, category_id: CategoryId) -> Result<Category, Error> {
        self.database
            .lock()?
            .rows
            .iter()
            .find(|row| row.id == category_id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    /// Get saved categories in the order they were created.
    ///
    /// `filter` matches anywhere in the name, ignoring case.
    fn get_all(&self, filter: Option<&str>) -> Result<Vec<Category>, Error> {
        let filter = filter.map(str::to_lowercase);
        let table = self.database.lock()?;

        let categories = table
            .rows
            .iter()
            .filter(|row| match &filter {
                Some(filter) => row.name.to_lowercase().contains(filter),
                None => true,
            })
            .cloned()
            .collect();

        Ok(categories)
    }
}

/// A request scoped unit of work over an [InMemoryDatabase].
#[derive(Debug)]
pub struct InMemoryUnitOfWork {
    category: InMemoryCategoryRepository,
}

impl UnitOfWork for InMemoryUnitOfWork {
    type Category = InMemoryCategoryRepository;

    fn category(&mut self) -> &mut Self::Category {
        &mut self.category
    }

    /// Apply the staged changes in the order they were made.
    ///
    /// # Errors
    ///
    /// If any change fails, for example an update to a category that does
    /// not exist, the store is left untouched and the staged changes are kept.
    fn save(&mut self) -> Result<(), Error> {
        let mut table = self.category.database.lock()?;
        let mut updated_table = table.clone();

        for change in &self.category.pending {
            updated_table.apply(change)?;
        }

        *table = updated_table;

        tracing::debug!("saved {} category change(s)", self.category.pending.len());
        self.category.pending.clear();

        Ok(())
    }
}
