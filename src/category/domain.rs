//! Core category domain types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Database identifier for a category.
pub type CategoryId = i64;

/// The ID of a category that has not been saved yet.
///
/// The persistence layer assigns the real ID when the category is saved.
pub const NEW_CATEGORY_ID: CategoryId = 0;

/// A product category in the shop (e.g., 'Books', 'Garden').
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(default)]
pub struct Category {
    /// The database ID, or [NEW_CATEGORY_ID] if not saved yet.
    pub id: CategoryId,
    /// The display name of the category.
    pub name: String,
}

impl Category {
    /// Create a category that has not been saved yet.
    pub fn new(name: &str) -> Self {
        Self {
            id: NEW_CATEGORY_ID,
            name: name.to_owned(),
        }
    }

    /// Whether the category still needs an ID from the persistence layer.
    pub fn is_new(&self) -> bool {
        self.id == NEW_CATEGORY_ID
    }
}

/// The data behind the category admin views: the category being edited and
/// every category for the list.
///
/// Built per request and never persisted. Every field is optional when
/// deserializing a submission, so a form without an ID binds to a new category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryViewModel {
    /// The category being created or edited.
    pub category: Category,
    /// Every saved category, in the order the repository returned them.
    pub categories: Vec<Category>,
}

/// The notice to show the admin after a change was saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryNotice {
    /// A new category was saved.
    Created,
    /// An existing category was changed.
    Updated,
    /// A category was removed.
    Deleted,
}

impl CategoryNotice {
    /// The success message for the admin.
    pub fn message(&self) -> &'static str {
        match self {
            CategoryNotice::Created => "Category created",
            CategoryNotice::Updated => "Category updated",
            CategoryNotice::Deleted => "Category deleted",
        }
    }
}

impl Display for CategoryNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}
