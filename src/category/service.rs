//! The category admin operations.
//!
//! Each operation runs against a request scoped [UnitOfWork] and leaves
//! persistence to it. Repository errors are returned to the caller as-is.

use crate::{
    Error,
    category::{Category, CategoryId, CategoryNotice, CategoryViewModel, NEW_CATEGORY_ID},
    model_state::ModelState,
    unit_of_work::{CategoryRepository, UnitOfWork},
};

/// Save a submitted category, creating it if it has no ID and updating it otherwise.
///
/// # Errors
///
/// Returns [Error::InvalidModel] without touching the repository if
/// `model_state` has errors. Otherwise returns any error from the repository
/// or from saving.
pub fn create_update<U: UnitOfWork>(
    view_model: CategoryViewModel,
    model_state: &ModelState,
    unit_of_work: &mut U,
) -> Result<CategoryNotice, Error> {
    model_state.ensure_valid()?;

    let category = view_model.category;
    let notice = if category.is_new() {
        tracing::debug!("adding category {:?}", category.name);
        unit_of_work.category().add(category)?;
        CategoryNotice::Created
    } else {
        tracing::debug!("updating category {}", category.id);
        unit_of_work.category().update(category)?;
        CategoryNotice::Updated
    };

    unit_of_work.save()?;
    tracing::info!("{notice}");

    Ok(notice)
}

/// Delete the category with `category_id`.
///
/// # Errors
///
/// Returns the repository's error, e.g. [Error::DeleteMissingCategory], if
/// the category does not exist.
pub fn delete_data<U: UnitOfWork>(
    category_id: CategoryId,
    unit_of_work: &mut U,
) -> Result<CategoryNotice, Error> {
    unit_of_work.category().delete(category_id)?;
    unit_of_work.save()?;

    let notice = CategoryNotice::Deleted;
    tracing::info!("{notice}: {category_id}");

    Ok(notice)
}

/// Get every category for the list view.
///
/// The categories are in the order the repository returned them.
pub fn get<U: UnitOfWork>(unit_of_work: &mut U) -> Result<CategoryViewModel, Error> {
    let categories = unit_of_work.category().get_all(None)?;

    Ok(CategoryViewModel {
        category: Category::default(),
        categories,
    })
}

/// Get the view-model for the create/edit form.
///
/// No ID, or the ID of an unsaved category, gives a blank category to create.
///
/// # Errors
///
/// Returns [Error::NotFound] if `category_id` does not refer to a saved category.
pub fn get_create_update<U: UnitOfWork>(
    category_id: Option<CategoryId>,
    unit_of_work: &mut U,
) -> Result<CategoryViewModel, Error> {
    let category = match category_id {
        Some(category_id) if category_id != NEW_CATEGORY_ID => {
            unit_of_work.category().find(category_id)?
        }
        _ => Category::default(),
    };

    let categories = unit_of_work.category().get_all(None)?;

    Ok(CategoryViewModel {
        category,
        categories,
    })
}

/// Get the category to show on the delete confirmation.
///
/// # Errors
///
/// Returns [Error::NotFound] if `category_id` does not refer to a saved category.
pub fn get_delete<U: UnitOfWork>(
    category_id: CategoryId,
    unit_of_work: &mut U,
) -> Result<Category, Error> {
    unit_of_work.category().find(category_id)
}
