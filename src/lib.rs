//! The category administration core of the ShoppingCart shop.
//!
//! This library validates category submissions and turns them into changes
//! on a [UnitOfWork]. Persistence, HTTP wiring and rendering belong to the
//! host application, which supplies a [UnitOfWork] implementation and calls
//! the operations in [category] once per request.
//!
//! ```
//! use shopping_cart::{InMemoryDatabase, ModelState, category};
//!
//! let database = InMemoryDatabase::new();
//!
//! let mut submission = category::CategoryViewModel::default();
//! submission.category.name = "Books".to_owned();
//! let model_state = ModelState::validate(&submission);
//!
//! category::create_update(submission, &model_state, &mut database.unit_of_work())?;
//!
//! let view_model = category::get(&mut database.unit_of_work())?;
//! assert_eq!(view_model.categories[0].name, "Books");
//! # Ok::<(), shopping_cart::Error>(())
//! ```

#![warn(missing_docs)]

pub mod category;
mod error;
mod model_state;
mod unit_of_work;

#[cfg(test)]
mod test_utils;

pub use error::Error;
pub use model_state::{CATEGORY_NAME_FIELD, FieldError, ModelErrors, ModelState};
pub use unit_of_work::{
    CategoryRepository, InMemoryCategoryRepository, InMemoryDatabase, InMemoryUnitOfWork,
    UnitOfWork,
};
