//! Category administration for the shop's catalogue.

mod domain;
mod service;

pub use domain::{Category, CategoryId, CategoryNotice, CategoryViewModel, NEW_CATEGORY_ID};
pub use service::{create_update, delete_data, get, get_create_update, get_delete};
