//! Field level validation errors for submitted models and the gate that
//! rejects a submission before it reaches the repository.

use std::fmt::Display;

use crate::{Error, category::CategoryViewModel};

/// The model state key for a category's name.
pub const CATEGORY_NAME_FIELD: &str = "Category.Name";

/// A validation error attached to a single field of a submitted model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The key of the offending field, e.g. "Category.Name".
    pub field: String,
    /// A message describing how to fix the field.
    pub message: String,
}

/// The validation errors collected for a submission, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelErrors(Vec<FieldError>);

impl ModelErrors {
    /// Whether there are no errors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over all errors.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// The error messages for `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> {
        self.0
            .iter()
            .filter(move |error| error.field == field)
            .map(|error| error.message.as_str())
    }
}

impl Display for ModelErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }

            write!(f, "{}: {}", error.field, error.message)?;
        }

        Ok(())
    }
}

/// The validation state of a submitted model.
///
/// The host populates it, either by hand with [ModelState::add_model_error]
/// or with the rules in [ModelState::validate], and passes it alongside the
/// submission. Operations that accept a submission check it with
/// [ModelState::ensure_valid] before touching the repository.
#[derive(Debug, Clone, Default)]
pub struct ModelState {
    errors: ModelErrors,
}

impl ModelState {
    /// Create an empty, valid model state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a submitted category view-model.
    ///
    /// A category name that is empty or only whitespace adds an error for
    /// [CATEGORY_NAME_FIELD].
    pub fn validate(view_model: &CategoryViewModel) -> Self {
        let mut model_state = Self::new();

        if view_model.category.name.trim().is_empty() {
            model_state.add_model_error(CATEGORY_NAME_FIELD, "Name is required");
        }

        model_state
    }

    /// Record a validation error for `field`.
    pub fn add_model_error(&mut self, field: &str, message: &str) {
        self.errors.0.push(FieldError {
            field: field.to_owned(),
            message: message.to_owned(),
        });
    }

    /// Whether no errors have been recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The recorded errors.
    pub fn errors(&self) -> &ModelErrors {
        &self.errors
    }

    /// Fail if any error has been recorded.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidModel] with a copy of the recorded errors if
    /// the model state is not valid.
    pub fn ensure_valid(&self) -> Result<(), Error> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::InvalidModel(self.errors.clone()))
        }
    }
}
