use std::cell::RefCell;

use crate::{
    Error,
    category::{Category, CategoryId},
    unit_of_work::{CategoryRepository, UnitOfWork},
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RepositoryCall {
    Add(Category),
    Update(Category),
    Delete(CategoryId),
    Find(CategoryId),
    GetAll(Option<String>),
}

/// Records every call and answers lookups from `categories`.
#[derive(Debug, Default)]
pub(crate) struct SpyCategoryRepository {
    pub calls: RefCell<Vec<RepositoryCall>>,
    pub categories: Vec<Category>,
}

impl CategoryRepository for SpyCategoryRepository {
    fn add(&mut self, category: Category) -> Result<(), Error> {
        self.calls.borrow_mut().push(RepositoryCall::Add(category));

        Ok(())
    }

    fn update(&mut self, category: Category) -> Result<(), Error> {
        self.calls.borrow_mut().push(RepositoryCall::Update(category));

        Ok(())
    }

    fn delete(&mut self, category_id: CategoryId) -> Result<(), Error> {
        self.calls.borrow_mut().push(RepositoryCall::Delete(category_id));

        if self.categories.iter().any(|category| category.id == category_id) {
            Ok(())
        } else {
            Err(Error::DeleteMissingCategory(category_id))
        }
    }

    fn find(&self, category_id: CategoryId) -> Result<Category, Error> {
        self.calls
            .borrow_mut()
            .push(RepositoryCall::Find(category_id));

        self.categories
            .iter()
            .find(|category| category.id == category_id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn get_all(&self, filter: Option<&str>) -> Result<Vec<Category>, Error> {
        self.calls
            .borrow_mut()
            .push(RepositoryCall::GetAll(filter.map(str::to_owned)));

        Ok(self.categories.clone())
    }
}

#[derive(Debug, Default)]
pub(crate) struct SpyUnitOfWork {
    pub category: SpyCategoryRepository,
    pub save_calls: usize,
    /// Returned by the next call to `save`.
    pub save_error: Option<Error>,
}

impl SpyUnitOfWork {
    pub(crate) fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            category: SpyCategoryRepository {
                calls: RefCell::new(Vec::new()),
                categories,
            },
            ..Default::default()
        }
    }
}

impl UnitOfWork for SpyUnitOfWork {
    type Category = SpyCategoryRepository;

    fn category(&mut self) -> &mut Self::Category {
        &mut self.category
    }

    fn save(&mut self) -> Result<(), Error> {
        self.save_calls += 1;

        match self.save_error.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[track_caller]
pub(crate) fn assert_calls(unit_of_work: &SpyUnitOfWork, want: &[RepositoryCall]) {
    let got = unit_of_work.category.calls.borrow();

    assert_eq!(
        got.as_slice(),
        want,
        "got calls to CategoryRepository {got:?}, want {want:?}"
    );
}
