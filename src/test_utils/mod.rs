#![allow(missing_docs)]

pub(crate) mod unit_of_work;

pub(crate) use unit_of_work::{RepositoryCall, SpyUnitOfWork, assert_calls};
