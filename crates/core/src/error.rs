use thiserror::Error;

use crate::model::{ActivityError, BmiError, CatalogError, QuestionError, UserIdError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Activity(#[from] ActivityError),
    #[error(transparent)]
    Bmi(#[from] BmiError),
    #[error(transparent)]
    UserId(#[from] UserIdError),
}
