use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::dto::thank_you_page::ArgsError;
use crate::repository::errors::RepositoryError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("The thank you page feature is disabled")]
    FeatureDisabled,

    #[error("{0}")]
    InvalidArgument(String),

    #[error(
        "currentPage value {current_page} specified is greater than the {total_pages} page(s) available"
    )]
    OutOfRange {
        current_page: usize,
        total_pages: usize,
    },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<ArgsError> for ServiceError {
    fn from(err: ArgsError) -> Self {
        ServiceError::InvalidArgument(err.to_string())
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::InvalidArgument(err.to_string())
    }
}
