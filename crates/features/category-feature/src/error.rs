use domain::{DomainError, ErrorKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CategoryFeatureError {
    #[error("failed to add category {name:?}: {source}")]
    Create { name: String, source: DomainError },

    #[error("failed to get categories: {0}")]
    List(#[source] DomainError),

    #[error("failed to set category {id}: {source}")]
    Update { id: String, source: DomainError },

    #[error("failed to delete category {id}: {source}")]
    Delete { id: String, source: DomainError },
}

impl CategoryFeatureError {
    /// The store error this failure wraps
    pub fn domain(&self) -> &DomainError {
        match self {
            CategoryFeatureError::Create { source, .. }
            | CategoryFeatureError::Update { source, .. }
            | CategoryFeatureError::Delete { source, .. }
            | CategoryFeatureError::List(source) => source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.domain().kind()
    }
}
