use domain::{DomainError, ErrorKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProductFeatureError {
    #[error("failed to add product {name:?}: {source}")]
    Create { name: String, source: DomainError },

    #[error("failed to get products: {0}")]
    List(#[source] DomainError),

    #[error("failed to set product {id}: {source}")]
    Update { id: String, source: DomainError },

    #[error("failed to delete product {id}: {source}")]
    Delete { id: String, source: DomainError },
}

impl ProductFeatureError {
    pub fn domain(&self) -> &DomainError {
        match self {
            ProductFeatureError::Create { source, .. }
            | ProductFeatureError::Update { source, .. }
            | ProductFeatureError::Delete { source, .. }
            | ProductFeatureError::List(source) => source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.domain().kind()
    }
}
