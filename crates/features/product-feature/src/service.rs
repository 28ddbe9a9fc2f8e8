use async_trait::async_trait;
use domain::{ProductDto, ProductStore};
use tracing::debug;

use crate::error::ProductFeatureError;

/// Product operations as seen by the transport layer
#[async_trait]
pub trait ProductManager: Send + Sync {
    async fn create(&self, name: &str) -> Result<String, ProductFeatureError>;
    async fn list(&self) -> Result<Vec<ProductDto>, ProductFeatureError>;
    async fn update(&self, id: &str, name: &str) -> Result<(), ProductFeatureError>;
    async fn delete(&self, id: &str) -> Result<(), ProductFeatureError>;
}

/// Service for product-related operations
pub struct ProductService<S> {
    store: S,
}

impl<S: ProductStore> ProductService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: ProductStore> ProductManager for ProductService<S> {
    async fn create(&self, name: &str) -> Result<String, ProductFeatureError> {
        let id = self
            .store
            .create(name)
            .await
            .map_err(|source| ProductFeatureError::Create {
                name: name.to_string(),
                source,
            })?;

        debug!(%id, name, "product created");
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<ProductDto>, ProductFeatureError> {
        self.store.list().await.map_err(ProductFeatureError::List)
    }

    async fn update(&self, id: &str, name: &str) -> Result<(), ProductFeatureError> {
        self.store
            .update(id, name)
            .await
            .map_err(|source| ProductFeatureError::Update {
                id: id.to_string(),
                source,
            })
    }

    async fn delete(&self, id: &str) -> Result<(), ProductFeatureError> {
        self.store
            .delete(id)
            .await
            .map_err(|source| ProductFeatureError::Delete {
                id: id.to_string(),
                source,
            })
    }
}
