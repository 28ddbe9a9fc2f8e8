use async_trait::async_trait;
use domain::{CategoryDto, CategoryStore};
use tracing::debug;

use crate::error::CategoryFeatureError;

/// Category operations as seen by the transport layer
#[async_trait]
pub trait CategoryManager: Send + Sync {
    async fn create(&self, name: &str, product_id: &str) -> Result<String, CategoryFeatureError>;
    async fn list(&self) -> Result<Vec<CategoryDto>, CategoryFeatureError>;
    async fn update(&self, id: &str, name: &str) -> Result<(), CategoryFeatureError>;
    async fn delete(&self, id: &str) -> Result<(), CategoryFeatureError>;
}

/// Service for category-related operations
pub struct CategoryService<S> {
    store: S,
}

impl<S: CategoryStore> CategoryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: CategoryStore> CategoryManager for CategoryService<S> {
    /// Add a category linked to a product
    async fn create(&self, name: &str, product_id: &str) -> Result<String, CategoryFeatureError> {
        let id = self
            .store
            .create(name, product_id)
            .await
            .map_err(|source| CategoryFeatureError::Create {
                name: name.to_string(),
                source,
            })?;

        debug!(%id, name, product_id, "category created");
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<CategoryDto>, CategoryFeatureError> {
        self.store.list().await.map_err(CategoryFeatureError::List)
    }

    async fn update(&self, id: &str, name: &str) -> Result<(), CategoryFeatureError> {
        self.store
            .update(id, name)
            .await
            .map_err(|source| CategoryFeatureError::Update {
                id: id.to_string(),
                source,
            })
    }

    async fn delete(&self, id: &str) -> Result<(), CategoryFeatureError> {
        self.store
            .delete(id)
            .await
            .map_err(|source| CategoryFeatureError::Delete {
                id: id.to_string(),
                source,
            })
    }
}
