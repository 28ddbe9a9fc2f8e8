pub mod config;
pub mod error;
pub mod handlers;
pub mod lifecycle;
pub mod middleware;
pub mod server;
pub mod telemetry;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};
use category_feature::{CategoryManager, CategoryService};
use domain::{CategoryRepository, ProductRepository};
use product_feature::{ProductManager, ProductService};
use sqlx::PgPool;

use handlers::{categories, products};

/// Services shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryManager>,
    pub products: Arc<dyn ProductManager>,
}

impl AppState {
    pub fn new(categories: Arc<dyn CategoryManager>, products: Arc<dyn ProductManager>) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// Wire the PostgreSQL-backed services onto `pool`
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            Arc::new(CategoryService::new(CategoryRepository::new(pool.clone()))),
            Arc::new(ProductService::new(ProductRepository::new(pool))),
        )
    }
}

/// Build the HTTP router with request logging applied to every route
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/create/{name}/{product_id}",
            post(categories::create_category),
        )
        .route(
            "/categories/update/{id}/{name}",
            post(categories::update_category),
        )
        .route("/categories/{id}", delete(categories::delete_category))
        .route("/products", get(products::list_products))
        .route("/products/create/{name}", post(products::create_product))
        .route("/products/update/{id}/{name}", post(products::update_product))
        .route("/products/{id}", delete(products::delete_product))
        .layer(axum::middleware::from_fn(middleware::log_request))
        .with_state(state)
}
