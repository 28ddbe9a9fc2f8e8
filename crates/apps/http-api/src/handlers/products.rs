use axum::{
    Json,
    extract::{Path, State},
};
use domain::ProductDto;
use tracing::debug;

use super::log_failure;
use crate::{AppState, error::ApiError};

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductDto>>, ApiError> {
    debug!("list products");

    let products = state
        .products
        .list()
        .await
        .inspect_err(|err| log_failure("list products", err.kind(), err))?;

    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<String>, ApiError> {
    debug!(%name, "create product");

    let id = state
        .products
        .create(&name)
        .await
        .inspect_err(|err| log_failure("create product", err.kind(), err))?;

    Ok(Json(id))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path((id, name)): Path<(String, String)>,
) -> Result<(), ApiError> {
    debug!(%id, %name, "update product");

    state
        .products
        .update(&id, &name)
        .await
        .inspect_err(|err| log_failure("update product", err.kind(), err))?;

    Ok(())
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(), ApiError> {
    debug!(%id, "delete product");

    state
        .products
        .delete(&id)
        .await
        .inspect_err(|err| log_failure("delete product", err.kind(), err))?;

    Ok(())
}
