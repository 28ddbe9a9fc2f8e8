use axum::{
    Json,
    extract::{Path, State},
};
use domain::CategoryDto;
use tracing::debug;

use super::log_failure;
use crate::{AppState, error::ApiError};

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryDto>>, ApiError> {
    debug!("list categories");

    let categories = state
        .categories
        .list()
        .await
        .inspect_err(|err| log_failure("list categories", err.kind(), err))?;

    Ok(Json(categories))
}

/// Responds with the generated id as a JSON string
pub async fn create_category(
    State(state): State<AppState>,
    Path((name, product_id)): Path<(String, String)>,
) -> Result<Json<String>, ApiError> {
    debug!(%name, %product_id, "create category");

    let id = state
        .categories
        .create(&name, &product_id)
        .await
        .inspect_err(|err| log_failure("create category", err.kind(), err))?;

    Ok(Json(id))
}

pub async fn update_category(
    State(state): State<AppState>,
    Path((id, name)): Path<(String, String)>,
) -> Result<(), ApiError> {
    debug!(%id, %name, "update category");

    state
        .categories
        .update(&id, &name)
        .await
        .inspect_err(|err| log_failure("update category", err.kind(), err))?;

    Ok(())
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(), ApiError> {
    debug!(%id, "delete category");

    state
        .categories
        .delete(&id)
        .await
        .inspect_err(|err| log_failure("delete category", err.kind(), err))?;

    Ok(())
}
