//! Category Endpoints
//!
//! # Endpoints
//!
//! - `GET /api/health` - Health check endpoint
//! - `POST /api/categories` - Create a category
//! - `GET /api/categories/tree` - Full nested tree
//! - `GET /api/categories/:id` - Get a category by ID
//! - `PUT /api/categories/:id` - Rename and/or re-parent a category
//! - `DELETE /api/categories/:id` - Delete a category and its subtree

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use category_tree_core::models::{Category, CategoryTree};
use serde::{Deserialize, Serialize};

use crate::{AppState, HttpError};

/// Request body for create and update
///
/// A missing `name` deserializes as empty and is rejected by validation.
/// `parentId` omitted, `null` or `""` all mean "root".
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
}

impl CategoryInput {
    fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// Response carrying a single category
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub category: Category,
}

/// Response for a successful delete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Response carrying the full tree
#[derive(Debug, Serialize)]
pub struct TreeResponse {
    pub success: bool,
    pub tree: Vec<CategoryTree>,
}

/// Health check endpoint
///
/// ```bash
/// curl http://localhost:3001/api/health
/// ```
async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create a new category
///
/// ```bash
/// curl -X POST http://localhost:3001/api/categories \
///   -H 'Content-Type: application/json' \
///   -d '{"name": "Mobiles", "parentId": "<electronics-id>"}'
/// ```
async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CategoryInput>,
) -> Result<(StatusCode, Json<CategoryResponse>), HttpError> {
    let category = state
        .category_service
        .create_category(&input.name, input.parent_id())
        .await
        .map_err(|e| {
            tracing::error!("Error creating category: {}", e);
            HttpError::from(e)
        })?;

    Ok((
        StatusCode::CREATED,
        Json(CategoryResponse {
            success: true,
            message: Some("Category created"),
            category,
        }),
    ))
}

/// Get the full nested category tree
async fn get_category_tree(
    State(state): State<AppState>,
) -> Result<Json<TreeResponse>, HttpError> {
    let tree = state
        .category_service
        .get_category_tree()
        .await
        .map_err(|e| {
            tracing::error!("Error fetching category tree: {}", e);
            HttpError::from(e)
        })?;

    Ok(Json(TreeResponse {
        success: true,
        tree,
    }))
}

/// Get a single category by ID
async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CategoryResponse>, HttpError> {
    let category = state.category_service.get_category(&id).await?;

    Ok(Json(CategoryResponse {
        success: true,
        message: None,
        category,
    }))
}

/// Update a category (replace semantics: omitting `parentId` makes it a root)
async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<CategoryInput>,
) -> Result<Json<CategoryResponse>, HttpError> {
    let category = state
        .category_service
        .update_category(&id, &input.name, input.parent_id())
        .await
        .map_err(|e| {
            tracing::error!("Error updating category {}: {}", id, e);
            HttpError::from(e)
        })?;

    Ok(Json(CategoryResponse {
        success: true,
        message: Some("Category updated"),
        category,
    }))
}

/// Delete a category and all of its descendants
async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, HttpError> {
    state
        .category_service
        .delete_category(&id)
        .await
        .map_err(|e| {
            tracing::error!("Error deleting category {}: {}", id, e);
            HttpError::from(e)
        })?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Category deleted",
    }))
}

/// Create category routes
///
/// `/api/categories/tree` is a static segment, so axum matches it ahead of
/// the `:id` capture.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/categories", post(create_category))
        .route("/api/categories/tree", get(get_category_tree))
        .route(
            "/api/categories/:id",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
        .with_state(state)
}
