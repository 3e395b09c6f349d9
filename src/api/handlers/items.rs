//! Item CRUD handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::store::{Item, ItemPatch, ItemStore, StoreError};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Item payload DTO
#[derive(Serialize, ToSchema)]
pub struct ItemDto {
    /// Unique identifier
    #[schema(example = 1)]
    pub id: u64,
    /// Item name
    #[schema(example = "Item 1")]
    pub name: String,
    /// Item description, empty when none was given
    #[schema(example = "Description for Item 1")]
    pub description: String,
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
        }
    }
}

/// Single item response DTO
#[derive(Serialize, ToSchema)]
pub struct ItemResponse {
    /// The requested or affected item
    pub item: ItemDto,
}

/// Item list response DTO
#[derive(Serialize, ToSchema)]
pub struct ItemListResponse {
    /// All items in insertion order
    pub items: Vec<ItemDto>,
}

/// Create item request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    /// Item name
    #[schema(example = "Item 3")]
    pub name: String,
    /// Optional description, defaults to empty
    #[schema(example = "Description for Item 3")]
    #[serde(default)]
    pub description: String,
}

/// Update item request DTO
///
/// Omitted fields keep their stored value.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    /// Item name
    #[schema(example = "Renamed item")]
    pub name: Option<String>,
    /// Item description
    #[schema(example = "Updated description")]
    pub description: Option<String>,
}

/// Delete confirmation DTO
#[derive(Serialize, ToSchema)]
pub struct DeleteItemResponse {
    /// Confirmation message
    #[schema(example = "Item deleted")]
    pub result: String,
}

/// Error response DTO
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Item not found")]
    pub error: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// List all items
///
/// Returns every stored item in insertion order
#[utoipa::path(
    get,
    path = "/api/items",
    tag = "items",
    responses(
        (status = 200, description = "List of all items", body = ItemListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_items<S: ItemStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<ItemListResponse>, (StatusCode, Json<ErrorResponse>)> {
    let items = state.store().list().map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    Ok(Json(ItemListResponse {
        items: items.into_iter().map(ItemDto::from).collect(),
    }))
}

/// Get an item by ID
///
/// Returns a single item by its ID
#[utoipa::path(
    get,
    path = "/api/items/{id}",
    tag = "items",
    params(
        ("id" = u64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_item<S: ItemStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<u64>,
) -> Result<Json<ItemResponse>, (StatusCode, Json<ErrorResponse>)> {
    let item = state.store().get(id).map_err(|e| match e {
        StoreError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Item not found".to_string(),
            }),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        ),
    })?;

    Ok(Json(ItemResponse {
        item: ItemDto::from(item),
    }))
}

/// Create a new item
///
/// Creates a new item with an auto-assigned ID and returns it
#[utoipa::path(
    post,
    path = "/api/items",
    tag = "items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_item<S: ItemStore>(
    State(state): State<AppState<S>>,
    body: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemResponse>), (StatusCode, Json<ErrorResponse>)> {
    // Absent body, malformed JSON, and a missing `name` field all
    // collapse to the same 400.
    let Json(req) = body.map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Bad request".to_string(),
            }),
        )
    })?;

    let item = state
        .store()
        .insert(req.name, req.description)
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
        })?;

    Ok((
        StatusCode::CREATED,
        Json(ItemResponse {
            item: ItemDto::from(item),
        }),
    ))
}

/// Update an item
///
/// Applies a partial update: omitted fields keep their stored value
#[utoipa::path(
    put,
    path = "/api/items/{id}",
    tag = "items",
    params(
        ("id" = u64, Path, description = "Item ID")
    ),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Item updated", body = ItemResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_item<S: ItemStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<u64>,
    body: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<Json<ItemResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Existence check runs before body validation; an unknown id is 404
    // even when the body is also bad.
    state.store().get(id).map_err(|e| match e {
        StoreError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Item not found".to_string(),
            }),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        ),
    })?;

    let Json(req) = body.map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Bad request".to_string(),
            }),
        )
    })?;

    let patch = ItemPatch {
        name: req.name,
        description: req.description,
    };

    let item = state.store().update(id, patch).map_err(|e| match e {
        StoreError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Item not found".to_string(),
            }),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        ),
    })?;

    Ok(Json(ItemResponse {
        item: ItemDto::from(item),
    }))
}

/// Delete an item
///
/// Removes an item by its ID
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    tag = "items",
    params(
        ("id" = u64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = DeleteItemResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_item<S: ItemStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteItemResponse>, (StatusCode, Json<ErrorResponse>)> {
    state.store().delete(id).map_err(|e| match e {
        StoreError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Item not found".to_string(),
            }),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        ),
    })?;

    Ok(Json(DeleteItemResponse {
        result: "Item deleted".to_string(),
    }))
}
