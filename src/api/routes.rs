//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, post, put};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, CreateItemRequest, DeleteItemResponse, ErrorResponse, HealthResponse, ItemDto,
    ItemListResponse, ItemResponse, UpdateItemRequest,
};
use super::state::AppState;
use crate::store::ItemStore;

/// Build routes with generic store type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the ItemStore trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($S:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$S>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Itemstore API",
        version = "0.1.0",
        description = "CRUD API over an in-memory item collection",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::root,
        handlers::health,
        handlers::list_items,
        handlers::get_item,
        handlers::create_item,
        handlers::update_item,
        handlers::delete_item,
    ),
    components(
        schemas(
            HealthResponse,
            ItemDto,
            ItemResponse,
            ItemListResponse,
            CreateItemRequest,
            UpdateItemRequest,
            DeleteItemResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "items", description = "Item CRUD endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
pub fn create_router<S: ItemStore + 'static>(state: AppState<S>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health));

    // Item routes (generic over ItemStore)
    let item_routes = routes!(S => {
        get "/api/items" => handlers::list_items,
        get "/api/items/{id}" => handlers::get_item,
        post "/api/items" => handlers::create_item,
        put "/api/items/{id}" => handlers::update_item,
        delete "/api/items/{id}" => handlers::delete_item,
    });

    system_routes
        .merge(item_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
