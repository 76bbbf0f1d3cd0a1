//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;
use uuid::Uuid;

use auth::CurrentUser;
use kernel::id::{ItemId, UserId};

use crate::application::{
    CreateItemInput, CreateItemUseCase, DeleteItemUseCase, QueryItemsUseCase, UpdateItemUseCase,
};
use crate::domain::repository::ItemRepository;
use crate::domain::value_object::ItemFilter;
use crate::error::ListingResult;
use crate::presentation::dto::{
    CreateItemRequest, DeleteItemResponse, ItemResponse, ListItemsQuery, UpdateItemRequest,
};

/// Shared state for listing handlers
#[derive(Clone)]
pub struct ListingsAppState<R>
where
    R: ItemRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Mutations (require authentication)
// ============================================================================

/// POST /api/items
pub async fn create_item<R>(
    State(state): State<ListingsAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Json(req): Json<CreateItemRequest>,
) -> ListingResult<impl IntoResponse>
where
    R: ItemRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateItemUseCase::new(state.repo.clone());

    let input = CreateItemInput {
        title: req.title,
        description: req.description,
        images: req.images,
        category: req.category,
        condition: req.condition,
        looking_for: req.looking_for,
        location: req.location,
    };

    let listed = use_case.execute(current.0.user_id, input).await?;

    Ok((StatusCode::CREATED, Json(ItemResponse::from(&listed))))
}

/// PUT /api/items/{id}
pub async fn update_item<R>(
    State(state): State<ListingsAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateItemRequest>,
) -> ListingResult<Json<ItemResponse>>
where
    R: ItemRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateItemUseCase::new(state.repo.clone());

    let listed = use_case
        .execute(ItemId::from_uuid(id), current.0.user_id, req.into())
        .await?;

    Ok(Json(ItemResponse::from(&listed)))
}

/// DELETE /api/items/{id}
pub async fn delete_item<R>(
    State(state): State<ListingsAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> ListingResult<Json<DeleteItemResponse>>
where
    R: ItemRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteItemUseCase::new(state.repo.clone());

    use_case
        .execute(ItemId::from_uuid(id), current.0.user_id)
        .await?;

    Ok(Json(DeleteItemResponse {
        message: "Item deleted successfully".to_string(),
    }))
}

// ============================================================================
// Public reads
// ============================================================================

/// GET /api/items
pub async fn list_items<R>(
    State(state): State<ListingsAppState<R>>,
    Query(q): Query<ListItemsQuery>,
) -> ListingResult<Json<Vec<ItemResponse>>>
where
    R: ItemRepository + Clone + Send + Sync + 'static,
{
    let use_case = QueryItemsUseCase::new(state.repo.clone());

    let filter = ItemFilter::new(q.category, q.condition, q.search, q.limit, q.page);
    let items = use_case.list(&filter).await?;

    Ok(Json(items.iter().map(ItemResponse::from).collect()))
}

/// GET /api/items/{id}
pub async fn get_item<R>(
    State(state): State<ListingsAppState<R>>,
    Path(id): Path<Uuid>,
) -> ListingResult<Json<ItemResponse>>
where
    R: ItemRepository + Clone + Send + Sync + 'static,
{
    let use_case = QueryItemsUseCase::new(state.repo.clone());

    let listed = use_case.get(&ItemId::from_uuid(id)).await?;

    Ok(Json(ItemResponse::from(&listed)))
}

/// GET /api/users/{id}/items
pub async fn list_user_items<R>(
    State(state): State<ListingsAppState<R>>,
    Path(id): Path<Uuid>,
) -> ListingResult<Json<Vec<ItemResponse>>>
where
    R: ItemRepository + Clone + Send + Sync + 'static,
{
    let use_case = QueryItemsUseCase::new(state.repo.clone());

    let items = use_case.list_by_owner(&UserId::from_uuid(id)).await?;

    Ok(Json(items.iter().map(ItemResponse::from).collect()))
}
