//! Listings Router
//!
//! One route table covers the whole item surface; the auth guard is
//! attached declaratively to the mutating handlers only.

use axum::{
    Router,
    extract::Request,
    handler::Handler,
    middleware::{self, Next},
    routing::get,
};
use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::presentation::middleware::{AuthMiddlewareState, require_auth};

use crate::domain::repository::ItemRepository;
use crate::infra::postgres::PgItemRepository;
use crate::presentation::handlers::{self, ListingsAppState};

/// Create the Listings router with PostgreSQL repositories
pub fn listings_router<U>(repo: PgItemRepository, auth: AuthMiddlewareState<U>) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    listings_router_generic(repo, auth)
}

/// Create a generic Listings router for any repository implementation
pub fn listings_router_generic<R, U>(repo: R, auth: AuthMiddlewareState<U>) -> Router
where
    R: ItemRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = ListingsAppState {
        repo: Arc::new(repo),
    };

    let guard = middleware::from_fn(move |req: Request, next: Next| {
        let auth = auth.clone();
        async move { require_auth(auth, req, next).await }
    });

    Router::new()
        .route(
            "/items",
            get(handlers::list_items::<R>)
                .post(handlers::create_item::<R>.layer(guard.clone())),
        )
        .route(
            "/items/{id}",
            get(handlers::get_item::<R>)
                .put(handlers::update_item::<R>.layer(guard.clone()))
                .delete(handlers::delete_item::<R>.layer(guard)),
        )
        .route("/users/{id}/items", get(handlers::list_user_items::<R>))
        .with_state(state)
}
