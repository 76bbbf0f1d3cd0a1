//! Auth Router

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_auth};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let mw_state = AuthMiddlewareState::new(state.repo.clone(), state.config.clone());

    let protected = Router::new()
        .route(
            "/users/me",
            get(handlers::me).put(handlers::update_me::<R>),
        )
        .layer(middleware::from_fn(move |req: Request, next: Next| {
            let mw_state = mw_state.clone();
            async move { require_auth(mw_state, req, next).await }
        }));

    Router::new()
        .route("/users/register", post(handlers::register::<R>))
        .route("/users/login", post(handlers::login::<R>))
        .merge(protected)
        .with_state(state)
}
