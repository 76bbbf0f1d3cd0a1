//! Media Router

use axum::{
    Router,
    extract::{DefaultBodyLimit, Request},
    middleware::{self, Next},
    routing::post,
};
use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::presentation::middleware::{AuthMiddlewareState, require_auth};

use crate::application::config::MediaConfig;
use crate::infra::disk::DiskImageStore;
use crate::presentation::handlers::{self, MediaAppState};

/// Create the Media router. Upload requires authentication.
pub fn media_router<U>(
    store: DiskImageStore,
    config: MediaConfig,
    auth: AuthMiddlewareState<U>,
) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = MediaAppState {
        store: Arc::new(store),
        config: Arc::new(config),
    };

    // Body limit sits above the file cap so the 5 MiB check in the use
    // case is what callers actually hit; the axum limit is a backstop
    // against unbounded multipart bodies.
    let body_limit = state.config.max_bytes + 1024 * 1024;

    Router::new()
        .route("/upload", post(handlers::upload))
        .layer(middleware::from_fn(move |req: Request, next: Next| {
            let auth = auth.clone();
            async move { require_auth(auth, req, next).await }
        }))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
