//! Auth Middleware
//!
//! Middleware for requiring authentication on protected routes.

use axum::body::Body;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthMiddlewareState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }
}

/// Authenticated user attached to request extensions by [`require_auth`]
#[derive(Clone)]
pub struct CurrentUser(pub User);

/// Middleware that requires a valid bearer token resolving to a stored user
pub async fn require_auth<R>(
    state: AuthMiddlewareState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = match bearer_token(req.headers()) {
        Some(token) => token,
        None => return Err(AuthError::Unauthenticated.into_response()),
    };

    let user_id = match token::verify(&token, &state.config) {
        Ok(user_id) => user_id,
        Err(e) => return Err(e.into_response()),
    };

    // The token may outlive the account; the user must still resolve
    let user = match state.repo.find_by_id(&user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => return Err(AuthError::Unauthenticated.into_response()),
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}
