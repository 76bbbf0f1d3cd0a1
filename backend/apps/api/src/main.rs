//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::{AuthConfig, AuthMiddlewareState, MemoryAuthRepository, PgAuthRepository};
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use listings::{MemoryItemRepository, PgItemRepository};
use media::{DiskImageStore, MediaConfig};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,listings=info,media=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Auth configuration
    let auth_config = if let Ok(secret_b64) = env::var("TOKEN_SECRET") {
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        anyhow::ensure!(
            secret_bytes.len() == 32,
            "TOKEN_SECRET must decode to 32 bytes"
        );
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&secret_bytes);
        AuthConfig {
            token_secret: secret,
            ..AuthConfig::default()
        }
    } else if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        anyhow::bail!("TOKEN_SECRET must be set in production");
    };

    // Upload directory
    let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());
    if !Path::new(&upload_dir).exists() {
        std::fs::create_dir_all(&upload_dir)?;
        tracing::info!("Created upload directory at {}", upload_dir);
    }
    let media_config = MediaConfig::with_upload_dir(&upload_dir);

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Build the API routes against PostgreSQL, or against the in-memory
    // stores when no database is configured (offline preview mode)
    let api_routes = match env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&database_url)
                .await?;

            tracing::info!("Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            let users = PgAuthRepository::new(pool.clone());
            let items = PgItemRepository::new(pool.clone());
            let guard = AuthMiddlewareState::new(
                Arc::new(users.clone()),
                Arc::new(auth_config.clone()),
            );

            auth::auth_router(users, auth_config)
                .merge(listings::listings_router(items, guard.clone()))
                .merge(media::media_router(
                    DiskImageStore::new(&upload_dir),
                    media_config,
                    guard,
                ))
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set, serving from in-memory stores");

            let users = MemoryAuthRepository::new();
            let items = MemoryItemRepository::new(users.clone());
            let guard = AuthMiddlewareState::new(
                Arc::new(users.clone()),
                Arc::new(auth_config.clone()),
            );

            auth::auth_router_generic(users, auth_config)
                .merge(listings::listings_router_generic(items, guard.clone()))
                .merge(media::media_router(
                    DiskImageStore::new(&upload_dir),
                    media_config,
                    guard,
                ))
        }
    };

    // Build router: API under /api, uploads served statically
    let app = Router::new()
        .nest("/api", api_routes)
        .nest_service("/uploads", ServeDir::new(&upload_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
