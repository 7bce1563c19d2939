//! Web Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use anyhow::Context;
use auth::{AuthConfig, PgUserRepository, ResolveSessionUseCase, auth_router};
use axum::{
    Router,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use base64::Engine;
use base64::engine::general_purpose;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use todos::{PgTodoRepository, todo_router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// GET / - the list is the landing page
async fn root_redirect() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/todos/")])
}

/// Decode the base64 session secret; anything but exactly 32 bytes is a
/// startup error, not a panic.
fn decode_session_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(secret_b64)
        .context("SESSION_SECRET is not valid base64")?;
    bytes
        .as_slice()
        .try_into()
        .context("SESSION_SECRET must decode to exactly 32 bytes")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "web=info,auth=info,todos=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

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

    // Auth configuration
    let auth_config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        // In production, load secret from environment
        let secret_b64 =
            env::var("SESSION_SECRET").context("SESSION_SECRET must be set in production")?;
        AuthConfig {
            session_secret: decode_session_secret(&secret_b64)?,
            ..AuthConfig::default()
        }
    };
    let auth_config = Arc::new(auth_config);
    let sessions = Arc::new(ResolveSessionUseCase::new(auth_config.clone()));

    let user_repo = PgUserRepository::new(pool.clone());
    let todo_repo = PgTodoRepository::new(pool.clone());

    // Build router
    let app = Router::new()
        .route("/", get(root_redirect))
        .nest("/auth", auth_router(user_repo, auth_config))
        .nest("/todos", todo_router(todo_repo, sessions))
        .layer(TraceLayer::new_for_http());

    // Start server
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let addr: SocketAddr = bind_addr.parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
