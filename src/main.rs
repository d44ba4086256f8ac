//! School Site Backend
//!
//! REST backend serving enrollment events and news items from a single JSON document.

mod api;
mod config;
mod cors;
mod errors;
mod models;
mod store;

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use config::{Config, LogFormat};
use store::{JsonStore, Repository};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
        LogFormat::Text => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Starting School Site Backend");
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Allowed origins: {:?}", config.allowed_origins);

    let repo = Arc::new(Repository::new(JsonStore::new(config.db_path.clone())));
    let db_path = repo.store().path();
    tracing::info!("Document path: {:?}", db_path);

    // The document is never seeded; requests fail until it exists
    if !tokio::fs::try_exists(db_path).await.unwrap_or(false) {
        tracing::warn!(
            "Document {:?} does not exist yet, requests touching it will fail",
            db_path
        );
    }

    // Create application state
    let state = AppState {
        repo,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let allowed_origins = Arc::new(state.config.allowed_origins.clone());
    let cors = cors::cors_layer(&allowed_origins);

    // API routes
    let api_routes = Router::new()
        // Aggregate
        .route("/blog", get(api::get_blog))
        // Enrollment events
        .route(
            "/enrollmentEvents",
            get(api::list_events).post(api::create_event),
        )
        .route(
            "/enrollmentEvents/{id}",
            get(api::get_event)
                .put(api::update_event)
                .delete(api::delete_event),
        )
        // News
        .route("/news", get(api::list_news).post(api::create_news))
        .route(
            "/news/{id}",
            get(api::get_news)
                .put(api::update_news)
                .delete(api::delete_news),
        );

    // Health check (no store access)
    let health_routes = Router::new().route("/health", get(health_check));

    // Outermost first: tracing, then the origin guard, then CORS headers
    let layers = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(move |req, next| {
            cors::origin_guard_layer(allowed_origins.clone(), req, next)
        }))
        .layer(cors);

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(layers)
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
