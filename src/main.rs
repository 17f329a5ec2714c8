use std::sync::Arc;

use axum::{
    middleware,
    routing::{any, delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

mod auth;
mod config;
mod db;
mod error;
mod handlers;
mod models;
mod seed;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Shared application state. Only immutable configuration, behind an Arc.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The configured connection string, or `ConfigurationMissing`.
    pub fn connection_string(&self) -> AppResult<&str> {
        self.config
            .database_url
            .as_deref()
            .ok_or(AppError::ConfigurationMissing)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,inventory_crud=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    if config.database_url.is_none() {
        warn!("No database connection string configured; inventory routes will answer 500.");
    }
    if config.function_key.is_some() {
        info!("Function key check enabled.");
    }

    let addr = format!("{}:{}", config.host, config.port);
    let base = format!("http://{}{}", addr, config.route_prefix);
    let app = build_router(AppState::new(config));

    info!("Listening on http://{}", addr);
    info!("Quick-start: POST {}/create  →  then GET {}/read", base, base);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    let config = state.config.clone();

    let inventory = Router::new()
        // ── Single-operation routes ─────────────────────────────────────────
        .route(&config.route("/create"), post(handlers::inventory::initialize))
        .route(&config.route("/read"), get(handlers::inventory::list))
        .route(&config.route("/update"), put(handlers::inventory::update))
        .route(&config.route("/delete"), delete(handlers::inventory::remove))

        // ── Combined route, dispatched by method ────────────────────────────
        .route(&config.route("/book"), any(handlers::inventory::dispatch))

        // ── Unrouted variants at the prefix root ────────────────────────────
        .route(
            &config.root_route(),
            get(handlers::inventory::list).delete(handlers::inventory::remove),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_function_key,
        ));

    Router::new()
        .route("/health", get(handlers::health))
        .merge(inventory)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
