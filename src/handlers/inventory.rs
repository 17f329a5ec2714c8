use std::time::Instant;

use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::{db, error::AppResult, models::InventoryItem, AppState};

// ── Initialize ────────────────────────────────────────────────────────────────

pub async fn initialize(State(state): State<AppState>) -> AppResult<(StatusCode, &'static str)> {
    let conn_str = state.connection_string()?;
    info!("Processing request to initialize database.");

    let start = Instant::now();
    let rows = db::initialize_inventory(conn_str).await?;

    info!(rows, elapsed_ms = start.elapsed().as_millis(), "Initialized inventory");

    Ok((StatusCode::OK, "Database initialized successfully."))
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list(State(state): State<AppState>) -> AppResult<(StatusCode, Json<Vec<InventoryItem>>)> {
    let conn_str = state.connection_string()?;

    let start = Instant::now();
    let items = db::fetch_inventory(conn_str).await?;

    info!(
        count = items.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "Listed inventory"
    );

    Ok((StatusCode::OK, Json(items)))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update(State(state): State<AppState>) -> AppResult<(StatusCode, Json<Vec<InventoryItem>>)> {
    let conn_str = state.connection_string()?;

    let start = Instant::now();
    let rows = db::update_inventory(conn_str).await?;

    info!(rows, elapsed_ms = start.elapsed().as_millis(), "Updated inventory");

    // The body is always an empty array, whatever the affected row count.
    Ok((StatusCode::OK, Json(Vec::new())))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn remove(State(state): State<AppState>) -> AppResult<(StatusCode, Json<Vec<InventoryItem>>)> {
    let conn_str = state.connection_string()?;

    let start = Instant::now();
    let rows = db::delete_inventory(conn_str).await?;

    info!(rows, elapsed_ms = start.elapsed().as_millis(), "Deleted from inventory");

    Ok((StatusCode::OK, Json(Vec::new())))
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

/// Combined entry point: POST initializes, GET lists, PUT updates, DELETE removes.
pub async fn dispatch(State(state): State<AppState>, method: Method) -> AppResult<Response> {
    state.connection_string()?;
    info!(method = %method, "Dispatching inventory request");

    let response = match method {
        Method::POST => initialize(State(state)).await?.into_response(),
        Method::GET => list(State(state)).await?.into_response(),
        Method::PUT => update(State(state)).await?.into_response(),
        Method::DELETE => remove(State(state)).await?.into_response(),
        _ => (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed.").into_response(),
    };
    Ok(response)
}
