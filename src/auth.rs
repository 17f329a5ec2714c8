use std::collections::HashMap;

use axum::{
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::AppState;

pub const KEY_HEADER: &str = "x-functions-key";
pub const KEY_QUERY_PARAM: &str = "code";

/// Function-level key check. A no-op when no key is configured.
pub async fn require_function_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(expected) = state.config.function_key.as_deref() else {
        return Ok(next.run(request).await);
    };

    let from_header = request
        .headers()
        .get(KEY_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);
    let presented = from_header.or_else(|| {
        Query::<HashMap<String, String>>::try_from_uri(request.uri())
            .ok()
            .and_then(|Query(mut params)| params.remove(KEY_QUERY_PARAM))
    });

    match presented {
        Some(key) if key == expected => Ok(next.run(request).await),
        Some(_) => {
            warn!(path = %request.uri().path(), "Rejected request with invalid function key");
            Err(StatusCode::UNAUTHORIZED)
        }
        None => {
            warn!(path = %request.uri().path(), "Rejected request without function key");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}
