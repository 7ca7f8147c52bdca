//! HTTP handlers for the mock server.
//!
//! ConnectWise paths are open-ended, so everything goes through one
//! fallback handler that dispatches on method and path shape.

mod collections;
mod search;

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;

pub(crate) type SharedState = Arc<RwLock<MockState>>;

/// Default page size the service applies when none is sent.
const SERVICE_DEFAULT_PAGE_SIZE: u32 = 25;

/// Fallback handler for every resource path.
pub async fn dispatch(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    body: String,
) -> Response {
    let path = uri.path().trim_matches('/').to_string();

    if let Some(required) = state.read().await.required_client_id.as_deref() {
        let sent = headers.get("clientId").and_then(|v| v.to_str().ok());
        if sent != Some(required) {
            return error(StatusCode::UNAUTHORIZED, "clientId header missing or invalid");
        }
    }

    match method {
        Method::GET => {
            if let Some(collection) = path.strip_suffix("/count") {
                return collections::count(&state, collection).await;
            }
            let page = query.get("page").and_then(|p| p.parse().ok());
            let page_size = query.get("pageSize").and_then(|p| p.parse().ok());
            collections::get(&state, &path, page, page_size).await
        }
        Method::POST if path.ends_with("/search") => search::search(&state, &path, &body).await,
        _ => error(StatusCode::METHOD_NOT_ALLOWED, "method not supported by mock"),
    }
}

/// ConnectWise-shaped error body.
pub(crate) fn error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(serde_json::json!({
            "code": status.canonical_reason().unwrap_or("Error"),
            "message": message
        })),
    )
        .into_response()
}
