//! Collection, item and count handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{error, SharedState, SERVICE_DEFAULT_PAGE_SIZE};
use crate::mock_server::state::RecordedRequest;

/// GET /{collection}?page=&pageSize= or GET /{collection}/{id}
pub async fn get(
    state: &SharedState,
    path: &str,
    page: Option<u32>,
    page_size: Option<u32>,
) -> Response {
    let mut state = state.write().await;
    state.requests.push(RecordedRequest {
        method: "GET".to_string(),
        path: path.to_string(),
        page,
        page_size,
    });

    if state.collection(path).is_some() {
        let page = page.unwrap_or(1);
        let page_size = page_size.unwrap_or(SERVICE_DEFAULT_PAGE_SIZE);
        if let Some(status) = state.take_failure(path, page) {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return error(status, "injected failure");
        }
        let records = state.page(path, page, page_size).unwrap_or_default();
        return (StatusCode::OK, Json(records)).into_response();
    }

    // Not a collection: try `{collection}/{id}`
    let item = path
        .rsplit_once('/')
        .and_then(|(collection, id)| Some((collection, id.parse::<u64>().ok()?)))
        .and_then(|(collection, id)| state.record(collection, id));

    match item {
        Some(record) => (StatusCode::OK, Json(record.clone())).into_response(),
        None => error(StatusCode::NOT_FOUND, &format!("No record found at {path}")),
    }
}

/// GET /{collection}/count
pub async fn count(state: &SharedState, collection: &str) -> Response {
    let mut state = state.write().await;
    state.requests.push(RecordedRequest {
        method: "GET".to_string(),
        path: format!("{collection}/count"),
        page: None,
        page_size: None,
    });

    match state.collection(collection) {
        Some(records) => (
            StatusCode::OK,
            Json(serde_json::json!({ "count": records.len() })),
        )
            .into_response(),
        None => error(StatusCode::NOT_FOUND, &format!("No collection at {collection}")),
    }
}
