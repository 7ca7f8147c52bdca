//! Search handler: paging parameters arrive in the POST body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::{error, SharedState, SERVICE_DEFAULT_PAGE_SIZE};
use crate::mock_server::state::RecordedRequest;

/// Paging fields of a search body. Filters are accepted and ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchBody {
    page: Option<u32>,
    page_size: Option<u32>,
}

/// POST /{collection}/search
pub async fn search(state: &SharedState, path: &str, body: &str) -> Response {
    let body: SearchBody = if body.trim().is_empty() {
        SearchBody::default()
    } else {
        match serde_json::from_str(body) {
            Ok(b) => b,
            Err(e) => return error(StatusCode::BAD_REQUEST, &e.to_string()),
        }
    };

    let mut state = state.write().await;
    state.requests.push(RecordedRequest {
        method: "POST".to_string(),
        path: path.to_string(),
        page: body.page,
        page_size: body.page_size,
    });

    let collection = path.trim_end_matches("/search");
    let page = body.page.unwrap_or(1);
    let page_size = body.page_size.unwrap_or(SERVICE_DEFAULT_PAGE_SIZE);

    if let Some(status) = state.take_failure(path, page) {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return error(status, "injected failure");
    }

    match state.page(collection, page, page_size) {
        Some(records) => (StatusCode::OK, Json(records)).into_response(),
        None => error(StatusCode::NOT_FOUND, &format!("No collection at {collection}")),
    }
}
