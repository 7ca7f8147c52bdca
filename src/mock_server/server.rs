//! The mock service process.
//!
//! Serves a [`MockState`] over HTTP on a loopback port chosen by the OS.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::sync::RwLock;

use super::fixtures::Fixtures;
use super::handlers::{self, SharedState};
use super::state::MockState;
use crate::client::{ConnectWiseClient, Credentials};

/// Client id sent by [`MockServer::client`].
pub const MOCK_CLIENT_ID: &str = "mock-client-id";

/// A running mock ConnectWise service.
///
/// Dropping the value leaves the task running until the runtime stops; call
/// [`shutdown`](Self::shutdown) to stop it earlier.
pub struct MockServer {
    addr: SocketAddr,
    url: String,
    task: tokio::task::JoinHandle<()>,
    state: SharedState,
}

impl MockServer {
    /// Serve the stock fixtures: 85 tickets, 12 companies, 3 company
    /// statuses and 25 projects.
    pub async fn start() -> Self {
        Self::with_state(Self::stock_state()).await
    }

    /// Serve no collections at all; every lookup is a 404.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Serve `state`.
    ///
    /// # Panics
    ///
    /// Panics if no loopback port can be bound.
    pub async fn with_state(state: MockState) -> Self {
        let state = state.shared();
        let router = routes(state.clone());

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
            .await
            .expect("bind loopback listener");
        let addr = listener.local_addr().expect("listener has an address");

        let task = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!(error = %e, "mock server stopped");
            }
        });
        tracing::debug!(%addr, "mock server listening");

        Self {
            addr,
            url: format!("http://{addr}"),
            task,
            state,
        }
    }

    /// Base URL to hand to a client, e.g. `http://127.0.0.1:49152`.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// A Manage client pointed at this server.
    ///
    /// # Panics
    ///
    /// Never in practice: the server URL is always a valid base URL.
    pub fn client(&self) -> ConnectWiseClient {
        let credentials = Credentials::Manage {
            company_id: "mock".to_string(),
            public_key: "public".to_string(),
            private_key: "private".to_string(),
            client_id: MOCK_CLIENT_ID.to_string(),
        };
        ConnectWiseClient::new(credentials, &self.url).expect("mock server URL is valid")
    }

    /// The live state, for seeding data or inspecting the request log.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        Arc::clone(&self.state)
    }

    /// Number of requests the server has seen for `path`.
    pub async fn request_count(&self, path: &str) -> usize {
        self.state.read().await.request_count(path)
    }

    /// Stop serving and wait for the task to finish.
    pub async fn shutdown(self) {
        self.task.abort();
        // An aborted task resolves to a cancellation error.
        let _ = self.task.await;
    }

    fn stock_state() -> MockState {
        MockState::new()
            .with_collection("service/tickets", Fixtures::tickets(85))
            .with_collection("company/companies", Fixtures::companies(12))
            .with_collection("company/companies/statuses", Fixtures::company_statuses())
            .with_collection("project/projects", Fixtures::projects(25))
    }
}

fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .fallback(handlers::dispatch)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RequestParams;

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = MockServer::start_empty().await;

        let body = reqwest::get(format!("{}/health", server.url()))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, "ok");
        assert!(server.url().ends_with(&server.addr().port().to_string()));

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_stock_ticket_by_id() {
        let server = MockServer::start().await;

        let ticket = server
            .client()
            .service_tickets()
            .id(1)
            .get_one(&RequestParams::new())
            .await
            .unwrap();

        assert_eq!(ticket.id, 1);
        assert_eq!(ticket.summary, "Ticket 1");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_missing_record_is_404() {
        let server = MockServer::start_empty().await;

        let err = server
            .client()
            .service_tickets()
            .id(1)
            .get_one(&RequestParams::new())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(404));

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_wrong_client_id_is_401() {
        let state = MockState::new()
            .with_collection("service/tickets", Fixtures::tickets(1))
            .with_required_client_id("someone-else");
        let server = MockServer::with_state(state).await;

        let err = server
            .client()
            .service_tickets()
            .get_many(&RequestParams::new())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(401));

        server.shutdown().await;
    }
}
