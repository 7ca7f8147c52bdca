//! Mock ConnectWise API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates ConnectWise
//! collections for integration and end-to-end testing. Unlike wiremock which
//! mocks at the HTTP level per-test, this server pages through stored
//! records the way the service does, logs every request, and can be told to
//! fail specific pages.
//!
//! # Example
//!
//! ```ignore
//! use cwapi::mock_server::{Fixtures, MockServer, MockState};
//! use cwapi::RequestParams;
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let state = MockState::new().with_collection("service/tickets", Fixtures::tickets(30));
//!     let server = MockServer::with_state(state).await;
//!     let client = server.client();
//!
//!     let all = client.service_tickets().list_all(&RequestParams::new()).await.unwrap();
//!     assert_eq!(all.len(), 30);
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::Fixtures;
pub use server::MockServer;
pub use state::{MockState, RecordedRequest};
