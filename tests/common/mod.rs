//! Shared helpers for the wiremock-based tests.

#![allow(dead_code)]

use cwapi::{ConnectWiseClient, Credentials};
use serde_json::{json, Value};

pub const COMPANY_ID: &str = "acme";
pub const PUBLIC_KEY: &str = "pubkey";
pub const PRIVATE_KEY: &str = "privkey";
pub const CLIENT_ID: &str = "11111111-2222-3333-4444-555555555555";

/// A Manage client pointed at `base_url`.
pub fn manage_client(base_url: &str) -> ConnectWiseClient {
    ConnectWiseClient::new(
        Credentials::Manage {
            company_id: COMPANY_ID.to_string(),
            public_key: PUBLIC_KEY.to_string(),
            private_key: PRIVATE_KEY.to_string(),
            client_id: CLIENT_ID.to_string(),
        },
        base_url,
    )
    .unwrap()
}

/// An Automate client pointed at `base_url`.
pub fn automate_client(base_url: &str, token: &str) -> ConnectWiseClient {
    ConnectWiseClient::new(
        Credentials::Automate {
            token: token.to_string(),
            client_id: CLIENT_ID.to_string(),
        },
        base_url,
    )
    .unwrap()
}

/// `count` tickets with ids starting at `first_id`.
pub fn tickets(first_id: u64, count: u64) -> Value {
    Value::Array(
        (first_id..first_id + count)
            .map(|id| json!({"id": id, "summary": format!("Ticket {id}")}))
            .collect(),
    )
}
