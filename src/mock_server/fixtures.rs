//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data as raw JSON,
//! the same shape the service sends.

use serde_json::{json, Value};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Ticket Fixtures
    // =========================================================================

    /// A minimal ticket with required fields only.
    pub fn minimal_ticket(id: u64, summary: &str) -> Value {
        json!({
            "id": id,
            "summary": summary,
            "_info": {"lastUpdated": "2024-02-27T10:00:00Z"}
        })
    }

    /// Tickets numbered `1..=count`, alternating between two boards.
    pub fn tickets(count: u64) -> Vec<Value> {
        (1..=count)
            .map(|id| {
                let mut ticket = Self::minimal_ticket(id, &format!("Ticket {id}"));
                ticket["board"] = if id % 2 == 0 {
                    json!({"id": 1, "name": "Help Desk"})
                } else {
                    json!({"id": 2, "name": "Projects"})
                };
                ticket["status"] = json!({"id": 16, "name": "New"});
                ticket["closedFlag"] = json!(false);
                ticket
            })
            .collect()
    }

    // =========================================================================
    // Company Fixtures
    // =========================================================================

    /// A company with identifier `company{id}`.
    pub fn company(id: u64) -> Value {
        json!({
            "id": id,
            "identifier": format!("company{id}"),
            "name": format!("Company {id}"),
            "status": {"id": 1, "name": "Active"},
            "deletedFlag": false
        })
    }

    /// Companies numbered `1..=count`.
    pub fn companies(count: u64) -> Vec<Value> {
        (1..=count).map(Self::company).collect()
    }

    /// The stock company statuses.
    pub fn company_statuses() -> Vec<Value> {
        vec![
            json!({"id": 1, "name": "Active", "defaultFlag": true}),
            json!({"id": 2, "name": "Inactive", "inactiveFlag": true}),
            json!({"id": 3, "name": "Credit Hold", "notifyFlag": true,
                   "notificationMessage": "Check with accounting"}),
        ]
    }

    // =========================================================================
    // Project Fixtures
    // =========================================================================

    /// Projects numbered `1..=count`.
    pub fn projects(count: u64) -> Vec<Value> {
        (1..=count)
            .map(|id| {
                json!({
                    "id": id,
                    "name": format!("Project {id}"),
                    "manager": {"id": 7, "identifier": "jdoe"},
                    "closedFlag": id % 5 == 0
                })
            })
            .collect()
    }
}
