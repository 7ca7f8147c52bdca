//! Service ticket records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::reference::{
    BoardReference, CompanyReference, ContactReference, Info, MemberReference,
    PriorityReference, StatusReference,
};

/// A service ticket (`/service/tickets`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: u64,

    /// One-line summary shown in ticket lists.
    pub summary: String,

    /// Ticket kind, e.g. `ServiceTicket` or `ProjectTicket`.
    #[serde(default)]
    pub record_type: Option<String>,

    #[serde(default)]
    pub board: Option<BoardReference>,

    #[serde(default)]
    pub status: Option<StatusReference>,

    #[serde(default)]
    pub company: Option<CompanyReference>,

    #[serde(default)]
    pub contact: Option<ContactReference>,

    #[serde(default)]
    pub contact_name: Option<String>,

    #[serde(default)]
    pub priority: Option<PriorityReference>,

    /// Member the ticket is assigned to.
    #[serde(default)]
    pub owner: Option<MemberReference>,

    #[serde(default)]
    pub severity: Option<String>,

    #[serde(default)]
    pub impact: Option<String>,

    #[serde(default)]
    pub closed_flag: bool,

    #[serde(default)]
    pub customer_updated_flag: bool,

    #[serde(default)]
    pub actual_hours: Option<f64>,

    #[serde(default)]
    pub budget_hours: Option<f64>,

    #[serde(default)]
    pub required_date: Option<DateTime<Utc>>,

    #[serde(rename = "_info", default)]
    pub info: Option<Info>,
}

impl Ticket {
    /// Name of the ticket's status, if known.
    pub fn status_name(&self) -> Option<&str> {
        self.status.as_ref().and_then(|s| s.name.as_deref())
    }

    /// Whether the ticket has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed_flag
    }

    /// Hours left in the budget, if both values are set.
    pub fn remaining_hours(&self) -> Option<f64> {
        Some(self.budget_hours? - self.actual_hours.unwrap_or(0.0))
    }
}

/// A note on a service ticket (`/service/tickets/{id}/notes`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketNote {
    pub id: u64,

    #[serde(default)]
    pub ticket_id: Option<u64>,

    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub detail_description_flag: bool,

    #[serde(default)]
    pub internal_analysis_flag: bool,

    #[serde(default)]
    pub resolution_flag: bool,

    #[serde(default)]
    pub member: Option<MemberReference>,

    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,

    #[serde(rename = "_info", default)]
    pub info: Option<Info>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_deserialize_full() {
        let json = r#"{
            "id": 1042,
            "summary": "Printer offline",
            "recordType": "ServiceTicket",
            "board": {"id": 1, "name": "Help Desk"},
            "status": {"id": 16, "name": "New"},
            "company": {"id": 250, "identifier": "acme", "name": "Acme Corp"},
            "contactName": "Pat Smith",
            "priority": {"id": 4, "name": "Priority 3 - Normal"},
            "owner": {"id": 7, "identifier": "jdoe"},
            "closedFlag": false,
            "actualHours": 1.5,
            "budgetHours": 4.0,
            "requiredDate": "2024-03-01T17:00:00Z",
            "_info": {"lastUpdated": "2024-02-27T10:00:00Z", "updatedBy": "jdoe"}
        }"#;

        let ticket: Ticket = serde_json::from_str(json).expect("Failed to deserialize ticket");

        assert_eq!(ticket.id, 1042);
        assert_eq!(ticket.summary, "Printer offline");
        assert_eq!(ticket.record_type.as_deref(), Some("ServiceTicket"));
        assert_eq!(ticket.status_name(), Some("New"));
        assert_eq!(ticket.contact_name.as_deref(), Some("Pat Smith"));
        assert_eq!(ticket.company.as_ref().map(|c| c.id), Some(250));
        assert!(!ticket.is_closed());
        assert_eq!(ticket.remaining_hours(), Some(2.5));
        assert!(ticket.required_date.is_some());
        assert_eq!(
            ticket.info.as_ref().and_then(|i| i.get("updatedBy")).map(String::as_str),
            Some("jdoe")
        );
    }

    #[test]
    fn test_ticket_deserialize_minimal() {
        let json = r#"{"id": 1, "summary": "x"}"#;
        let ticket: Ticket = serde_json::from_str(json).expect("Failed to deserialize ticket");

        assert!(ticket.board.is_none());
        assert!(ticket.status_name().is_none());
        assert!(ticket.remaining_hours().is_none());
    }

    #[test]
    fn test_ticket_requires_summary() {
        let json = r#"{"id": 1}"#;
        assert!(serde_json::from_str::<Ticket>(json).is_err());
    }

    #[test]
    fn test_ticket_serializes_camel_case() {
        let ticket: Ticket =
            serde_json::from_str(r#"{"id": 1, "summary": "x", "closedFlag": true}"#).unwrap();
        let json = serde_json::to_value(&ticket).unwrap();

        assert_eq!(json["closedFlag"], true);
        assert!(json.get("closed_flag").is_none());
    }

    #[test]
    fn test_ticket_note_deserialize() {
        let json = r#"{
            "id": 5,
            "ticketId": 1042,
            "text": "Rebooted the spooler",
            "resolutionFlag": true,
            "member": {"id": 7, "identifier": "jdoe"},
            "dateCreated": "2024-02-27T10:15:00Z"
        }"#;
        let note: TicketNote = serde_json::from_str(json).unwrap();

        assert_eq!(note.ticket_id, Some(1042));
        assert!(note.resolution_flag);
        assert!(!note.internal_analysis_flag);
    }
}
