//! Company records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::reference::{ContactReference, Info, StatusReference};

/// A company (`/company/companies`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: u64,

    /// Short unique code, e.g. `acme`.
    pub identifier: String,

    pub name: String,

    #[serde(default)]
    pub status: Option<StatusReference>,

    #[serde(default)]
    pub phone_number: Option<String>,

    #[serde(default)]
    pub website: Option<String>,

    #[serde(default)]
    pub address_line1: Option<String>,

    #[serde(default)]
    pub address_line2: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub zip: Option<String>,

    #[serde(default)]
    pub default_contact: Option<ContactReference>,

    #[serde(default)]
    pub deleted_flag: bool,

    #[serde(default)]
    pub date_acquired: Option<DateTime<Utc>>,

    #[serde(rename = "_info", default)]
    pub info: Option<Info>,
}

/// A company status (`/company/companies/statuses`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyStatus {
    pub id: u64,

    pub name: String,

    #[serde(default)]
    pub default_flag: bool,

    #[serde(default)]
    pub inactive_flag: bool,

    #[serde(default)]
    pub notify_flag: bool,

    #[serde(default)]
    pub disallow_saving_flag: bool,

    #[serde(default)]
    pub notification_message: Option<String>,

    #[serde(rename = "_info", default)]
    pub info: Option<Info>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_deserialize() {
        let json = r#"{
            "id": 250,
            "identifier": "acme",
            "name": "Acme Corp",
            "status": {"id": 1, "name": "Active"},
            "phoneNumber": "5551234",
            "addressLine1": "1 Main St",
            "deletedFlag": false,
            "dateAcquired": "2019-06-01T00:00:00Z"
        }"#;
        let company: Company = serde_json::from_str(json).unwrap();

        assert_eq!(company.identifier, "acme");
        assert_eq!(company.phone_number.as_deref(), Some("5551234"));
        assert_eq!(company.address_line1.as_deref(), Some("1 Main St"));
        assert!(company.date_acquired.is_some());
    }

    #[test]
    fn test_company_status_defaults() {
        let status: CompanyStatus =
            serde_json::from_str(r#"{"id": 2, "name": "Inactive", "inactiveFlag": true}"#)
                .unwrap();

        assert!(status.inactive_flag);
        assert!(!status.default_flag);
        assert!(status.notification_message.is_none());
    }
}
