//! Reference records embedded in other records.
//!
//! The service links records through small `{id, identifier/name, _info}`
//! objects rather than full payloads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Link metadata attached to most Manage records.
pub type Info = HashMap<String, String>;

macro_rules! reference {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            pub id: u64,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub identifier: Option<String>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub name: Option<String>,
            #[serde(rename = "_info", default, skip_serializing_if = "Option::is_none")]
            pub info: Option<Info>,
        }
    };
}

reference!(
    /// A member (user) reference.
    MemberReference
);
reference!(
    /// A company reference.
    CompanyReference
);
reference!(
    /// A service board reference.
    BoardReference
);
reference!(
    /// A status reference (tickets, companies, projects).
    StatusReference
);
reference!(
    /// A contact reference.
    ContactReference
);
reference!(
    /// A priority reference.
    PriorityReference
);
reference!(
    /// A notification recipient reference.
    NotificationRecipientReference
);
reference!(
    /// A purchase order status reference.
    OrderStatusReference
);
reference!(
    /// A managed devices integration reference.
    ManagedDevicesIntegrationReference
);
