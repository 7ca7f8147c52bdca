//! Procurement and device integration records.

use serde::{Deserialize, Serialize};

use super::reference::{
    Info, ManagedDevicesIntegrationReference, MemberReference, NotificationRecipientReference,
    OrderStatusReference,
};

/// A purchase order status notification
/// (`/procurement/purchaseorderstatuses/{id}/notifications`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusNotification {
    pub id: u64,

    pub notify_who: NotificationRecipientReference,

    #[serde(default)]
    pub status: Option<OrderStatusReference>,

    #[serde(default)]
    pub member: Option<MemberReference>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub workflow_step: Option<u32>,

    #[serde(rename = "_info", default)]
    pub info: Option<Info>,
}

/// Login for a managed devices integration
/// (`/company/managedDevicesIntegrations/{id}/logins`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedDevicesIntegrationLogin {
    pub id: u64,

    pub managed_devices_integration: ManagedDevicesIntegrationReference,

    pub username: String,

    /// Write-only on the service; reads come back empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default)]
    pub member: Option<MemberReference>,

    #[serde(rename = "_info", default)]
    pub info: Option<Info>,
}
