//! Named resources.
//!
//! Shortcuts for commonly used collections. Anything not listed here is
//! reachable through [`ConnectWiseClient::endpoint`].

use serde::de::DeserializeOwned;

use crate::client::ConnectWiseClient;
use crate::endpoint::{Capabilities, Endpoint};
use crate::models::{
    Company, CompanyStatus, ComputerPatchingPolicy, ManagedDevicesIntegrationLogin,
    OrderStatusNotification, Project, Ticket, TicketNote,
};

impl ConnectWiseClient {
    /// Any resource, by path and capability set.
    pub fn endpoint<T>(&self, path: &str, capabilities: Capabilities) -> Endpoint<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        Endpoint::new(self.clone(), path, capabilities)
    }

    /// `/service/tickets`
    pub fn service_tickets(&self) -> Endpoint<Ticket> {
        self.endpoint("service/tickets", Capabilities::COLLECTION)
    }

    /// `/service/tickets/search`, paged through the POST body.
    pub fn service_tickets_search(&self) -> Endpoint<Ticket> {
        self.endpoint("service/tickets/search", Capabilities::SEARCH)
    }

    /// `/service/tickets/{id}/notes`
    pub fn service_ticket_notes(&self, ticket_id: u64) -> Endpoint<TicketNote> {
        self.endpoint(
            &format!("service/tickets/{ticket_id}/notes"),
            Capabilities::COLLECTION,
        )
    }

    /// `/company/companies`
    pub fn company_companies(&self) -> Endpoint<Company> {
        self.endpoint("company/companies", Capabilities::COLLECTION)
    }

    /// `/company/companies/statuses`
    pub fn company_statuses(&self) -> Endpoint<CompanyStatus> {
        self.endpoint("company/companies/statuses", Capabilities::COLLECTION)
    }

    /// `/company/managedDevicesIntegrations/{id}/logins`
    pub fn managed_devices_integration_logins(
        &self,
        integration_id: u64,
    ) -> Endpoint<ManagedDevicesIntegrationLogin> {
        self.endpoint(
            &format!("company/managedDevicesIntegrations/{integration_id}/logins"),
            Capabilities::COLLECTION,
        )
    }

    /// `/project/projects`
    pub fn project_projects(&self) -> Endpoint<Project> {
        self.endpoint("project/projects", Capabilities::COLLECTION)
    }

    /// `/procurement/purchaseorderstatuses/{id}/notifications`
    pub fn purchase_order_status_notifications(
        &self,
        status_id: u64,
    ) -> Endpoint<OrderStatusNotification> {
        self.endpoint(
            &format!("procurement/purchaseorderstatuses/{status_id}/notifications"),
            Capabilities::COLLECTION,
        )
    }

    /// Automate `/Computers/{id}/Computerpatchingpolicies` (read-only).
    pub fn computer_patching_policies(&self, computer_id: u64) -> Endpoint<ComputerPatchingPolicy> {
        self.endpoint(
            &format!("Computers/{computer_id}/Computerpatchingpolicies"),
            Capabilities {
                post: false,
                ..Capabilities::COLLECTION
            },
        )
    }
}
