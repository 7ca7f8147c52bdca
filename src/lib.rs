//! ConnectWise API client library.
//!
//! A Rust library for the ConnectWise Manage and Automate REST APIs. Every
//! resource is an [`Endpoint`]: a path, a record type, and the verbs the
//! service accepts there. Collections page through a [`PagedSequence`].
//!
//! # Quick Start
//!
//! ```no_run
//! use cwapi::{ConnectWiseClient, RequestParams};
//!
//! #[tokio::main]
//! async fn main() -> cwapi::Result<()> {
//!     // Create client from environment variables
//!     let client = ConnectWiseClient::from_env()?;
//!
//!     // First page of open tickets, 50 at a time
//!     let params = RequestParams::new().conditions("closedFlag = false");
//!     let endpoint = client.service_tickets();
//!     let mut tickets = endpoint.paginated(1, 50, &params).await?;
//!     let first_page = tickets.advance().await?;
//!     println!("First page: {} tickets", first_page.len());
//!
//!     // ...and everything after it
//!     let rest = tickets.collect_all().await?;
//!     println!("Remaining: {} tickets", rest.len());
//!
//!     // One company by id
//!     let company = client.company_companies().id(250).get_one(&RequestParams::new()).await?;
//!     println!("Company: {}", company.name);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Pagination
//!
//! The service returns bare JSON arrays with no total count. A page is
//! assumed to be followed by another exactly when it came back full (see
//! [`has_next_page`]), so a result set that is an exact multiple of the page
//! size costs one trailing empty request.
//!
//! # Configuration
//!
//! [`ConnectWiseClient::from_env`] reads:
//!
//! - `CONNECTWISE_COMPANY_ID`, `CONNECTWISE_PUBLIC_KEY`,
//!   `CONNECTWISE_PRIVATE_KEY`, `CONNECTWISE_CLIENT_ID` (required)
//! - `CONNECTWISE_API_URL` (optional) - defaults to
//!   `https://api-na.myconnectwise.net/v4_6_release/apis/3.0`
//! - `CONNECTWISE_TIMEOUT_SECS` (optional) - defaults to 300

pub mod cli;
mod client;
mod endpoint;
mod error;
mod models;
mod output;
mod pagination;
mod params;
mod resources;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{ClientConfig, ConnectWiseClient, Credentials, RawResponse};
pub use endpoint::{Capabilities, Endpoint, PageMethod};
pub use error::{ConnectWiseError, Result};
pub use pagination::{
    has_next_page, PageFetcher, PageRequest, PageResult, PagedSequence, SequenceState,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use params::{ParamValue, PatchOperation, RequestParams, PAGE_PARAM, PAGE_SIZE_PARAM};

// Re-export output helpers
pub use output::{pretty_print, render_table, select_columns};

// Re-export models
pub use models::{
    parse_many,
    parse_one,
    // Service types
    Ticket,
    TicketNote,
    // Company types
    Company,
    CompanyStatus,
    // Project types
    Project,
    // Procurement types
    ManagedDevicesIntegrationLogin,
    OrderStatusNotification,
    // Automate types
    ComputerPatchingPolicy,
    KeyValuePair,
    // References
    BoardReference,
    CompanyReference,
    ContactReference,
    Info,
    ManagedDevicesIntegrationReference,
    MemberReference,
    NotificationRecipientReference,
    OrderStatusReference,
    PriorityReference,
    StatusReference,
};
