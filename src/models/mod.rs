//! ConnectWise record types.
//!
//! Records map wire names onto Rust fields through serde attributes:
//! Manage payloads are camelCase, Automate payloads are PascalCase.

mod automate;
mod company;
mod procurement;
mod project;
mod reference;
mod ticket;

pub use automate::*;
pub use company::*;
pub use procurement::*;
pub use project::*;
pub use reference::*;
pub use ticket::*;

use serde::de::DeserializeOwned;

use crate::error::{ConnectWiseError, Result};

/// Parse a JSON array body into records.
///
/// # Errors
///
/// Returns [`ConnectWiseError::DeserializationError`] if the body is not
/// an array of `T`. Nothing is returned for a partially valid array.
pub fn parse_many<T: DeserializeOwned>(body: &str) -> Result<Vec<T>> {
    serde_json::from_str(body).map_err(|e| ConnectWiseError::DeserializationError {
        detail: e.to_string(),
    })
}

/// Parse a JSON object body into one record.
///
/// # Errors
///
/// Returns [`ConnectWiseError::DeserializationError`] if the body is not a `T`.
pub fn parse_one<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| ConnectWiseError::DeserializationError {
        detail: e.to_string(),
    })
}
