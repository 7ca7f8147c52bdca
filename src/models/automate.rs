//! Automate records.
//!
//! Automate uses PascalCase wire names.

use serde::{Deserialize, Serialize};

/// A string key/value pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyValuePair {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// A patching policy applied to a computer (`/Computers/{id}/Computerpatchingpolicies`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComputerPatchingPolicy {
    #[serde(default)]
    pub computer_id: Option<u64>,

    #[serde(default)]
    pub policy_id: Option<u64>,

    #[serde(default)]
    pub name: Option<String>,

    /// How the policy was assigned (e.g. `Group`, `Location`).
    #[serde(default)]
    pub source: Option<String>,
}
