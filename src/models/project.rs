//! Project records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::reference::{BoardReference, CompanyReference, Info, MemberReference, StatusReference};

/// A project (`/project/projects`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,

    pub name: String,

    #[serde(default)]
    pub board: Option<BoardReference>,

    #[serde(default)]
    pub status: Option<StatusReference>,

    #[serde(default)]
    pub company: Option<CompanyReference>,

    #[serde(default)]
    pub manager: Option<MemberReference>,

    #[serde(default)]
    pub estimated_start: Option<DateTime<Utc>>,

    #[serde(default)]
    pub estimated_end: Option<DateTime<Utc>>,

    #[serde(default)]
    pub actual_hours: Option<f64>,

    #[serde(default)]
    pub budget_hours: Option<f64>,

    /// Completion percentage, 0–100.
    #[serde(default)]
    pub percent_complete: Option<f64>,

    #[serde(default)]
    pub closed_flag: bool,

    #[serde(rename = "_info", default)]
    pub info: Option<Info>,
}

impl Project {
    /// Whether the project is still open.
    pub fn is_open(&self) -> bool {
        !self.closed_flag
    }
}
