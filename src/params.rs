//! Request parameters for ConnectWise endpoints.
//!
//! Every call takes its own [`RequestParams`]; nothing is shared between
//! calls, so parameters set for one request never leak into the next.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Query key carrying the 1-based page index.
pub const PAGE_PARAM: &str = "page";

/// Query key carrying the page size.
pub const PAGE_SIZE_PARAM: &str = "pageSize";

/// A scalar parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Str(String),
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

/// Parameters sent with a request, either in the query string or merged
/// into a JSON body for search-style endpoints.
///
/// # Example
///
/// ```
/// use cwapi::RequestParams;
///
/// let params = RequestParams::new()
///     .conditions("status/name = \"New\"")
///     .order_by("id desc")
///     .insert("clientId", 7);
/// assert_eq!(params.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestParams(BTreeMap<String, ParamValue>);

impl RequestParams {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary parameter, replacing any previous value.
    #[must_use]
    pub fn insert(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Set a parameter in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Filter expression, e.g. `board/name = "Help Desk"`.
    #[must_use]
    pub fn conditions(self, expr: impl Into<String>) -> Self {
        self.insert("conditions", expr.into())
    }

    /// Filter on child collections.
    #[must_use]
    pub fn child_conditions(self, expr: impl Into<String>) -> Self {
        self.insert("childConditions", expr.into())
    }

    /// Filter on custom field values.
    #[must_use]
    pub fn custom_field_conditions(self, expr: impl Into<String>) -> Self {
        self.insert("customFieldConditions", expr.into())
    }

    /// Sort expression, e.g. `id desc`.
    #[must_use]
    pub fn order_by(self, expr: impl Into<String>) -> Self {
        self.insert("orderBy", expr.into())
    }

    /// Comma-separated list of fields to return.
    #[must_use]
    pub fn fields(self, fields: impl Into<String>) -> Self {
        self.insert("fields", fields.into())
    }

    /// Comma-separated list of columns to return.
    #[must_use]
    pub fn columns(self, columns: impl Into<String>) -> Self {
        self.insert("columns", columns.into())
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.0.iter()
    }

    /// Returns the first key that collides with a pagination key.
    ///
    /// The comparison ignores ASCII case: the service treats `pagesize`
    /// and `pageSize` alike.
    pub fn reserved_key(&self) -> Option<&str> {
        self.0
            .keys()
            .find(|k| {
                k.eq_ignore_ascii_case(PAGE_PARAM) || k.eq_ignore_ascii_case(PAGE_SIZE_PARAM)
            })
            .map(String::as_str)
    }

    /// Copy of these parameters with the pagination keys added.
    pub(crate) fn with_page(&self, page: u32, page_size: u32) -> Self {
        self.clone()
            .insert(PAGE_PARAM, page)
            .insert(PAGE_SIZE_PARAM, page_size)
    }

    /// Render as a JSON object, for endpoints that take parameters in the body.
    pub(crate) fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// One JSON-patch operation, as accepted by PATCH endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchOperation {
    pub op: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl PatchOperation {
    /// Replace the value at `path`.
    pub fn replace(path: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            op: "replace".to_string(),
            path: path.into(),
            value: Some(value.into()),
        }
    }

    /// Add a value at `path`.
    pub fn add(path: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            op: "add".to_string(),
            path: path.into(),
            value: Some(value.into()),
        }
    }

    /// Remove the value at `path`.
    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            op: "remove".to_string(),
            path: path.into(),
            value: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_default_is_empty() {
        let params = RequestParams::default();
        let serialized = serde_qs::to_string(&params).expect("Failed to serialize params");

        assert!(serialized.is_empty());
    }

    #[test]
    fn test_params_serialize_camel_case_keys() {
        let params = RequestParams::new()
            .conditions("id > 5")
            .order_by("id desc")
            .child_conditions("types/id = 3");
        let serialized = serde_qs::to_string(&params).expect("Failed to serialize params");

        assert!(serialized.contains("orderBy=id"));
        assert!(serialized.contains("childConditions="));
        assert!(serialized.contains("conditions="));
    }

    #[test]
    fn test_params_integer_values() {
        let params = RequestParams::new().insert("clientId", 42u32);
        let serialized = serde_qs::to_string(&params).expect("Failed to serialize params");

        assert_eq!(serialized, "clientId=42");
        assert_eq!(params.get("clientId"), Some(&ParamValue::Int(42)));
    }

    #[test]
    fn test_reserved_key_detection() {
        assert!(RequestParams::new().conditions("x").reserved_key().is_none());
        assert_eq!(
            RequestParams::new().insert("page", 2).reserved_key(),
            Some("page")
        );
        assert_eq!(
            RequestParams::new().insert("pagesize", 2).reserved_key(),
            Some("pagesize")
        );
    }

    #[test]
    fn test_with_page_leaves_params_untouched() {
        let params = RequestParams::new().conditions("x");
        let paged = params.with_page(3, 50);

        assert_eq!(params.len(), 1);
        assert_eq!(paged.get(PAGE_PARAM), Some(&ParamValue::Int(3)));
        assert_eq!(paged.get(PAGE_SIZE_PARAM), Some(&ParamValue::Int(50)));
    }

    #[test]
    fn test_to_json_keeps_types() {
        let json = RequestParams::new()
            .conditions("id > 5")
            .with_page(1, 25)
            .to_json()
            .unwrap();

        assert!(json.is_object());
        assert_eq!(json["page"], 1);
        assert_eq!(json["pageSize"], 25);
        assert_eq!(json["conditions"], "id > 5");
    }

    #[test]
    fn test_patch_operation_serialization() {
        let op = PatchOperation::replace("summary", "New summary");
        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(json["op"], "replace");
        assert_eq!(json["path"], "summary");
        assert_eq!(json["value"], "New summary");

        let json = serde_json::to_value(PatchOperation::remove("budget")).unwrap();
        assert!(json.get("value").is_none());
    }
}
