//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the cwapi binary.

use clap::{Args, Parser, Subcommand};

use crate::params::RequestParams;

/// ConnectWise API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "cwapi", about = "ConnectWise API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get a single record by path, e.g. `service/tickets/42`.
    Get {
        /// Resource path relative to the API root.
        path: String,

        #[command(flatten)]
        filters: Filters,
    },

    /// List a collection, one page or all of it.
    List {
        /// Resource path relative to the API root, e.g. `service/tickets`.
        path: String,

        /// Page number (1-indexed).
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Number of items per page.
        #[arg(long, default_value_t = 25)]
        page_size: u32,

        /// Fetch every page starting at `--page`.
        #[arg(long)]
        all: bool,

        /// Page through a search endpoint (POST body) instead of the query string.
        #[arg(long)]
        search: bool,

        /// Columns for table output; dotted paths reach into nested objects.
        #[arg(long, value_delimiter = ',', default_value = "id")]
        columns: Vec<String>,

        #[command(flatten)]
        filters: Filters,
    },

    /// Count the records in a collection.
    Count {
        /// Resource path relative to the API root, e.g. `service/tickets`.
        path: String,

        #[command(flatten)]
        filters: Filters,
    },
}

/// Filters shared by every command.
#[derive(Args, Debug, Default, Clone)]
pub struct Filters {
    /// Condition expression, e.g. `closedFlag = false`.
    #[arg(long)]
    pub conditions: Option<String>,

    /// Sort expression, e.g. `id desc`.
    #[arg(long)]
    pub order_by: Option<String>,

    /// Extra `key=value` parameter; may be repeated.
    #[arg(long = "param", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,
}

impl Filters {
    /// Build a fresh parameter set from the flags.
    pub fn to_params(&self) -> RequestParams {
        let mut params = RequestParams::new();
        if let Some(ref conditions) = self.conditions {
            params.set("conditions", conditions.as_str());
        }
        if let Some(ref order_by) = self.order_by {
            params.set("orderBy", order_by.as_str());
        }
        for (key, value) in &self.params {
            match value.parse::<i64>() {
                Ok(n) => params.set(key.as_str(), n),
                Err(_) => params.set(key.as_str(), value.as_str()),
            }
        }
        params
    }
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamValue;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("fields=id,summary"),
            Ok(("fields".to_string(), "id,summary".to_string()))
        );
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=x").is_err());
    }

    #[test]
    fn test_filters_to_params() {
        let filters = Filters {
            conditions: Some("id > 5".to_string()),
            order_by: None,
            params: vec![
                ("clientId".to_string(), "12".to_string()),
                ("fields".to_string(), "id".to_string()),
            ],
        };
        let params = filters.to_params();

        assert_eq!(params.get("conditions"), Some(&ParamValue::from("id > 5")));
        assert_eq!(params.get("clientId"), Some(&ParamValue::Int(12)));
        assert_eq!(params.get("fields"), Some(&ParamValue::from("id")));
        assert!(params.get("orderBy").is_none());
    }
}
