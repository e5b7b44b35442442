//! Data files standing in for the fetch layer.
//!
//! A data file is either a bare JSON array of row objects or an envelope
//! carrying the fetch layer's facets:
//!
//! ```json
//! {
//!   "data": [{ "id": 1, "amount": "120.50" }],
//!   "isLoading": false,
//!   "error": null,
//!   "totalCount": 57,
//!   "hasNext": true,
//!   "hasPrevious": false
//! }
//! ```
//!
//! Any of `totalCount`, `hasNext` or `hasPrevious` marks the rows as one
//! server-provided page.

use std::fs;
use std::path::Path;

use grid_engine::model::Record;
use grid_engine::pagination::{PaginationMode, page_count};
use grid_engine::shell::LoadStatus;
use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DataFile {
    Rows(Vec<Record>),
    Envelope(Envelope),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    #[serde(default)]
    data: Vec<Record>,
    #[serde(default)]
    is_loading: bool,
    #[serde(default)]
    error: Option<String>,
    total_count: Option<usize>,
    has_next: Option<bool>,
    has_previous: Option<bool>,
}

/// Navigation hints from a server-paged response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerHints {
    pub total_count: Option<usize>,
    pub has_next: Option<bool>,
    pub has_previous: Option<bool>,
}

impl ServerHints {
    /// Pagination mode for `page`. Missing flags are derived from the
    /// total when it is known.
    pub fn mode(&self, page: usize, items_per_page: usize) -> PaginationMode {
        let page = page.max(1);
        let has_next = self.has_next.unwrap_or_else(|| match self.total_count {
            Some(total) => page < page_count(total, items_per_page),
            None => false,
        });
        let has_previous = self.has_previous.unwrap_or(page > 1);
        PaginationMode::server(self.total_count, has_next, has_previous)
    }
}

/// Rows plus fetch facets.
#[derive(Debug)]
pub struct Dataset {
    pub rows: Vec<Record>,
    pub status: LoadStatus,
    /// Present when the rows are one server page.
    pub server: Option<ServerHints>,
}

impl Dataset {
    /// Parse a data document.
    pub fn parse(text: &str) -> Result<Self> {
        let dataset = match serde_json::from_str::<DataFile>(text)? {
            DataFile::Rows(rows) => Dataset {
                rows,
                status: LoadStatus::Ready,
                server: None,
            },
            DataFile::Envelope(envelope) => {
                let server = (envelope.total_count.is_some()
                    || envelope.has_next.is_some()
                    || envelope.has_previous.is_some())
                .then_some(ServerHints {
                    total_count: envelope.total_count,
                    has_next: envelope.has_next,
                    has_previous: envelope.has_previous,
                });
                Dataset {
                    rows: envelope.data,
                    status: LoadStatus::from_fetch(envelope.is_loading, envelope.error),
                    server,
                }
            }
        };
        log::debug!(
            "Loaded {} rows (status {:?}, server paging: {})",
            dataset.rows.len(),
            dataset.status,
            dataset.server.is_some()
        );
        Ok(dataset)
    }

    /// Load a data file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }
}

#[cfg(test)]
mod tests {
    use grid_engine::model::Value;

    use super::*;
    use crate::error::ConsoleError;

    #[test]
    fn test_bare_array() {
        let dataset = Dataset::parse(r#"[{"id": 1, "amount": 10}, {"id": 2}]"#).unwrap();
        assert_eq!(dataset.rows.len(), 2);
        assert_eq!(dataset.status, LoadStatus::Ready);
        assert!(dataset.server.is_none());
        assert_eq!(dataset.rows[0].get("amount"), Some(&Value::Int(10)));
    }

    #[test]
    fn test_envelope_without_hints_is_client_paged() {
        let dataset = Dataset::parse(r#"{"data": [{"id": 1}], "isLoading": false}"#).unwrap();
        assert_eq!(dataset.rows.len(), 1);
        assert!(dataset.server.is_none());
    }

    #[test]
    fn test_envelope_status() {
        let loading =
            Dataset::parse(r#"{"data": [], "isLoading": true, "error": "boom"}"#).unwrap();
        assert_eq!(loading.status, LoadStatus::Loading);

        let failed = Dataset::parse(r#"{"data": [], "error": "Failed to load invoices"}"#).unwrap();
        assert_eq!(
            failed.status,
            LoadStatus::Failed("Failed to load invoices".to_string())
        );
    }

    #[test]
    fn test_server_hints() {
        let dataset =
            Dataset::parse(r#"{"data": [{"id": 21}], "totalCount": 57, "hasNext": true}"#).unwrap();
        let hints = dataset.server.unwrap();
        assert_eq!(hints.total_count, Some(57));
        assert_eq!(
            hints.mode(3, 10),
            PaginationMode::server(Some(57), true, true)
        );
    }

    #[test]
    fn test_derived_hints() {
        let hints = ServerHints {
            total_count: Some(57),
            has_next: None,
            has_previous: None,
        };
        assert_eq!(hints.mode(6, 10), PaginationMode::server(Some(57), false, true));
        assert_eq!(hints.mode(1, 10), PaginationMode::server(Some(57), true, false));
    }

    #[test]
    fn test_non_object_rows_are_rejected() {
        let err = Dataset::parse("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, ConsoleError::Json(_)));
    }
}
